use approx::assert_relative_eq;
use tangent::error::AdError;
use tangent::{Dual, Dual64};

/// Central finite difference: (f(x+h) - f(x-h)) / 2h
fn finite_diff(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    let h = 1e-7;
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Test a dual elemental against finite differences.
fn check_elemental(
    f_dual: impl Fn(Dual64) -> Dual64,
    f_f64: impl Fn(f64) -> f64,
    x: f64,
    tol: f64,
) {
    let d = f_dual(Dual::variable(x));
    let expected_deriv = finite_diff(&f_f64, x);
    assert_relative_eq!(d.re, f_f64(x), max_relative = 1e-12);
    assert_relative_eq!(d.eps, expected_deriv, max_relative = tol);
}

// ── Arithmetic ──

#[test]
fn product_rule() {
    // (3 + ε)(4 + ε) = 12 + 7ε
    let a = Dual::new(3.0, 1.0);
    let b = Dual::new(4.0, 1.0);
    let c = a * b;
    assert_relative_eq!(c.re, 12.0);
    assert_relative_eq!(c.eps, 7.0);
}

#[test]
fn product_rule_is_pure_algebra() {
    // a.value * b.derivative + b.value * a.derivative, exactly.
    let a = Dual::new(1.7, 0.3);
    let b = Dual::new(-2.5, 4.1);
    let c = a * b;
    assert_eq!(c.eps, a.re * b.eps + b.re * a.eps);
}

#[test]
fn quotient_rule() {
    // d/dx (x / (x+1)) at x=2: 1/(x+1)^2 = 1/9
    let x = Dual::variable(2.0);
    let one = Dual::constant(1.0);
    let y = x / (x + one);
    assert_relative_eq!(y.re, 2.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(y.eps, 1.0 / 9.0, max_relative = 1e-12);
}

#[test]
fn mixed_scalar_ops() {
    let x = Dual::<f64>::variable(3.0);
    let y = x * 2.0;
    assert_relative_eq!(y.re, 6.0);
    assert_relative_eq!(y.eps, 2.0);

    let z = 2.0 * x;
    assert_relative_eq!(z.re, 6.0);
    assert_relative_eq!(z.eps, 2.0);

    let w = 1.0 / x;
    assert_relative_eq!(w.re, 1.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(w.eps, -1.0 / 9.0, max_relative = 1e-12);
}

#[test]
fn operands_survive_their_use() {
    // -(x+y) must not corrupt x or y.
    let x = Dual::<f64>::variable(2.0);
    let y = Dual::constant(3.0);
    let neg = -(x + y);
    assert_relative_eq!(neg.re, -5.0);
    assert_relative_eq!(neg.eps, -1.0);
    assert_relative_eq!(x.re, 2.0);
    assert_relative_eq!(x.eps, 1.0);
    let again = x - y;
    assert_relative_eq!(again.re, -1.0);
    assert_relative_eq!(again.eps, 1.0);
}

#[test]
fn subtraction_matches_negated_addition() {
    let a = Dual::new(5.0, 2.0);
    let b = Dual::new(3.0, 7.0);
    assert_eq!(a - b, a + (-b));
}

// ── Powers ──

#[test]
fn recip() {
    check_elemental(|x| x.recip(), |x| x.recip(), 2.5, 1e-5);
}

#[test]
fn sqrt() {
    check_elemental(|x| x.sqrt(), |x| x.sqrt(), 4.0, 1e-5);
}

#[test]
fn powi() {
    check_elemental(|x| x.powi(3), |x| x.powi(3), 2.0, 1e-5);
}

#[test]
fn powi_is_exact_for_integer_powers() {
    // d/dx x^n = n·x^(n-1), exactly.
    for n in 1..8 {
        let v = -1.75;
        let d = Dual::<f64>::variable(v).powi(n);
        assert_eq!(d.re, v.powi(n));
        assert_eq!(d.eps, f64::from(n) * v.powi(n - 1));
    }
}

#[test]
fn powf_constant_exponent() {
    let y = Dual::<f64>::variable(2.0).powf(3.5);
    let expected = finite_diff(|v| v.powf(3.5), 2.0);
    assert_relative_eq!(y.re, 2.0_f64.powf(3.5), max_relative = 1e-12);
    assert_relative_eq!(y.eps, expected, max_relative = 1e-5);
}

#[test]
fn powf_zero_exponent() {
    let y = Dual::<f64>::variable(3.0).powf(0.0);
    assert_eq!(y.re, 1.0);
    assert_eq!(y.eps, 0.0);
}

#[test]
fn pow_dual_exponent() {
    // d/dx x^x = x^x (ln x + 1)
    let x = Dual::<f64>::variable(2.0);
    let y = x.try_pow(x).unwrap();
    let expected = 2.0_f64.powf(2.0) * (2.0_f64.ln() + 1.0);
    assert_relative_eq!(y.re, 4.0, max_relative = 1e-12);
    assert_relative_eq!(y.eps, expected, max_relative = 1e-12);
}

#[test]
fn constant_base_dual_exponent() {
    // d/dx k^x = k^x ln k
    let x = Dual::<f64>::variable(1.5);
    let k = Dual::constant(3.0);
    let y = k.try_pow(x).unwrap();
    assert_relative_eq!(y.re, 3.0_f64.powf(1.5), max_relative = 1e-12);
    assert_relative_eq!(y.eps, 3.0_f64.powf(1.5) * 3.0_f64.ln(), max_relative = 1e-12);
}

// ── Exp/Log ──

#[test]
fn exp() {
    check_elemental(|x| x.exp(), |x| x.exp(), 1.0, 1e-5);
}

#[test]
fn ln() {
    check_elemental(|x| x.ln(), |x| x.ln(), 2.0, 1e-5);
}

#[test]
fn log2() {
    check_elemental(|x| x.log2(), |x| x.log2(), 2.0, 1e-5);
}

#[test]
fn log10() {
    check_elemental(|x| x.log10(), |x| x.log10(), 2.0, 1e-5);
}

#[test]
fn logistic() {
    check_elemental(
        |x| x.logistic(),
        |x| 1.0 / (1.0 + (-x).exp()),
        0.5,
        1e-5,
    );
}

#[test]
fn logistic_derivative_identity() {
    // σ'(v) = σ(v)(1 - σ(v))
    let v = -1.2;
    let d = Dual::<f64>::variable(v).logistic();
    let s = 1.0 / (1.0 + (-v).exp());
    assert_relative_eq!(d.eps, s * (1.0 - s), max_relative = 1e-12);
}

// ── Trig ──

#[test]
fn sin() {
    check_elemental(|x| x.sin(), |x| x.sin(), 1.0, 1e-5);
}

#[test]
fn cos() {
    check_elemental(|x| x.cos(), |x| x.cos(), 1.0, 1e-5);
}

#[test]
fn tan() {
    check_elemental(|x| x.tan(), |x| x.tan(), 0.5, 1e-5);
}

#[test]
fn asin() {
    check_elemental(|x| x.asin(), |x| x.asin(), 0.5, 1e-5);
}

#[test]
fn acos() {
    check_elemental(|x| x.acos(), |x| x.acos(), 0.5, 1e-5);
}

#[test]
fn atan() {
    check_elemental(|x| x.atan(), |x| x.atan(), 1.0, 1e-5);
}

// ── Hyperbolic ──

#[test]
fn sinh() {
    check_elemental(|x| x.sinh(), |x| x.sinh(), 1.0, 1e-5);
}

#[test]
fn cosh() {
    check_elemental(|x| x.cosh(), |x| x.cosh(), 1.0, 1e-5);
}

#[test]
fn tanh() {
    check_elemental(|x| x.tanh(), |x| x.tanh(), 1.0, 1e-5);
}

// ── Misc ──

#[test]
fn abs_positive() {
    let y = Dual::<f64>::variable(3.0).abs();
    assert_relative_eq!(y.re, 3.0);
    assert_relative_eq!(y.eps, 1.0);
}

#[test]
fn abs_negative() {
    let y = Dual::<f64>::variable(-3.0).abs();
    assert_relative_eq!(y.re, 3.0);
    assert_relative_eq!(y.eps, -1.0);
}

// ── Compositions ──

#[test]
fn sin_of_exp() {
    // d/dx sin(exp(x)) = cos(exp(x)) * exp(x)
    let x_val = 0.5;
    let y = Dual::<f64>::variable(x_val).exp().sin();
    let expected = x_val.exp().cos() * x_val.exp();
    assert_relative_eq!(y.eps, expected, max_relative = 1e-12);
}

#[test]
fn chain_rule_through_two_elementals() {
    // d/dx g(h(x)) = g'(h(x)) · h'(x) for g = tanh, h = ln
    let v = 2.0_f64;
    let y = Dual::variable(v).ln().tanh();
    let h = v.ln();
    let expected = (1.0 / h.cosh().powi(2)) * (1.0 / v);
    assert_relative_eq!(y.eps, expected, max_relative = 1e-9);
}

#[test]
fn complex_composition() {
    // f(x) = x * sin(x) + cos(x²)
    // f'(x) = sin(x) + x*cos(x) - 2x*sin(x²)
    let x_val = 1.5;
    let x = Dual::<f64>::variable(x_val);
    let y = x * x.sin() + (x * x).cos();
    let expected = x_val.sin() + x_val * x_val.cos() - 2.0 * x_val * (x_val * x_val).sin();
    assert_relative_eq!(y.eps, expected, max_relative = 1e-12);
}

// ── Comparisons ──

#[test]
fn equality_needs_matching_tangents() {
    let a = Dual::new(2.0, 1.0);
    let b = Dual::new(2.0, 0.0);
    assert_ne!(a, b);
    assert_eq!(a, Dual::new(2.0, 1.0));
}

#[test]
fn ordering_compares_values_only() {
    let a = Dual::new(1.0, 5.0);
    let b = Dual::new(2.0, -5.0);
    assert!(a < b);
    assert!(b > a);
}

// ── Checked operations ──

#[test]
fn division_by_zero_valued_dual_fails() {
    let err = Dual::variable(2.0)
        .try_div(Dual::constant(0.0))
        .unwrap_err();
    assert_eq!(err, AdError::DivisionByZero);
}

#[test]
fn nonpositive_base_to_dual_power_fails() {
    let base = Dual::<f64>::variable(-2.0);
    let exponent = Dual::variable(0.5);
    assert!(matches!(
        base.try_pow(exponent),
        Err(AdError::Domain { func: "pow", .. })
    ));
}

#[test]
fn domain_checked_elementals_reject_bad_arguments() {
    assert!(Dual::<f64>::variable(-1.0).try_sqrt().is_err());
    assert!(Dual::<f64>::variable(0.0).try_ln().is_err());
    assert!(Dual::<f64>::variable(-0.5).try_log10().is_err());
    assert!(Dual::<f64>::variable(1.0).try_asin().is_err());
    assert!(Dual::<f64>::variable(-1.5).try_acos().is_err());
}

#[test]
fn checked_elementals_accept_good_arguments() {
    assert!(Dual::<f64>::variable(4.0).try_sqrt().is_ok());
    assert!(Dual::<f64>::variable(0.5).try_asin().is_ok());
    assert!(Dual64::variable(3.0).try_ln().is_ok());
}

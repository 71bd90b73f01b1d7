use approx::assert_relative_eq;
use tangent::{grad, jacobian, jvp, Dual};

#[test]
fn grad_of_sum_of_squares() {
    let g = grad(|x: &[Dual<f64>]| x[0] * x[0] + x[1] * x[1], &[3.0, 4.0]);
    assert_relative_eq!(g[0], 6.0, max_relative = 1e-12);
    assert_relative_eq!(g[1], 8.0, max_relative = 1e-12);
}

#[test]
fn grad_through_elementals() {
    // f(x, y) = sin(x)·exp(y) at (1, 0): ∇f = [cos(1), sin(1)]
    let g = grad(|x: &[Dual<f64>]| x[0].sin() * x[1].exp(), &[1.0, 0.0]);
    assert_relative_eq!(g[0], 1.0_f64.cos(), max_relative = 1e-12);
    assert_relative_eq!(g[1], 1.0_f64.sin(), max_relative = 1e-12);
}

#[test]
fn jacobian_matches_hand_derivation() {
    // f = [x·y, x + y², y] at (2, 3)
    let f = |x: &[Dual<f64>]| vec![x[0] * x[1], x[0] + x[1] * x[1], x[1]];
    let (values, jac) = jacobian(f, &[2.0, 3.0]);
    assert_eq!(values, vec![6.0, 11.0, 3.0]);
    assert_eq!(jac[0], vec![3.0, 2.0]);
    assert_eq!(jac[1], vec![1.0, 6.0]);
    assert_eq!(jac[2], vec![0.0, 1.0]);
}

#[test]
fn jvp_is_a_directional_derivative() {
    // f = [x² + y²] at (3, 4) in direction (1, 1): J·v = 2x + 2y = 14
    let f = |x: &[Dual<f64>]| vec![x[0] * x[0] + x[1] * x[1]];
    let (values, tangents) = jvp(f, &[3.0, 4.0], &[1.0, 1.0]);
    assert_relative_eq!(values[0], 25.0);
    assert_relative_eq!(tangents[0], 14.0, max_relative = 1e-12);
}

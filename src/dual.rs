use std::fmt::{self, Display};

use crate::error::AdError;
use crate::Float;

/// Forward-mode dual number: a value paired with its tangent (derivative).
///
/// `Dual { re, eps }` represents `re + eps·ε` where `ε² = 0`. Operations
/// return new values; operands are never mutated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dual<F: Float> {
    /// Primal (real) value.
    pub re: F,
    /// Tangent (derivative) value.
    pub eps: F,
}

impl<F: Float> Display for Dual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.re, self.eps)
    }
}

impl<F: Float> Dual<F> {
    /// Create a new dual number.
    #[inline]
    pub fn new(re: F, eps: F) -> Self {
        Dual { re, eps }
    }

    /// Create a constant (zero derivative).
    #[inline]
    pub fn constant(re: F) -> Self {
        Dual { re, eps: F::zero() }
    }

    /// Create a variable (unit derivative) for differentiation.
    #[inline]
    pub fn variable(re: F) -> Self {
        Dual { re, eps: F::one() }
    }

    /// Apply the chain rule: given `f(self.re)` and `f'(self.re)`, produce the dual result.
    #[inline]
    fn chain(self, f_val: F, f_deriv: F) -> Self {
        Dual {
            re: f_val,
            eps: self.eps * f_deriv,
        }
    }

    // ── Powers ──

    #[inline]
    pub fn recip(self) -> Self {
        let inv = F::one() / self.re;
        self.chain(inv, -inv * inv)
    }

    /// Square root. Derivative `1/(2·√v)`; undefined for `v <= 0`
    /// (see [`try_sqrt`](Self::try_sqrt) for the checked variant).
    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.re.sqrt();
        let two = F::one() + F::one();
        self.chain(s, F::one() / (two * s))
    }

    /// Integer power via the power rule `n·vⁿ⁻¹`. Exact for any base,
    /// including negative and zero values.
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Dual {
                re: F::one(),
                eps: F::zero(),
            };
        }
        let val = self.re.powi(n);
        let deriv = F::from(n).unwrap() * self.re.powi(n - 1);
        self.chain(val, deriv)
    }

    /// Constant power via the power rule `k·vᵏ⁻¹`.
    ///
    /// `k == 0` yields value 1 with zero derivative. A negative base with a
    /// fractional exponent produces NaN under IEEE semantics; use
    /// [`try_powf`](Self::try_powf) to surface that as an error instead.
    #[inline]
    pub fn powf(self, k: F) -> Self {
        if k == F::zero() {
            return Dual {
                re: F::one(),
                eps: F::zero(),
            };
        }
        let val = self.re.powf(k);
        self.chain(val, k * self.re.powf(k - F::one()))
    }

    /// General power with a dual exponent:
    /// `d(a^b) = a^b · (b·da/a + ln(a)·db)`. Requires a positive base;
    /// [`try_pow`](Self::try_pow) checks this.
    #[inline]
    pub fn pow(self, n: Self) -> Self {
        let val = self.re.powf(n.re);
        Dual {
            re: val,
            eps: val * (n.re * self.eps / self.re + n.eps * self.re.ln()),
        }
    }

    // ── Exp/Log ──

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.re.exp();
        self.chain(e, e)
    }

    #[inline]
    pub fn ln(self) -> Self {
        self.chain(self.re.ln(), F::one() / self.re)
    }

    #[inline]
    pub fn log2(self) -> Self {
        self.chain(self.re.log2(), F::one() / (self.re * F::LN_2()))
    }

    #[inline]
    pub fn log10(self) -> Self {
        self.chain(self.re.log10(), F::one() / (self.re * F::LN_10()))
    }

    /// Logistic sigmoid `1/(1+e^{-v})` with derivative `σ(v)·(1-σ(v))`.
    #[inline]
    pub fn logistic(self) -> Self {
        let s = F::one() / (F::one() + (-self.re).exp());
        self.chain(s, s * (F::one() - s))
    }

    // ── Trig ──

    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.re.sin(), self.re.cos())
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.re.cos(), -self.re.sin())
    }

    /// Tangent. Derivative `sec²(v)`; diverges at odd multiples of π/2.
    #[inline]
    pub fn tan(self) -> Self {
        let c = self.re.cos();
        self.chain(self.re.tan(), F::one() / (c * c))
    }

    /// Arcsine. Derivative `1/√(1-v²)`; requires `|v| < 1`
    /// (see [`try_asin`](Self::try_asin)).
    #[inline]
    pub fn asin(self) -> Self {
        self.chain(
            self.re.asin(),
            F::one() / (F::one() - self.re * self.re).sqrt(),
        )
    }

    /// Arccosine. Derivative `-1/√(1-v²)`; requires `|v| < 1`
    /// (see [`try_acos`](Self::try_acos)).
    #[inline]
    pub fn acos(self) -> Self {
        self.chain(
            self.re.acos(),
            -F::one() / (F::one() - self.re * self.re).sqrt(),
        )
    }

    #[inline]
    pub fn atan(self) -> Self {
        self.chain(self.re.atan(), F::one() / (F::one() + self.re * self.re))
    }

    // ── Hyperbolic ──

    #[inline]
    pub fn sinh(self) -> Self {
        self.chain(self.re.sinh(), self.re.cosh())
    }

    #[inline]
    pub fn cosh(self) -> Self {
        self.chain(self.re.cosh(), self.re.sinh())
    }

    #[inline]
    pub fn tanh(self) -> Self {
        let c = self.re.cosh();
        self.chain(self.re.tanh(), F::one() / (c * c))
    }

    // ── Misc ──

    /// Absolute value with derivative `sign(v)`.
    ///
    /// The derivative is discontinuous at `v == 0`; this follows the IEEE
    /// `signum` convention there (`+1` for `+0.0`) rather than erroring.
    #[inline]
    pub fn abs(self) -> Self {
        self.chain(self.re.abs(), self.re.signum())
    }

    // ── Checked operations ──

    /// Division that fails with [`AdError::DivisionByZero`] when the
    /// divisor's value is exactly zero.
    #[inline]
    pub fn try_div(self, rhs: Self) -> Result<Self, AdError> {
        if rhs.re == F::zero() {
            return Err(AdError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Checked general power with a dual exponent; the base value must be
    /// strictly positive for `ln` in the derivative rule.
    #[inline]
    pub fn try_pow(self, n: Self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("pow", self.re));
        }
        Ok(self.pow(n))
    }

    /// Checked constant power: rejects a negative base with a fractional
    /// exponent instead of producing NaN.
    #[inline]
    pub fn try_powf(self, k: F) -> Result<Self, AdError> {
        if self.re < F::zero() && k.fract() != F::zero() {
            return Err(AdError::domain("pow", self.re));
        }
        Ok(self.powf(k))
    }

    #[inline]
    pub fn try_sqrt(self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("sqrt", self.re));
        }
        Ok(self.sqrt())
    }

    #[inline]
    pub fn try_ln(self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("log", self.re));
        }
        Ok(self.ln())
    }

    #[inline]
    pub fn try_log2(self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("log2", self.re));
        }
        Ok(self.log2())
    }

    #[inline]
    pub fn try_log10(self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("log10", self.re));
        }
        Ok(self.log10())
    }

    #[inline]
    pub fn try_asin(self) -> Result<Self, AdError> {
        if self.re.abs() >= F::one() {
            return Err(AdError::domain("arcsin", self.re));
        }
        Ok(self.asin())
    }

    #[inline]
    pub fn try_acos(self) -> Result<Self, AdError> {
        if self.re.abs() >= F::one() {
            return Err(AdError::domain("arccos", self.re));
        }
        Ok(self.acos())
    }
}

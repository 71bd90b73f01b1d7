//! Multi-tangent dual numbers with a runtime-dimension seed vector.
//!
//! [`MultiDual<F>`] carries one tangent lane per independent input variable,
//! so a full Jacobian row comes out of a single forward pass. Rows sharing a
//! seed dimension stack into a Jacobian via [`MultiDual::stack`].

use std::fmt::{self, Display};

use crate::error::AdError;
use crate::Float;

/// A value with a runtime-dimension tangent vector (one lane per variable).
///
/// Binary operations require both operands to share the same seed dimension;
/// the `try_*` methods surface a mismatch as
/// [`AdError::DimensionMismatch`]. A `MultiDual` built with
/// [`From<F>`](Self::from) is a dimensionless constant that broadcasts
/// against any seed dimension without ever acting as an independent
/// variable.
#[derive(Clone, Debug)]
pub struct MultiDual<F: Float> {
    /// Primal (real) value.
    pub re: F,
    /// Tangent (partial derivative) per input variable. Empty for a
    /// dimensionless constant.
    pub eps: Vec<F>,
}

impl<F: Float> Display for MultiDual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.re)?;
        for (i, e) in self.eps.iter().enumerate() {
            write!(f, " + {e}ε{i}")?;
        }
        Ok(())
    }
}

impl<F: Float> From<F> for MultiDual<F> {
    /// A dimensionless constant: zero derivative against any seed dimension.
    #[inline]
    fn from(re: F) -> Self {
        MultiDual { re, eps: Vec::new() }
    }
}

impl<F: Float> MultiDual<F> {
    /// Create a multi-tangent dual from an explicit seed vector.
    #[inline]
    pub fn new(re: F, eps: Vec<F>) -> Self {
        MultiDual { re, eps }
    }

    /// Create a constant with zero derivative in all `n_vars` lanes.
    #[inline]
    pub fn constant(re: F, n_vars: usize) -> Self {
        MultiDual {
            re,
            eps: vec![F::zero(); n_vars],
        }
    }

    /// Create the `index`-th of `n_vars` independent variables (one-hot seed).
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_vars`.
    #[inline]
    pub fn variable(re: F, n_vars: usize, index: usize) -> Self {
        assert!(
            index < n_vars,
            "variable index {index} out of range for {n_vars} inputs"
        );
        let mut eps = vec![F::zero(); n_vars];
        eps[index] = F::one();
        MultiDual { re, eps }
    }

    /// Seed every entry of `values` as an independent variable.
    pub fn seed(values: &[F]) -> Vec<Self> {
        let n = values.len();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| MultiDual::variable(v, n, i))
            .collect()
    }

    /// Seed dimension of this dual (0 for a dimensionless constant).
    #[inline]
    pub fn n_vars(&self) -> usize {
        self.eps.len()
    }

    /// Apply the chain rule across all tangent lanes.
    #[inline]
    fn chain(&self, f_val: F, f_deriv: F) -> Self {
        MultiDual {
            re: f_val,
            eps: self.eps.iter().map(|&e| e * f_deriv).collect(),
        }
    }

    /// Combine two duals whose derivative is the linear form `ca·da + cb·db`.
    ///
    /// Dimensionless constants broadcast; otherwise seed dimensions must
    /// agree.
    fn try_combine(&self, rhs: &Self, val: F, ca: F, cb: F) -> Result<Self, AdError> {
        let eps = match (self.eps.is_empty(), rhs.eps.is_empty()) {
            (false, false) => {
                if self.eps.len() != rhs.eps.len() {
                    return Err(AdError::DimensionMismatch {
                        left: self.eps.len(),
                        right: rhs.eps.len(),
                    });
                }
                self.eps
                    .iter()
                    .zip(rhs.eps.iter())
                    .map(|(&a, &b)| ca * a + cb * b)
                    .collect()
            }
            (false, true) => self.eps.iter().map(|&a| ca * a).collect(),
            (true, false) => rhs.eps.iter().map(|&b| cb * b).collect(),
            (true, true) => Vec::new(),
        };
        Ok(MultiDual { re: val, eps })
    }

    // ── Checked arithmetic ──

    #[inline]
    pub fn try_add(&self, rhs: &Self) -> Result<Self, AdError> {
        self.try_combine(rhs, self.re + rhs.re, F::one(), F::one())
    }

    #[inline]
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, AdError> {
        self.try_combine(rhs, self.re - rhs.re, F::one(), -F::one())
    }

    /// Product rule: `d(ab) = b·da + a·db`.
    #[inline]
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, AdError> {
        self.try_combine(rhs, self.re * rhs.re, rhs.re, self.re)
    }

    /// Quotient rule: `d(a/b) = (b·da - a·db)/b²`. Fails with
    /// [`AdError::DivisionByZero`] when the divisor's value is exactly zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, AdError> {
        if rhs.re == F::zero() {
            return Err(AdError::DivisionByZero);
        }
        let inv = F::one() / rhs.re;
        self.try_combine(rhs, self.re * inv, inv, -self.re * inv * inv)
    }

    /// General power with a dual exponent:
    /// `d(a^b) = a^b·(b·da/a + ln(a)·db)`. The base value must be strictly
    /// positive.
    pub fn try_pow(&self, rhs: &Self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("pow", self.re));
        }
        let val = self.re.powf(rhs.re);
        self.try_combine(rhs, val, val * rhs.re / self.re, val * self.re.ln())
    }

    /// Checked constant power via the power rule; rejects a negative base
    /// with a fractional exponent. `k == 0` yields value 1, zero derivative.
    pub fn try_powf(&self, k: F) -> Result<Self, AdError> {
        if self.re < F::zero() && k.fract() != F::zero() {
            return Err(AdError::domain("pow", self.re));
        }
        Ok(self.powf(k))
    }

    // ── Powers ──

    #[inline]
    pub fn recip(&self) -> Self {
        let inv = F::one() / self.re;
        self.chain(inv, -inv * inv)
    }

    #[inline]
    pub fn sqrt(&self) -> Self {
        let s = self.re.sqrt();
        let two = F::one() + F::one();
        self.chain(s, F::one() / (two * s))
    }

    /// Integer power via the power rule; exact for any base.
    #[inline]
    pub fn powi(&self, n: i32) -> Self {
        if n == 0 {
            return MultiDual::constant(F::one(), self.eps.len());
        }
        let val = self.re.powi(n);
        self.chain(val, F::from(n).unwrap() * self.re.powi(n - 1))
    }

    /// Constant power via the power rule `k·vᵏ⁻¹`.
    #[inline]
    pub fn powf(&self, k: F) -> Self {
        if k == F::zero() {
            return MultiDual::constant(F::one(), self.eps.len());
        }
        let val = self.re.powf(k);
        self.chain(val, k * self.re.powf(k - F::one()))
    }

    // ── Exp/Log ──

    #[inline]
    pub fn exp(&self) -> Self {
        let e = self.re.exp();
        self.chain(e, e)
    }

    #[inline]
    pub fn ln(&self) -> Self {
        self.chain(self.re.ln(), F::one() / self.re)
    }

    #[inline]
    pub fn log2(&self) -> Self {
        self.chain(self.re.log2(), F::one() / (self.re * F::LN_2()))
    }

    #[inline]
    pub fn log10(&self) -> Self {
        self.chain(self.re.log10(), F::one() / (self.re * F::LN_10()))
    }

    /// Logistic sigmoid with derivative `σ(v)·(1-σ(v))`.
    #[inline]
    pub fn logistic(&self) -> Self {
        let s = F::one() / (F::one() + (-self.re).exp());
        self.chain(s, s * (F::one() - s))
    }

    // ── Trig ──

    #[inline]
    pub fn sin(&self) -> Self {
        self.chain(self.re.sin(), self.re.cos())
    }

    #[inline]
    pub fn cos(&self) -> Self {
        self.chain(self.re.cos(), -self.re.sin())
    }

    #[inline]
    pub fn tan(&self) -> Self {
        let c = self.re.cos();
        self.chain(self.re.tan(), F::one() / (c * c))
    }

    #[inline]
    pub fn asin(&self) -> Self {
        self.chain(
            self.re.asin(),
            F::one() / (F::one() - self.re * self.re).sqrt(),
        )
    }

    #[inline]
    pub fn acos(&self) -> Self {
        self.chain(
            self.re.acos(),
            -F::one() / (F::one() - self.re * self.re).sqrt(),
        )
    }

    #[inline]
    pub fn atan(&self) -> Self {
        self.chain(self.re.atan(), F::one() / (F::one() + self.re * self.re))
    }

    // ── Hyperbolic ──

    #[inline]
    pub fn sinh(&self) -> Self {
        self.chain(self.re.sinh(), self.re.cosh())
    }

    #[inline]
    pub fn cosh(&self) -> Self {
        self.chain(self.re.cosh(), self.re.sinh())
    }

    #[inline]
    pub fn tanh(&self) -> Self {
        let c = self.re.cosh();
        self.chain(self.re.tanh(), F::one() / (c * c))
    }

    // ── Misc ──

    /// Absolute value with derivative `sign(v)`; discontinuous at zero
    /// (IEEE `signum` convention there).
    #[inline]
    pub fn abs(&self) -> Self {
        self.chain(self.re.abs(), self.re.signum())
    }

    // ── Checked elementary functions ──

    #[inline]
    pub fn try_sqrt(&self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("sqrt", self.re));
        }
        Ok(self.sqrt())
    }

    #[inline]
    pub fn try_ln(&self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("log", self.re));
        }
        Ok(self.ln())
    }

    #[inline]
    pub fn try_log2(&self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("log2", self.re));
        }
        Ok(self.log2())
    }

    #[inline]
    pub fn try_log10(&self) -> Result<Self, AdError> {
        if self.re <= F::zero() {
            return Err(AdError::domain("log10", self.re));
        }
        Ok(self.log10())
    }

    #[inline]
    pub fn try_asin(&self) -> Result<Self, AdError> {
        if self.re.abs() >= F::one() {
            return Err(AdError::domain("arcsin", self.re));
        }
        Ok(self.asin())
    }

    #[inline]
    pub fn try_acos(&self) -> Result<Self, AdError> {
        if self.re.abs() >= F::one() {
            return Err(AdError::domain("arccos", self.re));
        }
        Ok(self.acos())
    }

    // ── Jacobian assembly ──

    /// Stack per-output rows into `(values, jacobian)`.
    ///
    /// All seeded entries must share one seed dimension; dimensionless
    /// constants contribute zero rows of that dimension. Returns
    /// [`AdError::DimensionMismatch`] when seeded rows disagree.
    pub fn stack(parts: &[Self]) -> Result<(Vec<F>, Vec<Vec<F>>), AdError> {
        let mut dim = 0;
        for p in parts {
            if p.eps.is_empty() {
                continue;
            }
            if dim == 0 {
                dim = p.eps.len();
            } else if p.eps.len() != dim {
                return Err(AdError::DimensionMismatch {
                    left: dim,
                    right: p.eps.len(),
                });
            }
        }
        let values = parts.iter().map(|p| p.re).collect();
        let rows = parts
            .iter()
            .map(|p| {
                if p.eps.is_empty() {
                    vec![F::zero(); dim]
                } else {
                    p.eps.clone()
                }
            })
            .collect();
        Ok((values, rows))
    }
}

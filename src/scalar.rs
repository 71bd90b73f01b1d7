//! The [`DualNum`] trait for AD-generic numeric code.
//!
//! The expression evaluator is written once against this trait and works
//! transparently with plain `f64`/`f32` (value-only evaluation), [`Dual`]
//! (scalar derivative), and [`MultiDual`] (Jacobian row).

use crate::dual::Dual;
use crate::error::AdError;
use crate::float::Float;
use crate::multidual::MultiDual;

/// A number that carries derivative state through arithmetic and the
/// elementary-function table.
///
/// Binary operations and domain-restricted functions are fallible so that
/// seed-dimension mismatches, division by zero, and out-of-domain arguments
/// surface as recoverable [`AdError`]s rather than silent NaNs.
pub trait DualNum<F: Float>: Clone {
    /// Lift a plain float to a constant with the same seed shape as `self`
    /// (zero derivative — never an independent variable).
    fn lift(&self, val: F) -> Self;

    /// Extract the primal value.
    fn value(&self) -> F;

    fn neg(&self) -> Self;

    fn try_add(&self, rhs: &Self) -> Result<Self, AdError>;
    fn try_sub(&self, rhs: &Self) -> Result<Self, AdError>;
    fn try_mul(&self, rhs: &Self) -> Result<Self, AdError>;
    /// Fails with [`AdError::DivisionByZero`] when the divisor's value is zero.
    fn try_div(&self, rhs: &Self) -> Result<Self, AdError>;
    /// General power with a variable exponent; requires a positive base.
    fn try_pow(&self, rhs: &Self) -> Result<Self, AdError>;
    /// Constant power via the power rule; `k == 0` yields 1 with zero
    /// derivative, and a negative base with fractional `k` is a domain error.
    fn try_powf(&self, k: F) -> Result<Self, AdError>;

    fn sin(&self) -> Self;
    fn cos(&self) -> Self;
    fn tan(&self) -> Self;
    fn atan(&self) -> Self;
    fn sinh(&self) -> Self;
    fn cosh(&self) -> Self;
    fn tanh(&self) -> Self;
    fn exp(&self) -> Self;
    fn logistic(&self) -> Self;
    fn abs(&self) -> Self;

    fn try_asin(&self) -> Result<Self, AdError>;
    fn try_acos(&self) -> Result<Self, AdError>;
    fn try_ln(&self) -> Result<Self, AdError>;
    fn try_log2(&self) -> Result<Self, AdError>;
    fn try_log10(&self) -> Result<Self, AdError>;
    fn try_sqrt(&self) -> Result<Self, AdError>;
}

// Plain floats evaluate values only; every derivative is implicitly dropped.
// Domain checks are kept identical to the dual impls so an expression fails
// the same way regardless of the seed type.
macro_rules! impl_dualnum_float {
    ($f:ty) => {
        impl DualNum<$f> for $f {
            #[inline]
            fn lift(&self, val: $f) -> Self {
                val
            }

            #[inline]
            fn value(&self) -> $f {
                *self
            }

            #[inline]
            fn neg(&self) -> Self {
                -*self
            }

            #[inline]
            fn try_add(&self, rhs: &Self) -> Result<Self, AdError> {
                Ok(*self + *rhs)
            }

            #[inline]
            fn try_sub(&self, rhs: &Self) -> Result<Self, AdError> {
                Ok(*self - *rhs)
            }

            #[inline]
            fn try_mul(&self, rhs: &Self) -> Result<Self, AdError> {
                Ok(*self * *rhs)
            }

            #[inline]
            fn try_div(&self, rhs: &Self) -> Result<Self, AdError> {
                if *rhs == 0.0 {
                    return Err(AdError::DivisionByZero);
                }
                Ok(*self / *rhs)
            }

            #[inline]
            fn try_pow(&self, rhs: &Self) -> Result<Self, AdError> {
                if *self <= 0.0 {
                    return Err(AdError::domain("pow", *self));
                }
                Ok(self.powf(*rhs))
            }

            #[inline]
            fn try_powf(&self, k: $f) -> Result<Self, AdError> {
                if k == 0.0 {
                    return Ok(1.0);
                }
                if *self < 0.0 && k.fract() != 0.0 {
                    return Err(AdError::domain("pow", *self));
                }
                Ok(self.powf(k))
            }

            #[inline]
            fn sin(&self) -> Self {
                <$f>::sin(*self)
            }

            #[inline]
            fn cos(&self) -> Self {
                <$f>::cos(*self)
            }

            #[inline]
            fn tan(&self) -> Self {
                <$f>::tan(*self)
            }

            #[inline]
            fn atan(&self) -> Self {
                <$f>::atan(*self)
            }

            #[inline]
            fn sinh(&self) -> Self {
                <$f>::sinh(*self)
            }

            #[inline]
            fn cosh(&self) -> Self {
                <$f>::cosh(*self)
            }

            #[inline]
            fn tanh(&self) -> Self {
                <$f>::tanh(*self)
            }

            #[inline]
            fn exp(&self) -> Self {
                <$f>::exp(*self)
            }

            #[inline]
            fn logistic(&self) -> Self {
                1.0 / (1.0 + <$f>::exp(-*self))
            }

            #[inline]
            fn abs(&self) -> Self {
                <$f>::abs(*self)
            }

            #[inline]
            fn try_asin(&self) -> Result<Self, AdError> {
                if <$f>::abs(*self) >= 1.0 {
                    return Err(AdError::domain("arcsin", *self));
                }
                Ok(<$f>::asin(*self))
            }

            #[inline]
            fn try_acos(&self) -> Result<Self, AdError> {
                if <$f>::abs(*self) >= 1.0 {
                    return Err(AdError::domain("arccos", *self));
                }
                Ok(<$f>::acos(*self))
            }

            #[inline]
            fn try_ln(&self) -> Result<Self, AdError> {
                if *self <= 0.0 {
                    return Err(AdError::domain("log", *self));
                }
                Ok(<$f>::ln(*self))
            }

            #[inline]
            fn try_log2(&self) -> Result<Self, AdError> {
                if *self <= 0.0 {
                    return Err(AdError::domain("log2", *self));
                }
                Ok(<$f>::log2(*self))
            }

            #[inline]
            fn try_log10(&self) -> Result<Self, AdError> {
                if *self <= 0.0 {
                    return Err(AdError::domain("log10", *self));
                }
                Ok(<$f>::log10(*self))
            }

            #[inline]
            fn try_sqrt(&self) -> Result<Self, AdError> {
                if *self <= 0.0 {
                    return Err(AdError::domain("sqrt", *self));
                }
                Ok(<$f>::sqrt(*self))
            }
        }
    };
}

impl_dualnum_float!(f32);
impl_dualnum_float!(f64);

impl<F: Float> DualNum<F> for Dual<F> {
    #[inline]
    fn lift(&self, val: F) -> Self {
        Dual::constant(val)
    }

    #[inline]
    fn value(&self) -> F {
        self.re
    }

    #[inline]
    fn neg(&self) -> Self {
        -*self
    }

    #[inline]
    fn try_add(&self, rhs: &Self) -> Result<Self, AdError> {
        Ok(*self + *rhs)
    }

    #[inline]
    fn try_sub(&self, rhs: &Self) -> Result<Self, AdError> {
        Ok(*self - *rhs)
    }

    #[inline]
    fn try_mul(&self, rhs: &Self) -> Result<Self, AdError> {
        Ok(*self * *rhs)
    }

    #[inline]
    fn try_div(&self, rhs: &Self) -> Result<Self, AdError> {
        Dual::try_div(*self, *rhs)
    }

    #[inline]
    fn try_pow(&self, rhs: &Self) -> Result<Self, AdError> {
        Dual::try_pow(*self, *rhs)
    }

    #[inline]
    fn try_powf(&self, k: F) -> Result<Self, AdError> {
        Dual::try_powf(*self, k)
    }

    #[inline]
    fn sin(&self) -> Self {
        Dual::sin(*self)
    }

    #[inline]
    fn cos(&self) -> Self {
        Dual::cos(*self)
    }

    #[inline]
    fn tan(&self) -> Self {
        Dual::tan(*self)
    }

    #[inline]
    fn atan(&self) -> Self {
        Dual::atan(*self)
    }

    #[inline]
    fn sinh(&self) -> Self {
        Dual::sinh(*self)
    }

    #[inline]
    fn cosh(&self) -> Self {
        Dual::cosh(*self)
    }

    #[inline]
    fn tanh(&self) -> Self {
        Dual::tanh(*self)
    }

    #[inline]
    fn exp(&self) -> Self {
        Dual::exp(*self)
    }

    #[inline]
    fn logistic(&self) -> Self {
        Dual::logistic(*self)
    }

    #[inline]
    fn abs(&self) -> Self {
        Dual::abs(*self)
    }

    #[inline]
    fn try_asin(&self) -> Result<Self, AdError> {
        Dual::try_asin(*self)
    }

    #[inline]
    fn try_acos(&self) -> Result<Self, AdError> {
        Dual::try_acos(*self)
    }

    #[inline]
    fn try_ln(&self) -> Result<Self, AdError> {
        Dual::try_ln(*self)
    }

    #[inline]
    fn try_log2(&self) -> Result<Self, AdError> {
        Dual::try_log2(*self)
    }

    #[inline]
    fn try_log10(&self) -> Result<Self, AdError> {
        Dual::try_log10(*self)
    }

    #[inline]
    fn try_sqrt(&self) -> Result<Self, AdError> {
        Dual::try_sqrt(*self)
    }
}

impl<F: Float> DualNum<F> for MultiDual<F> {
    #[inline]
    fn lift(&self, val: F) -> Self {
        MultiDual::constant(val, self.n_vars())
    }

    #[inline]
    fn value(&self) -> F {
        self.re
    }

    #[inline]
    fn neg(&self) -> Self {
        -self
    }

    #[inline]
    fn try_add(&self, rhs: &Self) -> Result<Self, AdError> {
        MultiDual::try_add(self, rhs)
    }

    #[inline]
    fn try_sub(&self, rhs: &Self) -> Result<Self, AdError> {
        MultiDual::try_sub(self, rhs)
    }

    #[inline]
    fn try_mul(&self, rhs: &Self) -> Result<Self, AdError> {
        MultiDual::try_mul(self, rhs)
    }

    #[inline]
    fn try_div(&self, rhs: &Self) -> Result<Self, AdError> {
        MultiDual::try_div(self, rhs)
    }

    #[inline]
    fn try_pow(&self, rhs: &Self) -> Result<Self, AdError> {
        MultiDual::try_pow(self, rhs)
    }

    #[inline]
    fn try_powf(&self, k: F) -> Result<Self, AdError> {
        MultiDual::try_powf(self, k)
    }

    #[inline]
    fn sin(&self) -> Self {
        MultiDual::sin(self)
    }

    #[inline]
    fn cos(&self) -> Self {
        MultiDual::cos(self)
    }

    #[inline]
    fn tan(&self) -> Self {
        MultiDual::tan(self)
    }

    #[inline]
    fn atan(&self) -> Self {
        MultiDual::atan(self)
    }

    #[inline]
    fn sinh(&self) -> Self {
        MultiDual::sinh(self)
    }

    #[inline]
    fn cosh(&self) -> Self {
        MultiDual::cosh(self)
    }

    #[inline]
    fn tanh(&self) -> Self {
        MultiDual::tanh(self)
    }

    #[inline]
    fn exp(&self) -> Self {
        MultiDual::exp(self)
    }

    #[inline]
    fn logistic(&self) -> Self {
        MultiDual::logistic(self)
    }

    #[inline]
    fn abs(&self) -> Self {
        MultiDual::abs(self)
    }

    #[inline]
    fn try_asin(&self) -> Result<Self, AdError> {
        MultiDual::try_asin(self)
    }

    #[inline]
    fn try_acos(&self) -> Result<Self, AdError> {
        MultiDual::try_acos(self)
    }

    #[inline]
    fn try_ln(&self) -> Result<Self, AdError> {
        MultiDual::try_ln(self)
    }

    #[inline]
    fn try_log2(&self) -> Result<Self, AdError> {
        MultiDual::try_log2(self)
    }

    #[inline]
    fn try_log10(&self) -> Result<Self, AdError> {
        MultiDual::try_log10(self)
    }

    #[inline]
    fn try_sqrt(&self) -> Result<Self, AdError> {
        MultiDual::try_sqrt(self)
    }
}

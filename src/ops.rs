//! Operator impls for [`Dual`] and [`MultiDual`].
//!
//! Binary `MultiDual` operators are sugar for the checked `try_*` methods
//! and panic on a seed-dimension mismatch or division by zero; call the
//! `try_*` methods directly to handle those as recoverable errors.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dual::Dual;
use crate::float::Float;
use crate::multidual::MultiDual;

// ──────────────────────────────────────────────
//  Dual<F> operators
// ──────────────────────────────────────────────

impl<F: Float> Add for Dual<F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dual {
            re: self.re + rhs.re,
            eps: self.eps + rhs.eps,
        }
    }
}

impl<F: Float> Sub for Dual<F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dual {
            re: self.re - rhs.re,
            eps: self.eps - rhs.eps,
        }
    }
}

impl<F: Float> Mul for Dual<F> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dual {
            re: self.re * rhs.re,
            eps: self.re * rhs.eps + self.eps * rhs.re,
        }
    }
}

impl<F: Float> Div for Dual<F> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let inv = F::one() / rhs.re;
        Dual {
            re: self.re * inv,
            eps: (self.eps * rhs.re - self.re * rhs.eps) * inv * inv,
        }
    }
}

impl<F: Float> Neg for Dual<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Dual {
            re: -self.re,
            eps: -self.eps,
        }
    }
}

impl<F: Float> AddAssign for Dual<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for Dual<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> MulAssign for Dual<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> DivAssign for Dual<F> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Mixed ops: Dual<F> with primitive floats. The plain scalar is lifted to a
// constant (zero derivative), never to an independent variable.
// We generate these for f32 and f64 via a macro.
macro_rules! impl_dual_scalar_ops {
    ($f:ty) => {
        impl Add<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re + rhs,
                    eps: self.eps,
                }
            }
        }

        impl Add<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self + rhs.re,
                    eps: rhs.eps,
                }
            }
        }

        impl Sub<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re - rhs,
                    eps: self.eps,
                }
            }
        }

        impl Sub<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self - rhs.re,
                    eps: -rhs.eps,
                }
            }
        }

        impl Mul<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re * rhs,
                    eps: self.eps * rhs,
                }
            }
        }

        impl Mul<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self * rhs.re,
                    eps: self * rhs.eps,
                }
            }
        }

        impl Div<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn div(self, rhs: $f) -> Dual<$f> {
                let inv = 1.0 / rhs;
                Dual {
                    re: self.re * inv,
                    eps: self.eps * inv,
                }
            }
        }

        impl Div<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn div(self, rhs: Dual<$f>) -> Dual<$f> {
                let inv = 1.0 / rhs.re;
                Dual {
                    re: self * inv,
                    eps: -self * rhs.eps * inv * inv,
                }
            }
        }
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);

impl<F: Float> PartialEq for Dual<F> {
    /// Two duals are equal iff value and tangent both match.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.eps == other.eps
    }
}

impl<F: Float> PartialOrd for Dual<F> {
    /// Ordering compares values only; tangents do not participate.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.re.partial_cmp(&other.re)
    }
}

// ──────────────────────────────────────────────
//  MultiDual<F> operators
// ──────────────────────────────────────────────

impl<F: Float> Neg for MultiDual<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        MultiDual {
            re: -self.re,
            eps: self.eps.into_iter().map(|e| -e).collect(),
        }
    }
}

impl<F: Float> Neg for &MultiDual<F> {
    type Output = MultiDual<F>;
    #[inline]
    fn neg(self) -> MultiDual<F> {
        MultiDual {
            re: -self.re,
            eps: self.eps.iter().map(|&e| -e).collect(),
        }
    }
}

macro_rules! impl_multidual_binary_op {
    ($trait:ident, $method:ident, $try:ident) => {
        impl<F: Float> $trait for MultiDual<F> {
            type Output = MultiDual<F>;
            #[inline]
            fn $method(self, rhs: MultiDual<F>) -> MultiDual<F> {
                match self.$try(&rhs) {
                    Ok(out) => out,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<F: Float> $trait<&MultiDual<F>> for &MultiDual<F> {
            type Output = MultiDual<F>;
            #[inline]
            fn $method(self, rhs: &MultiDual<F>) -> MultiDual<F> {
                match self.$try(rhs) {
                    Ok(out) => out,
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}

impl_multidual_binary_op!(Add, add, try_add);
impl_multidual_binary_op!(Sub, sub, try_sub);
impl_multidual_binary_op!(Mul, mul, try_mul);
impl_multidual_binary_op!(Div, div, try_div);

// Mixed ops: MultiDual<F> with primitive floats (constant lift, as above).
macro_rules! impl_multidual_scalar_ops {
    ($f:ty) => {
        impl Add<$f> for MultiDual<$f> {
            type Output = MultiDual<$f>;
            #[inline]
            fn add(self, rhs: $f) -> MultiDual<$f> {
                MultiDual {
                    re: self.re + rhs,
                    eps: self.eps,
                }
            }
        }

        impl Add<MultiDual<$f>> for $f {
            type Output = MultiDual<$f>;
            #[inline]
            fn add(self, rhs: MultiDual<$f>) -> MultiDual<$f> {
                MultiDual {
                    re: self + rhs.re,
                    eps: rhs.eps,
                }
            }
        }

        impl Sub<$f> for MultiDual<$f> {
            type Output = MultiDual<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> MultiDual<$f> {
                MultiDual {
                    re: self.re - rhs,
                    eps: self.eps,
                }
            }
        }

        impl Sub<MultiDual<$f>> for $f {
            type Output = MultiDual<$f>;
            #[inline]
            fn sub(self, rhs: MultiDual<$f>) -> MultiDual<$f> {
                MultiDual {
                    re: self - rhs.re,
                    eps: rhs.eps.into_iter().map(|e| -e).collect(),
                }
            }
        }

        impl Mul<$f> for MultiDual<$f> {
            type Output = MultiDual<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> MultiDual<$f> {
                MultiDual {
                    re: self.re * rhs,
                    eps: self.eps.into_iter().map(|e| e * rhs).collect(),
                }
            }
        }

        impl Mul<MultiDual<$f>> for $f {
            type Output = MultiDual<$f>;
            #[inline]
            fn mul(self, rhs: MultiDual<$f>) -> MultiDual<$f> {
                MultiDual {
                    re: self * rhs.re,
                    eps: rhs.eps.into_iter().map(|e| self * e).collect(),
                }
            }
        }

        impl Div<$f> for MultiDual<$f> {
            type Output = MultiDual<$f>;
            #[inline]
            fn div(self, rhs: $f) -> MultiDual<$f> {
                let inv = 1.0 / rhs;
                MultiDual {
                    re: self.re * inv,
                    eps: self.eps.into_iter().map(|e| e * inv).collect(),
                }
            }
        }

        impl Div<MultiDual<$f>> for $f {
            type Output = MultiDual<$f>;
            #[inline]
            fn div(self, rhs: MultiDual<$f>) -> MultiDual<$f> {
                let inv = 1.0 / rhs.re;
                MultiDual {
                    re: self * inv,
                    eps: rhs.eps.into_iter().map(|e| -self * e * inv * inv).collect(),
                }
            }
        }
    };
}

impl_multidual_scalar_ops!(f32);
impl_multidual_scalar_ops!(f64);

impl<F: Float> PartialEq for MultiDual<F> {
    /// Equal iff values and all tangent lanes match elementwise.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.eps == other.eps
    }
}

impl<F: Float> PartialOrd for MultiDual<F> {
    /// Ordering compares values only; tangents do not participate.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.re.partial_cmp(&other.re)
    }
}

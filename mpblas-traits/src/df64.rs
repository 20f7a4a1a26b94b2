//! Double-double real built on the `twofloat` crate.
//!
//! `Df64` carries an unevaluated sum of two doubles, giving about 106 bits of
//! significand. It exists so that the precision-generic kernels can be
//! exercised beyond double precision without linking a multiprecision library.

use crate::real::Real;
use std::ops::{Add, Div, Mul, Neg, Sub};
use twofloat::TwoFloat;

/// Double-double real number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Df64(pub TwoFloat);

impl Df64 {
    /// Build from the high and low parts of an unevaluated sum.
    ///
    /// The parts are renormalized, so `lo` need not be smaller than an ulp of `hi`.
    #[inline]
    pub fn from_parts(hi: f64, lo: f64) -> Self {
        Df64(TwoFloat::from(hi) + TwoFloat::from(lo))
    }

    /// High (leading) double.
    #[inline]
    pub fn hi(&self) -> f64 {
        self.0.hi()
    }

    /// Low (trailing) double.
    #[inline]
    pub fn lo(&self) -> f64 {
        self.0.lo()
    }
}

impl From<f64> for Df64 {
    #[inline]
    fn from(value: f64) -> Self {
        Df64(TwoFloat::from(value))
    }
}

macro_rules! impl_df64_binop {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait for Df64 {
                type Output = Df64;
                #[inline]
                fn $method(self, rhs: Df64) -> Df64 {
                    Df64($trait::$method(self.0, rhs.0))
                }
            }
        )*
    };
}

impl_df64_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Neg for Df64 {
    type Output = Df64;
    #[inline]
    fn neg(self) -> Df64 {
        Df64(-self.0)
    }
}

impl num_traits::Zero for Df64 {
    #[inline]
    fn zero() -> Self {
        Df64::from(0.0)
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.hi() == 0.0 && self.lo() == 0.0
    }
}

impl num_traits::One for Df64 {
    #[inline]
    fn one() -> Self {
        Df64::from(1.0)
    }
}

impl Real for Df64 {
    #[inline]
    fn abs(&self) -> Self {
        if self.hi() < 0.0 {
            -*self
        } else {
            *self
        }
    }

    fn sqrt(&self) -> Self {
        let hi = self.hi();
        if hi == 0.0 {
            return Df64::from(0.0);
        }
        if hi < 0.0 {
            return Df64::from(f64::NAN);
        }
        // One Newton step on the double estimate doubles the number of correct bits.
        let y0 = Df64::from(hi.sqrt());
        (y0 + *self / y0) * Df64::from(0.5)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Df64::from(value)
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        self.hi() + self.lo()
    }

    #[inline]
    fn epsilon() -> Self {
        // 2^-104
        Df64::from(f64::EPSILON * f64::EPSILON / 4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_traits::{One, Zero};

    #[test]
    fn test_keeps_bits_lost_in_f64() {
        let big = Df64::from(1e16);
        let sum = big + Df64::one() - big;
        assert_eq!(sum.to_f64(), 1.0);
        // the same expression in f64 loses the unit
        assert_eq!(1e16f64 + 1.0 - 1e16, 0.0);
    }

    #[test]
    fn test_sqrt_beyond_double() {
        let two = Df64::from(2.0);
        let r = two.sqrt();
        let residual = r * r - two;
        assert!(residual.abs().to_f64() < 1e-30);
        assert_relative_eq!(r.to_f64(), std::f64::consts::SQRT_2, epsilon = 1e-15);
    }

    #[test]
    fn test_sqrt_edge_cases() {
        assert!(Df64::zero().sqrt().is_zero());
        assert!(Df64::from(-1.0).sqrt().hi().is_nan());
    }

    #[test]
    fn test_abs_and_ordering() {
        let a = Df64::from_parts(-1.0, -1e-20);
        assert!(a < Df64::zero());
        assert!(a.abs() > Df64::one());
        assert_eq!(Df64::from(3.0).max_of(Df64::from(-4.0)).to_f64(), 3.0);
    }

    #[test]
    fn test_epsilon_is_resolvable() {
        let one = Df64::one();
        let eps = Df64::epsilon();
        assert!(one + eps > one);
        assert!(eps.to_f64() < 1e-30);
    }
}

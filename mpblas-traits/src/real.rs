//! Scalar type bounds for precision-generic linear algebra.

use std::fmt::Debug;
use std::ops::{Div, Neg, Sub};

/// Real scalar used by every primitive and by the factorization kernel.
///
/// Only `Clone` is required, not `Copy`: multiprecision numbers usually own a
/// heap-allocated mantissa, so the kernels clone explicitly where a value is
/// read twice.
///
/// Addition is **not** assumed to be associative. Reductions that change the
/// order of additions (see `mpblas::reduce`) may return results that differ in
/// the least-significant digits.
pub trait Real:
    Clone
    + Debug
    + PartialOrd
    + Send
    + Sync
    + num_traits::Zero
    + num_traits::One
    + Sub<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Absolute value.
    fn abs(&self) -> Self;

    /// Square root. Only called on non-negative arguments.
    fn sqrt(&self) -> Self;

    /// Convert from a double, rounding to the precision of `Self`.
    fn from_f64(value: f64) -> Self;

    /// Nearest double to `self`.
    fn to_f64(&self) -> f64;

    /// Distance from 1 to the next representable value.
    fn epsilon() -> Self;

    /// Larger of two values, preferring `self` when they compare equal.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_real_float {
    ($($t:ident),*) => {
        $(
            impl Real for $t {
                #[inline(always)]
                fn abs(&self) -> Self {
                    $t::abs(*self)
                }
                #[inline(always)]
                fn sqrt(&self) -> Self {
                    $t::sqrt(*self)
                }
                #[inline(always)]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
                #[inline(always)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }
                #[inline(always)]
                fn epsilon() -> Self {
                    $t::EPSILON
                }
            }
        )*
    };
}

impl_real_float!(f32, f64);

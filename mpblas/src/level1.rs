//! Level 1 BLAS: vector-vector operations.
//!
//! All functions take views, so negative strides and gaps between elements are
//! handled by the view rather than by the kernel. Length mismatches are reported
//! as [`BlasError::LengthMismatch`].

use crate::reduce::fork_join_sum;
use crate::view::{VecMut, VecRef};
use crate::{BlasError, Result};
use mpblas_traits::Real;

fn check_len(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(BlasError::LengthMismatch(a, b));
    }
    Ok(())
}

/// Dot product: `sum_i x[i] * y[i]`.
///
/// When both views have unit stride the sum is split across the current rayon
/// pool (see [`crate::reduce`]). Otherwise it is accumulated in index order.
/// Returns zero for empty views.
pub fn dot<T: Real>(x: &VecRef<'_, T>, y: &VecRef<'_, T>) -> Result<T> {
    let n = x.len();
    check_len(n, y.len())?;
    if n == 0 {
        return Ok(T::zero());
    }

    if let (Some(xs), Some(ys)) = (x.as_slice(), y.as_slice()) {
        return Ok(fork_join_sum(n, |r| {
            xs[r.clone()]
                .iter()
                .zip(&ys[r])
                .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
        }));
    }

    Ok(x
        .iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
}

/// Scale in place: `x[i] = alpha * x[i]`.
pub fn scal<T: Real>(alpha: T, x: &mut VecMut<'_, T>) {
    for i in 0..x.len() {
        let xi = x.get_mut(i);
        *xi = alpha.clone() * xi.clone();
    }
}

/// Exchange the contents of two vectors.
pub fn swap<T>(x: &mut VecMut<'_, T>, y: &mut VecMut<'_, T>) -> Result<()> {
    check_len(x.len(), y.len())?;
    for i in 0..x.len() {
        std::mem::swap(x.get_mut(i), y.get_mut(i));
    }
    Ok(())
}

/// Copy `x` into `y`.
pub fn copy<T: Clone>(x: &VecRef<'_, T>, y: &mut VecMut<'_, T>) -> Result<()> {
    check_len(x.len(), y.len())?;
    for (i, xi) in x.iter().enumerate() {
        y.set(i, xi.clone());
    }
    Ok(())
}

/// Position of the first element of largest absolute value.
///
/// Ties resolve to the lowest index. Returns `None` for an empty view.
pub fn iamax<T: Real>(x: &VecRef<'_, T>) -> Option<usize> {
    let mut iter = x.iter().enumerate();
    let (_, first) = iter.next()?;
    let mut best = 0;
    let mut best_abs = first.abs();
    for (i, xi) in iter {
        let a = xi.abs();
        if a > best_abs {
            best = i;
            best_abs = a;
        }
    }
    Some(best)
}

/// `y = alpha * x + y`. A zero `alpha` leaves `y` untouched.
pub fn axpy<T: Real>(alpha: T, x: &VecRef<'_, T>, y: &mut VecMut<'_, T>) -> Result<()> {
    check_len(x.len(), y.len())?;
    if alpha.is_zero() {
        return Ok(());
    }
    for (i, xi) in x.iter().enumerate() {
        let yi = y.get_mut(i);
        *yi = yi.clone() + alpha.clone() * xi.clone();
    }
    Ok(())
}

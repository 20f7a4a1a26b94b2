//! Level 2 BLAS: matrix-vector operations.

use crate::flags::Transpose;
use crate::level1::axpy;
use crate::view::{MatRef, VecMut, VecRef};
use crate::{BlasError, Result};
use mpblas_traits::Real;

/// General matrix-vector product: `y = alpha * op(A) * x + beta * y`.
///
/// `op(A)` is `A` or `A^T` depending on `trans` (there is no conjugation for
/// real scalars, so [`Transpose::ConjTrans`] behaves like [`Transpose::Trans`]).
///
/// Follows reference BLAS quick returns: nothing is touched when `op(A)` has
/// zero rows or columns, or when `alpha == 0` and `beta == 1`. A zero `beta`
/// overwrites `y` without reading it.
pub fn gemv<T: Real>(
    trans: Transpose,
    alpha: T,
    a: &MatRef<'_, T>,
    x: &VecRef<'_, T>,
    beta: T,
    y: &mut VecMut<'_, T>,
) -> Result<()> {
    let op = if trans.is_transposed() { a.t() } else { *a };
    let (m, n) = (op.nrows(), op.ncols());
    if x.len() != n || y.len() != m {
        return Err(BlasError::ShapeMismatch(vec![m, n], vec![y.len(), x.len()]));
    }

    if m == 0 || n == 0 || (alpha.is_zero() && beta.is_one()) {
        return Ok(());
    }

    scale_by_beta(&beta, y);
    if alpha.is_zero() {
        return Ok(());
    }

    if trans.is_transposed() {
        // y[i] += alpha * <row i of op(A), x>, accumulated in index order
        for i in 0..m {
            let temp = op
                .row(i)
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (aij, xj)| acc + aij.clone() * xj.clone());
            let yi = y.get_mut(i);
            *yi = yi.clone() + alpha.clone() * temp;
        }
    } else {
        for (j, xj) in x.iter().enumerate() {
            if xj.is_zero() {
                continue;
            }
            axpy(alpha.clone() * xj.clone(), &op.col(j), y)?;
        }
    }
    Ok(())
}

/// `y = beta * y`, with `beta == 0` clearing `y` and `beta == 1` a no-op.
pub(crate) fn scale_by_beta<T: Real>(beta: &T, y: &mut VecMut<'_, T>) {
    if beta.is_one() {
        return;
    }
    if beta.is_zero() {
        for i in 0..y.len() {
            y.set(i, T::zero());
        }
    } else {
        for i in 0..y.len() {
            let yi = y.get_mut(i);
            *yi = beta.clone() * yi.clone();
        }
    }
}

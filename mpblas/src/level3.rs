//! Level 3 BLAS: matrix-matrix operations.

use crate::flags::Transpose;
use crate::level1::axpy;
use crate::level2::scale_by_beta;
use crate::view::{MatMut, MatRef};
use crate::{BlasError, Result};
use mpblas_traits::Real;

/// General matrix multiplication: `C = alpha * op(A) * op(B) + beta * C`.
///
/// `op(A)` is `m x k`, `op(B)` is `k x n` and `C` is `m x n`. Quick returns
/// match reference BLAS: `C` is untouched when `m == 0`, `n == 0`, or when
/// `beta == 1` and either `alpha == 0` or `k == 0`.
pub fn gemm<T: Real>(
    transa: Transpose,
    transb: Transpose,
    alpha: T,
    a: &MatRef<'_, T>,
    b: &MatRef<'_, T>,
    beta: T,
    c: &mut MatMut<'_, T>,
) -> Result<()> {
    let opa = if transa.is_transposed() { a.t() } else { *a };
    let opb = if transb.is_transposed() { b.t() } else { *b };
    let (m, k) = (opa.nrows(), opa.ncols());
    let n = opb.ncols();

    if opb.nrows() != k {
        return Err(BlasError::ShapeMismatch(vec![m, k], vec![opb.nrows(), n]));
    }
    if c.nrows() != m || c.ncols() != n {
        return Err(BlasError::ShapeMismatch(vec![m, n], vec![c.nrows(), c.ncols()]));
    }

    if m == 0 || n == 0 || ((alpha.is_zero() || k == 0) && beta.is_one()) {
        return Ok(());
    }

    if alpha.is_zero() {
        for j in 0..n {
            scale_by_beta(&beta, &mut c.col_mut(j));
        }
        return Ok(());
    }

    if !transa.is_transposed() {
        // C(:, j) = beta * C(:, j) + sum_l alpha * B(l, j) * A(:, l)
        for j in 0..n {
            let mut cj = c.col_mut(j);
            scale_by_beta(&beta, &mut cj);
            for l in 0..k {
                let blj = opb.get(l, j);
                if blj.is_zero() {
                    continue;
                }
                axpy(alpha.clone() * blj.clone(), &opa.col(l), &mut cj)?;
            }
        }
    } else {
        // C(i, j) = alpha * <A(:, i), op(B)(:, j)> + beta * C(i, j)
        for j in 0..n {
            let bj = opb.col(j);
            for i in 0..m {
                let temp = opa
                    .row(i)
                    .iter()
                    .zip(bj.iter())
                    .fold(T::zero(), |acc, (x, y)| acc + x.clone() * y.clone());
                let cij = c.get_mut(i, j);
                *cij = if beta.is_zero() {
                    alpha.clone() * temp
                } else {
                    alpha.clone() * temp + beta.clone() * cij.clone()
                };
            }
        }
    }
    Ok(())
}

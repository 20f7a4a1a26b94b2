//! Positional entry points with reference BLAS argument conventions.
//!
//! These wrap the view-based primitives for callers that think in terms of
//! `(n, x, incx)` triples, leading dimensions and flag characters:
//!
//! - a non-positive `n` is a quick return, not an error
//! - a negative increment walks the vector backward, starting from
//!   `x[(n - 1) * |inc|]`
//! - [`iramax`] returns a 1-based position, and 0 when there is nothing to search
//!
//! Zero increments are rejected with [`BlasError::ZeroStride`], since the views
//! cannot alias one element `n` times.

use crate::flags::Transpose;
use crate::view::{MatMut, MatRef, VecMut, VecRef};
use crate::{level1, level2, level3, BlasError, Result};
use mpblas_traits::Real;

fn dim(name: &'static str, value: isize) -> Result<usize> {
    usize::try_from(value).map_err(|_| BlasError::NegativeDimension { name, value })
}

/// Dot product of `n` elements of `x` and `y`.
pub fn rdot<T: Real>(n: isize, x: &[T], incx: isize, y: &[T], incy: isize) -> Result<T> {
    if n <= 0 {
        return Ok(T::zero());
    }
    let n = n as usize;
    let xv = VecRef::from_blas(x, n, incx)?;
    let yv = VecRef::from_blas(y, n, incy)?;
    level1::dot(&xv, &yv)
}

/// `x = alpha * x` over `n` elements. Does nothing when `incx <= 0`.
pub fn rscal<T: Real>(n: isize, alpha: T, x: &mut [T], incx: isize) -> Result<()> {
    if n <= 0 || incx <= 0 {
        return Ok(());
    }
    let mut xv = VecMut::from_blas(x, n as usize, incx)?;
    level1::scal(alpha, &mut xv);
    Ok(())
}

/// Exchange `n` elements of `x` and `y`.
pub fn rswap<T>(n: isize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) -> Result<()> {
    if n <= 0 {
        return Ok(());
    }
    let n = n as usize;
    let mut xv = VecMut::from_blas(x, n, incx)?;
    let mut yv = VecMut::from_blas(y, n, incy)?;
    level1::swap(&mut xv, &mut yv)
}

/// Copy `n` elements of `x` into `y`.
pub fn rcopy<T: Clone>(n: isize, x: &[T], incx: isize, y: &mut [T], incy: isize) -> Result<()> {
    if n <= 0 {
        return Ok(());
    }
    let n = n as usize;
    let xv = VecRef::from_blas(x, n, incx)?;
    let mut yv = VecMut::from_blas(y, n, incy)?;
    level1::copy(&xv, &mut yv)
}

/// 1-based position of the first element of largest absolute value.
///
/// Returns 0 when `n < 1` or `incx <= 0`.
pub fn iramax<T: Real>(n: isize, x: &[T], incx: isize) -> Result<usize> {
    if n < 1 || incx <= 0 {
        return Ok(0);
    }
    let xv = VecRef::from_blas(x, n as usize, incx)?;
    Ok(level1::iamax(&xv).map_or(0, |i| i + 1))
}

/// `y = alpha * x + y` over `n` elements.
pub fn raxpy<T: Real>(
    n: isize,
    alpha: T,
    x: &[T],
    incx: isize,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    if n <= 0 {
        return Ok(());
    }
    let n = n as usize;
    let xv = VecRef::from_blas(x, n, incx)?;
    let mut yv = VecMut::from_blas(y, n, incy)?;
    level1::axpy(alpha, &xv, &mut yv)
}

/// `y = alpha * op(A) * x + beta * y` with `A` an `m x n` column-major matrix.
#[allow(clippy::too_many_arguments)]
pub fn rgemv<T: Real>(
    trans: char,
    m: isize,
    n: isize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) -> Result<()> {
    let trans = Transpose::try_from(trans)?;
    let m = dim("m", m)?;
    let n = dim("n", n)?;
    let av = MatRef::col_major(a, m, n, lda)?;
    if m == 0 || n == 0 {
        return Ok(());
    }
    let (lenx, leny) = if trans.is_transposed() { (m, n) } else { (n, m) };
    let xv = VecRef::from_blas(x, lenx, incx)?;
    let mut yv = VecMut::from_blas(y, leny, incy)?;
    level2::gemv(trans, alpha, &av, &xv, beta, &mut yv)
}

/// `C = alpha * op(A) * op(B) + beta * C` on column-major buffers.
///
/// `op(A)` is `m x k`, `op(B)` is `k x n`.
#[allow(clippy::too_many_arguments)]
pub fn rgemm<T: Real>(
    transa: char,
    transb: char,
    m: isize,
    n: isize,
    k: isize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let transa = Transpose::try_from(transa)?;
    let transb = Transpose::try_from(transb)?;
    let m = dim("m", m)?;
    let n = dim("n", n)?;
    let k = dim("k", k)?;

    let (arows, acols) = if transa.is_transposed() { (k, m) } else { (m, k) };
    let (brows, bcols) = if transb.is_transposed() { (n, k) } else { (k, n) };
    let av = MatRef::col_major(a, arows, acols, lda)?;
    let bv = MatRef::col_major(b, brows, bcols, ldb)?;
    let mut cv = MatMut::col_major(c, m, n, ldc)?;
    level3::gemm(transa, transb, alpha, &av, &bv, beta, &mut cv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdot_non_positive_n() {
        let x = [1.0, 2.0];
        assert_eq!(rdot(0, &x, 1, &x, 1).unwrap(), 0.0);
        assert_eq!(rdot(-3, &x, 1, &x, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_rdot_negative_increment() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let reversed: Vec<f64> = y.iter().rev().copied().collect();
        assert_eq!(
            rdot(3, &x, 1, &y, -1).unwrap(),
            rdot(3, &x, 1, &reversed, 1).unwrap()
        );
    }

    #[test]
    fn test_rdot_zero_increment_rejected() {
        let x = [1.0, 2.0];
        assert!(matches!(
            rdot(2, &x, 0, &x, 1),
            Err(BlasError::ZeroStride { extent: 2 })
        ));
    }

    #[test]
    fn test_rscal_skips_non_positive_increment() {
        let mut x = vec![1.0, 2.0];
        rscal(2, 3.0, &mut x, -1).unwrap();
        assert_eq!(x, vec![1.0, 2.0]);
        rscal(2, 3.0, &mut x, 1).unwrap();
        assert_eq!(x, vec![3.0, 6.0]);
    }

    #[test]
    fn test_rswap_rcopy() {
        let mut x = vec![1.0, 2.0, 3.0, 4.0];
        let mut y = vec![0.0; 2];
        rswap(2, &mut x, 2, &mut y, 1).unwrap();
        assert_eq!(x, vec![0.0, 2.0, 0.0, 4.0]);
        assert_eq!(y, vec![1.0, 3.0]);

        let mut z = vec![0.0; 2];
        rcopy(2, &y, 1, &mut z, -1).unwrap();
        assert_eq!(z, vec![3.0, 1.0]);
    }

    #[test]
    fn test_iramax() {
        let x = [1.0, -5.0, 2.0, 5.0];
        assert_eq!(iramax(4, &x, 1).unwrap(), 2);
        assert_eq!(iramax(2, &x, 2).unwrap(), 2);
        assert_eq!(iramax(0, &x, 1).unwrap(), 0);
        assert_eq!(iramax(4, &x, 0).unwrap(), 0);
        assert_eq!(iramax(4, &x, -1).unwrap(), 0);
    }

    #[test]
    fn test_raxpy() {
        let x = [1.0, 2.0];
        let mut y = vec![1.0, 1.0];
        raxpy(2, 2.0, &x, -1, &mut y, 1).unwrap();
        assert_eq!(y, vec![5.0, 3.0]);
    }

    #[test]
    fn test_rgemv_flags_and_dimensions() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let x = [1.0, 1.0];
        let mut y = vec![0.0; 2];
        rgemv('t', 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap();
        assert_eq!(y, vec![3.0, 7.0]);
        assert!(matches!(
            rgemv('x', 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1),
            Err(BlasError::InvalidFlag { flag: 'x', .. })
        ));
        assert!(matches!(
            rgemv('N', -1, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1),
            Err(BlasError::NegativeDimension { name: "m", value: -1 })
        ));
        assert!(matches!(
            rgemv('N', 2, 2, 1.0, &a, 1, &x, 1, 0.0, &mut y, 1),
            Err(BlasError::LeadingDimension { ld: 1, rows: 2 })
        ));
    }

    #[test]
    fn test_rgemm_trans_a() {
        // A^T * B with A = [[1, 2], [3, 4]], B = I
        let a = [1.0, 3.0, 2.0, 4.0];
        let b = [1.0, 0.0, 0.0, 1.0];
        let mut c = vec![0.0; 4];
        rgemm('T', 'N', 2, 2, 2, 1.0, &a, 2, &b, 2, 0.0, &mut c, 2).unwrap();
        assert_eq!(c, vec![1.0, 2.0, 3.0, 4.0]);
    }
}

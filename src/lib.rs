//! Blocked symmetric-indefinite factorization over precision-generic reals.
//!
//! This crate provides [`lasyf`], the blocked Bunch-Kaufman kernel of a
//! symmetric-indefinite `L*D*L^T` / `U*D*U^T` factorization. One call factors
//! up to `nb` columns of a symmetric matrix from one end, staging candidate
//! columns in a workspace `W`, and then applies a single rank-`kb` update to the
//! rest of the matrix. A driver calls it repeatedly over shrinking submatrices
//! to factor the whole matrix.
//!
//! The scalar type is any [`Real`]; `f64` and the double-double [`Df64`] are
//! provided, and external multiprecision types can implement the trait from
//! the `mpblas-traits` crate.
//!
//! # Storage conventions
//!
//! - `A` is column-major with leading dimension `lda`; only the triangle
//!   selected by [`Uplo`] is read or written
//! - `ipiv` uses the LAPACK encoding: a positive entry `p` records a 1x1 block
//!   interchanged with row/column `p`, and two equal negative entries `-p` record
//!   a 2x2 block (see [`Pivot`])
//! - `info` is the lowest 1-based column with an exactly-zero pivot, or 0
//!
//! # Example
//!
//! ```rust
//! use mplapack::{lasyf, Uplo};
//!
//! // 2x2 SPD matrix, lower triangle
//! let mut a = vec![4.0, 2.0, f64::NAN, 3.0];
//! let mut ipiv = vec![0isize; 2];
//! let mut w = vec![0.0; 4];
//! let res = lasyf(Uplo::Lower, 2, 2, &mut a, 2, &mut ipiv, &mut w, 2).unwrap();
//! assert_eq!((res.kb, res.info), (2, 0));
//! assert_eq!(ipiv, vec![1, 2]);
//! // L(2,1) = 2 / 4, D = diag(4, 3 - 2 * 0.5)
//! assert_eq!(a[1], 0.5);
//! assert_eq!(a[3], 2.0);
//! ```

mod direction;
pub mod lasyf;
pub mod pivot;

pub use lasyf::{lasyf, workspace_len, LasyfResult};
pub use mpblas::{BlasError, Real, Uplo};
pub use pivot::Pivot;

#[cfg(feature = "twofloat")]
pub use mpblas::Df64;

// ============================================================================
// Error types
// ============================================================================

/// Errors returned by the factorization kernel.
///
/// These cover argument checks only. A singular matrix is not an error; it is
/// reported through [`LasyfResult::info`].
#[derive(Debug, thiserror::Error)]
pub enum LapackError {
    /// A view over `A` or `W` could not be built.
    #[error(transparent)]
    Blas(#[from] BlasError),

    /// The pivot vector is shorter than the matrix order.
    #[error("ipiv holds {len} entries but {needed} are required")]
    PivotLength { needed: usize, len: usize },
}

/// Result type for factorization routines.
pub type Result<T> = std::result::Result<T, LapackError>;

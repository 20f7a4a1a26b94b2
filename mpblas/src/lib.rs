//! Strided BLAS primitives over precision-generic reals.
//!
//! This crate provides the vector and matrix kernels that a blocked dense
//! factorization needs, written once for any [`Real`] scalar instead of for
//! `f32`/`f64` only. It follows reference BLAS semantics (strides, leading
//! dimensions, quick-return rules) but operates on bounds-checked views rather
//! than raw pointers.
//!
//! # Core Types
//!
//! - [`VecRef`] / [`VecMut`]: 1-D views with a signed stride
//! - [`MatRef`] / [`MatMut`]: 2-D views with row and column strides (column-major
//!   buffers with a leading dimension are the common case)
//! - [`Transpose`], [`Uplo`]: operation flags, parseable from BLAS characters
//!
//! # Primitives
//!
//! - Level 1 ([`level1`]): [`dot`], [`scal`], [`swap`], [`copy`], [`iamax`], [`axpy`]
//! - Level 2 ([`level2`]): [`gemv`]
//! - Level 3 ([`level3`]): [`gemm`]
//! - Positional BLAS-style entry points with 1-based results: [`compat`]
//!
//! # Parallel dot product
//!
//! With the `parallel` feature (default), unit-stride [`dot`] splits its range
//! across the current rayon pool via [`reduce::fork_join_sum`]. The partial sums
//! are merged in an unspecified order, so for scalars whose addition is not
//! associative the result may vary in its last digits between pool sizes.
//!
//! # Example
//!
//! ```rust
//! use mpblas::{dot, VecRef};
//!
//! let x = [1.0, 2.0, 3.0];
//! let y = [4.0, 5.0, 6.0];
//! // walk y backwards, BLAS style
//! let xv = VecRef::from_blas(&x, 3, 1).unwrap();
//! let yv = VecRef::from_blas(&y, 3, -1).unwrap();
//! assert_eq!(dot(&xv, &yv).unwrap(), 1.0 * 6.0 + 2.0 * 5.0 + 3.0 * 4.0);
//! ```

pub mod compat;
mod flags;
pub mod level1;
pub mod level2;
pub mod level3;
pub mod reduce;
pub mod view;

pub use flags::{Transpose, Uplo};
pub use level1::{axpy, copy, dot, iamax, scal, swap};
pub use level2::gemv;
pub use level3::gemm;
pub use mpblas_traits::Real;
pub use view::{MatMut, MatRef, VecMut, VecRef};

#[cfg(feature = "twofloat")]
pub use mpblas_traits::Df64;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for which a unit-stride dot product is split across threads.
///
/// Shorter ranges run as a single sequential partial sum.
pub const MIN_PARALLEL_LEN: usize = 256;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while building views or calling primitives.
#[derive(Debug, thiserror::Error)]
pub enum BlasError {
    /// Vector lengths do not match.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// Operand shapes are incompatible for the operation.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    /// The view would address an element past the end of its buffer.
    #[error("view needs element {required} but the buffer holds {len}")]
    OutOfBounds { required: usize, len: usize },

    /// The view would address an element before the start of its buffer.
    #[error("negative offset while computing view")]
    NegativeOffset,

    /// Zero stride is not allowed for an extent larger than one.
    #[error("invalid stride 0 for extent {extent}")]
    ZeroStride { extent: usize },

    /// Leading dimension smaller than the number of rows.
    #[error("leading dimension {ld} is smaller than max(1, {rows})")]
    LeadingDimension { ld: usize, rows: usize },

    /// A dimension argument that is negative.
    #[error("dimension {name} must be non-negative, got {value}")]
    NegativeDimension { name: &'static str, value: isize },

    /// A flag character that names no known option.
    #[error("invalid {kind} flag '{flag}'")]
    InvalidFlag { kind: &'static str, flag: char },
}

/// Result type for BLAS operations.
pub type Result<T> = std::result::Result<T, BlasError>;

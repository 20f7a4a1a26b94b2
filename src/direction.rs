//! Traversal direction of the blocked kernel.
//!
//! The kernel is written for the lower triangle, walking forward from column 0.
//! The upper triangle walks backward from column `n - 1`; reversing both axes
//! of A and W turns that walk into the forward one, with the stored upper
//! triangle appearing as a lower triangle. [`Direction`] holds the few rules
//! that differ between the two.

use mpblas::{iamax, MatMut, Real, Uplo, VecRef};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Direction {
    uplo: Uplo,
    n: usize,
}

impl Direction {
    pub(crate) fn new(uplo: Uplo, n: usize) -> Self {
        Self { uplo, n }
    }

    /// View a stored matrix in traversal order: logical column 0 is the
    /// first one factored.
    pub(crate) fn orient<'a, T>(self, m: MatMut<'a, T>) -> MatMut<'a, T> {
        match self.uplo {
            Uplo::Lower => m,
            Uplo::Upper => m.rev(),
        }
    }

    /// Stored 0-based row/column of logical index `i`.
    ///
    /// Also maps stored indices back to logical ones.
    #[inline]
    pub(crate) fn phys(self, i: usize) -> usize {
        match self.uplo {
            Uplo::Lower => i,
            Uplo::Upper => self.n - 1 - i,
        }
    }

    /// Logical offset of the largest magnitude in `v`.
    ///
    /// Ties go to the element stored first, which in upper mode is the last
    /// one in logical order.
    pub(crate) fn argmax<T: Real>(self, v: VecRef<'_, T>) -> usize {
        match self.uplo {
            Uplo::Lower => iamax(&v).unwrap_or(0),
            Uplo::Upper => iamax(&v.rev()).map_or(0, |j| v.len() - 1 - j),
        }
    }

    /// Width of the first column panel of the trailing update.
    ///
    /// Panels are aligned to the stored column 0, so in upper mode the partial
    /// panel comes first.
    pub(crate) fn first_panel(self, remaining: usize, nb: usize) -> usize {
        match self.uplo {
            Uplo::Lower => nb.min(remaining),
            Uplo::Upper => (remaining - 1) % nb + 1,
        }
    }
}

//! Fork-join summation over an index range.
//!
//! The range is halved recursively together with the thread budget, like a
//! divide-and-conquer mapreduce: each half runs on its own rayon task until a
//! task has a single thread or fewer than [`MIN_PARALLEL_LEN`] elements, at
//! which point it computes one sequential partial sum. Partial sums are added
//! pairwise as the recursion unwinds.
//!
//! The merge order is fixed by the split, but the split depends on the pool
//! size, so results for a non-associative addition can differ between pools.

use crate::MIN_PARALLEL_LEN;
use mpblas_traits::Real;
use std::ops::Range;

/// Sum `partial(r)` over a partition of `0..len`.
///
/// `partial` must return the sequential sum of its sub-range; the pieces are
/// combined with `+`. Runs sequentially when the `parallel` feature is off,
/// when the current pool has one thread, or when `len < MIN_PARALLEL_LEN`.
pub fn fork_join_sum<T, F>(len: usize, partial: F) -> T
where
    T: Real,
    F: Fn(Range<usize>) -> T + Sync,
{
    let nthreads = current_num_threads();
    if nthreads <= 1 || len < MIN_PARALLEL_LEN {
        return partial(0..len);
    }
    log::trace!("fork_join_sum: len={len} threads={nthreads}");
    split_sum(0..len, nthreads, &partial)
}

#[cfg(feature = "parallel")]
fn split_sum<T, F>(range: Range<usize>, nthreads: usize, partial: &F) -> T
where
    T: Real,
    F: Fn(Range<usize>) -> T + Sync,
{
    if nthreads <= 1 || range.len() < MIN_PARALLEL_LEN {
        return partial(range);
    }
    let mid = range.start + range.len() / 2;
    let left_threads = nthreads >> 1;
    let right_threads = nthreads - left_threads;
    let (a, b) = rayon::join(
        || split_sum(range.start..mid, left_threads, partial),
        || split_sum(mid..range.end, right_threads, partial),
    );
    a + b
}

#[cfg(not(feature = "parallel"))]
fn split_sum<T, F>(range: Range<usize>, _nthreads: usize, partial: &F) -> T
where
    T: Real,
    F: Fn(Range<usize>) -> T + Sync,
{
    partial(range)
}

/// Number of worker threads available to [`fork_join_sum`].
#[inline]
pub fn current_num_threads() -> usize {
    #[cfg(feature = "parallel")]
    {
        rayon::current_num_threads()
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}

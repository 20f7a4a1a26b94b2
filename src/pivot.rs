//! Pivot records and their 1-based `ipiv` encoding.
//!
//! The kernel works with 0-based [`Pivot`] values; [`Pivot::encode`] and
//! [`Pivot::decode`] are the only places where the LAPACK convention
//! (positive for a 1x1 block, two equal negative entries for a 2x2 block,
//! magnitudes 1-based) is produced or read.

/// Interchange recorded for one factored column, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pivot {
    /// 1x1 block. The column was interchanged with `partner`, which is the
    /// column itself when no interchange happened.
    Single(usize),
    /// One of the two columns of a 2x2 block. Both columns carry the same
    /// partner: the row and column brought next to the block.
    Double(usize),
}

impl Pivot {
    /// Row/column this pivot was interchanged with.
    #[inline]
    pub fn partner(self) -> usize {
        match self {
            Pivot::Single(p) | Pivot::Double(p) => p,
        }
    }

    /// Number of columns in the pivot block.
    #[inline]
    pub fn width(self) -> usize {
        match self {
            Pivot::Single(_) => 1,
            Pivot::Double(_) => 2,
        }
    }

    /// Same block kind with the partner index mapped through `f`.
    #[inline]
    pub(crate) fn map(self, f: impl FnOnce(usize) -> usize) -> Self {
        match self {
            Pivot::Single(p) => Pivot::Single(f(p)),
            Pivot::Double(p) => Pivot::Double(f(p)),
        }
    }

    /// LAPACK `ipiv` entry: `partner + 1`, negated for a 2x2 block.
    #[inline]
    pub fn encode(self) -> isize {
        match self {
            Pivot::Single(p) => p as isize + 1,
            Pivot::Double(p) => -(p as isize + 1),
        }
    }

    /// Inverse of [`Pivot::encode`]. Returns `None` for 0, which no
    /// factored column ever holds.
    #[inline]
    pub fn decode(entry: isize) -> Option<Self> {
        match entry {
            0 => None,
            e if e > 0 => Some(Pivot::Single((e - 1) as usize)),
            e => Some(Pivot::Double((-e - 1) as usize)),
        }
    }
}

//! Strided vector and matrix views.
//!
//! This module provides the 1-D and 2-D views that every primitive operates on:
//!
//! - [`VecRef`] / [`VecMut`]: `len` elements at `offset + i * stride`
//! - [`MatRef`] / [`MatMut`]: `nrows x ncols` elements at
//!   `offset + i * row_stride + j * col_stride`
//!
//! Strides are signed. A column-major buffer with leading dimension `ld` is the
//! view `(row_stride, col_stride) = (1, ld)`; [`MatRef::rev`] turns it into the
//! index-reversed view `(-1, -ld)` without copying, which is how the
//! factorization kernel runs its upper-triangle mode.
//!
//! Views are validated on construction so element access never leaves the
//! underlying slice. Mutable matrix views can be split into two disjoint column
//! ranges with [`MatMut::split_at_col_mut`], which lets a primitive read some
//! columns of a matrix while writing others.

use crate::{BlasError, Result};
use std::ops::Range;

/// An immutable strided view over a slice.
///
/// # Example
/// ```
/// use mpblas::VecRef;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let every_other = VecRef::new(&data, 3, 2, 0).unwrap();
/// assert_eq!(*every_other.get(2), 5.0);
/// ```
#[derive(Debug)]
pub struct VecRef<'a, T> {
    data: &'a [T],
    len: usize,
    stride: isize,
    offset: usize,
}

/// A mutable strided view over a slice.
#[derive(Debug)]
pub struct VecMut<'a, T> {
    data: &'a mut [T],
    len: usize,
    stride: isize,
    offset: usize,
}

/// An immutable 2-D strided view over a slice.
#[derive(Debug)]
pub struct MatRef<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    row_stride: isize,
    col_stride: isize,
    offset: usize,
}

/// A mutable 2-D strided view over a slice.
#[derive(Debug)]
pub struct MatMut<'a, T> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
    row_stride: isize,
    col_stride: isize,
    offset: usize,
}

impl<'a, T> Clone for VecRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for VecRef<'a, T> {}

impl<'a, T> Clone for MatRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for MatRef<'a, T> {}

#[inline]
fn linear(offset: usize, i: usize, stride: isize) -> usize {
    (offset as isize + i as isize * stride) as usize
}

// ============================================================================
// VecRef
// ============================================================================

impl<'a, T> VecRef<'a, T> {
    /// Create a new strided view.
    ///
    /// # Errors
    /// Returns an error if the view would access out-of-bounds memory, or if
    /// `stride == 0` with more than one element.
    pub fn new(data: &'a [T], len: usize, stride: isize, offset: usize) -> Result<Self> {
        validate_bounds(data.len(), &[len], &[stride], offset)?;
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    /// Create a view following the BLAS increment convention.
    ///
    /// For `inc < 0` element 0 is the one stored last, so the sequence is walked
    /// backward through memory, like `x(1 + (n - 1) * |inc|)` in Fortran BLAS.
    pub fn from_blas(data: &'a [T], n: usize, inc: isize) -> Result<Self> {
        Self::new(data, n, inc, blas_offset(n, inc))
    }

    /// View over a whole slice with unit stride.
    pub fn contiguous(data: &'a [T]) -> Self {
        Self {
            data,
            len: data.len(),
            stride: 1,
            offset: 0,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance in memory between consecutive elements.
    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Get element `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    #[inline]
    pub fn get(&self, i: usize) -> &'a T {
        assert!(i < self.len, "index out of bounds");
        &self.data[linear(self.offset, i, self.stride)]
    }

    /// Iterate over the elements in view order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let this = *self;
        (0..this.len).map(move |i| &this.data[linear(this.offset, i, this.stride)])
    }

    /// Returns the elements as a slice if the stride is 1.
    pub fn as_slice(&self) -> Option<&'a [T]> {
        if self.len == 0 {
            return Some(&[]);
        }
        if self.stride == 1 {
            Some(&self.data[self.offset..self.offset + self.len])
        } else {
            None
        }
    }

    /// Same elements in reverse order.
    pub fn rev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            offset: linear(self.offset, self.len - 1, self.stride),
            stride: -self.stride,
            ..self
        }
    }

    /// Sub-view over `range`.
    ///
    /// # Panics
    /// Panics if `range` is not within `0..len`.
    pub fn slice(self, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "slice out of bounds"
        );
        if range.is_empty() {
            return Self {
                len: 0,
                offset: 0,
                ..self
            };
        }
        Self {
            len: range.len(),
            offset: linear(self.offset, range.start, self.stride),
            ..self
        }
    }
}

// ============================================================================
// VecMut
// ============================================================================

impl<'a, T> VecMut<'a, T> {
    /// Create a new mutable strided view.
    pub fn new(data: &'a mut [T], len: usize, stride: isize, offset: usize) -> Result<Self> {
        validate_bounds(data.len(), &[len], &[stride], offset)?;
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    /// Create a mutable view following the BLAS increment convention.
    pub fn from_blas(data: &'a mut [T], n: usize, inc: isize) -> Result<Self> {
        let offset = blas_offset(n, inc);
        Self::new(data, n, inc, offset)
    }

    /// Mutable view over a whole slice with unit stride.
    pub fn contiguous(data: &'a mut [T]) -> Self {
        Self {
            len: data.len(),
            data,
            stride: 1,
            offset: 0,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance in memory between consecutive elements.
    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Get element `i`.
    #[inline]
    pub fn get(&self, i: usize) -> &T {
        assert!(i < self.len, "index out of bounds");
        &self.data[linear(self.offset, i, self.stride)]
    }

    /// Get a mutable reference to element `i`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        assert!(i < self.len, "index out of bounds");
        &mut self.data[linear(self.offset, i, self.stride)]
    }

    /// Set element `i`.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) {
        *self.get_mut(i) = value;
    }

    /// Reborrow as an immutable view.
    #[inline]
    pub fn rb(&self) -> VecRef<'_, T> {
        VecRef {
            data: &*self.data,
            len: self.len,
            stride: self.stride,
            offset: self.offset,
        }
    }

    /// Reborrow as a shorter-lived mutable view.
    #[inline]
    pub fn rb_mut(&mut self) -> VecMut<'_, T> {
        VecMut {
            data: &mut *self.data,
            len: self.len,
            stride: self.stride,
            offset: self.offset,
        }
    }

    /// Returns the elements as a mutable slice if the stride is 1.
    pub fn as_slice_mut(&mut self) -> Option<&mut [T]> {
        if self.len == 0 {
            return Some(&mut []);
        }
        if self.stride == 1 {
            Some(&mut self.data[self.offset..self.offset + self.len])
        } else {
            None
        }
    }

    /// Mutable sub-view over `range`.
    pub fn slice_mut(self, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "slice out of bounds"
        );
        if range.is_empty() {
            return Self {
                len: 0,
                offset: 0,
                ..self
            };
        }
        Self {
            len: range.len(),
            offset: linear(self.offset, range.start, self.stride),
            ..self
        }
    }
}

// ============================================================================
// MatRef
// ============================================================================

impl<'a, T> MatRef<'a, T> {
    /// Create a new 2-D strided view.
    pub fn new(
        data: &'a [T],
        nrows: usize,
        ncols: usize,
        row_stride: isize,
        col_stride: isize,
        offset: usize,
    ) -> Result<Self> {
        validate_bounds(
            data.len(),
            &[nrows, ncols],
            &[row_stride, col_stride],
            offset,
        )?;
        Ok(Self {
            data,
            nrows,
            ncols,
            row_stride,
            col_stride,
            offset,
        })
    }

    /// View a column-major buffer with leading dimension `ld`.
    ///
    /// # Errors
    /// Fails if `ld < max(1, nrows)` or the buffer is too short.
    pub fn col_major(data: &'a [T], nrows: usize, ncols: usize, ld: usize) -> Result<Self> {
        check_leading_dimension(ld, nrows)?;
        Self::new(data, nrows, ncols, 1, ld as isize, 0)
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Distance in memory between vertically adjacent elements.
    #[inline]
    pub fn row_stride(&self) -> isize {
        self.row_stride
    }

    /// Distance in memory between horizontally adjacent elements.
    #[inline]
    pub fn col_stride(&self) -> isize {
        self.col_stride
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        (self.offset as isize + i as isize * self.row_stride + j as isize * self.col_stride)
            as usize
    }

    /// Get element `(i, j)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> &'a T {
        assert!(i < self.nrows && j < self.ncols, "index out of bounds");
        &self.data[self.index(i, j)]
    }

    /// Column `j` as a vector view.
    pub fn col(&self, j: usize) -> VecRef<'a, T> {
        assert!(j < self.ncols, "column out of bounds");
        VecRef {
            data: self.data,
            len: self.nrows,
            stride: self.row_stride,
            offset: if self.nrows == 0 { 0 } else { self.index(0, j) },
        }
    }

    /// Row `i` as a vector view.
    pub fn row(&self, i: usize) -> VecRef<'a, T> {
        assert!(i < self.nrows, "row out of bounds");
        VecRef {
            data: self.data,
            len: self.ncols,
            stride: self.col_stride,
            offset: if self.ncols == 0 { 0 } else { self.index(i, 0) },
        }
    }

    /// Sub-view over `rows x cols`.
    pub fn submatrix(self, rows: Range<usize>, cols: Range<usize>) -> Self {
        let offset = sub_offset(
            self.offset,
            (self.nrows, self.ncols),
            (self.row_stride, self.col_stride),
            &rows,
            &cols,
        );
        Self {
            nrows: rows.len(),
            ncols: cols.len(),
            offset,
            ..self
        }
    }

    /// Transposed view (zero-copy).
    pub fn t(self) -> Self {
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
            ..self
        }
    }

    /// View with both row and column order reversed (zero-copy).
    ///
    /// Element `(i, j)` of the result is element `(m-1-i, n-1-j)` of `self`.
    pub fn rev(self) -> Self {
        if self.nrows == 0 || self.ncols == 0 {
            return self;
        }
        Self {
            offset: self.index(self.nrows - 1, self.ncols - 1),
            row_stride: -self.row_stride,
            col_stride: -self.col_stride,
            ..self
        }
    }
}

// ============================================================================
// MatMut
// ============================================================================

impl<'a, T> MatMut<'a, T> {
    /// Create a new mutable 2-D strided view.
    pub fn new(
        data: &'a mut [T],
        nrows: usize,
        ncols: usize,
        row_stride: isize,
        col_stride: isize,
        offset: usize,
    ) -> Result<Self> {
        validate_bounds(
            data.len(),
            &[nrows, ncols],
            &[row_stride, col_stride],
            offset,
        )?;
        Ok(Self {
            data,
            nrows,
            ncols,
            row_stride,
            col_stride,
            offset,
        })
    }

    /// Mutable view of a column-major buffer with leading dimension `ld`.
    pub fn col_major(data: &'a mut [T], nrows: usize, ncols: usize, ld: usize) -> Result<Self> {
        check_leading_dimension(ld, nrows)?;
        Self::new(data, nrows, ncols, 1, ld as isize, 0)
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        (self.offset as isize + i as isize * self.row_stride + j as isize * self.col_stride)
            as usize
    }

    /// Get element `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> &T {
        assert!(i < self.nrows && j < self.ncols, "index out of bounds");
        &self.data[self.index(i, j)]
    }

    /// Get a mutable reference to element `(i, j)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        assert!(i < self.nrows && j < self.ncols, "index out of bounds");
        let idx = self.index(i, j);
        &mut self.data[idx]
    }

    /// Set element `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        *self.get_mut(i, j) = value;
    }

    /// Reborrow as an immutable view.
    #[inline]
    pub fn rb(&self) -> MatRef<'_, T> {
        MatRef {
            data: &*self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            row_stride: self.row_stride,
            col_stride: self.col_stride,
            offset: self.offset,
        }
    }

    /// Reborrow as a shorter-lived mutable view.
    #[inline]
    pub fn rb_mut(&mut self) -> MatMut<'_, T> {
        MatMut {
            data: &mut *self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            row_stride: self.row_stride,
            col_stride: self.col_stride,
            offset: self.offset,
        }
    }

    /// Convert into an immutable view with the full lifetime.
    pub fn into_ref(self) -> MatRef<'a, T> {
        MatRef {
            data: self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            row_stride: self.row_stride,
            col_stride: self.col_stride,
            offset: self.offset,
        }
    }

    /// Column `j` as a mutable vector view.
    pub fn col_mut(&mut self, j: usize) -> VecMut<'_, T> {
        assert!(j < self.ncols, "column out of bounds");
        let offset = if self.nrows == 0 { 0 } else { self.index(0, j) };
        VecMut {
            data: &mut *self.data,
            len: self.nrows,
            stride: self.row_stride,
            offset,
        }
    }

    /// Row `i` as a mutable vector view.
    pub fn row_mut(&mut self, i: usize) -> VecMut<'_, T> {
        assert!(i < self.nrows, "row out of bounds");
        let offset = if self.ncols == 0 { 0 } else { self.index(i, 0) };
        VecMut {
            data: &mut *self.data,
            len: self.ncols,
            stride: self.col_stride,
            offset,
        }
    }

    /// Mutable sub-view over `rows x cols`.
    pub fn submatrix_mut(&mut self, rows: Range<usize>, cols: Range<usize>) -> MatMut<'_, T> {
        self.rb_mut().into_submatrix(rows, cols)
    }

    /// Consume the view, keeping only `rows x cols`.
    pub fn into_submatrix(self, rows: Range<usize>, cols: Range<usize>) -> Self {
        let offset = sub_offset(
            self.offset,
            (self.nrows, self.ncols),
            (self.row_stride, self.col_stride),
            &rows,
            &cols,
        );
        Self {
            nrows: rows.len(),
            ncols: cols.len(),
            offset,
            ..self
        }
    }

    /// View with both row and column order reversed (zero-copy).
    pub fn rev(self) -> Self {
        if self.nrows == 0 || self.ncols == 0 {
            return self;
        }
        Self {
            offset: self.index(self.nrows - 1, self.ncols - 1),
            row_stride: -self.row_stride,
            col_stride: -self.col_stride,
            ..self
        }
    }

    /// Split into columns `0..c` and `c..ncols`.
    ///
    /// Works for either sign of the column stride, so reversed views split the
    /// same way as plain ones. Columns must occupy disjoint memory, which holds
    /// for any view derived from a column-major buffer with `ld >= nrows`.
    ///
    /// # Panics
    /// Panics if `c > ncols` or the columns overlap in memory.
    pub fn split_at_col_mut(self, c: usize) -> (MatMut<'a, T>, MatMut<'a, T>) {
        assert!(c <= self.ncols, "split column out of bounds");
        let MatMut {
            data,
            nrows,
            ncols,
            row_stride,
            col_stride,
            offset,
        } = self;

        let empty = |ncols: usize| MatMut {
            data: &mut [],
            nrows,
            ncols,
            row_stride,
            col_stride,
            offset: 0,
        };

        if nrows == 0 {
            return (empty(c), empty(ncols - c));
        }
        let whole = |data: &'a mut [T], ncols: usize| MatMut {
            data,
            nrows,
            ncols,
            row_stride,
            col_stride,
            offset,
        };
        if c == 0 {
            return (empty(0), whole(data, ncols));
        }
        if c == ncols {
            return (whole(data, ncols), empty(0));
        }

        let col_extent = row_stride.unsigned_abs() * (nrows - 1);
        assert!(
            col_extent < col_stride.unsigned_abs(),
            "columns overlap in memory"
        );
        // lowest address touched by a column, relative to its first element
        let row_lo = if row_stride < 0 {
            row_stride * (nrows - 1) as isize
        } else {
            0
        };
        let start = offset as isize;
        let col_c = start + c as isize * col_stride;

        if col_stride > 0 {
            let split = (col_c + row_lo) as usize;
            let (lo, hi) = data.split_at_mut(split);
            let left = MatMut {
                data: lo,
                nrows,
                ncols: c,
                row_stride,
                col_stride,
                offset,
            };
            let right = MatMut {
                data: hi,
                nrows,
                ncols: ncols - c,
                row_stride,
                col_stride,
                offset: (col_c - split as isize) as usize,
            };
            (left, right)
        } else {
            let split = (start + (c - 1) as isize * col_stride + row_lo) as usize;
            let (lo, hi) = data.split_at_mut(split);
            let right = MatMut {
                data: lo,
                nrows,
                ncols: ncols - c,
                row_stride,
                col_stride,
                offset: col_c as usize,
            };
            let left = MatMut {
                data: hi,
                nrows,
                ncols: c,
                row_stride,
                col_stride,
                offset: offset - split,
            };
            (left, right)
        }
    }

    /// Interchange rows `r1` and `r2` over the columns in `cols`.
    pub fn swap_rows(&mut self, r1: usize, r2: usize, cols: Range<usize>) {
        assert!(r1 < self.nrows && r2 < self.nrows, "row out of bounds");
        assert!(cols.end <= self.ncols, "column out of bounds");
        if r1 == r2 {
            return;
        }
        for j in cols {
            let a = self.index(r1, j);
            let b = self.index(r2, j);
            self.data.swap(a, b);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn blas_offset(n: usize, inc: isize) -> usize {
    if inc < 0 && n > 0 {
        (n - 1) * inc.unsigned_abs()
    } else {
        0
    }
}

fn check_leading_dimension(ld: usize, nrows: usize) -> Result<()> {
    if ld < nrows.max(1) {
        return Err(BlasError::LeadingDimension { ld, rows: nrows });
    }
    Ok(())
}

fn sub_offset(
    offset: usize,
    (nrows, ncols): (usize, usize),
    (row_stride, col_stride): (isize, isize),
    rows: &Range<usize>,
    cols: &Range<usize>,
) -> usize {
    assert!(
        rows.start <= rows.end && rows.end <= nrows,
        "row range out of bounds"
    );
    assert!(
        cols.start <= cols.end && cols.end <= ncols,
        "column range out of bounds"
    );
    if rows.is_empty() || cols.is_empty() {
        return 0;
    }
    (offset as isize + rows.start as isize * row_stride + cols.start as isize * col_stride)
        as usize
}

fn validate_bounds(
    data_len: usize,
    size: &[usize],
    strides: &[isize],
    offset: usize,
) -> Result<()> {
    if size.contains(&0) {
        // Empty view, no bounds to check
        return Ok(());
    }

    // Calculate min and max reachable offsets
    let mut min_offset = offset as isize;
    let mut max_offset = offset as isize;

    for (&extent, &stride) in size.iter().zip(strides) {
        if stride == 0 && extent > 1 {
            return Err(BlasError::ZeroStride { extent });
        }
        let last_idx = (extent - 1) as isize;
        if stride >= 0 {
            max_offset += stride * last_idx;
        } else {
            min_offset += stride * last_idx;
        }
    }

    if min_offset < 0 {
        return Err(BlasError::NegativeOffset);
    }

    if max_offset as usize >= data_len {
        return Err(BlasError::OutOfBounds {
            required: max_offset as usize,
            len: data_len,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_from_blas_negative_stride() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let v = VecRef::from_blas(&data, 3, -2).unwrap();
        let got: Vec<f64> = v.iter().copied().collect();
        assert_eq!(got, vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_vec_bounds_checked() {
        let data = [0.0; 4];
        assert!(matches!(
            VecRef::new(&data, 3, 2, 0),
            Err(BlasError::OutOfBounds { required: 4, len: 4 })
        ));
        assert!(matches!(
            VecRef::new(&data, 2, -1, 0),
            Err(BlasError::NegativeOffset)
        ));
        assert!(matches!(
            VecRef::new(&data, 2, 0, 0),
            Err(BlasError::ZeroStride { extent: 2 })
        ));
        // zero stride is harmless for a single element
        assert!(VecRef::new(&data, 1, 0, 3).is_ok());
        // empty views never touch memory
        assert!(VecRef::new(&data, 0, 7, 100).is_ok());
    }

    #[test]
    fn test_vec_rev_and_slice() {
        let data = [1, 2, 3, 4, 5];
        let v = VecRef::contiguous(&data).slice(1..4).rev();
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
        assert!(v.as_slice().is_none());
        assert_eq!(v.rev().as_slice(), Some(&data[1..4]));
        assert!(v.slice(3..3).is_empty());
    }

    #[test]
    fn test_vec_mut_set() {
        let mut data = vec![0, 0, 0, 0];
        let mut v = VecMut::from_blas(&mut data, 2, -3).unwrap();
        v.set(0, 7);
        v.set(1, 9);
        assert_eq!(data, vec![9, 0, 0, 7]);
    }

    #[test]
    fn test_col_major_leading_dimension() {
        // 2x3 matrix stored with ld = 4
        let data: Vec<i32> = (0..12).collect();
        let m = MatRef::col_major(&data, 2, 3, 4).unwrap();
        assert_eq!(*m.get(1, 2), 9);
        assert_eq!(m.row(1).iter().copied().collect::<Vec<_>>(), vec![1, 5, 9]);
        assert_eq!(m.col(2).as_slice(), Some(&data[8..10]));
        assert!(matches!(
            MatRef::col_major(&data, 5, 2, 4),
            Err(BlasError::LeadingDimension { ld: 4, rows: 5 })
        ));
        assert!(matches!(
            MatRef::col_major(&data, 4, 4, 4),
            Err(BlasError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_mat_rev_and_transpose() {
        let data: Vec<i32> = (0..9).collect();
        let m = MatRef::col_major(&data, 3, 3, 3).unwrap();
        let r = m.rev();
        assert_eq!(*r.get(0, 0), 8);
        assert_eq!(*r.get(2, 1), 3);
        assert_eq!(*m.t().get(0, 2), 2);
        let sub = r.submatrix(1..3, 0..2);
        assert_eq!(*sub.get(0, 1), 4);
    }

    #[test]
    fn test_split_at_col_mut_positive_strides() {
        let mut data: Vec<i32> = (0..12).collect();
        let m = MatMut::col_major(&mut data, 3, 4, 3).unwrap();
        let (mut left, right) = m.split_at_col_mut(1);
        assert_eq!(left.ncols(), 1);
        assert_eq!(right.ncols(), 3);
        assert_eq!(*right.get(2, 2), 11);
        left.set(0, 0, right.get(0, 0) * 100);
        assert_eq!(data[0], 300);
    }

    #[test]
    fn test_split_at_col_mut_reversed_view() {
        // 3x4 with ld = 5 (padding rows) reversed: logical col 0 = physical col 3
        let mut data: Vec<i32> = (0..20).collect();
        let m = MatMut::col_major(&mut data, 3, 4, 5).unwrap().rev();
        let (left, mut right) = m.split_at_col_mut(2);
        // logical (0,0) = physical (2,3) = 17; logical (2,1) = physical (0,2) = 10
        assert_eq!(*left.get(0, 0), 17);
        assert_eq!(*left.get(2, 1), 10);
        // right logical (0,0) = physical (2,1) = 7; (2,1) = physical (0,0) = 0
        assert_eq!(*right.get(0, 0), 7);
        assert_eq!(*right.get(2, 1), 0);
        right.set(1, 1, -1);
        assert_eq!(data[1], -1);
    }

    #[test]
    fn test_split_at_col_mut_edges() {
        let mut data = vec![1.0f64; 6];
        let m = MatMut::col_major(&mut data, 2, 3, 2).unwrap();
        let (left, right) = m.split_at_col_mut(0);
        assert_eq!(left.ncols(), 0);
        assert_eq!(right.ncols(), 3);
        let (left, right) = right.split_at_col_mut(3);
        assert_eq!(left.ncols(), 3);
        assert_eq!(right.ncols(), 0);
    }

    #[test]
    fn test_swap_rows() {
        let mut data: Vec<i32> = (0..9).collect();
        let mut m = MatMut::col_major(&mut data, 3, 3, 3).unwrap();
        m.swap_rows(0, 2, 1..3);
        assert_eq!(data, vec![0, 1, 2, 5, 4, 3, 8, 7, 6]);
    }
}

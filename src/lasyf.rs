//! Blocked Bunch-Kaufman factorization kernel.
//!
//! [`lasyf`] factors up to `nb` columns of a symmetric matrix and updates the
//! remaining submatrix, the building block of a blocked `L*D*L^T` / `U*D*U^T`
//! factorization.
//!
//! For each column `k` the kernel
//!
//! 1. stages the column in W and subtracts the contribution of the columns
//!    already factored in this call,
//! 2. chooses a 1x1 pivot (with or without an interchange) or a 2x2 pivot with
//!    the Bunch-Kaufman test, staging the candidate column `imax` when the
//!    diagonal alone is not large enough,
//! 3. commits the staged column(s) to A, scaled by the inverse pivot block.
//!
//! The trailing submatrix then receives one update `A22 -= L21 * W^T`, computed
//! in panels of `nb` columns with `gemv` on the diagonal blocks and `gemm`
//! below them. Finally the interchanges recorded in this call are applied to
//! the factored columns on the far side of each pivot, so that those columns
//! are in standard LAPACK form.
//!
//! The code is written for the lower triangle; the upper triangle runs the same
//! code on index-reversed views of A and W (see [`crate::direction`]).

use crate::direction::Direction;
use crate::pivot::Pivot;
use crate::{LapackError, Result};
use mpblas::{copy, gemm, gemv, scal, MatMut, Real, Transpose, Uplo};

/// Outcome of one [`lasyf`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LasyfResult {
    /// Number of columns factored.
    pub kb: usize,
    /// Lowest 1-based column with an exactly-zero pivot, or 0.
    pub info: usize,
}

impl LasyfResult {
    /// Lowest column with an exactly-zero pivot, 1-based, if any.
    pub fn singular_column(&self) -> Option<usize> {
        (self.info != 0).then_some(self.info)
    }
}

/// Length of a column-major `n x nb` workspace with leading dimension `ldw`.
pub fn workspace_len(n: usize, nb: usize, ldw: usize) -> usize {
    if n == 0 || nb == 0 {
        return 0;
    }
    (nb - 1) * ldw + n
}

/// Factor up to `nb` columns of the symmetric `n x n` matrix `a`.
///
/// With [`Uplo::Lower`] the leading columns are factored as `A = L*D*L^T`;
/// with [`Uplo::Upper`] the trailing columns as `A = U*D*U^T`. Only the
/// selected triangle of `a` is referenced. On return:
///
/// - the `kb` factored columns of `a` hold the columns of `L` (or `U`) below
///   (above) the diagonal and the blocks of `D` on it
/// - the remaining submatrix has been updated and can be passed to the next call
/// - the `kb` corresponding entries of `ipiv` hold the interchanges, the rest
///   are untouched
///
/// `w` is scratch of at least [`workspace_len`]`(n, nb, ldw)` elements.
///
/// When `nb < n`, the call stops once `nb - 1` columns are done, so `kb` is
/// `nb - 1`, or `nb` when the last pivot is a 2x2 block.
///
/// An exactly-zero pivot column is committed unscaled and the call still
/// completes; `info` reports the lowest-numbered such column, which in lower
/// mode is also the first one met. Callers must check `info` before using the
/// factor to solve a system.
///
/// # Errors
/// Returns an error if `lda` or `ldw` is smaller than `max(1, n)`, if `a` or
/// `w` is too short, or if `ipiv` holds fewer than `n` entries.
#[allow(clippy::too_many_arguments)]
pub fn lasyf<T: Real>(
    uplo: Uplo,
    n: usize,
    nb: usize,
    a: &mut [T],
    lda: usize,
    ipiv: &mut [isize],
    w: &mut [T],
    ldw: usize,
) -> Result<LasyfResult> {
    if n == 0 || nb == 0 {
        return Ok(LasyfResult { kb: 0, info: 0 });
    }
    if ipiv.len() < n {
        return Err(LapackError::PivotLength {
            needed: n,
            len: ipiv.len(),
        });
    }

    let dir = Direction::new(uplo, n);
    let a = dir.orient(MatMut::col_major(a, n, n, lda)?);
    let w = dir.orient(MatMut::col_major(w, n, nb, ldw)?);

    log::trace!("lasyf: uplo={uplo:?} n={n} nb={nb}");
    let result = Kernel {
        dir,
        nb,
        a,
        w,
        ipiv,
    }
    .run()?;
    log::trace!("lasyf: kb={} info={}", result.kb, result.info);
    Ok(result)
}

/// State of one call, in traversal order.
struct Kernel<'a, T> {
    dir: Direction,
    nb: usize,
    a: MatMut<'a, T>,
    w: MatMut<'a, T>,
    ipiv: &'a mut [isize],
}

impl<'a, T: Real> Kernel<'a, T> {
    fn run(mut self) -> Result<LasyfResult> {
        let n = self.a.nrows();
        let nb = self.nb;
        let dir = self.dir;
        let alpha = (T::one() + T::from_f64(17.0).sqrt()) / T::from_f64(8.0);

        let mut info = 0;
        let mut pivots: Vec<Pivot> = Vec::with_capacity(nb.min(n));
        let mut k = 0;

        while k < n && !(k + 1 >= nb && nb < n) {
            self.stage(k, k, k)?;

            let absakk = self.w.get(k, k).abs();
            let (imax, colmax) = if k + 1 < n {
                let imax = k + 1 + dir.argmax(self.w.rb().col(k).slice(k + 1..n));
                (imax, self.w.get(imax, k).abs())
            } else {
                (k, T::zero())
            };

            let pivot = if absakk.clone().max_of(colmax.clone()).is_zero() {
                let col = dir.phys(k) + 1;
                log::warn!("lasyf: exactly zero pivot in column {col}");
                if info == 0 || col < info {
                    info = col;
                }
                self.commit_single(k, false)?;
                Pivot::Single(k)
            } else {
                let (kp, kstep) = if absakk >= alpha.clone() * colmax.clone() {
                    (k, 1)
                } else {
                    self.choose_with_imax(k, imax, &absakk, &colmax, &alpha)?
                };

                let kk = k + kstep - 1;
                if kp != kk {
                    self.interchange(k, kk, kp);
                }
                if kstep == 1 {
                    self.commit_single(k, true)?;
                    Pivot::Single(kp)
                } else {
                    self.commit_double(k);
                    Pivot::Double(kp)
                }
            };

            log::debug!(
                "lasyf: column {} pivot {:?}",
                dir.phys(k) + 1,
                pivot.map(|p| dir.phys(p) + 1)
            );
            let entry = pivot.map(|p| dir.phys(p)).encode();
            for col in k..k + pivot.width() {
                self.ipiv[dir.phys(col)] = entry;
                pivots.push(pivot);
            }
            k += pivot.width();
        }

        let kb = k;
        if kb > 0 {
            self.update_trailing(kb)?;
            self.restore_interchanges(&pivots);
        }
        Ok(LasyfResult { kb, info })
    }

    /// Copy the unfactored column `src` of A (rows `k..n`, reading across row
    /// `src` above its diagonal) into column `dst` of W, then subtract the
    /// contribution of the `k` columns factored so far.
    fn stage(&mut self, k: usize, src: usize, dst: usize) -> Result<()> {
        let n = self.a.nrows();
        for i in k..src {
            let v = self.a.get(src, i).clone();
            self.w.set(i, dst, v);
        }
        copy(
            &self.a.rb().col(src).slice(src..n),
            &mut self.w.col_mut(dst).slice_mut(src..n),
        )?;

        // W[k.., dst] -= A[k.., ..k] * W[src, ..k]^T
        let (done, mut staged) = self.w.rb_mut().split_at_col_mut(k);
        let done = done.into_ref();
        gemv(
            Transpose::NoTrans,
            -T::one(),
            &self.a.rb().submatrix(k..n, 0..k),
            &done.row(src),
            T::one(),
            &mut staged.col_mut(dst - k).slice_mut(k..n),
        )?;
        Ok(())
    }

    /// Stage column `imax` in W column `k + 1` and run the row test.
    ///
    /// Returns the interchange partner and block width.
    fn choose_with_imax(
        &mut self,
        k: usize,
        imax: usize,
        absakk: &T,
        colmax: &T,
        alpha: &T,
    ) -> Result<(usize, usize)> {
        let n = self.a.nrows();
        self.stage(k, imax, k + 1)?;

        let cand = self.w.rb().col(k + 1);
        let jmax = k + self.dir.argmax(cand.slice(k..imax));
        let mut rowmax = self.w.get(jmax, k + 1).abs();
        if imax + 1 < n {
            let jmax = imax + 1 + self.dir.argmax(cand.slice(imax + 1..n));
            rowmax = rowmax.max_of(self.w.get(jmax, k + 1).abs());
        }

        if absakk.clone() >= alpha.clone() * colmax.clone() * (colmax.clone() / rowmax.clone()) {
            Ok((k, 1))
        } else if self.w.get(imax, k + 1).abs() >= alpha.clone() * rowmax {
            // the candidate column becomes column k
            let (mut staged, next) = self.w.rb_mut().split_at_col_mut(k + 1);
            copy(
                &next.into_ref().col(0).slice(k..n),
                &mut staged.col_mut(k).slice_mut(k..n),
            )?;
            Ok((imax, 1))
        } else {
            Ok((imax, 2))
        }
    }

    /// Move the unfactored column `kk` of A to column `kp` and interchange rows
    /// `kk` and `kp` in the columns factored so far, in A and W.
    fn interchange(&mut self, k: usize, kk: usize, kp: usize) {
        let n = self.a.nrows();
        let v = self.a.get(kk, k).clone();
        self.a.set(kp, k, v);
        for j in k + 1..kp {
            let v = self.a.get(j, kk).clone();
            self.a.set(kp, j, v);
        }
        for i in kp..n {
            let v = self.a.get(i, kk).clone();
            self.a.set(i, kp, v);
        }
        self.a.swap_rows(kk, kp, 0..kk + 1);
        self.w.swap_rows(kk, kp, 0..kk + 1);
    }

    /// Store a 1x1 pivot column of W into A, scaling the part below the
    /// diagonal by the inverse pivot when `scale` is set.
    fn commit_single(&mut self, k: usize, scale: bool) -> Result<()> {
        let n = self.a.nrows();
        copy(
            &self.w.rb().col(k).slice(k..n),
            &mut self.a.col_mut(k).slice_mut(k..n),
        )?;
        if scale && k + 1 < n {
            let r1 = T::one() / self.a.get(k, k).clone();
            scal(r1, &mut self.a.col_mut(k).slice_mut(k + 1..n));
        }
        Ok(())
    }

    /// Store a 2x2 pivot block from W columns `k, k + 1` into A.
    ///
    /// Columns of `L` are recovered as `W * D^{-1}`, with `D` normalized by its
    /// off-diagonal entry instead of being inverted directly.
    fn commit_double(&mut self, k: usize) {
        let n = self.a.nrows();
        let w = &self.w;
        if k + 2 < n {
            let d21 = w.get(k + 1, k).clone();
            let d11 = w.get(k + 1, k + 1).clone() / d21.clone();
            let d22 = w.get(k, k).clone() / d21.clone();
            let t = T::one() / (d11.clone() * d22.clone() - T::one());
            let d21 = t / d21;
            for j in k + 2..n {
                let wk = w.get(j, k).clone();
                let wk1 = w.get(j, k + 1).clone();
                self.a.set(
                    j,
                    k,
                    d21.clone() * (d11.clone() * wk.clone() - wk1.clone()),
                );
                self.a
                    .set(j, k + 1, d21.clone() * (d22.clone() * wk1 - wk));
            }
        }
        self.a.set(k, k, w.get(k, k).clone());
        self.a.set(k + 1, k, w.get(k + 1, k).clone());
        self.a.set(k + 1, k + 1, w.get(k + 1, k + 1).clone());
    }

    /// `A22 -= A21 * W21^T` on the lower triangle of the unfactored submatrix.
    fn update_trailing(&mut self, kb: usize) -> Result<()> {
        let n = self.a.nrows();
        if kb == n {
            return Ok(());
        }
        let (done, mut rest) = self.a.rb_mut().split_at_col_mut(kb);
        let done = done.into_ref();
        let w = self.w.rb();

        let mut j = kb;
        let mut jb = self.dir.first_panel(n - kb, self.nb);
        while j < n {
            let end = j + jb;
            // diagonal block, one column at a time
            for jj in j..end {
                gemv(
                    Transpose::NoTrans,
                    -T::one(),
                    &done.submatrix(jj..end, 0..kb),
                    &w.row(jj).slice(0..kb),
                    T::one(),
                    &mut rest.col_mut(jj - kb).slice_mut(jj..end),
                )?;
            }
            // rectangle below it
            if end < n {
                gemm(
                    Transpose::NoTrans,
                    Transpose::Trans,
                    -T::one(),
                    &done.submatrix(end..n, 0..kb),
                    &w.submatrix(j..end, 0..kb),
                    T::one(),
                    &mut rest.submatrix_mut(end..n, j - kb..end - kb),
                )?;
            }
            j = end;
            jb = self.nb.min(n - j);
        }
        log::trace!("lasyf: updated trailing {}x{} block", n - kb, n - kb);
        Ok(())
    }

    /// Apply each interchange to the factored columns before its pivot block.
    fn restore_interchanges(&mut self, pivots: &[Pivot]) {
        let mut j = pivots.len();
        while j > 0 {
            let jj = j - 1;
            let pivot = pivots[jj];
            j -= pivot.width();
            if pivot.partner() != jj && j > 0 {
                self.a.swap_rows(pivot.partner(), jj, 0..j);
            }
        }
    }
}

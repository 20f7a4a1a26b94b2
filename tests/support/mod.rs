//! Helpers shared by the factorization tests: matrix builders, a dense
//! reconstruction of `L*D*L^T` / `U*D*U^T` from LAPACK-format output, and a
//! blocked driver that calls `lasyf` until the whole matrix is factored.

#![allow(dead_code)]

use mplapack::{lasyf, LasyfResult, Pivot, Real, Uplo};
use rand::{rngs::StdRng, Rng};

/// Dense column-major `n x n` symmetric matrix with `a(i, j) = f(max, min)`.
pub fn symmetric_from_fn(n: usize, f: impl Fn(usize, usize) -> f64) -> Vec<f64> {
    let mut a = vec![0.0; n * n];
    for j in 0..n {
        for i in 0..n {
            a[i + j * n] = f(i.max(j), i.min(j));
        }
    }
    a
}

/// Random symmetric matrix with entries uniform in `[-1, 1)`.
pub fn random_symmetric(rng: &mut StdRng, n: usize) -> Vec<f64> {
    let mut a = vec![0.0; n * n];
    for j in 0..n {
        for i in j..n {
            let v: f64 = rng.gen_range(-1.0..1.0);
            a[i + j * n] = v;
            a[j + i * n] = v;
        }
    }
    a
}

/// Copy an `n x n` matrix into a buffer with leading dimension `lda`, filling
/// padding rows with `pad`.
pub fn with_leading_dimension<T: Clone>(a: &[T], n: usize, lda: usize, pad: T) -> Vec<T> {
    let mut out = vec![pad; lda * n];
    for j in 0..n {
        out[j * lda..j * lda + n].clone_from_slice(&a[j * n..j * n + n]);
    }
    out
}

/// Overwrite the strict triangle not selected by `uplo` with `fill`.
pub fn mask_other_triangle<T: Clone>(a: &mut [T], n: usize, lda: usize, uplo: Uplo, fill: T) {
    for j in 0..n {
        for i in 0..n {
            let other = match uplo {
                Uplo::Lower => i < j,
                Uplo::Upper => i > j,
            };
            if other {
                a[i + j * lda] = fill.clone();
            }
        }
    }
}

/// One diagonal block of `D`: columns `start..start + size`, interchanged
/// with `partner`.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub start: usize,
    pub size: usize,
    pub partner: usize,
}

/// Diagonal blocks recorded in `ipiv`, sorted by `start`.
pub fn pivot_blocks(uplo: Uplo, n: usize, ipiv: &[isize]) -> Vec<Block> {
    let decode = |k: usize| Pivot::decode(ipiv[k]).expect("ipiv entry of a factored column");
    let mut blocks = Vec::new();
    match uplo {
        Uplo::Lower => {
            let mut k = 0;
            while k < n {
                let p = decode(k);
                blocks.push(Block {
                    start: k,
                    size: p.width(),
                    partner: p.partner(),
                });
                k += p.width();
            }
        }
        Uplo::Upper => {
            let mut k = n;
            while k > 0 {
                let p = decode(k - 1);
                blocks.push(Block {
                    start: k - p.width(),
                    size: p.width(),
                    partner: p.partner(),
                });
                k -= p.width();
            }
            blocks.reverse();
        }
    }
    blocks
}

fn stored<T: Clone>(a: &[T], lda: usize, uplo: Uplo, i: usize, j: usize) -> T {
    let (r, c) = match uplo {
        Uplo::Lower => (i.max(j), i.min(j)),
        Uplo::Upper => (i.min(j), i.max(j)),
    };
    a[r + c * lda].clone()
}

/// `a * b^T` if `transpose_b`, else `a * b`, all `n x n` with `ld = n`.
fn matmul<T: Real>(n: usize, a: &[T], b: &[T], transpose_b: bool) -> Vec<T> {
    let mut c = vec![T::zero(); n * n];
    for j in 0..n {
        for l in 0..n {
            let blj = if transpose_b {
                b[j + l * n].clone()
            } else {
                b[l + j * n].clone()
            };
            if blj.is_zero() {
                continue;
            }
            for i in 0..n {
                let v = c[i + j * n].clone() + a[i + l * n].clone() * blj.clone();
                c[i + j * n] = v;
            }
        }
    }
    c
}

fn swap_symmetric<T>(m: &mut [T], n: usize, p: usize, q: usize) {
    if p == q {
        return;
    }
    for j in 0..n {
        m.swap(p + j * n, q + j * n);
    }
    for i in 0..n {
        m.swap(i + p * n, i + q * n);
    }
}

/// Rebuild the full symmetric matrix from a complete factorization.
///
/// `a` holds the factor in the LAPACK `?sytrf` layout for `uplo`. Returns a
/// dense `n x n` column-major matrix.
pub fn reconstruct<T: Real>(uplo: Uplo, n: usize, a: &[T], lda: usize, ipiv: &[isize]) -> Vec<T> {
    let blocks = pivot_blocks(uplo, n, ipiv);

    let mut m = vec![T::zero(); n * n];
    for b in &blocks {
        for j in b.start..b.start + b.size {
            for i in b.start..b.start + b.size {
                m[i + j * n] = stored(a, lda, uplo, i, j);
            }
        }
    }

    // L = P(1) L(1) P(2) L(2) ... for lower, U = P(n) U(n) ... for upper;
    // apply the innermost factor first
    let order: Vec<&Block> = match uplo {
        Uplo::Lower => blocks.iter().rev().collect(),
        Uplo::Upper => blocks.iter().collect(),
    };
    for b in order {
        let mut e = vec![T::zero(); n * n];
        for i in 0..n {
            e[i + i * n] = T::one();
        }
        let rows = match uplo {
            Uplo::Lower => b.start + b.size..n,
            Uplo::Upper => 0..b.start,
        };
        for j in b.start..b.start + b.size {
            for i in rows.clone() {
                e[i + j * n] = a[i + j * lda].clone();
            }
        }
        let em = matmul(n, &e, &m, false);
        m = matmul(n, &em, &e, true);

        let swapped = match uplo {
            Uplo::Lower => b.start + b.size - 1,
            Uplo::Upper => b.start,
        };
        swap_symmetric(&mut m, n, swapped, b.partner);
    }
    m
}

/// Factor the whole matrix by calling `lasyf` over shrinking submatrices.
///
/// `nb` must be at least 2 when smaller than `n`, otherwise no column is
/// ever factored.
pub fn factor<T: Real>(
    uplo: Uplo,
    n: usize,
    nb: usize,
    a: &mut [T],
    lda: usize,
    ipiv: &mut [isize],
) -> LasyfResult {
    let ldw = n.max(1);
    let mut w = vec![T::zero(); ldw * nb];
    let mut info = 0;
    match uplo {
        Uplo::Lower => {
            let mut k = 0;
            while k < n {
                let res = lasyf(
                    uplo,
                    n - k,
                    nb,
                    &mut a[k + k * lda..],
                    lda,
                    &mut ipiv[k..],
                    &mut w,
                    ldw,
                )
                .unwrap();
                assert!(res.kb > 0, "no progress at column {k}");
                let shift = k as isize;
                for p in &mut ipiv[k..k + res.kb] {
                    *p += if *p > 0 { shift } else { -shift };
                }
                if info == 0 && res.info > 0 {
                    info = res.info + k;
                }
                k += res.kb;
            }
        }
        Uplo::Upper => {
            let mut k = n;
            while k > 0 {
                let res = lasyf(uplo, k, nb, a, lda, &mut ipiv[..k], &mut w, ldw).unwrap();
                assert!(res.kb > 0, "no progress at column {k}");
                // later calls only see lower-numbered columns
                if res.info > 0 {
                    info = res.info;
                }
                k -= res.kb;
            }
        }
    }
    LasyfResult { kb: n, info }
}

/// Largest absolute entrywise difference between two dense `n x n` matrices.
pub fn max_abs_diff<T: Real>(a: &[T], b: &[T]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x.clone() - y.clone()).abs().to_f64())
        .fold(0.0, f64::max)
}

use crate::error::{MatResult, MatrixError, ShapeErrorKind};
use crate::matrix::Matrix;
use crate::Float;

/// Returns the row in `[col, n)` holding the largest absolute value in
/// column `col` of an `n` by `n` row-major buffer. Ties keep the
/// lowest row index.
fn pivot_row(data: &[Float], n: usize, col: usize) -> usize {
    let mut p = col;
    let mut best = data[col * n + col].abs();
    for r in (col + 1)..n {
        let v = data[r * n + col].abs();
        if v > best {
            best = v;
            p = r;
        }
    }
    // return
    p
}

/// Swaps rows `r1` and `r2` of a row-major buffer with `ncols` columns
fn swap_rows(data: &mut [Float], ncols: usize, r1: usize, r2: usize) {
    for j in 0..ncols {
        data.swap(r1 * ncols + j, r2 * ncols + j);
    }
}

impl Matrix {
    /// Computes the determinant using
    /// [Gaussian Elimination](https://en.wikipedia.org/wiki/Gaussian_elimination)
    /// with partial pivoting, accumulating the product of the pivots with a
    /// sign flip per row swap. The elimination happens on a working copy;
    /// `self` is not modified.
    ///
    /// A singular matrix has a well-defined determinant, so finding an
    /// exactly-zero pivot column returns `Ok(0.0)` rather than an error
    /// (compare with [`Matrix::inverse`], which reports it).
    ///
    /// Returns a [`ShapeErrorKind::NotSquare`] error for non-square matrices.
    pub fn determinant(&self) -> MatResult<Float> {
        if self.nrows != self.ncols {
            return Err(ShapeErrorKind::NotSquare(self.nrows, self.ncols).into());
        }
        let n = self.nrows;
        let mut a = self.data.clone();
        let mut det = 1.0;

        for i in 0..n {
            let p = pivot_row(&a, n, i);
            if a[p * n + i].abs() == 0.0 {
                // The whole pivot column is Zero
                return Ok(0.0);
            }
            if p != i {
                swap_rows(&mut a, n, p, i);
                det = -det;
            }

            let pivot = a[i * n + i];
            det *= pivot;

            // Eliminate below the pivot
            for r2 in (i + 1)..n {
                let f = a[r2 * n + i] / pivot;
                if f != 0.0 {
                    for j in i..n {
                        a[r2 * n + j] -= f * a[i * n + j];
                    }
                }
            }
        }

        // return
        Ok(det)
    }

    /// Solves $`A \times x = b`$ for a squared `self` and an `n` by `m`
    /// right-hand side `b`, using
    /// [Gauss-Jordan elimination](https://en.wikipedia.org/wiki/Gaussian_elimination#Gauss%E2%80%93Jordan_elimination)
    /// with partial pivoting. Both operands are cloned; the working copies
    /// never escape this call.
    ///
    /// Returns a [`ShapeErrorKind::NotSquare`] error when `self` is not
    /// squared, a [`ShapeErrorKind::SizeMismatch`] error when `b` does not
    /// have as many rows as `self`, and [`MatrixError::Singular`] when a
    /// pivot column is exactly Zero.
    pub fn solve(&self, b: &Matrix) -> MatResult<Matrix> {
        if self.nrows != self.ncols {
            return Err(ShapeErrorKind::NotSquare(self.nrows, self.ncols).into());
        }
        if b.nrows != self.nrows {
            return Err(
                ShapeErrorKind::SizeMismatch(self.nrows, self.ncols, b.nrows, b.ncols).into(),
            );
        }
        let n = self.nrows;
        let m = b.ncols;
        let mut a = self.data.clone();
        let mut x = b.clone();

        for i in 0..n {
            let p = pivot_row(&a, n, i);
            if a[p * n + i].abs() == 0.0 {
                return Err(MatrixError::Singular);
            }
            if p != i {
                swap_rows(&mut a, n, p, i);
                swap_rows(&mut x.data, m, p, i);
            }

            // Make the pivot equals to 1.
            let pivot = a[i * n + i];
            for j in 0..n {
                a[i * n + j] /= pivot;
            }
            for j in 0..m {
                x.data[i * m + j] /= pivot;
            }

            // Eliminate every other row
            for r2 in 0..n {
                if r2 == i {
                    continue;
                }
                let f = a[r2 * n + i];
                // if it is Zero already, just skip
                if f != 0.0 {
                    for j in 0..n {
                        a[r2 * n + j] -= f * a[i * n + j];
                    }
                    for j in 0..m {
                        x.data[r2 * m + j] -= f * x.data[i * m + j];
                    }
                }
            }
        }

        // return
        Ok(x)
    }

    /// Computes the inverse by row-reducing $`[A | I]`$ into
    /// $`[I | A^{-1}]`$ (i.e., [`Matrix::solve`] with an identity
    /// right-hand side).
    ///
    /// Inversion is undefined for singular matrices, so an exactly-zero
    /// pivot column is reported as [`MatrixError::Singular`] rather than
    /// producing a result (compare with [`Matrix::determinant`]).
    ///
    /// Returns a [`ShapeErrorKind::NotSquare`] error for non-square matrices.
    pub fn inverse(&self) -> MatResult<Matrix> {
        if self.nrows != self.ncols {
            return Err(ShapeErrorKind::NotSquare(self.nrows, self.ncols).into());
        }
        self.solve(&Matrix::identity(self.nrows)?)
    }

    /// Multiplies `self` by the inverse of `other`; i.e., `A / B` is
    /// defined as $`A \times B^{-1}`$.
    ///
    /// Inherits every failure mode of [`Matrix::inverse`], plus the
    /// [`ShapeErrorKind::InnerDim`] check of [`Matrix::prod`].
    pub fn div(&self, other: &Matrix) -> MatResult<Matrix> {
        self.prod(&other.inverse()?)
    }
}

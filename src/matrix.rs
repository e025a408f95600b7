use crate::error::{MatResult, ShapeErrorKind};
use crate::Float;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The main Structure in this library
///
/// A dense, rectangular matrix of [`Float`] values. The shape is fixed at
/// construction: no public operation mutates an operand, and the binary
/// operations allocate a fresh result. There is no way of building a
/// matrix with zero rows or zero columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    pub(crate) ncols: usize,
    pub(crate) nrows: usize,

    // Contains the data ordered by row,
    // Going left to right, and up and down.
    pub(crate) data: Vec<Float>,
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {} matrix", self.nrows, self.ncols)?;
        for i in 0..self.nrows {
            write!(f, "\n\t")?;
            for j in 0..self.ncols {
                write!(f, "{}, ", self.data[self.index(i, j)])?;
            }
        }
        Ok(())
    }
}

impl Matrix {
    /// Creates a `Matrix` out of its rows. Each element can be any numeric
    /// type that coerces losslessly into [`Float`] (e.g., `i32` or `f32`),
    /// and a defensive copy of the input is stored.
    ///
    /// Returns a [`ShapeErrorKind::Empty`] error when there are no rows or the
    /// first row has no elements, and a [`ShapeErrorKind::RaggedRows`] error
    /// when any row's length differs from the first one's.
    pub fn from_rows<N, R>(rows: &[R]) -> MatResult<Self>
    where
        N: Into<Float> + Copy,
        R: AsRef<[N]>,
    {
        if rows.is_empty() || rows[0].as_ref().is_empty() {
            return Err(ShapeErrorKind::Empty.into());
        }
        let ncols = rows[0].as_ref().len();

        let mut data: Vec<Float> = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(ShapeErrorKind::RaggedRows {
                    expected: ncols,
                    found: row.len(),
                }
                .into());
            }
            data.extend(row.iter().map(|x| (*x).into()));
        }

        // return
        Ok(Self {
            nrows: rows.len(),
            ncols,
            data,
        })
    }

    /// Creates a `Matrix` from a vector containing the elements of the
    /// matrix, ordered by row.
    ///
    /// Returns a [`ShapeErrorKind::Empty`] error when either dimension is
    /// Zero, and a [`ShapeErrorKind::DataLength`] error when `data` does not
    /// hold exactly `nrows * ncols` elements.
    pub fn from_data(nrows: usize, ncols: usize, data: Vec<Float>) -> MatResult<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(ShapeErrorKind::Empty.into());
        }
        if nrows * ncols != data.len() {
            return Err(ShapeErrorKind::DataLength {
                nrows,
                ncols,
                len: data.len(),
            }
            .into());
        }
        // return
        Ok(Self { nrows, ncols, data })
    }

    /// Creates a `Matrix` of `nrows` and `ncols` full of values `v`
    pub fn new(v: Float, nrows: usize, ncols: usize) -> MatResult<Self> {
        Self::from_data(nrows, ncols, vec![v; nrows * ncols])
    }

    /// Creates a `Matrix` of `nrows` and `ncols` full of Zeroes
    pub fn zeros(nrows: usize, ncols: usize) -> MatResult<Self> {
        Self::new(0.0, nrows, ncols)
    }

    /// Creates an Identity matrix of size NxN
    pub fn identity(n: usize) -> MatResult<Self> {
        let mut ret = Self::zeros(n, n)?;
        for i in 0..n {
            ret.data[i * (n + 1)] = 1.0;
        }

        // return
        Ok(ret)
    }

    /// Creates a squared matrix with the elements of `data`
    /// in the diagonal
    pub fn diag(data: Vec<Float>) -> MatResult<Self> {
        let n = data.len();
        let mut ret = Self::zeros(n, n)?;
        for (i, v) in data.into_iter().enumerate() {
            ret.data[i * (n + 1)] = v;
        }
        Ok(ret)
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Returns the number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Gets the index of an element within the `data` array of the Matrix
    pub(crate) fn index(&self, nrow: usize, ncol: usize) -> usize {
        self.ncols * nrow + ncol
    }

    /// Gets an element from the matrix
    pub fn get(&self, nrow: usize, ncol: usize) -> MatResult<Float> {
        if nrow < self.nrows && ncol < self.ncols {
            let i = self.index(nrow, ncol);
            Ok(self.data[i])
        } else {
            Err(ShapeErrorKind::OutOfBounds.into())
        }
    }

    /// Sets an element into the matrix
    pub fn set(&mut self, nrow: usize, ncol: usize, v: Float) -> MatResult<()> {
        if nrow < self.nrows && ncol < self.ncols {
            let i = self.index(nrow, ncol);
            self.data[i] = v;
            Ok(())
        } else {
            Err(ShapeErrorKind::OutOfBounds.into())
        }
    }

    /// Checks if two matrices are exactly the same (as in
    /// `element == other_element`... beware Floats).
    pub fn compare(&self, other: &Matrix) -> bool {
        if self.ncols != other.ncols {
            return false;
        }
        if self.nrows != other.nrows {
            return false;
        }
        for i in 0..self.data.len() {
            if self.data[i] != other.data[i] {
                return false;
            }
        }
        // return
        true
    }

    fn check_same_size(&self, other: &Matrix) -> MatResult<()> {
        if self.ncols != other.ncols || self.nrows != other.nrows {
            return Err(
                ShapeErrorKind::SizeMismatch(self.nrows, self.ncols, other.nrows, other.ncols)
                    .into(),
            );
        }
        Ok(())
    }

    /* ARITHMETIC OPERATIONS */

    /// Adds `self` with `other`, returning a new `Matrix`.
    ///
    /// Returns a [`ShapeErrorKind::SizeMismatch`] error when the operands
    /// are of different sizes.
    pub fn add(&self, other: &Matrix) -> MatResult<Matrix> {
        self.check_same_size(other)?;

        let data = {
            #[cfg(not(feature = "parallel"))]
            {
                self.data
                    .iter()
                    .zip(&other.data)
                    .map(|(x, y)| *x + *y)
                    .collect()
            }

            #[cfg(feature = "parallel")]
            {
                self.data
                    .par_iter()
                    .zip(&other.data)
                    .map(|(x, y)| *x + *y)
                    .collect()
            }
        };

        // return
        Ok(Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data,
        })
    }

    /// Adds `self` with `other`, puting the result in `into`
    pub fn add_into(&self, other: &Matrix, into: &mut Matrix) -> MatResult<()> {
        self.check_same_size(other)?;
        self.check_same_size(into)?;

        #[cfg(not(feature = "parallel"))]
        into.data
            .iter_mut()
            .zip(self.data.iter().zip(&other.data))
            .for_each(|(i, (x, y))| *i = *x + *y);

        #[cfg(feature = "parallel")]
        into.data
            .par_iter_mut()
            .zip(self.data.par_iter().zip(&other.data))
            .for_each(|(i, (x, y))| *i = *x + *y);

        Ok(())
    }

    /// Substracts `other` from `self`, returning a new `Matrix`.
    ///
    /// Returns a [`ShapeErrorKind::SizeMismatch`] error when the operands
    /// are of different sizes.
    pub fn sub(&self, other: &Matrix) -> MatResult<Matrix> {
        self.check_same_size(other)?;

        let data = {
            #[cfg(not(feature = "parallel"))]
            {
                self.data
                    .iter()
                    .zip(&other.data)
                    .map(|(x, y)| *x - *y)
                    .collect()
            }

            #[cfg(feature = "parallel")]
            {
                self.data
                    .par_iter()
                    .zip(&other.data)
                    .map(|(x, y)| *x - *y)
                    .collect()
            }
        };

        // return
        Ok(Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data,
        })
    }

    /// Substracts `other` from `self`, puting the result in `into`
    pub fn sub_into(&self, other: &Matrix, into: &mut Matrix) -> MatResult<()> {
        self.check_same_size(other)?;
        self.check_same_size(into)?;

        #[cfg(not(feature = "parallel"))]
        into.data
            .iter_mut()
            .zip(self.data.iter().zip(&other.data))
            .for_each(|(i, (x, y))| *i = *x - *y);

        #[cfg(feature = "parallel")]
        into.data
            .par_iter_mut()
            .zip(self.data.par_iter().zip(&other.data))
            .for_each(|(i, (x, y))| *i = *x - *y);

        Ok(())
    }

    /// Multiplies every element of the matrix by the scalar `s`,
    /// returning a new `Matrix`. This operation cannot fail.
    #[must_use]
    pub fn scale(&self, s: Float) -> Matrix {
        let data = {
            #[cfg(not(feature = "parallel"))]
            {
                self.data.iter().map(|x| *x * s).collect()
            }

            #[cfg(feature = "parallel")]
            {
                self.data.par_iter().map(|x| *x * s).collect()
            }
        };

        // return
        Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data,
        }
    }

    /// Scales a matrix by `s` and puts the result in `into`
    pub fn scale_into(&self, s: Float, into: &mut Matrix) -> MatResult<()> {
        self.check_same_size(into)?;

        #[cfg(not(feature = "parallel"))]
        into.data
            .iter_mut()
            .zip(&self.data)
            .for_each(|(i, x)| *i = *x * s);

        #[cfg(feature = "parallel")]
        into.data
            .par_iter_mut()
            .zip(&self.data)
            .for_each(|(i, x)| *i = *x * s);

        Ok(())
    }

    /// Multiplies `self` by `other` (the matrix product), returning a
    /// new `Matrix` of size `self.nrows` by `other.ncols`.
    ///
    /// Returns a [`ShapeErrorKind::InnerDim`] error when `self.ncols` does
    /// not match `other.nrows`.
    pub fn prod(&self, other: &Matrix) -> MatResult<Matrix> {
        let mut ret = Matrix::zeros(self.nrows, other.ncols)?;
        self.prod_into(other, &mut ret)?;
        Ok(ret)
    }

    /// Multiplies a matrix by `other`, putting the result into `into`
    ///
    /// Row passes where the left factor is exactly Zero are skipped. This
    /// does not change the result, it only saves work.
    #[allow(clippy::needless_collect)]
    pub fn prod_into(&self, other: &Matrix, into: &mut Matrix) -> MatResult<()> {
        if self.ncols != other.nrows {
            return Err(ShapeErrorKind::InnerDim(self.ncols, other.nrows).into());
        }

        if into.nrows != self.nrows || into.ncols != other.ncols {
            return Err(
                ShapeErrorKind::SizeMismatch(self.nrows, other.ncols, into.nrows, into.ncols)
                    .into(),
            );
        }

        // Multiply.
        let rows: Vec<&[Float]> = self.data.chunks_exact(self.ncols).collect();
        #[cfg(not(feature = "parallel"))]
        let i = rows.into_iter().zip(into.data.chunks_exact_mut(other.ncols));

        #[cfg(feature = "parallel")]
        let i = rows
            .into_par_iter()
            .zip(into.data.par_chunks_exact_mut(other.ncols));

        i.for_each(|(row_data, into_data)| {
            into_data.fill(0.0);
            for (k, a) in row_data.iter().enumerate() {
                if *a == 0.0 {
                    continue;
                }
                let other_row = &other.data[k * other.ncols..(k + 1) * other.ncols];
                for (item, b) in into_data.iter_mut().zip(other_row) {
                    *item += *a * *b;
                }
            }
        });

        // return
        Ok(())
    }
}

impl std::ops::Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, other: &Matrix) -> Self::Output {
        match Matrix::add(self, other) {
            Ok(ret) => ret,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, other: &Matrix) {
        if let Err(e) = self.check_same_size(other) {
            panic!("{}", e);
        }

        #[cfg(not(feature = "parallel"))]
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a += *b);

        #[cfg(feature = "parallel")]
        self.data
            .par_iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a += *b);
    }
}

impl std::ops::Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, other: &Matrix) -> Self::Output {
        match Matrix::sub(self, other) {
            Ok(ret) => ret,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, other: &Matrix) {
        if let Err(e) = self.check_same_size(other) {
            panic!("{}", e);
        }

        #[cfg(not(feature = "parallel"))]
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a -= *b);

        #[cfg(feature = "parallel")]
        self.data
            .par_iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a -= *b);
    }
}

impl std::ops::Mul<Float> for &Matrix {
    type Output = Matrix;

    fn mul(self, s: Float) -> Self::Output {
        self.scale(s)
    }
}

impl std::ops::Mul<&Matrix> for Float {
    type Output = Matrix;

    fn mul(self, m: &Matrix) -> Self::Output {
        m.scale(self)
    }
}

impl std::ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, other: &Matrix) -> Self::Output {
        match self.prod(other) {
            Ok(ret) => ret,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::MulAssign<Float> for Matrix {
    fn mul_assign(&mut self, s: Float) {
        #[cfg(not(feature = "parallel"))]
        self.data.iter_mut().for_each(|a| *a *= s);

        #[cfg(feature = "parallel")]
        self.data.par_iter_mut().for_each(|a| *a *= s);
    }
}

impl std::ops::Div<Float> for &Matrix {
    type Output = Matrix;

    fn div(self, s: Float) -> Self::Output {
        let data = {
            #[cfg(not(feature = "parallel"))]
            {
                self.data.iter().map(|a| *a / s).collect()
            }
            #[cfg(feature = "parallel")]
            {
                self.data.par_iter().map(|a| *a / s).collect()
            }
        };

        Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data,
        }
    }
}

impl std::ops::Div<&Matrix> for &Matrix {
    type Output = Matrix;

    fn div(self, other: &Matrix) -> Self::Output {
        match Matrix::div(self, other) {
            Ok(ret) => ret,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::DivAssign<Float> for Matrix {
    fn div_assign(&mut self, s: Float) {
        #[cfg(not(feature = "parallel"))]
        self.data.iter_mut().for_each(|a| *a /= s);

        #[cfg(feature = "parallel")]
        self.data.par_iter_mut().for_each(|a| *a /= s);
    }
}

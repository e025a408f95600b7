use thiserror::Error;

/// A shorthand for `Result<T, MatrixError>`, used by every fallible
/// operation in this library.
pub type MatResult<T> = Result<T, MatrixError>;

/// The ways in which the shape of one or two matrices can rule out an
/// operation. Every variant is detected eagerly, before any element
/// is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeErrorKind {
    /// The input had no rows, or its first row had no elements
    #[error("matrix cannot be empty")]
    Empty,

    /// A row's length differed from the first row's length
    #[error("all rows must have the same length (expected {expected}, found {found})")]
    RaggedRows {
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// A flat data buffer did not hold `nrows * ncols` elements
    #[error("a {nrows} by {ncols} matrix cannot hold {len} elements")]
    DataLength {
        /// Requested number of rows
        nrows: usize,
        /// Requested number of columns
        ncols: usize,
        /// Length of the buffer that was handed in
        len: usize,
    },

    /// An element access outside of the matrix
    #[error("row or column out of bounds")]
    OutOfBounds,

    /// Elementwise operands (or a destination matrix) of different sizes
    #[error("operands are of different sizes ({0} by {1} and {2} by {3})")]
    SizeMismatch(usize, usize, usize, usize),

    /// Matrix product where the left operand's columns do not match the
    /// right operand's rows
    #[error("inner dimensions must match (found {0} and {1})")]
    InnerDim(usize, usize),

    /// Determinant or inversion of a non-square matrix
    #[error("operation requires a square matrix (found {0} by {1})")]
    NotSquare(usize, usize),
}

/// The error type reported by all fallible matrix operations.
///
/// Shape problems and singularity are kept apart on purpose: the
/// determinant of a singular matrix is a defined result (`0.0`), while
/// its inverse does not exist and is reported as [`MatrixError::Singular`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The operands' shapes rule the operation out
    #[error("shape error: {0}")]
    Shape(#[from] ShapeErrorKind),

    /// Inversion (or solving) found an exactly-zero pivot column
    #[error("matrix is singular")]
    Singular,
}

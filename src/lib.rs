/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

#![deny(missing_docs)]

//! A library for dense Matrix operations.
//!
//! It provides construction and validation of rectangular matrices,
//! elementwise arithmetic, the matrix product, and two elimination
//! algorithms: the determinant (via
//! [Gaussian Elimination](https://en.wikipedia.org/wiki/Gaussian_elimination)
//! with partial pivoting) and the inverse (via
//! [Gauss-Jordan elimination](https://en.wikipedia.org/wiki/Gaussian_elimination#Gauss%E2%80%93Jordan_elimination)).
//!
//! Matrices are value-like: operations read their operands and allocate a
//! fresh result, so instances can be shared across threads without locking.

/// The kind of Floating point number used in the
/// library. All matrix elements are stored as `Float`; numeric
/// input of other types is coerced at construction time.
pub type Float = f64;

mod error;
mod gauss;
mod matrix;

pub use crate::error::{MatResult, MatrixError, ShapeErrorKind};
pub use crate::matrix::Matrix;

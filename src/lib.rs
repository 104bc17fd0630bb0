//! # echelon
//!
//! Labeled dense vectors and matrices of real numbers, with a row echelon /
//! reduced row echelon engine. Storage is heap-allocated and sized at run
//! time; every value carries a free-form label that shows up in its printed
//! form.
//!
//! ## Quick start
//!
//! ```
//! use echelon::Matrix;
//!
//! let w = Matrix::from_arrays("w", &[
//!     [7.0_f64, 7.0, 0.0, 9.0],
//!     [3.0, 2.0, 2.0, 5.0],
//!     [9.0, 6.0, 7.0, 2.0],
//!     [0.0, 1.0, 3.0, 2.0],
//! ]).unwrap();
//!
//! // Invertible, so the reduced form is the identity.
//! let r = w.reduced_row_echelon();
//! assert_eq!(r, w.identity().unwrap());
//!
//! // The input is never modified.
//! assert_eq!(w[(0, 3)], 9.0);
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: [`Vector<T>`], fixed-length after construction, checked and
//!   unchecked element access, element-wise `add`/`sub`, `dot`, `cross` (R3
//!   only), `magnitude`, seeded random fill.
//!
//! - [`matrix`]: [`Matrix<T>`], an owned sequence of equal-length row
//!   vectors. Construction from rows, arrays or a closure; `(row, col)`
//!   access; `add`, `sub`, `multiply`, `scale`, `transpose`, `trace`,
//!   `identity`; row borrowing and column copying.
//!
//! - [`linalg`]: The elementary row operations and the elimination engine.
//!   [`linalg::row_echelon_in_place`] and
//!   [`linalg::reduced_row_echelon_in_place`] work on any
//!   `&mut impl MatrixMut<T>`; `Matrix::row_echelon` and
//!   `Matrix::reduced_row_echelon` wrap them on a private copy.
//!
//! - [`memory`]: [`Memory`], a named store of vectors, matrices and
//!   constants that refuses to overwrite a taken identifier.
//!
//! - [`config`]: [`FormatConfig`], precision, width and highlighting of
//!   the printed form. Serde-deserializable.
//!
//! - [`traits`]: Entry traits:
//!   - [`Scalar`]: `Copy + PartialEq + Debug + Zero + One + Num`
//!   - [`FloatScalar`]: `f32` / `f64`, with the comparison tolerances
//!   - [`MatrixRef`] / [`MatrixMut`]: row-oriented access for algorithms
//!
//! - [`error`]: [`Error`] and the crate-wide [`Result`] alias.
//!
//! ## Equality
//!
//! `==` on vectors and matrices is approximate: shapes must match and every
//! entry pair must lie within [`FloatScalar::EQ_TOLERANCE`] (`1e-2`). Labels
//! never take part. `Hash` covers the shape only, so it stays consistent with
//! the tolerant comparison; `Eq` is not implemented.
//!
//! ## Logging
//!
//! The engine logs skipped columns and rows at `debug` level and each pivot at
//! `trace` level through the [`log`] facade. Nothing is printed unless the
//! application installs a logger.

pub mod config;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod memory;
pub mod traits;
pub mod vector;

pub use config::FormatConfig;
pub use error::{Axis, Error, Result};
pub use matrix::{Matrix, Matrixf32, Matrixf64, Vectorf32, Vectorf64};
pub use memory::{Memory, Value};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
pub use vector::Vector;

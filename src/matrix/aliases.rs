//! Pre-defined type aliases for the supported entry types.

use super::Matrix;
use crate::vector::Vector;

/// Matrix with `f32` entries.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` entries.
pub type Matrixf64 = Matrix<f64>;

/// Vector with `f32` entries.
pub type Vectorf32 = Vector<f32>;
/// Vector with `f64` entries.
pub type Vectorf64 = Vector<f64>;

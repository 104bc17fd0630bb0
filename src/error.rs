//! Error kinds returned by vector, matrix and store operations.

use core::fmt;
use thiserror::Error;

/// Which index of an operation was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A vector element.
    Element,
    /// A matrix row.
    Row,
    /// A matrix column.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Element => write!(f, "element"),
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors from construction, arithmetic and indexing.
///
/// Every fallible operation validates its inputs before mutating anything,
/// so an `Err` never leaves a partially-updated value behind.
///
/// ```
/// use echelon::{Error, Vector};
///
/// let err = Vector::<f64>::from_vec("v", vec![]).unwrap_err();
/// assert!(matches!(err, Error::InvalidArgument(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed construction input, dimension mismatch, or an argument
    /// outside an operation's domain (e.g. a cross product outside R3).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Element, row or column access outside the valid range.
    #[error("{axis} index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The indexed dimension
        axis: Axis,
        /// The offending index
        index: usize,
        /// Length of the indexed dimension
        len: usize,
    },

    /// A square-only operation was requested on a non-square matrix.
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    UnsupportedOperation {
        /// Name of the rejected operation
        op: &'static str,
        /// Row count of the operand
        rows: usize,
        /// Column count of the operand
        cols: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;

//! Entry traits and the row-oriented access traits the engine is written against.

use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as vector and matrix entries.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for the real floating-point entry types (`f32`, `f64`).
///
/// Carries the absolute tolerances used by approximate equality and by the
/// unit-pivot search of the reduced row echelon pass.
pub trait FloatScalar: Scalar + Float {
    /// Largest absolute difference at which two entries still compare equal.
    const EQ_TOLERANCE: Self;

    /// Largest distance from 1 at which an entry is accepted as a unit pivot.
    const UNIT_TOLERANCE: Self;

    /// Convert a whole number into an entry.
    fn from_whole(v: i32) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty => $unit:expr),*) => {
        $(
            impl FloatScalar for $t {
                const EQ_TOLERANCE: $t = 1e-2;
                const UNIT_TOLERANCE: $t = $unit;

                #[inline] fn from_whole(v: i32) -> $t { v as $t }
            }
        )*
    };
}

// f32 cannot resolve 1e-9 around 1.0, so its unit tolerance sits just above
// its rounding error.
impl_float_scalar!(f32 => 1e-5, f64 => 1e-9);

/// Whether two entry slices have equal length and agree entrywise within
/// [`FloatScalar::EQ_TOLERANCE`].
pub(crate) fn entries_close<T: FloatScalar>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(&x, &y)| (x - y).abs() <= T::EQ_TOLERANCE)
}

/// Read-only, row-oriented access to a matrix-like type.
///
/// The elimination routines in [`crate::linalg`] are written against this
/// trait rather than a concrete storage layout.
pub trait MatrixRef<T> {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// Entry at `(row, col)`. Panics when out of range.
    fn get(&self, row: usize, col: usize) -> &T;

    /// Entries of one row, in column order.
    fn row_as_slice(&self, row: usize) -> &[T];
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with the element and row mutations needed by
/// in-place algorithms.
pub trait MatrixMut<T>: MatrixRef<T> {
    /// Mutable entry at `(row, col)`. Panics when out of range.
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Entries of one row, mutably.
    fn row_as_mut_slice(&mut self, row: usize) -> &mut [T];

    /// Exchange two rows in place.
    fn swap_rows(&mut self, a: usize, b: usize);
}

//! Elementary row operations and the row echelon engine built on them.
//!
//! Everything here works on `&mut impl MatrixMut<T>`, in place. The
//! convenience methods `Matrix::row_echelon` and
//! `Matrix::reduced_row_echelon` clone first, so the caller's matrix is never
//! touched.

pub(crate) mod echelon;

pub use echelon::{reduced_row_echelon_in_place, row_echelon_in_place};

use crate::traits::{MatrixMut, Scalar};

/// Multiply every entry of `row` by `c`.
#[inline]
pub fn scale_row<T: Scalar>(a: &mut impl MatrixMut<T>, row: usize, c: T) {
    for x in a.row_as_mut_slice(row).iter_mut() {
        *x = *x * c;
    }
}

/// Subtract row `source` from row `target`, entrywise: `target -= source`.
///
/// Requires `target != source`.
#[inline]
pub fn sub_row<T: Scalar>(a: &mut impl MatrixMut<T>, target: usize, source: usize) {
    debug_assert_ne!(target, source);
    for j in 0..a.ncols() {
        let s = *a.get(source, j);
        let t = a.get_mut(target, j);
        *t = *t - s;
    }
}

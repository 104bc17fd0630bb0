use log::{debug, trace};

use crate::linalg::{scale_row, sub_row};
use crate::traits::{FloatScalar, MatrixMut};
use crate::Matrix;

/// Reduce `a` to row echelon form, in place.
///
/// Columns are swept left to right. For column `c` the pivot is the first
/// entry at or below row `c` that is exactly non-zero; that row is scaled so
/// the pivot is 1 and swapped into row `c`. Every lower row with a non-zero
/// entry in column `c` is then scaled so that entry is 1 and has row `c`
/// subtracted from it, leaving an exact 0.
///
/// A column with no non-zero entry at or below row `c` is skipped without
/// touching any row. The pivot row is tied to the column index, so a skipped
/// column also leaves row `c` without a pivot. Only the first
/// `min(nrows, ncols)` columns are swept.
///
/// # Precision
///
/// The pivot test compares against exact zero. Rounding residue such as
/// `1e-16` is accepted as a pivot and amplified by the normalization, so
/// nearly singular inputs can produce large, meaningless entries.
///
/// ```
/// use echelon::{linalg::row_echelon_in_place, Matrix};
///
/// let mut m = Matrix::from_arrays("m", &[[0.0, 2.0], [4.0, 6.0]]).unwrap();
/// row_echelon_in_place(&mut m);
/// assert_eq!(m, Matrix::from_arrays("", &[[1.0, 1.5], [0.0, 1.0]]).unwrap());
/// ```
pub fn row_echelon_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>) {
    let nrows = a.nrows();
    let sweep = nrows.min(a.ncols());

    for col in 0..sweep {
        let mut pivot_row = col;
        while pivot_row < nrows && *a.get(pivot_row, col) == T::zero() {
            pivot_row += 1;
        }
        if pivot_row == nrows {
            debug!("column {} has no pivot at or below row {}", col, col);
            continue;
        }

        let pivot = *a.get(pivot_row, col);
        scale_row(a, pivot_row, T::one() / pivot);
        a.swap_rows(col, pivot_row);
        trace!("column {}: pivot {:?} from row {}", col, pivot, pivot_row);

        for row in (col + 1)..nrows {
            let below = *a.get(row, col);
            if below != T::zero() {
                scale_row(a, row, T::one() / below);
                sub_row(a, row, col);
            }
        }
    }
}

/// Reduce `a` to reduced row echelon form, in place.
///
/// Runs [`row_echelon_in_place`], then walks rows bottom to top. In each row
/// the pivot is the leftmost entry within [`FloatScalar::UNIT_TOLERANCE`] of
/// 1; a row without one is skipped. Each non-zero entry above the pivot is
/// cleared by scaling the pivot row by that entry, subtracting it from the
/// row above, and scaling the pivot row back by the reciprocal.
///
/// ```
/// use echelon::{linalg::reduced_row_echelon_in_place, Matrix};
///
/// let mut m = Matrix::from_arrays("m", &[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]).unwrap();
/// reduced_row_echelon_in_place(&mut m);
/// let expected = Matrix::from_arrays("", &[[1.0, 0.0, -1.0], [0.0, 1.0, 2.0], [0.0, 0.0, 0.0]]).unwrap();
/// assert_eq!(m, expected);
/// ```
pub fn reduced_row_echelon_in_place<T: FloatScalar>(a: &mut impl MatrixMut<T>) {
    row_echelon_in_place(a);
    clear_above_pivots(a);
}

fn clear_above_pivots<T: FloatScalar>(a: &mut impl MatrixMut<T>) {
    let ncols = a.ncols();

    for pivot_row in (0..a.nrows()).rev() {
        let found = (0..ncols).find(|&c| (*a.get(pivot_row, c) - T::one()).abs() <= T::UNIT_TOLERANCE);
        let Some(pivot_col) = found else {
            debug!("row {} has no unit pivot", pivot_row);
            continue;
        };

        for i in (1..=pivot_row).rev() {
            let above = *a.get(i - 1, pivot_col);
            if above != T::zero() {
                scale_row(a, pivot_row, above);
                sub_row(a, i - 1, pivot_row);
                scale_row(a, pivot_row, T::one() / above);
            }
        }
        trace!("cleared column {} above row {}", pivot_col, pivot_row);
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Row echelon form of a copy of `self`; `self` is unchanged.
    ///
    /// See [`row_echelon_in_place`] for the procedure and its precision
    /// caveat.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_arrays("m", &[[2.0, 4.0], [1.0, 3.0]]).unwrap();
    /// let r = m.row_echelon();
    /// assert_eq!(r, Matrix::from_arrays("", &[[1.0, 2.0], [0.0, 1.0]]).unwrap());
    /// assert_eq!(m[(0, 0)], 2.0);
    /// ```
    pub fn row_echelon(&self) -> Self {
        let mut work = self.clone();
        row_echelon_in_place(&mut work);
        work
    }

    /// Reduced row echelon form of a copy of `self`; `self` is unchanged.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let w = Matrix::from_arrays(
    ///     "w",
    ///     &[[7.0, 7.0, 0.0, 9.0], [3.0, 2.0, 2.0, 5.0], [9.0, 6.0, 7.0, 2.0], [0.0, 1.0, 3.0, 2.0]],
    /// )
    /// .unwrap();
    /// assert_eq!(w.reduced_row_echelon(), w.identity().unwrap());
    /// ```
    pub fn reduced_row_echelon(&self) -> Self {
        let mut work = self.clone();
        reduced_row_echelon_in_place(&mut work);
        work
    }
}

//! Labeled dense matrices stored as owned rows.

pub mod aliases;
mod ops;
mod square;
mod util;

pub use aliases::*;

use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use crate::error::{Axis, Error, Result};
use crate::traits::{entries_close, FloatScalar, MatrixMut, MatrixRef};
use crate::vector::Vector;

/// Labeled dense matrix stored as a sequence of owned row vectors.
///
/// Every row has the same length. Matrices built through the public
/// constructors have at least two rows and two columns. Arithmetic returns new matrices; only
/// [`scale`](Matrix::scale), [`set`](Matrix::set) and `IndexMut` mutate in
/// place.
///
/// Indices are `(row, col)` throughout.
///
/// # Examples
///
/// ```
/// use echelon::Matrix;
///
/// let a = Matrix::from_arrays("a", &[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let id = a.identity().unwrap();
/// assert_eq!(a.multiply(&id).unwrap(), a);
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
    label: String,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Create a matrix that takes ownership of `rows`.
    ///
    /// The rows are moved in, so no outside handle can alias them. Fails with
    /// `InvalidArgument` if fewer than two rows are given, the rows are
    /// shorter than two entries, or their lengths differ.
    ///
    /// ```
    /// use echelon::{Matrix, Vector};
    /// let r0 = Vector::from_slice("", &[1.0, 2.0, 3.0]).unwrap();
    /// let r1 = Vector::from_slice("", &[4.0, 5.0, 6.0]).unwrap();
    /// let m = Matrix::from_rows("m", vec![r0, r1]).unwrap();
    /// assert_eq!((m.nrows(), m.ncols()), (2, 3));
    /// ```
    pub fn from_rows(label: impl Into<String>, rows: Vec<Vector<T>>) -> Result<Self> {
        if rows.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "a matrix needs at least 2 rows, got {}",
                rows.len()
            )));
        }
        let ncols = rows[0].len();
        if ncols < 2 {
            return Err(Error::InvalidArgument(format!(
                "a matrix needs at least 2 columns, got {}",
                ncols
            )));
        }
        if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(Error::InvalidArgument(format!(
                "row {} has length {}, expected {}",
                i,
                r.len(),
                ncols
            )));
        }
        Ok(Self {
            rows,
            label: label.into(),
        })
    }

    /// Create a matrix from fixed-size row arrays.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_arrays("m", &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m[(1, 2)], 6.0);
    /// ```
    pub fn from_arrays<const N: usize>(label: impl Into<String>, rows: &[[T; N]]) -> Result<Self> {
        let rows = rows
            .iter()
            .map(|r| Vector::from_slice("", r))
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(label, rows)
    }

    /// Create an `nrows x ncols` zero matrix.
    ///
    /// Fails with `InvalidArgument` unless both dimensions are at least 2.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::<f64>::zeros("z", 3, 4).unwrap();
    /// assert_eq!(m[(2, 3)], 0.0);
    /// assert!(Matrix::<f64>::zeros("z", 1, 4).is_err());
    /// ```
    pub fn zeros(label: impl Into<String>, nrows: usize, ncols: usize) -> Result<Self> {
        check_min_dims(nrows, ncols)?;
        Ok(Self::build(label.into(), nrows, ncols, |_, _| T::zero()))
    }

    /// Create a matrix by calling `f(row, col)` for each entry.
    ///
    /// Same dimension rules as [`zeros`](Self::zeros).
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_fn("m", 3, 3, |i, j| (i * 3 + j) as f64).unwrap();
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_fn(
        label: impl Into<String>,
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Result<Self> {
        check_min_dims(nrows, ncols)?;
        Ok(Self::build(label.into(), nrows, ncols, f))
    }

    /// Build without validation; callers guarantee non-zero dimensions.
    pub(crate) fn build(
        label: String,
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Self {
        let rows = (0..nrows)
            .map(|i| Vector::from_parts(String::new(), (0..ncols).map(|j| f(i, j)).collect()))
            .collect();
        Self { rows, label }
    }

    /// Checked entry read.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_arrays("m", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 0).unwrap(), 3.0);
    /// assert!(m.get(2, 0).is_err());
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.rows[row][col])
    }

    /// Checked entry write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        self.rows[row][col] = value;
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.nrows() {
            return Err(Error::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                len: self.nrows(),
            });
        }
        if col >= self.ncols() {
            return Err(Error::IndexOutOfRange {
                axis: Axis::Column,
                index: col,
                len: self.ncols(),
            });
        }
        Ok(())
    }
}

fn check_min_dims(nrows: usize, ncols: usize) -> Result<()> {
    if nrows <= 1 || ncols <= 1 {
        return Err(Error::InvalidArgument(format!(
            "the minimum matrix size is 2x2, got {}x{}",
            nrows, ncols
        )));
    }
    Ok(())
}

impl<T> Matrix<T> {
    /// Number of rows (the height).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (the width).
    #[inline]
    pub fn ncols(&self) -> usize {
        self.rows[0].len()
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label, consuming `self`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vector<T>] {
        &self.rows
    }

    /// Give up the row vectors.
    pub fn into_rows(self) -> Vec<Vector<T>> {
        self.rows
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.rows[0].len()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.rows[row][col]
    }

    #[inline]
    fn row_as_slice(&self, row: usize) -> &[T] {
        self.rows[row].as_slice()
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.rows[row][col]
    }

    #[inline]
    fn row_as_mut_slice(&mut self, row: usize) -> &mut [T] {
        self.rows[row].as_mut_slice()
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

// ── Equality ────────────────────────────────────────────────────────

/// Same shape and every entry within [`FloatScalar::EQ_TOLERANCE`]; labels
/// are ignored.
impl<T: FloatScalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nrows() == other.nrows()
            && self.ncols() == other.ncols()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| entries_close(a.as_slice(), b.as_slice()))
    }
}

/// Hashes the shape only, which keeps `Hash` consistent with the tolerant
/// `PartialEq`.
impl<T> Hash for Matrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nrows().hash(state);
        self.ncols().hash(state);
    }
}

use crate::error::{Error, Result};
use crate::traits::FloatScalar;

use super::Matrix;

impl<T> Matrix<T> {
    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    fn require_square(&self, op: &'static str) -> Result<()> {
        if !self.is_square() {
            return Err(Error::UnsupportedOperation {
                op,
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Sum of diagonal entries.
    ///
    /// Fails with `UnsupportedOperation` if the matrix is not square.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_arrays("m", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.trace().unwrap(), 5.0);
    /// ```
    pub fn trace(&self) -> Result<T> {
        self.require_square("trace")?;
        let mut sum = T::zero();
        for i in 0..self.nrows() {
            sum = sum + self[(i, i)];
        }
        Ok(sum)
    }

    /// Identity matrix with the same dimensions and label.
    ///
    /// Fails with `UnsupportedOperation` if the matrix is not square.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::<f64>::zeros("m", 3, 3).unwrap();
    /// let id = m.identity().unwrap();
    /// assert_eq!(id[(2, 2)], 1.0);
    /// assert_eq!(id[(0, 2)], 0.0);
    /// ```
    pub fn identity(&self) -> Result<Self> {
        self.require_square("identity")?;
        let n = self.nrows();
        Ok(Self::build(self.label.clone(), n, n, |i, j| {
            if i == j {
                T::one()
            } else {
                T::zero()
            }
        }))
    }
}

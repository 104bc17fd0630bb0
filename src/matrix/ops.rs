use core::ops::{Mul, Neg};

use crate::error::{Error, Result};
use crate::traits::FloatScalar;

use super::Matrix;

fn check_same_shape<T>(op: &str, a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if (a.nrows(), a.ncols()) != (b.nrows(), b.ncols()) {
        return Err(Error::InvalidArgument(format!(
            "dimension mismatch: {}x{} {} {}x{}",
            a.nrows(),
            a.ncols(),
            op,
            b.nrows(),
            b.ncols(),
        )));
    }
    Ok(())
}

impl<T: FloatScalar> Matrix<T> {
    /// Element-wise sum. The result keeps `self`'s label.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let a = Matrix::from_arrays("a", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_arrays("b", &[[4.0, 3.0], [2.0, 1.0]]).unwrap();
    /// let c = a.add(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 5.0);
    /// assert_eq!(c.label(), "a");
    /// ```
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        check_same_shape("+", self, rhs)?;
        Ok(Self::build(
            self.label.clone(),
            self.nrows(),
            self.ncols(),
            |i, j| self[(i, j)] + rhs[(i, j)],
        ))
    }

    /// Element-wise difference `self - rhs`. The result keeps `self`'s label.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        check_same_shape("-", self, rhs)?;
        Ok(Self::build(
            self.label.clone(),
            self.nrows(),
            self.ncols(),
            |i, j| self[(i, j)] - rhs[(i, j)],
        ))
    }

    /// Matrix product `self · rhs`.
    ///
    /// Requires `rhs.nrows() == self.ncols()`; the result is
    /// `self.nrows() x rhs.ncols()` and keeps `self`'s label.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let a = Matrix::from_arrays("a", &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// let b = Matrix::from_arrays("b", &[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap();
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!((c.nrows(), c.ncols()), (2, 2));
    /// assert_eq!(c[(0, 0)], 58.0);
    /// assert_eq!(c[(1, 1)], 154.0);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        if rhs.nrows() != self.ncols() {
            return Err(Error::InvalidArgument(format!(
                "dimension mismatch: {}x{} * {}x{}",
                self.nrows(),
                self.ncols(),
                rhs.nrows(),
                rhs.ncols(),
            )));
        }
        let inner = self.ncols();
        Ok(Self::build(
            self.label.clone(),
            self.nrows(),
            rhs.ncols(),
            |i, j| {
                let mut sum = T::zero();
                for k in 0..inner {
                    sum = sum + self[(i, k)] * rhs[(k, j)];
                }
                sum
            },
        ))
    }

    /// Multiply every entry by `c` in place.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let mut m = Matrix::from_arrays("m", &[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// m.scale(2.0);
    /// assert_eq!(m[(1, 1)], 8.0);
    /// ```
    pub fn scale(&mut self, c: T) {
        for row in self.rows.iter_mut() {
            row.scale(c);
        }
    }
}

// ── Operators that cannot fail ──────────────────────────────────────

impl<T: FloatScalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.scale(-T::one());
        self
    }
}

impl<T: FloatScalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self.scale(rhs);
        self
    }
}

impl<T: FloatScalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.clone() * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m() -> Matrix<f64> {
        Matrix::from_arrays("m", &[[2.0, 8.0, 3.0], [9.0, 2.0, 6.0], [0.0, 2.0, 7.0]]).unwrap()
    }

    fn n() -> Matrix<f64> {
        Matrix::from_arrays("n", &[[4.0, 16.0, 6.0], [18.0, 4.0, 12.0], [0.0, 4.0, 14.0]]).unwrap()
    }

    #[test]
    fn add() {
        let expected =
            Matrix::from_arrays("", &[[6.0, 24.0, 9.0], [27.0, 6.0, 18.0], [0.0, 6.0, 21.0]]).unwrap();
        let sum = m().add(&n()).unwrap();
        assert_eq!(sum, expected);
        assert_eq!(sum.label(), "m");
    }

    #[test]
    fn sub() {
        let diff = n().sub(&m()).unwrap();
        assert_eq!(diff, m());
    }

    #[test]
    fn shape_mismatch() {
        let wide = Matrix::<f64>::zeros("w", 3, 4).unwrap();
        assert!(matches!(m().add(&wide), Err(Error::InvalidArgument(_))));
        assert!(matches!(m().sub(&wide), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn multiply() {
        let expected = Matrix::from_arrays(
            "",
            &[[152.0, 76.0, 150.0], [72.0, 176.0, 162.0], [36.0, 36.0, 122.0]],
        )
        .unwrap();
        assert_eq!(m().multiply(&n()).unwrap(), expected);
    }

    #[test]
    fn multiply_rectangular() {
        let a = Matrix::<f64>::from_fn("a", 2, 3, |i, j| (i + j) as f64).unwrap();
        let b = Matrix::<f64>::from_fn("b", 3, 4, |i, j| (i * j) as f64).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!((c.nrows(), c.ncols()), (2, 4));
        // row 1 of a = [1, 2, 3], column 3 of b = [0, 3, 6]
        assert_eq!(c[(1, 3)], 24.0);
    }

    #[test]
    fn multiply_mismatch() {
        let a = Matrix::<f64>::zeros("a", 2, 3).unwrap();
        let b = Matrix::<f64>::zeros("b", 2, 3).unwrap();
        assert!(matches!(a.multiply(&b), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn scale_and_operators() {
        let mut a = m();
        a.scale(2.0);
        assert_eq!(a, n());

        assert_eq!(&m() * 2.0, n());
        let neg = -m();
        assert_eq!(neg[(0, 1)], -8.0);
        assert_eq!(neg.add(&m()).unwrap(), Matrix::zeros("", 3, 3).unwrap());
    }
}

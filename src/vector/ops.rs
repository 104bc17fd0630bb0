use core::ops::{Mul, Neg};

use crate::error::{Error, Result};
use crate::traits::FloatScalar;

use super::Vector;

fn check_same_len<T>(op: &str, a: &Vector<T>, b: &Vector<T>) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::InvalidArgument(format!(
            "length mismatch: {} {} {}",
            a.len(),
            op,
            b.len()
        )));
    }
    Ok(())
}

// ── Element-wise arithmetic ─────────────────────────────────────────

impl<T: FloatScalar> Vector<T> {
    /// Element-wise sum. The result is unlabeled.
    ///
    /// ```
    /// use echelon::Vector;
    /// let v = Vector::from_slice("v", &[1.0, 2.0, 3.0]).unwrap();
    /// let w = Vector::from_slice("w", &[3.0, 2.0, 1.0]).unwrap();
    /// assert_eq!(v.add(&w).unwrap().as_slice(), &[4.0, 4.0, 4.0]);
    /// ```
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        check_same_len("+", self, rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Vector::from_parts(String::new(), data))
    }

    /// Element-wise difference `self - rhs`. The result is unlabeled.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        check_same_len("-", self, rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Vector::from_parts(String::new(), data))
    }

    /// Multiply every entry by `c` in place.
    pub fn scale(&mut self, c: T) {
        for x in self.data.iter_mut() {
            *x = *x * c;
        }
    }

    /// Dot product.
    ///
    /// ```
    /// use echelon::Vector;
    /// let v = Vector::from_slice("v", &[1.0, 2.0, 3.0]).unwrap();
    /// let w = Vector::from_slice("w", &[3.0, 2.0, 1.0]).unwrap();
    /// assert_eq!(v.dot(&w).unwrap(), 10.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<T> {
        check_same_len("·", self, rhs)?;
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(rhs.data.iter()) {
            sum = sum + a * b;
        }
        Ok(sum)
    }

    /// Cross product, defined for 3-vectors only.
    ///
    /// ```
    /// use echelon::Vector;
    /// let v = Vector::from_slice("v", &[1.0, 2.0, 3.0]).unwrap();
    /// let w = Vector::from_slice("w", &[3.0, 2.0, 1.0]).unwrap();
    /// assert_eq!(v.cross(&w).unwrap().as_slice(), &[-4.0, 8.0, -4.0]);
    /// ```
    pub fn cross(&self, rhs: &Self) -> Result<Self> {
        if self.len() != 3 || rhs.len() != 3 {
            return Err(Error::InvalidArgument(format!(
                "cross product is only defined in R3, got lengths {} and {}",
                self.len(),
                rhs.len()
            )));
        }
        let (a, b) = (&self.data, &rhs.data);
        let data = vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ];
        Ok(Vector::from_parts(String::new(), data))
    }

    /// Euclidean norm, `sqrt(Σ xᵢ²)`.
    ///
    /// ```
    /// use echelon::Vector;
    /// let v = Vector::from_slice("v", &[3.0_f64, 4.0]).unwrap();
    /// assert!((v.magnitude() - 5.0).abs() < 1e-12);
    /// ```
    pub fn magnitude(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum.sqrt()
    }
}

// ── Operators that cannot fail ──────────────────────────────────────

impl<T: FloatScalar> Neg for Vector<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for x in self.data.iter_mut() {
            *x = -*x;
        }
        self
    }
}

impl<T: FloatScalar> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self.scale(rhs);
        self
    }
}

impl<T: FloatScalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.clone() * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(data: &[f64]) -> Vector<f64> {
        Vector::from_slice("", data).unwrap()
    }

    #[test]
    fn add_sub() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[3.0, 2.0, 1.0]);
        assert_eq!(a.add(&b).unwrap().as_slice(), &[4.0, 4.0, 4.0]);
        assert_eq!(a.sub(&b).unwrap().as_slice(), &[-2.0, 0.0, 2.0]);
        assert_eq!(a.add(&b).unwrap().label(), "");
    }

    #[test]
    fn length_mismatch() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[1.0, 2.0]);
        assert!(matches!(a.add(&b), Err(Error::InvalidArgument(_))));
        assert!(matches!(a.sub(&b), Err(Error::InvalidArgument(_))));
        assert!(matches!(a.dot(&b), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn dot() {
        assert_eq!(v(&[1.0, 2.0, 3.0]).dot(&v(&[3.0, 2.0, 1.0])).unwrap(), 10.0);
        assert_eq!(v(&[1.0, 0.0]).dot(&v(&[0.0, 1.0])).unwrap(), 0.0);
    }

    #[test]
    fn cross() {
        let c = v(&[1.0, 2.0, 3.0]).cross(&v(&[3.0, 2.0, 1.0])).unwrap();
        assert_eq!(c.as_slice(), &[-4.0, 8.0, -4.0]);

        let x = v(&[1.0, 0.0, 0.0]);
        let y = v(&[0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn cross_outside_r3() {
        let a = v(&[1.0, 2.0]);
        let b = v(&[3.0, 4.0]);
        assert!(matches!(a.cross(&b), Err(Error::InvalidArgument(_))));

        let c = v(&[1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(c.cross(&c), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn magnitude() {
        assert!((v(&[3.0, 4.0]).magnitude() - 5.0).abs() < 1e-12);
        assert!((v(&[1.0, 2.0, 2.0]).magnitude() - 3.0).abs() < 1e-12);
        assert_eq!(v(&[0.0, 0.0]).magnitude(), 0.0);
    }

    #[test]
    fn scale_and_operators() {
        let mut a = v(&[1.0, -2.0]);
        a.scale(3.0);
        assert_eq!(a.as_slice(), &[3.0, -6.0]);

        let doubled = &a * 2.0;
        assert_eq!(doubled.as_slice(), &[6.0, -12.0]);

        let neg = -a;
        assert_eq!(neg.as_slice(), &[-3.0, 6.0]);
    }
}

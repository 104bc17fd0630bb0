use core::fmt::{self, Display};

use rand::Rng;

use crate::config::FormatConfig;
use crate::error::{Axis, Error, Result};
use crate::traits::FloatScalar;
use crate::vector::{check_random_range, Vector, DEFAULT_RANDOM_RANGE};

use super::Matrix;

// ── Row / Column access ─────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Borrow row `i`.
    pub fn row(&self, i: usize) -> Result<&Vector<T>> {
        self.rows.get(i).ok_or(Error::IndexOutOfRange {
            axis: Axis::Row,
            index: i,
            len: self.nrows(),
        })
    }

    /// Copy column `j` into a new, independently owned vector.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_arrays("m", &[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// assert_eq!(m.column(1).unwrap().as_slice(), &[2.0, 4.0, 6.0]);
    /// ```
    pub fn column(&self, j: usize) -> Result<Vector<T>> {
        if j >= self.ncols() {
            return Err(Error::IndexOutOfRange {
                axis: Axis::Column,
                index: j,
                len: self.ncols(),
            });
        }
        let data = self.rows.iter().map(|r| r[j]).collect();
        Ok(Vector::from_parts(String::new(), data))
    }

    /// Transpose, keeping the label.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_arrays("m", &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!((t.nrows(), t.ncols()), (3, 2));
    /// assert_eq!(t[(2, 0)], 3.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::build(self.label.clone(), self.ncols(), self.nrows(), |i, j| {
            self[(j, i)]
        })
    }

    // ── Random fill ─────────────────────────────────────────────────

    /// Overwrite every entry with a uniformly drawn whole number in
    /// `[lower, upper)` from the caller's generator.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, lower: i32, upper: i32) -> Result<()> {
        check_random_range(lower, upper)?;
        self.fill_whole(rng, lower, upper);
        Ok(())
    }

    /// [`fill_random`](Self::fill_random) over `[0, 10)`.
    pub fn fill_random_default<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill_whole(rng, DEFAULT_RANDOM_RANGE.0, DEFAULT_RANDOM_RANGE.1);
    }

    fn fill_whole<R: Rng + ?Sized>(&mut self, rng: &mut R, lower: i32, upper: i32) {
        for row in self.rows.iter_mut() {
            row.fill_whole(rng, lower, upper);
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: FloatScalar + Display> Matrix<T> {
    /// Render as a label line, a blank line, then one line per row with
    /// entries separated by a space.
    ///
    /// ```
    /// use echelon::{FormatConfig, Matrix};
    /// let m = Matrix::from_arrays("m", &[[1.0, 0.5], [0.0, 2.0]]).unwrap();
    /// let s = m.render(&FormatConfig::new(1, 5));
    /// assert_eq!(s, "m:\n\n      1.0   0.5\n      0.0   2.0\n");
    /// ```
    pub fn render(&self, cfg: &FormatConfig) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_with(&mut out, cfg);
        out
    }

    fn write_with<W: fmt::Write>(&self, w: &mut W, cfg: &FormatConfig) -> fmt::Result {
        cfg.write_header(w, &self.label)?;
        for row in &self.rows {
            cfg.write_indent(w)?;
            for (j, &x) in row.iter().enumerate() {
                if j > 0 {
                    w.write_char(' ')?;
                }
                cfg.write_entry(w, x)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

impl<T: FloatScalar + Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &FormatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn m() -> Matrix<f64> {
        Matrix::from_arrays("m", &[[1.0, 2.0, 3.0], [7.0, 2.0, 0.0], [0.0, 2.0, 5.0]]).unwrap()
    }

    #[test]
    fn row_borrow() {
        let m = m();
        assert_eq!(m.row(1).unwrap().as_slice(), &[7.0, 2.0, 0.0]);
        assert_eq!(
            m.row(3).unwrap_err(),
            Error::IndexOutOfRange {
                axis: Axis::Row,
                index: 3,
                len: 3
            }
        );
    }

    #[test]
    fn column_is_independent() {
        let mut m = m();
        let mut c = m.column(0).unwrap();
        c[0] = 100.0;
        m[(1, 0)] = -1.0;
        assert_eq!(c.as_slice(), &[100.0, 7.0, 0.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert!(matches!(
            m.column(3),
            Err(Error::IndexOutOfRange {
                axis: Axis::Column,
                ..
            })
        ));
    }

    #[test]
    fn transpose() {
        let m = Matrix::from_fn("m", 2, 3, |i, j| (i * 3 + j) as f64).unwrap();
        let t = m.transpose();
        assert_eq!((t.nrows(), t.ncols()), (3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(t[(j, i)], m[(i, j)]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn fill_random() {
        let mut a = Matrix::<f64>::zeros("a", 3, 4).unwrap();
        let mut b = Matrix::<f64>::zeros("b", 3, 4).unwrap();
        a.fill_random(&mut StdRng::seed_from_u64(9), -5, 5).unwrap();
        b.fill_random(&mut StdRng::seed_from_u64(9), -5, 5).unwrap();
        assert_eq!(a, b);
        for row in a.rows() {
            assert!(row.iter().all(|&x| (-5.0..5.0).contains(&x) && x.fract() == 0.0));
        }
        assert!(a.fill_random(&mut StdRng::seed_from_u64(9), 5, -5).is_err());
    }

    #[test]
    fn fill_random_default() {
        let mut a = Matrix::<f32>::zeros("a", 4, 4).unwrap();
        a.fill_random_default(&mut StdRng::seed_from_u64(1));
        for row in a.rows() {
            assert!(row.iter().all(|&x| (0.0..10.0).contains(&x)));
        }
    }

    #[test]
    fn fill_random_default_matches_explicit_range() {
        let mut a = Matrix::<f64>::zeros("a", 3, 3).unwrap();
        let mut b = Matrix::<f64>::zeros("b", 3, 3).unwrap();
        a.fill_random_default(&mut StdRng::seed_from_u64(5));
        b.fill_random(&mut StdRng::seed_from_u64(5), 0, 10).unwrap();
        for (ra, rb) in a.rows().iter().zip(b.rows()) {
            assert_eq!(ra.as_slice(), rb.as_slice());
        }
    }

    #[test]
    fn display() {
        let m = Matrix::from_arrays("p", &[[2.0, 8.0], [0.0, -1.5]]).unwrap();
        assert_eq!(
            format!("{}", m),
            "p:\n\n        2.000     8.000\n        0.000    -1.500\n"
        );
    }

    #[test]
    fn render_highlight() {
        let m = Matrix::from_arrays("h", &[[1.0, 0.0], [0.0, 1.0]]).unwrap();
        let s = m.render(&FormatConfig::new(0, 2).with_highlight(true));
        assert_eq!(
            s,
            "h:\n\n    \x1b[1m 1\x1b[0m  0\n     0 \x1b[1m 1\x1b[0m\n"
        );
    }

    #[test]
    fn display_entries_wider_than_field() {
        let m = Matrix::from_arrays("w", &[[-123456.5, -123456.5], [1.0, 2.0]]).unwrap();
        assert_eq!(
            format!("{}", m),
            "w:\n\n    -123456.500 -123456.500\n        1.000     2.000\n"
        );
        let first = m.to_string().lines().nth(2).unwrap().to_string();
        let parsed: Vec<f64> = first
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(parsed, vec![-123456.5, -123456.5]);
    }
}

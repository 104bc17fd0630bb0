//! Labeled fixed-length vectors.

mod ops;

use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use rand::Rng;

use crate::config::FormatConfig;
use crate::error::{Axis, Error, Result};
use crate::traits::{entries_close, FloatScalar};

/// Labeled, fixed-length vector of real entries.
///
/// The length is set at construction (at least one entry) and never changes;
/// entries are mutable by index. The label is for display only and does not
/// take part in equality.
///
/// # Examples
///
/// ```
/// use echelon::Vector;
///
/// let v = Vector::from_slice("v", &[1.0_f64, 2.0, 3.0]).unwrap();
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.label(), "v");
/// ```
#[derive(Debug, Clone)]
pub struct Vector<T> {
    data: Vec<T>,
    label: String,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: FloatScalar> Vector<T> {
    /// Create a vector that takes ownership of `data`.
    ///
    /// Fails with `InvalidArgument` if `data` is empty.
    ///
    /// ```
    /// use echelon::Vector;
    /// let v = Vector::from_vec("v", vec![1.0, 2.0]).unwrap();
    /// assert_eq!(v[1], 2.0);
    /// assert!(Vector::<f64>::from_vec("empty", vec![]).is_err());
    /// ```
    pub fn from_vec(label: impl Into<String>, data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::InvalidArgument(
                "a vector needs at least one entry".to_string(),
            ));
        }
        Ok(Self {
            data,
            label: label.into(),
        })
    }

    /// Create a vector by copying `data`.
    pub fn from_slice(label: impl Into<String>, data: &[T]) -> Result<Self> {
        Self::from_vec(label, data.to_vec())
    }

    /// Create a zero vector of length `len`.
    ///
    /// Fails with `InvalidArgument` if `len` is 0.
    ///
    /// ```
    /// use echelon::Vector;
    /// let v = Vector::<f64>::zeros("z", 4).unwrap();
    /// assert_eq!(v[3], 0.0);
    /// ```
    pub fn zeros(label: impl Into<String>, len: usize) -> Result<Self> {
        if len < 1 {
            return Err(Error::InvalidArgument(format!(
                "vector length must be at least 1, got {}",
                len
            )));
        }
        Ok(Self {
            data: vec![T::zero(); len],
            label: label.into(),
        })
    }

    /// Checked element read.
    pub fn get(&self, i: usize) -> Result<T> {
        self.check_index(i)?;
        Ok(self.data[i])
    }

    /// Checked element write.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        self.check_index(i)?;
        self.data[i] = value;
        Ok(())
    }

    /// Overwrite every entry with a uniformly drawn whole number in
    /// `[lower, upper)`.
    ///
    /// The generator is supplied by the caller so fills are reproducible.
    ///
    /// ```
    /// use echelon::Vector;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut v = Vector::<f64>::zeros("r", 5).unwrap();
    /// v.fill_random(&mut rng, -3, 3).unwrap();
    /// assert!(v.iter().all(|&x| x >= -3.0 && x < 3.0 && x.fract() == 0.0));
    /// ```
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, lower: i32, upper: i32) -> Result<()> {
        check_random_range(lower, upper)?;
        self.fill_whole(rng, lower, upper);
        Ok(())
    }

    /// [`fill_random`](Self::fill_random) over `[0, 10)`.
    pub fn fill_random_default<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill_whole(rng, DEFAULT_RANDOM_RANGE.0, DEFAULT_RANDOM_RANGE.1);
    }

    /// Unchecked fill; requires `lower < upper`.
    pub(crate) fn fill_whole<R: Rng + ?Sized>(&mut self, rng: &mut R, lower: i32, upper: i32) {
        for x in self.data.iter_mut() {
            *x = T::from_whole(rng.gen_range(lower..upper));
        }
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.data.len() {
            return Err(Error::IndexOutOfRange {
                axis: Axis::Element,
                index: i,
                len: self.data.len(),
            });
        }
        Ok(())
    }
}

/// Bounds used by `fill_random_default`.
pub(crate) const DEFAULT_RANDOM_RANGE: (i32, i32) = (0, 10);

pub(crate) fn check_random_range(lower: i32, upper: i32) -> Result<()> {
    if lower >= upper {
        return Err(Error::InvalidArgument(format!(
            "empty random range [{}, {})",
            lower, upper
        )));
    }
    Ok(())
}

impl<T> Vector<T> {
    /// Build without validation; callers guarantee `data` is non-empty.
    pub(crate) fn from_parts(label: String, data: Vec<T>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data, label }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a constructed vector; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Display label; empty for unlabeled results.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label, consuming `self`.
    ///
    /// ```
    /// use echelon::Vector;
    /// let a = Vector::from_slice("a", &[1.0, 2.0]).unwrap();
    /// let b = Vector::from_slice("b", &[3.0, 4.0]).unwrap();
    /// let sum = a.add(&b).unwrap().with_label("a+b");
    /// assert_eq!(sum.label(), "a+b");
    /// ```
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[inline]
    /// Entries as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    /// Entries as a mutable slice. The length cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Give up the entries, dropping the label.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ── Equality ────────────────────────────────────────────────────────

/// Entrywise comparison within [`FloatScalar::EQ_TOLERANCE`]; labels are
/// ignored.
impl<T: FloatScalar> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        entries_close(&self.data, &other.data)
    }
}

/// Hashes the length only, so vectors that compare equal within tolerance
/// always hash alike.
impl<T> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.len().hash(state);
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: FloatScalar + Display> Vector<T> {
    /// Render as a label line, a blank line, then one entry per line.
    pub fn render(&self, cfg: &FormatConfig) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_with(&mut out, cfg);
        out
    }

    fn write_with<W: fmt::Write>(&self, w: &mut W, cfg: &FormatConfig) -> fmt::Result {
        cfg.write_header(w, &self.label)?;
        for &x in &self.data {
            cfg.write_indent(w)?;
            cfg.write_entry(w, x)?;
            writeln!(w)?;
        }
        Ok(())
    }
}

impl<T: FloatScalar + Display> Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &FormatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T>(v: &Vector<T>) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn from_vec_rejects_empty() {
        let err = Vector::<f64>::from_vec("e", vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn zeros() {
        let v = Vector::<f64>::zeros("z", 3).unwrap();
        assert_eq!(v.len(), 3);
        assert!(v.iter().all(|&x| x == 0.0));
        assert!(Vector::<f64>::zeros("z", 0).is_err());
    }

    #[test]
    fn get_set() {
        let mut v = Vector::from_slice("v", &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.get(2).unwrap(), 3.0);
        v.set(0, 9.0).unwrap();
        assert_eq!(v[0], 9.0);

        assert_eq!(
            v.get(3).unwrap_err(),
            Error::IndexOutOfRange {
                axis: Axis::Element,
                index: 3,
                len: 3
            }
        );
        assert!(v.set(5, 1.0).is_err());
        assert_eq!(v.as_slice(), &[9.0, 2.0, 3.0]);
    }

    #[test]
    fn index_mut() {
        let mut v = Vector::<f64>::zeros("v", 2).unwrap();
        v[1] = 4.0;
        assert_eq!(v.get(1).unwrap(), 4.0);
    }

    #[test]
    fn equality_ignores_label_and_uses_tolerance() {
        let a = Vector::from_slice("a", &[1.0, 2.0, 3.0]).unwrap();
        let b = Vector::from_slice("b", &[1.001, 2.0, 2.999]).unwrap();
        let c = Vector::from_slice("a", &[1.1, 2.0, 3.0]).unwrap();
        let d = Vector::from_slice("a", &[1.0, 2.0]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn fill_random_is_seeded() {
        let mut v1 = Vector::<f64>::zeros("r", 8).unwrap();
        let mut v2 = Vector::<f64>::zeros("r", 8).unwrap();
        v1.fill_random(&mut StdRng::seed_from_u64(42), 2, 6).unwrap();
        v2.fill_random(&mut StdRng::seed_from_u64(42), 2, 6).unwrap();
        assert_eq!(v1.as_slice(), v2.as_slice());
        assert!(v1.iter().all(|&x| (2.0..6.0).contains(&x)));
    }

    #[test]
    fn fill_random_rejects_empty_range() {
        let mut v = Vector::from_slice("r", &[1.0, 2.0]).unwrap();
        let err = v.fill_random(&mut StdRng::seed_from_u64(1), 4, 4).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn fill_random_default_range() {
        let mut v = Vector::<f32>::zeros("r", 16).unwrap();
        v.fill_random_default(&mut StdRng::seed_from_u64(3));
        assert!(v.iter().all(|&x| (0.0..10.0).contains(&x)));
    }

    #[test]
    fn fill_random_default_matches_explicit_range() {
        let mut a = Vector::<f64>::zeros("a", 12).unwrap();
        let mut b = Vector::<f64>::zeros("b", 12).unwrap();
        a.fill_random_default(&mut StdRng::seed_from_u64(11));
        b.fill_random(&mut StdRng::seed_from_u64(11), 0, 10).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn display() {
        let v = Vector::from_slice("v", &[1.0, -0.5]).unwrap();
        let cfg = FormatConfig::new(2, 6);
        assert_eq!(v.render(&cfg), "v:\n\n      1.00\n     -0.50\n");
        assert_eq!(format!("{}", v), "v:\n\n        1.000\n       -0.500\n");
    }
}

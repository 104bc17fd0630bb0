//! Named-variable store mapping identifiers to vectors, matrices and
//! constants.
//!
//! The store is an ordinary owned value; nothing here is global. The
//! elimination engine never touches it.
//!
//! ```
//! use echelon::memory::{Memory, Value};
//! use echelon::Vector;
//!
//! let mut mem: Memory = Memory::new();
//! mem.store("A", 9.0).unwrap();
//! mem.store("B", Vector::from_slice("", &[1.0, 2.0, 3.0]).unwrap()).unwrap();
//! assert!(mem.store("A", 90.0).is_err());
//! assert_eq!(mem.retrieve_constant("A"), Some(9.0));
//! assert!(matches!(mem.free("B"), Some(Value::Vector(_))));
//! ```

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::traits::FloatScalar;
use crate::{Matrix, Vector};

/// A stored variable.
#[derive(Debug, Clone)]
pub enum Value<T> {
    /// A vector.
    Vector(Vector<T>),
    /// A matrix.
    Matrix(Matrix<T>),
    /// A single scalar.
    Constant(T),
}

impl<T: FloatScalar> PartialEq for Value<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Vector(a), Value::Vector(b)) => a == b,
            (Value::Matrix(a), Value::Matrix(b)) => a == b,
            (Value::Constant(a), Value::Constant(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Value<T> {
    /// Short name of the variant, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Vector(_) => "vector",
            Value::Matrix(_) => "matrix",
            Value::Constant(_) => "constant",
        }
    }
}

impl<T> From<Vector<T>> for Value<T> {
    fn from(v: Vector<T>) -> Self {
        Value::Vector(v)
    }
}

impl<T> From<Matrix<T>> for Value<T> {
    fn from(m: Matrix<T>) -> Self {
        Value::Matrix(m)
    }
}

impl From<f64> for Value<f64> {
    fn from(c: f64) -> Self {
        Value::Constant(c)
    }
}

impl From<f32> for Value<f32> {
    fn from(c: f32) -> Self {
        Value::Constant(c)
    }
}

/// Identifier → value store. Each identifier holds at most one value, of any
/// kind.
#[derive(Debug, Clone)]
pub struct Memory<T = f64> {
    entries: HashMap<String, Value<T>>,
}

impl<T> Default for Memory<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: FloatScalar> Memory<T> {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `label`.
    ///
    /// Fails with `InvalidArgument` if `label` is already taken, whatever the
    /// kind of the existing value.
    pub fn store(&mut self, label: impl Into<String>, value: impl Into<Value<T>>) -> Result<()> {
        let label = label.into();
        if self.entries.contains_key(&label) {
            return Err(Error::InvalidArgument(format!(
                "identifier {:?} is already taken",
                label
            )));
        }
        let value = value.into();
        debug!("store {:?} ({})", label, value.kind());
        self.entries.insert(label, value);
        Ok(())
    }

    /// The value stored under `label`, of any kind.
    pub fn retrieve(&self, label: &str) -> Option<&Value<T>> {
        self.entries.get(label)
    }

    /// The vector stored under `label`, or `None` if absent or not a vector.
    pub fn retrieve_vector(&self, label: &str) -> Option<&Vector<T>> {
        match self.entries.get(label) {
            Some(Value::Vector(v)) => Some(v),
            _ => None,
        }
    }

    /// The matrix stored under `label`, or `None` if absent or not a matrix.
    pub fn retrieve_matrix(&self, label: &str) -> Option<&Matrix<T>> {
        match self.entries.get(label) {
            Some(Value::Matrix(m)) => Some(m),
            _ => None,
        }
    }

    /// The constant stored under `label`, or `None` if absent or not a
    /// constant.
    pub fn retrieve_constant(&self, label: &str) -> Option<T> {
        match self.entries.get(label) {
            Some(Value::Constant(c)) => Some(*c),
            _ => None,
        }
    }

    /// Remove `label`, returning its value if it was present.
    pub fn free(&mut self, label: &str) -> Option<Value<T>> {
        let removed = self.entries.remove(label);
        if removed.is_some() {
            debug!("free {:?}", label);
        }
        removed
    }

    /// Whether `label` is taken.
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Number of stored variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

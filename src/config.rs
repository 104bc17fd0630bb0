//! Rendering options for vectors and matrices.

use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};

use crate::traits::FloatScalar;

const HIGHLIGHT_ON: &str = "\x1b[1m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";

/// Rendering options for the human-readable form of vectors and matrices.
///
/// `Display` uses [`FormatConfig::default`]; pass an explicit config to
/// `Vector::render` / `Matrix::render` to change it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    /// Digits after the decimal point.
    pub precision: usize,
    /// Minimum field width of every entry, right-aligned.
    pub width: usize,
    /// Spaces before each rendered row.
    pub indent: usize,
    /// Wrap non-zero entries in an ANSI bold escape.
    pub highlight_nonzero: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            width: 9,
            indent: 4,
            highlight_nonzero: false,
        }
    }
}

impl FormatConfig {
    /// Defaults with the given decimal precision and field width.
    pub fn new(precision: usize, width: usize) -> Self {
        Self {
            precision,
            width,
            ..Self::default()
        }
    }

    /// Turn bold highlighting of non-zero entries on or off.
    pub fn with_highlight(mut self, highlight_nonzero: bool) -> Self {
        self.highlight_nonzero = highlight_nonzero;
        self
    }

    /// Write the `"label:"` header and the blank line after it.
    pub(crate) fn write_header<W: fmt::Write>(&self, w: &mut W, label: &str) -> fmt::Result {
        writeln!(w, "{}:", label)?;
        writeln!(w)
    }

    pub(crate) fn write_indent<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        write!(w, "{:indent$}", "", indent = self.indent)
    }

    pub(crate) fn write_entry<W, T>(&self, w: &mut W, value: T) -> fmt::Result
    where
        W: fmt::Write,
        T: FloatScalar + Display,
    {
        let highlight = self.highlight_nonzero && value != T::zero();
        if highlight {
            w.write_str(HIGHLIGHT_ON)?;
        }
        write!(
            w,
            "{:>width$.prec$}",
            value,
            width = self.width,
            prec = self.precision
        )?;
        if highlight {
            w.write_str(HIGHLIGHT_OFF)?;
        }
        Ok(())
    }
}

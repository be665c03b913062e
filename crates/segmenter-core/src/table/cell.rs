// crates/segmenter-core/src/table/cell.rs

use std::fmt;

/// One cell of a loaded table.
///
/// Loaders hand us text; numbers are only recognised when rendering them back
/// gives the exact same text, so `0123` or `1.50` stay `Text` and nothing is
/// lost on the way out.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Classify a raw field as read from a delimited file.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            return Cell::Empty;
        }
        if let Ok(v) = field.parse::<f64>() {
            if v.is_finite() && v.to_string() == field {
                return Cell::Number(v);
            }
        }
        Cell::Text(field.to_owned())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_owned())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

//! The column-ordered table model.
//!
//! A [`Table`] is an ordered sequence of named [`Column`]s aligned by row,
//! with an optional row-label index. Tables are plain values: rendering never
//! mutates them, and every transformation produces a new table.
//!
//! # Example
//!
//! ```rust
//! use tablepix::{CellValue, Table};
//!
//! let table = Table::new()
//!     .column("product", vec![CellValue::text("Laptop"), CellValue::text("Mouse")])
//!     .column("price", vec![CellValue::Float(1299.99), CellValue::Float(29.99)]);
//!
//! assert_eq!(table.n_cols(), 2);
//! assert_eq!(table.n_rows(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single cell value.
///
/// `Missing` is distinct from zero and from the empty string. `Categorical`
/// wraps the underlying category value; classification and formatting see
/// through the wrapper and treat the cell as that underlying scalar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellValue {
    /// No value (NaN / null / NA).
    Missing,
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float. A NaN payload is treated as `Missing`.
    Float(f64),
    /// Free text.
    Text(String),
    /// A category code carrying its underlying value.
    Categorical(Box<CellValue>),
}

impl CellValue {
    /// Convenience constructor for text cells.
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Convenience constructor for categorical cells.
    pub fn categorical(inner: CellValue) -> Self {
        CellValue::Categorical(Box::new(inner))
    }

    /// Returns true for `Missing` and for NaN floats.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Float(f) => f.is_nan(),
            CellValue::Categorical(inner) => inner.is_missing(),
            _ => false,
        }
    }

    /// Interprets the cell as a number, if it is one.
    ///
    /// Text is accepted only when it is a clean numeric literal: digits with
    /// at most one leading minus and one decimal point, after stripping any
    /// grouping commas already present. Booleans and missing values are not
    /// numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) if !f.is_nan() => Some(*f),
            CellValue::Text(s) => {
                let cleaned = s.replace(',', "");
                if is_clean_numeric(&cleaned) {
                    cleaned.parse().ok()
                } else {
                    None
                }
            }
            CellValue::Categorical(inner) => inner.as_f64(),
            _ => None,
        }
    }

    /// The exact integer payload, if the cell holds one.
    ///
    /// Unlike [`as_f64`](Self::as_f64) this never loses precision, so
    /// formatting large integers does not round-trip through a float.
    pub fn as_i64_exact(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Categorical(inner) => inner.as_i64_exact(),
            _ => None,
        }
    }

    /// The cell's plain text representation, with no display formatting.
    ///
    /// Missing values render as the empty string.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Missing => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) if f.is_nan() => String::new(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Categorical(inner) => inner.display_text(),
        }
    }
}

impl From<serde_json::Value> for CellValue {
    /// Maps loosely typed JSON scalars onto the cell model.
    ///
    /// Whole numbers become `Int`, other numbers `Float`, `null` becomes
    /// `Missing`. Arrays and objects have no tabular meaning and fall back
    /// to their JSON text.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Missing,
            serde_json::Value::Bool(b) => CellValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => CellValue::Text(s),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// Returns true if `s` is a bare numeric literal: at least one digit, at most
/// one leading `-`, at most one `.`, and nothing else.
fn is_clean_numeric(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    if body.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    for ch in body.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// A column's element type, resolved once per column.
///
/// Resolution looks at the declared cell variants, not at what text might
/// parse as. Missing cells are ignored; a column of only missing cells is
/// `Mixed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// All cells are Int or Float.
    Numeric,
    /// All cells are Categorical.
    Categorical,
    /// All cells are Text.
    Text,
    /// All cells are Bool.
    Bool,
    /// Anything else (the "object" column of loosely typed sources).
    Mixed,
}

impl ColumnType {
    /// Resolves the element type for a slice of cells.
    pub fn of(values: &[CellValue]) -> ColumnType {
        let mut numeric = 0usize;
        let mut categorical = 0usize;
        let mut text = 0usize;
        let mut boolean = 0usize;
        let mut present = 0usize;

        for value in values {
            if value.is_missing() {
                continue;
            }
            present += 1;
            match value {
                CellValue::Int(_) | CellValue::Float(_) => numeric += 1,
                CellValue::Categorical(_) => categorical += 1,
                CellValue::Text(_) => text += 1,
                CellValue::Bool(_) => boolean += 1,
                CellValue::Missing => {}
            }
        }

        if present == 0 {
            ColumnType::Mixed
        } else if numeric == present {
            ColumnType::Numeric
        } else if categorical == present {
            ColumnType::Categorical
        } else if text == present {
            ColumnType::Text
        } else if boolean == present {
            ColumnType::Bool
        } else {
            ColumnType::Mixed
        }
    }
}

/// A named, ordered sequence of cell values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Display header, also a classification signal (year-keyword scanning).
    pub name: String,
    /// Cell values, one per row.
    pub values: Vec<CellValue>,
}

impl Column {
    /// Creates a column from a name and its values.
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The column's resolved element type.
    pub fn column_type(&self) -> ColumnType {
        ColumnType::of(&self.values)
    }
}

/// An ordered collection of equally sized columns with optional row labels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    index: Option<Vec<String>>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, returning the table for chaining.
    pub fn column(mut self, name: impl Into<String>, values: Vec<CellValue>) -> Self {
        self.columns.push(Column::new(name, values));
        self
    }

    /// Appends an already built column.
    pub fn push_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Sets the row labels.
    pub fn with_index(mut self, labels: Vec<String>) -> Self {
        self.index = Some(labels);
        self
    }

    /// The table's columns, in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The row labels, if any were supplied.
    pub fn index(&self) -> Option<&[String]> {
        self.index.as_deref()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken from the first column.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Checks the table's structural contract.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if there are no columns or no rows.
    /// - [`Error::Ragged`] if any column (or the index) disagrees with the
    ///   row count of the first column.
    pub fn validate(&self) -> Result<(), Error> {
        if self.n_cols() == 0 || self.n_rows() == 0 {
            return Err(Error::EmptyInput);
        }
        let expected = self.n_rows();
        for column in &self.columns {
            if column.values.len() != expected {
                return Err(Error::Ragged {
                    column: column.name.clone(),
                    len: column.values.len(),
                    expected,
                });
            }
        }
        if let Some(labels) = &self.index {
            if labels.len() != expected {
                return Err(Error::Ragged {
                    column: "<index>".to_string(),
                    len: labels.len(),
                    expected,
                });
            }
        }
        Ok(())
    }
}

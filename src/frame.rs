//! Tabular query results
//!
//! A [`Frame`] is an ordered set of named columns plus rows of dynamically
//! typed values, materialized from a SQL result set. It stands in for a
//! dataframe: labelled printing for stdout, typed column extraction for
//! chart input.

use std::fmt;

use crate::{Error, Result};

/// A single dynamically typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// SQLite INTEGER
    Int(i64),
    /// SQLite REAL
    Float(f64),
    /// SQLite TEXT
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.2}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

/// An ordered sequence of named-field records, one per result row.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    /// Create a frame from column names and row values.
    ///
    /// # Errors
    /// Returns error if any row width differs from the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::Frame(format!(
                    "row {i} has {} values, expected {}",
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names, in result order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row values, in result order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// True if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    ///
    /// # Errors
    /// Returns error if no column has that name.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::Frame(format!("column not found: {name}")))
    }

    /// Extract a text column as owned strings.
    ///
    /// Non-text values are rendered through their display form, matching
    /// how a label axis would show them.
    ///
    /// # Errors
    /// Returns error if the column does not exist.
    pub fn strings(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| match &row[idx] {
                Value::Text(s) => s.clone(),
                other => other.to_string(),
            })
            .collect())
    }

    /// Extract a numeric column as `f64`, coercing integers.
    ///
    /// # Errors
    /// Returns error if the column does not exist or holds a NULL or
    /// text value.
    #[allow(clippy::cast_precision_loss)]
    pub fn floats(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| match &row[idx] {
                Value::Int(v) => Ok(*v as f64),
                Value::Float(v) => Ok(*v),
                other => Err(Error::Frame(format!(
                    "column {name} row {i} is not numeric: {other:?}"
                ))),
            })
            .collect()
    }

    /// The single cell of a 1x1 frame, if numeric.
    ///
    /// SQL scalar aggregates (`SELECT SUM(..) FROM ..`) come back as one
    /// row with one column; `SUM` over an empty table yields NULL, which
    /// maps to `None`.
    ///
    /// # Errors
    /// Returns error if the frame is not exactly one row by one column,
    /// or the cell is non-numeric and non-NULL.
    #[allow(clippy::cast_precision_loss)]
    pub fn scalar(&self) -> Result<Option<f64>> {
        if self.columns.len() != 1 || self.rows.len() != 1 {
            return Err(Error::Frame(format!(
                "expected 1x1 frame, got {} columns x {} rows",
                self.columns.len(),
                self.rows.len()
            )));
        }
        match &self.rows[0][0] {
            Value::Null => Ok(None),
            Value::Int(v) => Ok(Some(*v as f64)),
            Value::Float(v) => Ok(Some(*v)),
            Value::Text(t) => Err(Error::Frame(format!("scalar cell is text: {t}"))),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column width = widest of header and any cell in that column.
        let mut widths: Vec<usize> = self.columns.iter().map(String::len).collect();
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        for (i, (name, width)) in self.columns.iter().zip(widths.iter().copied()).enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{name:>width$}")?;
        }
        for row in &rendered {
            writeln!(f)?;
            for (i, (cell, width)) in row.iter().zip(widths.iter().copied()).enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
        }
        Ok(())
    }
}

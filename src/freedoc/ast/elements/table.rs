//! Table element
//!
//! Headers plus a rectangular rows matrix. The table sub-parser pads every
//! row to the widest observed column count, so the renderer can consume
//! the grid without further validation.

use serde::Serialize;
use std::fmt;

/// A parsed table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Table { headers, rows }
    }

    /// Column count shared by the header and every row.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table({} columns, {} rows)",
            self.column_count(),
            self.rows.len()
        )
    }
}

//! Core table model shared by every pipeline stage.
//!
//! A [`Table`] is nothing more than an ordered list of rows, each row an
//! ordered list of string cells. The first row is the header; the model does
//! not enforce uniform row lengths, so ragged input flows through untouched.

use serde::{Deserialize, Serialize};

/// One record: an ordered sequence of string cells.
pub type Row = Vec<String>;

/// An in-memory table. Row 0 is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pre-assembled rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consume the table and return its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Append a row.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// The header row, if the table has any rows at all.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// The rows after the header.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows, not even a header.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the header row (0 for an empty table).
    pub fn column_count(&self) -> usize {
        self.header().map(Row::len).unwrap_or(0)
    }
}

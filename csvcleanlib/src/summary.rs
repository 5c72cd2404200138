//! Shape statistics for a table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::table::{Row, Table};

/// Row, column, missing-cell, and duplicate-row counts for a table.
///
/// Duplicate counting mirrors the deduplicator: only data rows participate,
/// and the header is never counted against them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    /// Number of data rows (header excluded)
    pub data_rows: usize,
    /// Number of columns in the header
    pub columns: usize,
    /// Empty cells across all rows, header included
    pub missing_cells: usize,
    /// Data rows that would be dropped by deduplication
    pub duplicate_rows: usize,
}

impl TableSummary {
    /// Compute the summary of a table.
    pub fn of(table: &Table) -> Self {
        let data = table.data_rows();
        let unique: HashSet<&Row> = data.iter().collect();

        let missing_cells = table
            .rows()
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count();

        Self {
            data_rows: data.len(),
            columns: table.column_count(),
            missing_cells,
            duplicate_rows: data.len() - unique.len(),
        }
    }
}

//! Configuration for the cleaning pipeline.
//!
//! [`CleanOptions`] carries the knobs every stage consults: the field
//! delimiter for reading and writing, the sentinel written into empty cells,
//! and per-step toggles for deduplication and filling.

use serde::{Deserialize, Serialize};

/// Default replacement for empty cells.
pub const DEFAULT_SENTINEL: &str = "Missing";

/// Options for a cleaning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Field delimiter for both input and output (single byte)
    pub delimiter: u8,
    /// Value written into empty cells by the fill step
    pub sentinel: String,
    /// Whether to remove duplicate data rows
    pub dedupe: bool,
    /// Whether to fill empty cells with the sentinel
    pub fill: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            sentinel: DEFAULT_SENTINEL.to_string(),
            dedupe: true,
            fill: true,
        }
    }
}

impl CleanOptions {
    /// Create new default options: comma-delimited, "Missing" sentinel,
    /// both cleaning steps enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the sentinel written into empty cells.
    pub fn sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    /// Enable or disable duplicate-row removal.
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Enable or disable missing-cell filling.
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }
}

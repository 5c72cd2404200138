//! # csvcleanlib
//!
//! A small library for one-shot batch cleaning of flat delimited data.
//!
//! ## Overview
//!
//! The library models a delimited file as an in-memory [`Table`] (ordered
//! rows of string cells, first row is the header) and runs it through a
//! linear pipeline:
//!
//! - **Read**: parse a delimited file into a `Table` ([`read_table`])
//! - **Dedupe**: drop exact-duplicate data rows, header always kept
//!   ([`dedupe_rows`])
//! - **Fill**: replace empty cells with a sentinel, `"Missing"` by default
//!   ([`fill_missing`])
//! - **Write**: serialize the `Table` back out ([`write_table`])
//!
//! [`clean_table`] composes the two cleaning steps per [`CleanOptions`] and
//! returns a [`CleanReport`] of what changed; [`TableSummary`] computes
//! row/column/missing/duplicate counts for display.
//!
//! Everything is synchronous and single-pass. Stages take and return owned
//! `Table` values; there is no shared state and no I/O outside read/write.
//!
//! ## Example
//!
//! ```rust
//! use csvcleanlib::{clean_table, read_table, write_table, CleanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("data.csv");
//! fs::write(&input, "name,age\nana,31\nana,31\nbo,\n").unwrap();
//!
//! let options = CleanOptions::new();
//! let table = read_table(&input, &options).unwrap();
//! let (cleaned, report) = clean_table(table, &options).unwrap();
//!
//! assert_eq!(report.duplicates_removed, 1);
//! assert_eq!(report.cells_filled, 1);
//!
//! let output = dir.path().join("cleaned_data.csv");
//! write_table(&cleaned, &output, &options).unwrap();
//! assert_eq!(
//!     fs::read_to_string(&output).unwrap(),
//!     "name,age\nana,31\nbo,Missing\n"
//! );
//! ```

pub mod clean;
pub mod error;
pub mod options;
pub mod read;
pub mod summary;
pub mod table;
pub mod write;

pub use clean::{clean_table, dedupe_rows, fill_missing, CleanReport};
pub use error::CleanError;
pub use options::{CleanOptions, DEFAULT_SENTINEL};
pub use read::read_table;
pub use summary::TableSummary;
pub use table::{Row, Table};
pub use write::write_table;

/// Result type for csvcleanlib operations
pub type Result<T> = std::result::Result<T, CleanError>;

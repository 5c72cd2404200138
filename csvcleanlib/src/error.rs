//! Error types for csvcleanlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, cleaning, or writing a table
#[derive(Error, Debug)]
pub enum CleanError {
    /// Input file does not exist
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// An empty table was handed to the deduplicator
    #[error("input table is empty: nothing to clean")]
    EmptyInput,

    /// Failed to read or parse the input file
    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: csv::Error },

    /// Failed to serialize or write the output file
    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: csv::Error },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

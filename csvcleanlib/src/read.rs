//! Reading delimited files into tables.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::CleanError;
use crate::options::CleanOptions;
use crate::table::{Row, Table};
use crate::Result;

/// Read a delimited file into a [`Table`].
///
/// The header is not treated specially at this layer: it arrives as the
/// first row and flows through the pipeline like any other. Parsing follows
/// RFC 4180 quoting, uses the delimiter from `options`, and accepts ragged
/// rows (`flexible`).
///
/// Fails with [`CleanError::FileNotFound`] when the path does not exist,
/// and [`CleanError::Read`] for any parse or I/O failure after that. No
/// partial table is returned on failure.
pub fn read_table(path: impl AsRef<Path>, options: &CleanOptions) -> Result<Table> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CleanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| CleanError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut table = Table::new();
    for record in reader.records() {
        let record = record.map_err(|e| CleanError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        table.push(record.iter().map(str::to_string).collect::<Row>());
    }

    Ok(table)
}

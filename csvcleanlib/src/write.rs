//! Writing tables back to delimited files.

use std::path::Path;

use csv::WriterBuilder;

use crate::error::CleanError;
use crate::options::CleanOptions;
use crate::table::Table;
use crate::Result;

/// Serialize a [`Table`] to a delimited file, creating or truncating it.
///
/// Rows are written in table order with the delimiter from `options` and
/// RFC 4180 quoting for cells containing the delimiter, the quote character,
/// or a newline. Write failures surface as [`CleanError::Write`]; a failure
/// partway through may leave a truncated file behind.
pub fn write_table(table: &Table, path: impl AsRef<Path>, options: &CleanOptions) -> Result<()> {
    let path = path.as_ref();

    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(|e| CleanError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    for row in table.rows() {
        writer.write_record(row).map_err(|e| CleanError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::read_table;
    use crate::table::Row;
    use std::fs;
    use tempfile::tempdir;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_write_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::from_rows(vec![row(&["a", "b"]), row(&["1", ""])]);

        write_table(&table, &path, &CleanOptions::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n1,\n");
    }

    #[test]
    fn test_write_truncates_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content that is much longer than the new one\n").unwrap();
        let table = Table::from_rows(vec![row(&["a"])]);

        write_table(&table, &path, &CleanOptions::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n");
    }

    #[test]
    fn test_write_quotes_delimiter_and_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::from_rows(vec![row(&["note"]), row(&["a,b"]), row(&["two\nlines"])]);

        write_table(&table, &path, &CleanOptions::new()).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "note\n\"a,b\"\n\"two\nlines\"\n"
        );
    }

    #[test]
    fn test_write_custom_delimiter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::from_rows(vec![row(&["a", "b"]), row(&["1", "2"])]);

        let options = CleanOptions::new().delimiter(b';');
        write_table(&table, &path, &options).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a;b\n1;2\n");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.csv");
        let table = Table::from_rows(vec![
            row(&["name", "note"]),
            row(&["ana", "likes, commas"]),
            row(&["bo", ""]),
        ]);

        let options = CleanOptions::new();
        write_table(&table, &path, &options).unwrap();
        let back = read_table(&path, &options).unwrap();

        assert_eq!(back, table);
    }

    #[test]
    fn test_write_to_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");
        let table = Table::from_rows(vec![row(&["a"])]);

        let err = write_table(&table, &path, &CleanOptions::new()).unwrap_err();

        assert!(matches!(err, CleanError::Write { .. }));
    }
}

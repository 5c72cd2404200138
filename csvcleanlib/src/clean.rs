//! Duplicate-row removal and missing-cell filling.
//!
//! The two cleaning steps are exposed individually ([`dedupe_rows`],
//! [`fill_missing`]) and composed by [`clean_table`], which runs whichever
//! steps the options enable and reports what changed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CleanError;
use crate::options::CleanOptions;
use crate::table::{Row, Table};
use crate::Result;

/// Counts of what a cleaning run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Data rows dropped as exact duplicates
    pub duplicates_removed: usize,
    /// Empty cells replaced with the sentinel
    pub cells_filled: usize,
}

/// Remove exact-duplicate data rows, keeping first occurrences in order.
///
/// The header row is kept unconditionally and is never added to the seen
/// set, so a data row that matches the header verbatim survives. Rows are
/// compared by full cell-sequence equality, case-sensitive.
///
/// Returns the deduplicated table and the number of rows dropped. Fails
/// with [`CleanError::EmptyInput`] when the table has no rows at all.
pub fn dedupe_rows(table: &Table) -> Result<(Table, usize)> {
    let (header, data) = match table.rows().split_first() {
        Some(split) => split,
        None => return Err(CleanError::EmptyInput),
    };

    let mut seen: HashSet<&Row> = HashSet::with_capacity(data.len());
    let mut kept = Table::new();
    kept.push(header.clone());

    let mut removed = 0;
    for row in data {
        if seen.insert(row) {
            kept.push(row.clone());
        } else {
            removed += 1;
        }
    }

    Ok((kept, removed))
}

/// Replace every empty cell with the sentinel, header included.
///
/// Ragged rows are each processed at their own length. Returns the filled
/// table and the number of cells replaced.
pub fn fill_missing(table: Table, sentinel: &str) -> (Table, usize) {
    let mut rows = table.into_rows();
    let mut filled = 0;

    for row in &mut rows {
        for cell in row.iter_mut() {
            if cell.is_empty() {
                *cell = sentinel.to_string();
                filled += 1;
            }
        }
    }

    (Table::from_rows(rows), filled)
}

/// Run the enabled cleaning steps over a table: deduplicate first, then
/// fill. Either step can be switched off in the options.
pub fn clean_table(table: Table, options: &CleanOptions) -> Result<(Table, CleanReport)> {
    let mut report = CleanReport::default();

    let table = if options.dedupe {
        let (deduped, removed) = dedupe_rows(&table)?;
        report.duplicates_removed = removed;
        deduped
    } else {
        table
    };

    let table = if options.fill {
        let (filled, count) = fill_missing(table, &options.sentinel);
        report.cells_filled = count;
        filled
    } else {
        table
    };

    Ok((table, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn table(rows: &[&[&str]]) -> Table {
        Table::from_rows(rows.iter().map(|r| row(r)).collect())
    }

    #[test]
    fn test_dedupe_drops_exact_duplicates() {
        let input = table(&[&["a", "b"], &["1", "2"], &["1", "2"], &["3", ""]]);

        let (deduped, removed) = dedupe_rows(&input).unwrap();

        assert_eq!(deduped, table(&[&["a", "b"], &["1", "2"], &["3", ""]]));
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence_order() {
        let input = table(&[&["h"], &["b"], &["a"], &["b"], &["c"], &["a"]]);

        let (deduped, removed) = dedupe_rows(&input).unwrap();

        assert_eq!(deduped, table(&[&["h"], &["b"], &["a"], &["c"]]));
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_dedupe_header_only_passthrough() {
        let input = table(&[&["a", "b"]]);

        let (deduped, removed) = dedupe_rows(&input).unwrap();

        assert_eq!(deduped, input);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_dedupe_header_identical_data_row_survives() {
        // The header is exempt from the seen set, so a data row equal to it
        // is not a duplicate. Two such data rows still collapse to one.
        let input = table(&[&["a", "b"], &["a", "b"], &["a", "b"]]);

        let (deduped, removed) = dedupe_rows(&input).unwrap();

        assert_eq!(deduped, table(&[&["a", "b"], &["a", "b"]]));
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_dedupe_is_case_sensitive() {
        let input = table(&[&["h"], &["abc"], &["ABC"]]);

        let (deduped, removed) = dedupe_rows(&input).unwrap();

        assert_eq!(deduped, input);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_dedupe_empty_table() {
        let err = dedupe_rows(&Table::new()).unwrap_err();
        assert!(matches!(err, CleanError::EmptyInput));
    }

    #[test]
    fn test_dedupe_idempotent() {
        let input = table(&[&["a", "b"], &["1", "2"], &["1", "2"], &["3", "4"]]);

        let (once, _) = dedupe_rows(&input).unwrap();
        let (twice, removed) = dedupe_rows(&once).unwrap();

        assert_eq!(twice, once);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_fill_replaces_empty_cells() {
        let input = table(&[&["a", "b"], &["x", "", "y"], &["", ""]]);

        let (filled, count) = fill_missing(input, "Missing");

        assert_eq!(
            filled,
            table(&[&["a", "b"], &["x", "Missing", "y"], &["Missing", "Missing"]])
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn test_fill_processes_header_too() {
        let input = table(&[&["a", ""], &["1", "2"]]);

        let (filled, count) = fill_missing(input, "Missing");

        assert_eq!(filled, table(&[&["a", "Missing"], &["1", "2"]]));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_fill_no_empty_cells() {
        let input = table(&[&["a", "b"], &["1", "2"]]);

        let (filled, count) = fill_missing(input.clone(), "Missing");

        assert_eq!(filled, input);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_fill_custom_sentinel() {
        let input = table(&[&["a"], &[""]]);

        let (filled, _) = fill_missing(input, "N/A");

        assert_eq!(filled, table(&[&["a"], &["N/A"]]));
    }

    #[test]
    fn test_fill_idempotent() {
        let input = table(&[&["a", "b"], &["1", ""]]);

        let (once, _) = fill_missing(input, "Missing");
        let (twice, count) = fill_missing(once.clone(), "Missing");

        assert_eq!(twice, once);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_fill_empty_table_is_total() {
        let (filled, count) = fill_missing(Table::new(), "Missing");
        assert!(filled.is_empty());
        assert_eq!(count, 0);
    }

    #[test]
    fn test_clean_table_full_pipeline() {
        let input = table(&[&["a", "b"], &["1", "2"], &["1", "2"], &["3", ""]]);

        let (cleaned, report) = clean_table(input, &CleanOptions::new()).unwrap();

        assert_eq!(cleaned, table(&[&["a", "b"], &["1", "2"], &["3", "Missing"]]));
        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(report.cells_filled, 1);
    }

    #[test]
    fn test_clean_table_dedupe_disabled() {
        let input = table(&[&["a"], &["1"], &["1"]]);

        let options = CleanOptions::new().with_dedupe(false);
        let (cleaned, report) = clean_table(input.clone(), &options).unwrap();

        assert_eq!(cleaned, input);
        assert_eq!(report.duplicates_removed, 0);
    }

    #[test]
    fn test_clean_table_fill_disabled() {
        let input = table(&[&["a"], &[""]]);

        let options = CleanOptions::new().with_fill(false);
        let (cleaned, report) = clean_table(input.clone(), &options).unwrap();

        assert_eq!(cleaned, input);
        assert_eq!(report.cells_filled, 0);
    }

    #[test]
    fn test_clean_table_dedupes_before_filling() {
        // ["3", ""] and ["3", "Missing"] are distinct at dedup time; filling
        // afterwards makes them equal, and both must survive.
        let input = table(&[&["a", "b"], &["3", ""], &["3", "Missing"]]);

        let (cleaned, report) = clean_table(input, &CleanOptions::new()).unwrap();

        assert_eq!(
            cleaned,
            table(&[&["a", "b"], &["3", "Missing"], &["3", "Missing"]])
        );
        assert_eq!(report.duplicates_removed, 0);
        assert_eq!(report.cells_filled, 1);
    }

    #[test]
    fn test_clean_table_empty_input() {
        let err = clean_table(Table::new(), &CleanOptions::new()).unwrap_err();
        assert!(matches!(err, CleanError::EmptyInput));
    }
}

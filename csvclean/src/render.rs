//! Console rendering for tables, summaries, and cleaning reports.

use console::Style;
use csvcleanlib::{CleanReport, Row, Table, TableSummary};

/// Placeholder shown for empty cells in table dumps.
const EMPTY_CELL: &str = "(empty)";

fn display_cell(cell: &str) -> &str {
    if cell.is_empty() {
        EMPTY_CELL
    } else {
        cell
    }
}

/// Render a section heading, e.g. `--- Original Data ---`.
pub fn section(title: &str) -> String {
    format!("--- {} ---", Style::new().bold().apply_to(title))
}

/// Render a table as an aligned text grid.
///
/// `limit` caps the number of data rows printed (0 = no limit); the header
/// is always printed. Empty cells show a dimmed placeholder so missing
/// values stand out in the dump.
pub fn render_table(table: &Table, limit: usize) -> String {
    let header = match table.header() {
        Some(header) => header,
        None => return String::from("(empty table)\n"),
    };

    let data = table.data_rows();
    let shown = if limit > 0 && data.len() > limit {
        &data[..limit]
    } else {
        data
    };
    let hidden = data.len() - shown.len();

    // Column widths over everything being printed; ragged rows may widen
    // the grid beyond the header.
    let mut widths: Vec<usize> = header.iter().map(|c| display_cell(c).len()).collect();
    for row in shown {
        for (i, cell) in row.iter().enumerate() {
            let len = display_cell(cell).len();
            if i == widths.len() {
                widths.push(len);
            } else if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    let bold = Style::new().bold();
    let dim = Style::new().dim();

    let mut out = String::new();
    out.push_str(&format_row(header, &widths, Some(&bold), &dim));
    let grid_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(grid_width));
    out.push('\n');

    for row in shown {
        out.push_str(&format_row(row, &widths, None, &dim));
    }
    if hidden > 0 {
        out.push_str(&format!("{}\n", dim.apply_to(format!("({hidden} more rows)"))));
    }

    out
}

fn format_row(row: &Row, widths: &[usize], emphasis: Option<&Style>, dim: &Style) -> String {
    let mut cells = Vec::with_capacity(row.len());
    for (i, cell) in row.iter().enumerate() {
        let width = widths.get(i).copied().unwrap_or(0);
        let padded = format!("{:<width$}", display_cell(cell), width = width);
        let rendered = if cell.is_empty() {
            dim.apply_to(padded).to_string()
        } else if let Some(style) = emphasis {
            style.apply_to(padded).to_string()
        } else {
            padded
        };
        cells.push(rendered);
    }

    let mut line = cells.join("  ");
    while line.ends_with(' ') {
        line.pop();
    }
    line.push('\n');
    line
}

/// Render the summary counts, one per line.
pub fn render_summary(summary: &TableSummary) -> String {
    format!(
        "Rows: {}\nColumns: {}\nMissing cells: {}\nDuplicate rows: {}\n",
        summary.data_rows, summary.columns, summary.missing_cells, summary.duplicate_rows
    )
}

/// Render the cleaning report, one change count per line.
pub fn render_report(report: &CleanReport) -> String {
    format!(
        "Cleaning complete.\nRemoved duplicate rows: {}\nFilled missing cells: {}\n",
        report.duplicates_removed, report.cells_filled
    )
}

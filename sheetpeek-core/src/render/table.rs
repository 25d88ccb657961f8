//! Fixed-width table rendering

use crate::reader::{CellValue, Sheet};

const COLUMN_GAP: &str = "  ";
const ELLIPSIS: &str = "...";

/// Render a sheet as a right-aligned text table with a header line and no
/// row-index column. Cell text longer than `max_colwidth` characters is cut
/// short with `...`; the sheet itself is not modified.
pub fn render_table(sheet: &Sheet, max_colwidth: usize) -> String {
    if sheet.is_empty() {
        return format!("Empty table\nColumns: [{}]", sheet.columns.join(", "));
    }

    let body: Vec<Vec<String>> = sheet
        .rows
        .iter()
        .map(|row| row.iter().map(|v| cell_text(v, max_colwidth)).collect())
        .collect();

    let widths: Vec<usize> = sheet
        .columns
        .iter()
        .enumerate()
        .map(|(col, header)| {
            body.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(body.len() + 1);
    lines.push(format_line(&sheet.columns, &widths));
    for row in &body {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

/// Single-line display text of a cell, cut to `max_width` characters
fn cell_text(value: &CellValue, max_width: usize) -> String {
    let text = value
        .to_string()
        .replace('\r', "\\r")
        .replace('\n', "\\n")
        .replace('\t', "\\t");

    if text.chars().count() <= max_width {
        return text;
    }

    let keep = max_width.saturating_sub(ELLIPSIS.len());
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

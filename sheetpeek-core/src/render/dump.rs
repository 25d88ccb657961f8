//! Whole-workbook dump

use std::io::{self, Write};
use tracing::debug;

use super::{render_table, rule};
use crate::reader::Workbook;

/// Write every sheet, in workbook order, as a framed heading followed by its
/// table with entirely missing rows and columns removed.
pub fn dump_workbook<W: Write>(out: &mut W, workbook: &Workbook, max_colwidth: usize) -> io::Result<()> {
    for sheet in &workbook.sheets {
        let cleaned = sheet.drop_missing();
        debug!(
            sheet = %sheet.name,
            dropped_rows = sheet.row_count() - cleaned.row_count(),
            dropped_columns = sheet.column_count() - cleaned.column_count(),
            "dropped missing rows and columns"
        );

        write!(out, "\n\n{}\n", rule())?;
        writeln!(out, "SHEET: {}", sheet.name)?;
        writeln!(out, "{}", rule())?;
        writeln!(out, "{}", render_table(&cleaned, max_colwidth))?;
    }
    Ok(())
}

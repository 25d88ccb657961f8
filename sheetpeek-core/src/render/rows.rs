//! Row-by-row listing of one sheet

use std::io::{self, Write};

use super::rule;
use crate::reader::Sheet;

/// Write the sheet heading, its full header list, and for every data row a
/// `Row <index>:` marker followed by one `  <header>: <value>` line per
/// non-blank cell. Blank cells produce no line.
pub fn print_rows<W: Write>(out: &mut W, sheet: &Sheet) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "SHEET: {}", sheet.name)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "\nAll columns: {}", quoted_list(&sheet.columns))?;
    writeln!(out, "\nData:")?;

    for index in 0..sheet.row_count() {
        writeln!(out, "\nRow {}:", index)?;
        for (header, value) in sheet.present_cells(index) {
            writeln!(out, "  {}: {}", header, value)?;
        }
    }
    Ok(())
}

/// `['a', 'b']`, switching to double quotes for names holding a `'`
fn quoted_list(names: &[String]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .map(|name| {
            if name.contains('\'') {
                format!("\"{}\"", name)
            } else {
                format!("'{}'", name)
            }
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}

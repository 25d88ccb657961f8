//! Excel/ODS file reader using calamine

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, SheetType, Sheets, open_workbook_auto};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::PeekError;

pub mod headers;
pub mod workbook;

pub use workbook::{CellValue, Sheet, Workbook};

/// Text values read as missing unless configured otherwise
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options applied while converting spreadsheet cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Exact text contents that mark a cell as missing
    pub na_values: HashSet<String>,
}

impl ReadOptions {
    pub fn with_na_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            na_values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace text listed as an NA marker with a missing cell
    fn mask(&self, value: CellValue) -> CellValue {
        match value {
            CellValue::Text(ref s) if self.na_values.contains(s.as_str()) => CellValue::Empty,
            other => other,
        }
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self::with_na_values(DEFAULT_NA_VALUES.iter().copied())
    }
}

/// Read every worksheet of a workbook, in the workbook's own order
pub fn read_workbook<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Workbook> {
    let path = path.as_ref();
    let mut excel = open(path)?;

    let sheet_names: Vec<String> = excel
        .sheets_metadata()
        .iter()
        .filter(|meta| {
            let is_worksheet = matches!(meta.typ, SheetType::WorkSheet);
            if !is_worksheet {
                debug!(sheet = %meta.name, kind = ?meta.typ, "skipping non-worksheet sheet");
            }
            is_worksheet
        })
        .map(|meta| meta.name.clone())
        .collect();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in &sheet_names {
        let range = excel
            .worksheet_range(name)
            .with_context(|| format!("Failed to read sheet '{}' in {}", name, path.display()))?;
        sheets.push(parse_sheet(name, &range, options));
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

/// Read a single worksheet by name
pub fn read_sheet<P: AsRef<Path>>(path: P, name: &str, options: &ReadOptions) -> Result<Sheet> {
    let path = path.as_ref();
    let mut excel = open(path)?;

    let available = excel.sheet_names();
    if !available.iter().any(|s| s == name) {
        return Err(PeekError::SheetNotFound {
            name: name.to_string(),
            available,
        }
        .into());
    }

    let range = excel
        .worksheet_range(name)
        .with_context(|| format!("Failed to read sheet '{}' in {}", name, path.display()))?;

    Ok(parse_sheet(name, &range, options))
}

fn open(path: &Path) -> Result<Sheets<BufReader<File>>> {
    let excel = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
    debug!(path = %path.display(), sheets = excel.sheet_names().len(), "opened workbook");
    Ok(excel)
}

/// Lay the used cells out on a grid anchored at A1 and split it into the
/// header row and data rows.
fn parse_sheet(name: &str, range: &Range<Data>, options: &ReadOptions) -> Sheet {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    // Bounds come from cells holding data, so trailing empty rows and
    // columns the file still declares are ignored.
    let mut used = Vec::new();
    let (mut height, mut width) = (0usize, 0usize);
    for (row, col, data) in range.used_cells() {
        let row = row + start_row as usize;
        let col = col + start_col as usize;
        height = height.max(row + 1);
        width = width.max(col + 1);
        used.push((row, col, data));
    }

    if height == 0 {
        debug!(sheet = name, "sheet has no data");
        return Sheet::new(name, Vec::new(), Vec::new());
    }

    let mut grid = vec![vec![CellValue::Empty; width]; height];
    for (row, col, data) in used {
        grid[row][col] = parse_cell_value(data);
    }

    // NA markers only apply to data rows; a header reading "NA" keeps its name
    let mut grid = grid.into_iter();
    let header_row = grid.next().unwrap_or_default();
    let columns = headers::header_names(&header_row);
    let rows: Vec<Vec<CellValue>> = grid
        .map(|row| row.into_iter().map(|value| options.mask(value)).collect())
        .collect();

    debug!(
        sheet = name,
        rows = rows.len(),
        columns = columns.len(),
        "parsed sheet"
    );

    Sheet::new(name, columns, rows)
}

/// Convert a calamine cell. Error cells (`#DIV/0!`, `#REF!`, ...) carry no
/// value and read as missing.
fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(_) | Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ts) if !dt.is_duration() => {
                CellValue::DateTime(ts.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            _ => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::DateTime(s.clone()),
        Data::DurationIso(s) => CellValue::DateTime(s.clone()),
    }
}

//! Workbook data structures

use std::fmt;
use std::path::PathBuf;

/// Represents a complete workbook
#[derive(Debug, Clone)]
pub struct Workbook {
    pub path: PathBuf,
    /// Sheets in the workbook's native order
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get all sheet names
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// A worksheet as a table: the first spreadsheet row supplies the headers,
/// every following row is data.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    /// Each row holds exactly `columns.len()` cells
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();

        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Get the cell at the given data row and column
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the sheet has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy of the sheet without rows that are entirely missing, then
    /// without columns that are entirely missing in the remaining rows.
    ///
    /// With no rows left every column counts as entirely missing, so an
    /// empty sheet also loses all of its columns.
    pub fn drop_missing(&self) -> Sheet {
        let rows: Vec<&Vec<CellValue>> = self
            .rows
            .iter()
            .filter(|row| !row.iter().all(CellValue::is_missing))
            .collect();

        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&col| rows.iter().any(|row| !row[col].is_missing()))
            .collect();

        Sheet {
            name: self.name.clone(),
            columns: keep.iter().map(|&col| self.columns[col].clone()).collect(),
            rows: rows
                .into_iter()
                .map(|row| keep.iter().map(|&col| row[col].clone()).collect())
                .collect(),
        }
    }

    /// Cells of a data row that hold a non-blank value, paired with their
    /// column header, in column order.
    pub fn present_cells(&self, row: usize) -> impl Iterator<Item = (&str, &CellValue)> {
        self.columns
            .iter()
            .zip(self.rows.get(row).into_iter().flatten())
            .filter(|(_, value)| !value.is_blank())
            .map(|(header, value)| (header.as_str(), value))
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Timestamp or ISO date/duration, already rendered as text
    DateTime(String),
}

impl CellValue {
    /// Check if the cell holds no value at all
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell is missing or renders to whitespace only
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) | CellValue::DateTime(s) => s.trim().is_empty(),
            CellValue::Number(_) | CellValue::Boolean(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str("NaN"),
            // f64's Display already drops the fraction of integral values
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) | CellValue::DateTime(s) => f.write_str(s),
            CellValue::Boolean(true) => f.write_str("True"),
            CellValue::Boolean(false) => f.write_str("False"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sample() -> Sheet {
        Sheet::new(
            "Data",
            vec!["A".into(), "B".into(), "C".into()],
            vec![
                vec![text("a1"), CellValue::Empty, CellValue::Number(1.0)],
                vec![CellValue::Empty, CellValue::Empty, CellValue::Empty],
                vec![text("a3"), CellValue::Empty, text("   ")],
            ],
        )
    }

    #[test]
    fn test_new_pads_short_rows() {
        let sheet = Sheet::new("S", vec!["A".into(), "B".into()], vec![vec![text("x")]]);
        assert_eq!(sheet.get(0, 1), Some(&CellValue::Empty));
        assert_eq!(sheet.get(0, 2), None);
    }

    #[test]
    fn test_drop_missing_rows_and_columns() {
        let cleaned = sample().drop_missing();

        assert_eq!(cleaned.columns, vec!["A", "C"]);
        assert_eq!(cleaned.row_count(), 2);
        assert_eq!(cleaned.get(1, 0), Some(&text("a3")));
        // Whitespace text is not missing, so it survives the dump filter
        assert_eq!(cleaned.get(1, 1), Some(&text("   ")));
    }

    #[test]
    fn test_drop_missing_empty_sheet_loses_columns() {
        let sheet = Sheet::new("Empty", vec!["A".into()], Vec::new());
        let cleaned = sheet.drop_missing();
        assert!(cleaned.is_empty());
        assert_eq!(cleaned.column_count(), 0);
    }

    #[test]
    fn test_present_cells_skips_blank() {
        let sheet = sample();
        let first: Vec<_> = sheet.present_cells(0).collect();
        assert_eq!(first, vec![("A", &text("a1")), ("C", &CellValue::Number(1.0))]);

        let third: Vec<_> = sheet.present_cells(2).collect();
        assert_eq!(third, vec![("A", &text("a3"))]);

        assert_eq!(sheet.present_cells(1).count(), 0);
        assert_eq!(sheet.present_cells(99).count(), 0);
    }

    #[test]
    fn test_blank_predicate() {
        assert!(CellValue::Empty.is_blank());
        assert!(text("").is_blank());
        assert!(text(" \t\n").is_blank());
        assert!(!text(" x ").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Boolean(false).is_blank());
        assert!(!text("").is_missing());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(3.0).to_string(), "3");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Number(-0.125).to_string(), "-0.125");
        assert_eq!(CellValue::Boolean(true).to_string(), "True");
        assert_eq!(CellValue::Empty.to_string(), "NaN");
        assert_eq!(CellValue::DateTime("2024-03-05 00:00:00".into()).to_string(), "2024-03-05 00:00:00");
    }
}

//! Column header naming

use super::workbook::CellValue;
use std::collections::HashSet;

/// Turn the first sheet row into unique column headers.
///
/// Missing or empty-text header cells are named `Unnamed: <index>`. Other
/// text, including NA markers such as `NA`, is kept as written. A repeated
/// name gets a `.N` suffix, counting up from 1 past any suffix already in use.
pub fn header_names(cells: &[CellValue]) -> Vec<String> {
    let raw: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            if cell.is_missing() || cell == &CellValue::Text(String::new()) {
                format!("Unnamed: {}", index)
            } else {
                cell.to_string()
            }
        })
        .collect();

    let mut taken: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(raw.len());

    for name in raw {
        if taken.insert(name.clone()) {
            names.push(name);
            continue;
        }

        let mut suffix = 1;
        let unique = loop {
            let candidate = format!("{}.{}", name, suffix);
            if !taken.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        taken.insert(unique.clone());
        names.push(unique);
    }

    names
}

//! Raw CSV reading into a string table.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;

/// A CSV file as read: normalized headers plus rows of trimmed cells.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Trim a header, strip a UTF-8 BOM, and collapse internal whitespace runs.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file, treating the first row as headers.
///
/// Rows may be ragged; callers index cells positionally and treat missing
/// trailing cells as empty.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(normalize_cell).collect());
    }

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_normalized() {
        assert_eq!(normalize_header(" Local_Co_Name"), "Local_Co_Name");
        assert_eq!(normalize_header("\u{feff}Provider Name"), "Provider Name");
        assert_eq!(normalize_header("County   Name "), "County Name");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn cells_are_trimmed() {
        assert_eq!(normalize_cell("  King County "), "King County");
        assert_eq!(normalize_cell("WA"), "WA");
    }
}

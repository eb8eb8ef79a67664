//! Shared CSV utilities for loading reference packs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::StandardsError;

/// Environment variable for overriding the reference pack directory.
pub const TABLES_ENV_VAR: &str = "AECC_TABLES_DIR";

/// Default reference pack root.
///
/// Checks `AECC_TABLES_DIR` first, then falls back to the `tables/`
/// directory at the workspace root.
pub fn default_tables_root() -> PathBuf {
    if let Ok(root) = std::env::var(TABLES_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tables")
}

/// Read a CSV file into a vector of row maps keyed by column header.
///
/// Handles BOM characters and trims whitespace from headers and values.
pub(crate) fn read_csv_rows(
    path: &Path,
) -> Result<(Vec<String>, Vec<BTreeMap<String, String>>), StandardsError> {
    let file = std::fs::File::open(path).map_err(|e| StandardsError::io(path, e))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, e.to_string()))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| StandardsError::csv(path, e.to_string()))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok((headers, rows))
}

/// Fail fast when a table file lacks one of its published columns.
pub(crate) fn require_columns(
    path: &Path,
    headers: &[String],
    required: &[&str],
) -> Result<(), StandardsError> {
    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(StandardsError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

/// Get a field value from a row, returning empty string if not present.
pub(crate) fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Parse a coefficient or threshold cell.
///
/// Blank cells mean "no value published" and load as 0.0; the threshold
/// tables use `Infinity` for an unbounded upper band.
pub(crate) fn parse_number(
    path: &Path,
    column: &str,
    raw: &str,
) -> Result<f64, StandardsError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    if raw.eq_ignore_ascii_case("infinity") || raw.eq_ignore_ascii_case("inf") {
        return Ok(f64::INFINITY);
    }
    raw.parse::<f64>().map_err(|e| StandardsError::Number {
        path: path.to_path_buf(),
        column: column.to_string(),
        message: format!("{raw}: {e}"),
    })
}

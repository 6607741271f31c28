//! Shared CSV reading for the claims extract and the severity lookup.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A CSV file read fully into memory. Headers keep their source order and
/// every row is padded or truncated to the header width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Case-insensitive column resolution.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Resolve a column the caller cannot proceed without.
    pub fn require_column(&self, path: &Path, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| IngestError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
    }
}

/// A row dropped during ingestion, kept for caller-side diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row, counted over non-blank rows.
    pub row: usize,
    /// The offending cell, verbatim.
    pub value: String,
}

/// Cell access tolerant of short rows.
pub(crate) fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn reader_error(path: &Path, error: csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::Csv {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Read a whole CSV file. The first line is the header; a file without one
/// is an error, while a header with no data rows is a valid empty table.
/// Rows that are entirely empty are dropped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| reader_error(path, error))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| reader_error(path, error))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(|header| header.is_empty()) {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| reader_error(path, error))?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

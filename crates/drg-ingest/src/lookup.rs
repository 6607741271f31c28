//! Severity lookup ingestion.
//!
//! The lookup file maps diagnosis codes to their severity class with two
//! required columns, `ICDCode` and `MCCorCC`.

use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use drg_model::{SeverityClass, SeverityLookup};

use crate::csv::{SkippedRow, cell, read_csv_table};
use crate::error::Result;

/// The severity lookup after typing.
#[derive(Debug)]
pub struct LookupIngest {
    pub lookup: SeverityLookup,
    /// Data rows in the file, including rows that were dropped.
    pub rows_read: usize,
    /// Rows whose MCCorCC value was neither MCC nor CC.
    pub skipped_classes: Vec<SkippedRow>,
}

/// Load the severity lookup. Rows without a code are ignored; rows with an
/// unrecognized class are dropped and reported back to the caller. When a
/// code appears twice the later row wins.
pub fn load_severity_lookup(path: &Path) -> Result<LookupIngest> {
    let table = read_csv_table(path)?;
    let code_col = table.require_column(path, "ICDCode")?;
    let class_col = table.require_column(path, "MCCorCC")?;

    let mut lookup = SeverityLookup::new();
    let mut skipped_classes = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        let data_row = index + 1;
        let code = cell(row, code_col);
        if code.is_empty() {
            continue;
        }
        let class_raw = cell(row, class_col);
        match SeverityClass::from_str(class_raw) {
            Ok(class) => {
                if lookup.insert(code, class).is_some() {
                    debug!(row = data_row, code, "duplicate lookup code, later row wins");
                }
            }
            Err(_) => {
                debug!(row = data_row, "lookup row dropped: unrecognized severity class");
                skipped_classes.push(SkippedRow {
                    row: data_row,
                    value: class_raw.to_string(),
                });
            }
        }
    }
    Ok(LookupIngest {
        lookup,
        rows_read: table.rows.len(),
        skipped_classes,
    })
}

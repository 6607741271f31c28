//! Claims extract ingestion.
//!
//! The extract is one row per audited claim. Four columns are required
//! (`DRG`, `PRIM_DX`, `LOS`, `IDSavings`); the secondary diagnosis columns
//! `A_DX2` through `A_DX24` are picked up when present.

use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use drg_model::ClaimRecord;

use crate::csv::{CsvTable, SkippedRow, cell, read_csv_table};
use crate::error::Result;

const SECONDARY_FIRST: u32 = 2;
const SECONDARY_LAST: u32 = 24;

/// The claims extract after typing.
#[derive(Debug)]
pub struct ClaimsIngest {
    pub claims: Vec<ClaimRecord>,
    /// Data rows in the file, including rows that were dropped.
    pub rows_read: usize,
    /// Rows dropped because IDSavings would not parse as an amount.
    pub skipped_savings: Vec<SkippedRow>,
}

/// Load and type the claims extract.
///
/// A row whose IDSavings cell is missing or not numeric cannot be settled
/// as approved or denied, so it is dropped here and reported back to the
/// caller. A missing LOS does not drop the row; the aggregator excludes
/// those claims itself.
pub fn load_claims(path: &Path) -> Result<ClaimsIngest> {
    let table = read_csv_table(path)?;
    let drg_col = table.require_column(path, "DRG")?;
    let prim_dx_col = table.require_column(path, "PRIM_DX")?;
    let los_col = table.require_column(path, "LOS")?;
    let savings_col = table.require_column(path, "IDSavings")?;
    let secondary_cols = secondary_columns(&table);

    let mut claims = Vec::with_capacity(table.rows.len());
    let mut skipped_savings = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        let data_row = index + 1;
        let savings_raw = cell(row, savings_col);
        let Some(savings) = parse_amount(savings_raw) else {
            debug!(row = data_row, "claim row dropped: IDSavings not numeric");
            skipped_savings.push(SkippedRow {
                row: data_row,
                value: savings_raw.to_string(),
            });
            continue;
        };
        let secondary: Vec<String> = secondary_cols
            .iter()
            .map(|&col| cell(row, col))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();
        claims.push(ClaimRecord {
            row: data_row,
            drg: cell(row, drg_col).to_string(),
            prim_dx: cell(row, prim_dx_col).to_string(),
            los: parse_los(cell(row, los_col)),
            savings,
            secondary,
        });
    }
    Ok(ClaimsIngest {
        claims,
        rows_read: table.rows.len(),
        skipped_savings,
    })
}

fn secondary_columns(table: &CsvTable) -> Vec<usize> {
    (SECONDARY_FIRST..=SECONDARY_LAST)
        .filter_map(|n| table.column(&format!("A_DX{n}")))
        .collect()
}

/// Parse a dollar amount, tolerating thousands separators and scientific
/// notation. Returns `None` for anything else, including an empty cell.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace([',', ' ', '\u{a0}'], "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(&cleaned).ok())
}

/// Parse a length of stay. Missing and non-numeric cells (an explicit NaN
/// included) yield `None`.
fn parse_los(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    (!value.is_nan()).then_some(value)
}

//! Denial-analysis report CSV output.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use rust_decimal::Decimal;

use drg_model::ReportRow;

/// Report columns in output order.
pub const REPORT_HEADERS: [&str; 10] = [
    "DRG",
    "PRIM_DX",
    "SDX_Set",
    "LOS_Bin",
    "Total_Claims",
    "Approved",
    "Denied",
    "Denial_Percent",
    "Total_Savings",
    "Avg_Saving_Per_Claim",
];

/// Render an amount or percentage cell with exactly two decimals. Values
/// reaching this point are already rounded, so this only pads.
pub fn amount_cell(value: Decimal) -> String {
    format!("{value:.2}")
}

/// Render the report as CSV text, exactly the bytes `write_report_csv`
/// puts on disk.
pub fn render_report_csv(rows: &[ReportRow]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record(REPORT_HEADERS)
        .context("write report header")?;
    for row in rows {
        writer
            .write_record([
                row.drg.clone(),
                row.prim_dx.clone(),
                row.sdx_set_label(),
                row.los_bin.to_string(),
                row.total_claims.to_string(),
                row.approved.to_string(),
                row.denied.to_string(),
                amount_cell(row.denial_percent),
                amount_cell(row.total_savings),
                amount_cell(row.avg_saving_per_claim),
            ])
            .context("write report row")?;
    }
    let bytes = writer.into_inner().context("flush report buffer")?;
    String::from_utf8(bytes).context("report is not valid UTF-8")
}

/// Write the report to disk. Rendering the same rows writes the same
/// bytes, so rerunning an analysis produces an identical file.
pub fn write_report_csv(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let rendered = render_report_csv(rows)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}

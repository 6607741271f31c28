use std::path::PathBuf;

use drg_model::ReportRow;

/// Outcome of a full `analyze` run, consumed by the summary printer.
#[derive(Debug)]
pub struct AnalysisResult {
    pub claims_path: PathBuf,
    pub lookup_path: PathBuf,
    /// Where the report landed; `None` on a dry run.
    pub report_path: Option<PathBuf>,
    /// Report rows in final output order.
    pub rows: Vec<ReportRow>,
    pub claims_rows_read: usize,
    pub claims_bucketed: usize,
    /// Claims dropped for a missing or non-numeric LOS.
    pub claims_dropped: usize,
    /// Claim rows skipped at ingestion for a non-numeric IDSavings.
    pub skipped_savings: usize,
    pub lookup_entries: usize,
    /// Lookup rows skipped for an unrecognized severity class.
    pub lookup_skipped: usize,
}

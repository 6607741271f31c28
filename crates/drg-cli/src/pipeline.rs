//! Analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the severity lookup and the claims extract
//! 2. **Aggregate**: Bucket claims and derive the report rows
//! 3. **Output**: Write the denial-analysis report CSV
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; `commands::run_analyze` wires them together.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use drg_core::{AggregationOutcome, Aggregator, SdxClassifier};
use drg_ingest::{load_claims, load_severity_lookup};
use drg_model::{ClaimRecord, ReportRow};
use drg_report::write_report_csv;

use crate::logging::redact_value;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Classifier over the loaded severity lookup.
    pub classifier: SdxClassifier,
    /// Typed claims ready for aggregation.
    pub claims: Vec<ClaimRecord>,
    /// Data rows in the claims file, dropped rows included.
    pub claims_rows_read: usize,
    /// Claim rows skipped for a non-numeric IDSavings.
    pub skipped_savings: usize,
    /// Entries in the severity lookup.
    pub lookup_entries: usize,
    /// Lookup rows skipped for an unrecognized severity class.
    pub lookup_skipped: usize,
}

/// Load the severity lookup and the claims extract.
///
/// Skipped rows are logged one warning each; the offending cell values
/// stay out of the logs unless `--log-data` was given.
pub fn ingest(claims_path: &Path, lookup_path: &Path) -> Result<IngestResult> {
    let lookup = load_severity_lookup(lookup_path)?;
    for skipped in &lookup.skipped_classes {
        warn!(
            row = skipped.row,
            value = redact_value(&skipped.value),
            "lookup row skipped: MCCorCC is neither MCC nor CC"
        );
    }

    let claims = load_claims(claims_path)?;
    for skipped in &claims.skipped_savings {
        warn!(
            row = skipped.row,
            value = redact_value(&skipped.value),
            "claim row skipped: IDSavings is not numeric"
        );
    }

    let claims_rows_read = claims.rows_read;
    let skipped_savings = claims.skipped_savings.len();
    let lookup_entries = lookup.lookup.len();
    let lookup_skipped = lookup.skipped_classes.len();
    Ok(IngestResult {
        classifier: SdxClassifier::new(lookup.lookup),
        claims: claims.claims,
        claims_rows_read,
        skipped_savings,
        lookup_entries,
        lookup_skipped,
    })
}

// ============================================================================
// Stage 2: Aggregate
// ============================================================================

/// Bucket the claims and derive ordered report rows.
pub fn aggregate(claims: &[ClaimRecord], classifier: &SdxClassifier) -> AggregationOutcome {
    let mut aggregator = Aggregator::new(classifier);
    for claim in claims {
        aggregator.observe(claim);
    }
    debug!(buckets = aggregator.bucket_count(), "accumulation finished");
    aggregator.finish()
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Default report location: next to the claims file.
pub fn default_output_path(claims_path: &Path) -> PathBuf {
    claims_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
        .join("drg_denial_analysis.csv")
}

/// Write the report, or skip writing on a dry run. Returns the path the
/// report landed at.
pub fn output(report_path: &Path, rows: &[ReportRow], dry_run: bool) -> Result<Option<PathBuf>> {
    if dry_run {
        return Ok(None);
    }
    write_report_csv(report_path, rows)?;
    Ok(Some(report_path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::default_output_path;

    #[test]
    fn default_output_sits_next_to_the_claims_file() {
        let path = default_output_path(Path::new("/data/q3/claims.csv"));
        assert_eq!(path, Path::new("/data/q3/drg_denial_analysis.csv"));
    }

    #[test]
    fn bare_filename_defaults_to_the_working_directory() {
        let path = default_output_path(Path::new("claims.csv"));
        assert_eq!(path, Path::new("drg_denial_analysis.csv"));
    }
}

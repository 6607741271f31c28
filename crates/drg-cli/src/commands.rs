//! Command handlers for the CLI.

use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use drg_model::LosBin;

use crate::cli::AnalyzeArgs;
use crate::pipeline::{IngestResult, aggregate, default_output_path, ingest, output};
use crate::summary::apply_table_style;
use crate::types::AnalysisResult;

/// Run the full denial analysis over a claims extract.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let analyze_span = info_span!("analyze", claims = %args.claims.display());
    let _guard = analyze_span.enter();

    // =========================================================================
    // Stage 1: Ingest - load the severity lookup and the claims extract
    // =========================================================================
    let ingest_span = info_span!(
        "ingest",
        claims = %args.claims.display(),
        lookup = %args.lookup.display()
    );
    let ingest_start = Instant::now();
    let IngestResult {
        classifier,
        claims,
        claims_rows_read,
        skipped_savings,
        lookup_entries,
        lookup_skipped,
    } = ingest_span.in_scope(|| ingest(&args.claims, &args.lookup))?;
    info!(
        lookup_entries,
        claims_rows = claims_rows_read,
        claims_usable = claims.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Aggregate - bucket the claims and derive the report rows
    // =========================================================================
    let aggregate_span = info_span!("aggregate", claims = claims.len());
    let aggregate_start = Instant::now();
    let outcome = aggregate_span.in_scope(|| aggregate(&claims, &classifier));
    info!(
        buckets = outcome.rows.len(),
        claims_bucketed = outcome.claims_bucketed,
        claims_dropped = outcome.claims_dropped,
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregation complete"
    );

    // =========================================================================
    // Stage 3: Output - write the report CSV
    // =========================================================================
    let report_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.claims));
    let output_span = info_span!("output", report = %report_path.display());
    let output_start = Instant::now();
    let written = output_span.in_scope(|| output(&report_path, &outcome.rows, args.dry_run))?;
    match &written {
        Some(path) => info!(
            report = %path.display(),
            duration_ms = output_start.elapsed().as_millis(),
            "report written"
        ),
        None => info!("dry run, report not written"),
    }

    Ok(AnalysisResult {
        claims_path: args.claims.clone(),
        lookup_path: args.lookup.clone(),
        report_path: written,
        rows: outcome.rows,
        claims_rows_read,
        claims_bucketed: outcome.claims_bucketed,
        claims_dropped: outcome.claims_dropped,
        skipped_savings,
        lookup_entries,
        lookup_skipped,
    })
}

/// Print the LOS bins and the interval each one covers.
pub fn run_bins() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Bin", "Interval"]);
    apply_table_style(&mut table);
    for bin in LosBin::ALL {
        table.add_row(vec![bin.label().to_string(), interval_label(bin)]);
    }
    println!("{table}");
    Ok(())
}

/// Human-readable interval for a bin, right-closed like the binning itself.
fn interval_label(bin: LosBin) -> String {
    match (bin.lower_edge(), bin.upper_edge()) {
        (None, Some(upper)) => format!("LOS <= {upper}"),
        (Some(lower), Some(upper)) => format!("{lower} < LOS <= {upper}"),
        (Some(lower), None) => format!("LOS > {lower}"),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use drg_model::LosBin;

    use super::interval_label;

    #[test]
    fn interval_labels_are_right_closed() {
        assert_eq!(interval_label(LosBin::Days0To1), "LOS <= 1");
        assert_eq!(interval_label(LosBin::Days3To5), "3 < LOS <= 5");
        assert_eq!(interval_label(LosBin::Days75Plus), "LOS > 75");
    }
}

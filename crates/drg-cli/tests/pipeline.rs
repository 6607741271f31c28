use std::fs;
use std::path::{Path, PathBuf};

use drg_cli::pipeline::{aggregate, default_output_path, ingest, output};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("drg_cli_{name}_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_inputs(dir: &Path, claims: &str, lookup: &str) -> (PathBuf, PathBuf) {
    let claims_path = dir.join("claims.csv");
    let lookup_path = dir.join("lookup.csv");
    fs::write(&claims_path, claims).expect("write claims");
    fs::write(&lookup_path, lookup).expect("write lookup");
    (claims_path, lookup_path)
}

const WORKED_CLAIMS: &str = "\
DRG,PRIM_DX,LOS,IDSavings,A_DX2
470,M1711,4,0,E119 - CC
470,M1711,4,500,I10
";

const WORKED_LOOKUP: &str = "\
ICDCode,MCCorCC
I10,MCC
";

const WORKED_REPORT: &str = "\
DRG,PRIM_DX,SDX_Set,LOS_Bin,Total_Claims,Approved,Denied,Denial_Percent,Total_Savings,Avg_Saving_Per_Claim
470,M1711,E119,3-5,1,1,0,0.00,0.00,0.00
470,M1711,I10,3-5,1,0,1,100.00,500.00,500.00
";

#[test]
fn analysis_matches_the_worked_denial_example() {
    let dir = unique_temp_dir("worked");
    let (claims_path, lookup_path) = write_inputs(&dir, WORKED_CLAIMS, WORKED_LOOKUP);

    let ingested = ingest(&claims_path, &lookup_path).expect("ingest");
    assert_eq!(ingested.claims_rows_read, 2);
    assert_eq!(ingested.skipped_savings, 0);
    assert_eq!(ingested.lookup_entries, 1);
    assert_eq!(ingested.lookup_skipped, 0);

    let outcome = aggregate(&ingested.claims, &ingested.classifier);
    assert_eq!(outcome.claims_bucketed, 2);
    assert_eq!(outcome.claims_dropped, 0);
    assert_eq!(outcome.rows.len(), 2);

    let report_path = dir.join("report.csv");
    let written = output(&report_path, &outcome.rows, false).expect("output");
    assert_eq!(written.as_deref(), Some(report_path.as_path()));
    let rendered = fs::read_to_string(&report_path).expect("read report");
    assert_eq!(rendered, WORKED_REPORT);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rerunning_the_analysis_is_byte_identical() {
    let dir = unique_temp_dir("idempotent");
    let (claims_path, lookup_path) = write_inputs(&dir, WORKED_CLAIMS, WORKED_LOOKUP);
    let report_path = dir.join("report.csv");

    let ingested = ingest(&claims_path, &lookup_path).expect("first ingest");
    let outcome = aggregate(&ingested.claims, &ingested.classifier);
    output(&report_path, &outcome.rows, false).expect("first output");
    let first = fs::read(&report_path).expect("read first report");

    let ingested = ingest(&claims_path, &lookup_path).expect("second ingest");
    let outcome = aggregate(&ingested.claims, &ingested.classifier);
    output(&report_path, &outcome.rows, false).expect("second output");
    let second = fs::read(&report_path).expect("read second report");

    assert_eq!(first, second);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dry_run_writes_no_report() {
    let dir = unique_temp_dir("dry_run");
    let (claims_path, lookup_path) = write_inputs(&dir, WORKED_CLAIMS, WORKED_LOOKUP);

    let ingested = ingest(&claims_path, &lookup_path).expect("ingest");
    let outcome = aggregate(&ingested.claims, &ingested.classifier);
    let report_path = dir.join("report.csv");
    let written = output(&report_path, &outcome.rows, true).expect("output");

    assert!(written.is_none());
    assert!(!report_path.exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_claims_file_is_an_error() {
    let dir = unique_temp_dir("missing");
    let lookup_path = dir.join("lookup.csv");
    fs::write(&lookup_path, WORKED_LOOKUP).expect("write lookup");

    let error = ingest(&dir.join("absent.csv"), &lookup_path).expect_err("ingest should fail");
    assert!(error.to_string().contains("absent.csv"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn skipped_and_dropped_rows_are_counted() {
    let dir = unique_temp_dir("diagnostics");
    let claims = "\
DRG,PRIM_DX,LOS,IDSavings,A_DX2
470,M1711,4,250,E119
470,M1711,4,pending,E119
470,M1711,,0,E119
";
    let lookup = "\
ICDCode,MCCorCC
E119,CC
N179,MAJOR
";
    let (claims_path, lookup_path) = write_inputs(&dir, claims, lookup);

    let ingested = ingest(&claims_path, &lookup_path).expect("ingest");
    assert_eq!(ingested.claims_rows_read, 3);
    assert_eq!(ingested.skipped_savings, 1);
    assert_eq!(ingested.claims.len(), 2);
    assert_eq!(ingested.lookup_entries, 1);
    assert_eq!(ingested.lookup_skipped, 1);

    let outcome = aggregate(&ingested.claims, &ingested.classifier);
    assert_eq!(outcome.claims_in, 2);
    assert_eq!(outcome.claims_bucketed, 1);
    assert_eq!(outcome.claims_dropped, 1);
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].denied, 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn explicit_output_overrides_the_default_location() {
    let dir = unique_temp_dir("explicit");
    let (claims_path, lookup_path) = write_inputs(&dir, WORKED_CLAIMS, WORKED_LOOKUP);

    let ingested = ingest(&claims_path, &lookup_path).expect("ingest");
    let outcome = aggregate(&ingested.claims, &ingested.classifier);
    let custom = dir.join("q3_denials.csv");
    output(&custom, &outcome.rows, false).expect("output");

    assert!(custom.exists());
    assert!(!default_output_path(&claims_path).exists());
    let _ = fs::remove_dir_all(&dir);
}

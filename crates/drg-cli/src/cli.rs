//! CLI argument definitions for the DRG audit analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "drg-audit",
    version,
    about = "DRG claim-audit denial analysis",
    long_about = "Group audited inpatient claims by DRG, primary diagnosis, secondary\n\
                  diagnosis severity set, and length-of-stay bin, then report approval\n\
                  and denial counts with identified savings per bucket."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow claim-level values (diagnosis codes, amounts) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate a claims extract into the denial-analysis report.
    Analyze(AnalyzeArgs),

    /// List the fixed length-of-stay bins.
    Bins,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the claims extract CSV.
    #[arg(value_name = "CLAIMS_CSV")]
    pub claims: PathBuf,

    /// Path to the severity lookup CSV (columns ICDCode, MCCorCC).
    #[arg(long = "lookup", value_name = "PATH")]
    pub lookup: PathBuf,

    /// Report output path (default: drg_denial_analysis.csv next to the claims file).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Aggregate and print the summary without writing the report.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of buckets shown in the summary table.
    #[arg(long = "top", value_name = "N", default_value_t = 20)]
    pub top: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

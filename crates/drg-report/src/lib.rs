//! Report output for DRG claim-audit denial analysis.

pub mod csv;

pub use csv::{REPORT_HEADERS, amount_cell, render_report_csv, write_report_csv};

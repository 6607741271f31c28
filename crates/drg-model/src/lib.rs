//! Core data model for DRG claim-audit denial analysis.
//!
//! The types here are shared by the ingestion, aggregation, and reporting
//! crates: claim records as read from the extract, the severity lookup,
//! the bucket key and its counters, and the final report rows.

pub mod bucket;
pub mod claim;
pub mod error;
pub mod los;
pub mod lookup;
pub mod report;
pub mod severity;

pub use bucket::{BucketKey, BucketStats};
pub use claim::ClaimRecord;
pub use error::{ModelError, Result};
pub use los::LosBin;
pub use lookup::SeverityLookup;
pub use report::ReportRow;
pub use severity::SeverityClass;

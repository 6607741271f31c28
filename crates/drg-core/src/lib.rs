//! Grouping and aggregation for DRG claim-audit denial analysis.
//!
//! Claims are grouped into buckets keyed by DRG, primary diagnosis,
//! severity set of secondary diagnoses, and length-of-stay bin. Each
//! bucket counts approvals and denials and accumulates identified
//! savings, from which the final report rows are derived.

pub mod aggregate;
pub mod classify;
pub mod key;

pub use aggregate::{AggregationOutcome, Aggregator, aggregate, round_money};
pub use classify::{SdxClassification, SdxClassifier};
pub use key::build_bucket_key;

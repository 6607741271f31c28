//! Reading the claims extract and the MCC/CC severity lookup into typed
//! records.
//!
//! Loaders in this crate resolve columns case-insensitively, type every
//! field at the boundary, and report dropped rows back to the caller
//! instead of failing the whole run.

pub mod claims;
pub mod csv;
pub mod error;
pub mod lookup;

pub use claims::{ClaimsIngest, load_claims};
pub use csv::{CsvTable, SkippedRow, read_csv_table};
pub use error::{IngestError, Result};
pub use lookup::{LookupIngest, load_severity_lookup};

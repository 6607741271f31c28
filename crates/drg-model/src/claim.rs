use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One claim row from the audit extract, typed at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// 1-based data row, for diagnostics.
    pub row: usize,
    /// Diagnosis-related group, verbatim from the source cell.
    pub drg: String,
    /// Primary diagnosis code, uppercased when the bucket key is built.
    pub prim_dx: String,
    /// Length of stay in days. `None` when the cell was empty or not
    /// numeric; such claims never reach a bucket.
    pub los: Option<f64>,
    /// Audit result in dollars. Zero means the claim was approved as
    /// billed; any other value marks a denial.
    pub savings: Decimal,
    /// Non-empty secondary diagnosis cells in source column order.
    pub secondary: Vec<String>,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::los::LosBin;

/// One row of the final denial-analysis report.
///
/// The derived amounts are already rounded to two decimals;
/// `avg_saving_per_claim` is computed from the rounded `total_savings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub drg: String,
    pub prim_dx: String,
    pub sdx_set: Vec<String>,
    pub los_bin: LosBin,
    pub total_claims: usize,
    pub approved: usize,
    pub denied: usize,
    pub denial_percent: Decimal,
    pub total_savings: Decimal,
    pub avg_saving_per_claim: Decimal,
}

impl ReportRow {
    /// The severity set as it appears in the report, e.g. `"E119, I10"`.
    pub fn sdx_set_label(&self) -> String {
        self.sdx_set.join(", ")
    }
}

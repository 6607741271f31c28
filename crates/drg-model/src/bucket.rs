use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::los::LosBin;

/// Composite grouping key for one aggregation bucket.
///
/// `sdx_set` is sorted and deduplicated before the key is built, so claims
/// whose secondary columns hold the same codes in a different order land in
/// the same bucket.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketKey {
    pub drg: String,
    pub prim_dx: String,
    pub sdx_set: Vec<String>,
    pub los_bin: LosBin,
}

/// Additive per-bucket counters, zeroed when a key is first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStats {
    pub total_claims: usize,
    pub approved: usize,
    pub denied: usize,
    /// Sum of positive savings on denied claims.
    pub total_savings: Decimal,
}

impl BucketStats {
    /// Fold another bucket's counters into this one. Stats for the same key
    /// accumulated over separate partitions of the claims merge this way.
    pub fn merge(&mut self, other: &BucketStats) {
        self.total_claims += other.total_claims;
        self.approved += other.approved;
        self.denied += other.denied;
        self.total_savings += other.total_savings;
    }
}

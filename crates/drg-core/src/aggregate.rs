//! Bucket accumulation and report derivation.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use drg_model::{BucketKey, BucketStats, ClaimRecord, ReportRow};

use crate::classify::SdxClassifier;
use crate::key::build_bucket_key;

/// One bucket's accumulation slot. `first_seen` pins the order in which
/// keys appeared so full sort ties resolve the same way on every run.
#[derive(Debug, Clone)]
struct BucketSlot {
    stats: BucketStats,
    first_seen: usize,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone)]
pub struct AggregationOutcome {
    /// Report rows in final output order.
    pub rows: Vec<ReportRow>,
    /// Claims offered to the aggregator.
    pub claims_in: usize,
    /// Claims that produced a bucket key and were counted.
    pub claims_bucketed: usize,
    /// Claims dropped for a missing or non-numeric LOS.
    pub claims_dropped: usize,
}

/// Single-pass aggregator over claim records.
///
/// A bucket springs into existence zeroed on the first claim that hits its
/// key and is only ever mutated additively afterwards. A claim is either
/// approved (audit found nothing, savings of exactly zero) or denied;
/// savings accumulate only for denied claims with a positive amount, so a
/// negative adjustment counts as a denial without lowering the total.
#[derive(Debug)]
pub struct Aggregator<'a> {
    classifier: &'a SdxClassifier,
    buckets: HashMap<BucketKey, BucketSlot>,
    claims_in: usize,
    claims_dropped: usize,
}

impl<'a> Aggregator<'a> {
    pub fn new(classifier: &'a SdxClassifier) -> Self {
        Self {
            classifier,
            buckets: HashMap::new(),
            claims_in: 0,
            claims_dropped: 0,
        }
    }

    /// Fold one claim into its bucket.
    pub fn observe(&mut self, claim: &ClaimRecord) {
        self.claims_in += 1;
        let Some(key) = build_bucket_key(claim, self.classifier) else {
            self.claims_dropped += 1;
            debug!(row = claim.row, "claim dropped: no LOS bin");
            return;
        };
        let next_index = self.buckets.len();
        let slot = self.buckets.entry(key).or_insert_with(|| BucketSlot {
            stats: BucketStats::default(),
            first_seen: next_index,
        });
        slot.stats.total_claims += 1;
        if claim.savings.is_zero() {
            slot.stats.approved += 1;
        } else {
            slot.stats.denied += 1;
            if claim.savings > Decimal::ZERO {
                slot.stats.total_savings += claim.savings;
            }
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Consume the aggregator, yielding the raw per-bucket counters. Used
    /// when stats from separate claim partitions are merged before the
    /// report is derived.
    pub fn into_stats(self) -> HashMap<BucketKey, BucketStats> {
        self.buckets
            .into_iter()
            .map(|(key, slot)| (key, slot.stats))
            .collect()
    }

    /// Derive the final ordered report.
    ///
    /// Rows sort by claim volume descending, then DRG ascending, then LOS
    /// bin in interval order. The sort is stable over first-seen order, so
    /// buckets tying on all three keys keep the order their first claims
    /// arrived in.
    pub fn finish(self) -> AggregationOutcome {
        let claims_in = self.claims_in;
        let claims_dropped = self.claims_dropped;
        let mut slots: Vec<(BucketKey, BucketSlot)> = self.buckets.into_iter().collect();
        slots.sort_by_key(|(_, slot)| slot.first_seen);
        let mut rows: Vec<ReportRow> = slots
            .into_iter()
            .map(|(key, slot)| derive_row(key, &slot.stats))
            .collect();
        rows.sort_by(|a, b| {
            b.total_claims
                .cmp(&a.total_claims)
                .then_with(|| a.drg.cmp(&b.drg))
                .then_with(|| a.los_bin.cmp(&b.los_bin))
        });
        AggregationOutcome {
            rows,
            claims_in,
            claims_bucketed: claims_in - claims_dropped,
            claims_dropped,
        }
    }
}

/// Run a whole aggregation pass over an in-memory claims slice.
pub fn aggregate(claims: &[ClaimRecord], classifier: &SdxClassifier) -> AggregationOutcome {
    let mut aggregator = Aggregator::new(classifier);
    for claim in claims {
        aggregator.observe(claim);
    }
    aggregator.finish()
}

/// Round to cents, halves away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn derive_row(key: BucketKey, stats: &BucketStats) -> ReportRow {
    let total = Decimal::from(stats.total_claims);
    // Total savings round first; the per-claim average divides the rounded
    // figure so the two columns always agree.
    let total_savings = round_money(stats.total_savings);
    let (denial_percent, avg_saving_per_claim) = if stats.total_claims == 0 {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            round_money(Decimal::from(stats.denied) * Decimal::ONE_HUNDRED / total),
            round_money(total_savings / total),
        )
    };
    ReportRow {
        drg: key.drg,
        prim_dx: key.prim_dx,
        sdx_set: key.sdx_set,
        los_bin: key.los_bin,
        total_claims: stats.total_claims,
        approved: stats.approved,
        denied: stats.denied,
        denial_percent,
        total_savings,
        avg_saving_per_claim,
    }
}

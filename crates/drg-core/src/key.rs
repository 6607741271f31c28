//! Bucket key derivation per claim.

use std::collections::BTreeSet;

use drg_model::{BucketKey, ClaimRecord, LosBin, SeverityClass};

use crate::classify::SdxClassifier;

/// Build the grouping key for one claim, or `None` when the claim has no
/// usable LOS and is excluded from aggregation.
///
/// Secondary codes are collected into per-severity sets so column order
/// never changes the key. A claim with at least one MCC is keyed on its
/// MCC codes alone; its CC codes are discarded. Cells that classify with
/// an empty code (a dangling `- MCC`) contribute nothing.
pub fn build_bucket_key(claim: &ClaimRecord, classifier: &SdxClassifier) -> Option<BucketKey> {
    let los_bin = LosBin::from_los(claim.los?)?;
    let mut mcc_codes: BTreeSet<String> = BTreeSet::new();
    let mut cc_codes: BTreeSet<String> = BTreeSet::new();
    for raw in &claim.secondary {
        let classification = classifier.classify(raw);
        if !classification.is_classified() {
            continue;
        }
        match classification.severity {
            Some(SeverityClass::Mcc) => {
                mcc_codes.insert(classification.base_code);
            }
            Some(SeverityClass::Cc) => {
                cc_codes.insert(classification.base_code);
            }
            None => {}
        }
    }
    let sdx_set: Vec<String> = if mcc_codes.is_empty() {
        cc_codes.into_iter().collect()
    } else {
        mcc_codes.into_iter().collect()
    };
    Some(BucketKey {
        drg: claim.drg.clone(),
        prim_dx: claim.prim_dx.trim().to_uppercase(),
        sdx_set,
        los_bin,
    })
}

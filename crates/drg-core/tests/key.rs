use rust_decimal_macros::dec;

use drg_core::{SdxClassifier, build_bucket_key};
use drg_model::{ClaimRecord, LosBin, SeverityClass, SeverityLookup};

fn classifier() -> SdxClassifier {
    let mut lookup = SeverityLookup::new();
    lookup.insert("I10", SeverityClass::Mcc);
    lookup.insert("E119", SeverityClass::Cc);
    lookup.insert("N179", SeverityClass::Cc);
    SdxClassifier::new(lookup)
}

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().copied().map(str::to_string).collect()
}

fn claim(los: Option<f64>, secondary: Vec<String>) -> ClaimRecord {
    ClaimRecord {
        row: 1,
        drg: "470".to_string(),
        prim_dx: "M1711".to_string(),
        los,
        savings: dec!(0),
        secondary,
    }
}

#[test]
fn secondary_column_order_does_not_change_the_key() {
    let classifier = classifier();
    let forward = claim(Some(4.0), codes(&["E119", "N179"]));
    let backward = claim(Some(4.0), codes(&["N179", "E119"]));

    let key_a = build_bucket_key(&forward, &classifier).unwrap();
    let key_b = build_bucket_key(&backward, &classifier).unwrap();

    assert_eq!(key_a, key_b);
    assert_eq!(key_a.sdx_set, vec!["E119".to_string(), "N179".to_string()]);
}

#[test]
fn an_mcc_discards_all_cc_codes() {
    let classifier = classifier();
    let with_mcc = claim(Some(4.0), codes(&["E119 - CC", "I10", "N179"]));

    let key = build_bucket_key(&with_mcc, &classifier).unwrap();

    assert_eq!(key.sdx_set, vec!["I10".to_string()]);
}

#[test]
fn codes_are_deduplicated_and_sorted() {
    let classifier = classifier();
    let noisy = claim(Some(4.0), codes(&["i10", "J189 - MCC", "I10 - MCC"]));

    let key = build_bucket_key(&noisy, &classifier).unwrap();

    assert_eq!(key.sdx_set, vec!["I10".to_string(), "J189".to_string()]);
}

#[test]
fn unclassified_codes_leave_the_set_empty() {
    let classifier = classifier();
    let unknown = claim(Some(4.0), codes(&["X999", "nan", ""]));

    let key = build_bucket_key(&unknown, &classifier).unwrap();

    assert!(key.sdx_set.is_empty());
}

#[test]
fn a_dangling_suffix_does_not_suppress_cc_codes() {
    // "- MCC" carries severity but no code, so the claim still keys on its
    // CC set.
    let classifier = classifier();
    let dangling = claim(Some(4.0), codes(&["- MCC", "E119 - CC"]));

    let key = build_bucket_key(&dangling, &classifier).unwrap();

    assert_eq!(key.sdx_set, vec!["E119".to_string()]);
}

#[test]
fn prim_dx_is_uppercased_and_trimmed() {
    let classifier = classifier();
    let mut lowercase = claim(Some(4.0), Vec::new());
    lowercase.prim_dx = " m1711 ".to_string();

    let key = build_bucket_key(&lowercase, &classifier).unwrap();

    assert_eq!(key.prim_dx, "M1711");
}

#[test]
fn drg_is_kept_verbatim() {
    let classifier = classifier();
    let mut odd_drg = claim(Some(4.0), Vec::new());
    odd_drg.drg = "470a".to_string();

    let key = build_bucket_key(&odd_drg, &classifier).unwrap();

    assert_eq!(key.drg, "470a");
}

#[test]
fn boundary_los_lands_in_the_lower_bin() {
    let classifier = classifier();

    let on_edge = build_bucket_key(&claim(Some(5.0), Vec::new()), &classifier).unwrap();
    assert_eq!(on_edge.los_bin, LosBin::Days3To5);

    let past_edge = build_bucket_key(&claim(Some(5.0001), Vec::new()), &classifier).unwrap();
    assert_eq!(past_edge.los_bin, LosBin::Days5To10);
}

#[test]
fn claims_without_a_usable_los_have_no_key() {
    let classifier = classifier();

    assert!(build_bucket_key(&claim(None, Vec::new()), &classifier).is_none());
    assert!(build_bucket_key(&claim(Some(f64::NAN), Vec::new()), &classifier).is_none());
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn code_strategy() -> impl Strategy<Value = String> {
        "[A-Z][0-9]{2,4}( - MCC| - CC)?"
    }

    proptest! {
        #[test]
        fn secondary_order_never_changes_the_key(
            secondary in proptest::collection::vec(code_strategy(), 0..8),
            rotation in 0usize..8,
        ) {
            let classifier = classifier();
            let original = claim(Some(4.0), secondary.clone());

            let mut rotated_codes = secondary.clone();
            if !rotated_codes.is_empty() {
                let by = rotation % rotated_codes.len();
                rotated_codes.rotate_left(by);
            }
            let rotated = claim(Some(4.0), rotated_codes);

            let mut reversed_codes = secondary;
            reversed_codes.reverse();
            let reversed = claim(Some(4.0), reversed_codes);

            let key = build_bucket_key(&original, &classifier);
            prop_assert_eq!(&key, &build_bucket_key(&rotated, &classifier));
            prop_assert_eq!(&key, &build_bucket_key(&reversed, &classifier));
        }

        #[test]
        fn every_key_has_a_sorted_deduplicated_set(
            secondary in proptest::collection::vec(code_strategy(), 0..8),
        ) {
            let classifier = classifier();
            let key = build_bucket_key(&claim(Some(4.0), secondary), &classifier).unwrap();

            let mut sorted = key.sdx_set.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(key.sdx_set, sorted);
        }
    }
}

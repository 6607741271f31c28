//! Secondary diagnosis classification.
//!
//! A cell on the extract can name its severity inline (`E119 - CC`) or
//! leave it to the lookup table. Inline suffixes win over the table, and
//! the MCC suffix is checked before CC so `- MCC` is never misread as a
//! CC marker with a stray `M`.

use drg_model::{SeverityClass, SeverityLookup};

/// Cell values that mean "no code" once trimmed and uppercased.
const NO_VALUE_SENTINELS: [&str; 3] = ["NAN", "NONE", "NULL"];

/// Outcome of classifying one raw secondary diagnosis cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdxClassification {
    /// Normalized code with any severity suffix removed. Empty when the
    /// cell held no usable code; a suffix with nothing in front of it also
    /// leaves this empty.
    pub base_code: String,
    pub severity: Option<SeverityClass>,
}

impl SdxClassification {
    fn none() -> Self {
        Self {
            base_code: String::new(),
            severity: None,
        }
    }

    /// True when the cell contributes a code to the claim's severity set.
    pub fn is_classified(&self) -> bool {
        !self.base_code.is_empty() && self.severity.is_some()
    }
}

/// Classifies raw secondary diagnosis cells against the severity lookup.
#[derive(Debug, Clone)]
pub struct SdxClassifier {
    lookup: SeverityLookup,
}

impl SdxClassifier {
    pub fn new(lookup: SeverityLookup) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &SeverityLookup {
        &self.lookup
    }

    /// Classify one raw cell value. Unknown and empty values degrade to an
    /// unclassified result; this never fails.
    pub fn classify(&self, raw: &str) -> SdxClassification {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() || NO_VALUE_SENTINELS.contains(&normalized.as_str()) {
            return SdxClassification::none();
        }
        if let Some(base) = strip_severity_suffix(&normalized, "MCC") {
            return SdxClassification {
                base_code: base.to_string(),
                severity: Some(SeverityClass::Mcc),
            };
        }
        if let Some(base) = strip_severity_suffix(&normalized, "CC") {
            return SdxClassification {
                base_code: base.to_string(),
                severity: Some(SeverityClass::Cc),
            };
        }
        match self.lookup.get(&normalized) {
            Some(class) => SdxClassification {
                base_code: normalized,
                severity: Some(class),
            },
            None => SdxClassification::none(),
        }
    }
}

/// Strip a trailing `- <marker>` annotation, tolerating whitespace around
/// the dash. Returns the code in front of the dash, which may be empty.
fn strip_severity_suffix<'a>(value: &'a str, marker: &str) -> Option<&'a str> {
    let without_marker = value.trim_end().strip_suffix(marker)?;
    let base = without_marker.trim_end().strip_suffix('-')?;
    Some(base.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SdxClassifier {
        let mut lookup = SeverityLookup::new();
        lookup.insert("I10", SeverityClass::Mcc);
        lookup.insert("E119", SeverityClass::Cc);
        SdxClassifier::new(lookup)
    }

    fn classified(base: &str, severity: SeverityClass) -> SdxClassification {
        SdxClassification {
            base_code: base.to_string(),
            severity: Some(severity),
        }
    }

    #[test]
    fn empty_and_sentinel_cells_are_unclassified() {
        let classifier = classifier();
        for raw in ["", "   ", "nan", "NaN", "none", "NULL", " null "] {
            let result = classifier.classify(raw);
            assert_eq!(result, SdxClassification::none(), "raw: {raw:?}");
            assert!(!result.is_classified());
        }
    }

    #[test]
    fn inline_suffixes_classify_without_the_lookup() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify("J189 - MCC"),
            classified("J189", SeverityClass::Mcc)
        );
        assert_eq!(
            classifier.classify("N179-CC"),
            classified("N179", SeverityClass::Cc)
        );
        assert_eq!(
            classifier.classify("n179 -  cc"),
            classified("N179", SeverityClass::Cc)
        );
    }

    #[test]
    fn mcc_suffix_is_checked_before_cc() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify("J189 - MCC"),
            classified("J189", SeverityClass::Mcc)
        );
    }

    #[test]
    fn inline_suffix_overrides_the_lookup() {
        // The table says E119 is a CC; the cell says otherwise.
        let classifier = classifier();
        assert_eq!(
            classifier.classify("E119 - MCC"),
            classified("E119", SeverityClass::Mcc)
        );
    }

    #[test]
    fn bare_codes_fall_back_to_the_lookup() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify("i10"),
            classified("I10", SeverityClass::Mcc)
        );
        assert_eq!(
            classifier.classify(" E119 "),
            classified("E119", SeverityClass::Cc)
        );
        assert_eq!(classifier.classify("X999"), SdxClassification::none());
    }

    #[test]
    fn suffix_without_a_code_keeps_the_severity_but_no_code() {
        let classifier = classifier();
        let result = classifier.classify("- MCC");
        assert_eq!(result.base_code, "");
        assert_eq!(result.severity, Some(SeverityClass::Mcc));
        assert!(!result.is_classified());
    }

    #[test]
    fn a_code_merely_ending_in_cc_is_not_a_suffix() {
        // No dash, so this is a whole-value lookup, and the table does not
        // know it.
        let classifier = classifier();
        assert_eq!(classifier.classify("E119 CC"), SdxClassification::none());
        assert_eq!(classifier.classify("ACC"), SdxClassification::none());
    }
}

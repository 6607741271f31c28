use std::collections::BTreeMap;

use crate::severity::SeverityClass;

/// Mapping from diagnosis code to severity class, loaded once per run.
///
/// Codes are normalized to trimmed uppercase on insert and on lookup, so
/// ` e119 ` and `E119` resolve to the same entry.
#[derive(Debug, Clone, Default)]
pub struct SeverityLookup {
    entries: BTreeMap<String, SeverityClass>,
}

impl SeverityLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code, returning the class it displaces. Later entries for
    /// the same normalized code win.
    pub fn insert(&mut self, code: &str, class: SeverityClass) -> Option<SeverityClass> {
        self.entries.insert(normalize_code(code), class)
    }

    pub fn get(&self, code: &str) -> Option<SeverityClass> {
        self.entries.get(&normalize_code(code)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, SeverityClass)> for SeverityLookup {
    fn from_iter<I: IntoIterator<Item = (String, SeverityClass)>>(iter: I) -> Self {
        let mut lookup = SeverityLookup::new();
        for (code, class) in iter {
            lookup.insert(&code, class);
        }
        lookup
    }
}

fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

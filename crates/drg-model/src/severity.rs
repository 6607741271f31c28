use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Severity classification of a secondary diagnosis code.
///
/// A claim carrying at least one MCC is characterized by its MCC codes
/// alone; CC codes only characterize a claim when no MCC is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityClass {
    /// Major complication or comorbidity.
    #[serde(rename = "MCC")]
    Mcc,
    /// Complication or comorbidity.
    #[serde(rename = "CC")]
    Cc,
}

impl SeverityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityClass::Mcc => "MCC",
            SeverityClass::Cc => "CC",
        }
    }
}

impl fmt::Display for SeverityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeverityClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("MCC") {
            Ok(SeverityClass::Mcc)
        } else if trimmed.eq_ignore_ascii_case("CC") {
            Ok(SeverityClass::Cc)
        } else {
            Err(ModelError::UnknownSeverityClass(trimmed.to_string()))
        }
    }
}

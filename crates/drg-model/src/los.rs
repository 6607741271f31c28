use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Fixed length-of-stay bins, declared from shortest to longest stay.
///
/// Every interval is right-closed: a stay that lands exactly on a boundary
/// belongs to the lower bin, so an LOS of 5 is `3-5` and 5.0001 is `5-10`.
/// The first bin is unbounded below and the last unbounded above, which
/// means every non-NaN value falls into exactly one bin.
///
/// The derived `Ord` follows declaration order, so sorting bins sorts by
/// stay length rather than by the lexicographic order of the labels
/// (as strings, `10-20` would sort before `5-10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LosBin {
    #[serde(rename = "0-1")]
    Days0To1,
    #[serde(rename = "1-2")]
    Days1To2,
    #[serde(rename = "2-3")]
    Days2To3,
    #[serde(rename = "3-5")]
    Days3To5,
    #[serde(rename = "5-10")]
    Days5To10,
    #[serde(rename = "10-20")]
    Days10To20,
    #[serde(rename = "20-30")]
    Days20To30,
    #[serde(rename = "30-40")]
    Days30To40,
    #[serde(rename = "40-50")]
    Days40To50,
    #[serde(rename = "50-75")]
    Days50To75,
    #[serde(rename = "75+")]
    Days75Plus,
}

impl LosBin {
    /// All bins in interval order.
    pub const ALL: [LosBin; 11] = [
        LosBin::Days0To1,
        LosBin::Days1To2,
        LosBin::Days2To3,
        LosBin::Days3To5,
        LosBin::Days5To10,
        LosBin::Days10To20,
        LosBin::Days20To30,
        LosBin::Days30To40,
        LosBin::Days40To50,
        LosBin::Days50To75,
        LosBin::Days75Plus,
    ];

    /// Bin a length of stay. Returns `None` only for NaN; claims without a
    /// usable LOS are excluded from aggregation entirely.
    pub fn from_los(los: f64) -> Option<LosBin> {
        if los.is_nan() {
            return None;
        }
        LosBin::ALL
            .into_iter()
            .find(|bin| bin.upper_edge().is_none_or(|upper| los <= upper))
    }

    pub fn label(&self) -> &'static str {
        match self {
            LosBin::Days0To1 => "0-1",
            LosBin::Days1To2 => "1-2",
            LosBin::Days2To3 => "2-3",
            LosBin::Days3To5 => "3-5",
            LosBin::Days5To10 => "5-10",
            LosBin::Days10To20 => "10-20",
            LosBin::Days20To30 => "20-30",
            LosBin::Days30To40 => "30-40",
            LosBin::Days40To50 => "40-50",
            LosBin::Days50To75 => "50-75",
            LosBin::Days75Plus => "75+",
        }
    }

    /// Exclusive lower edge, `None` for the first bin.
    pub fn lower_edge(&self) -> Option<f64> {
        match self {
            LosBin::Days0To1 => None,
            LosBin::Days1To2 => Some(1.0),
            LosBin::Days2To3 => Some(2.0),
            LosBin::Days3To5 => Some(3.0),
            LosBin::Days5To10 => Some(5.0),
            LosBin::Days10To20 => Some(10.0),
            LosBin::Days20To30 => Some(20.0),
            LosBin::Days30To40 => Some(30.0),
            LosBin::Days40To50 => Some(40.0),
            LosBin::Days50To75 => Some(50.0),
            LosBin::Days75Plus => Some(75.0),
        }
    }

    /// Inclusive upper edge, `None` for the last bin.
    pub fn upper_edge(&self) -> Option<f64> {
        match self {
            LosBin::Days0To1 => Some(1.0),
            LosBin::Days1To2 => Some(2.0),
            LosBin::Days2To3 => Some(3.0),
            LosBin::Days3To5 => Some(5.0),
            LosBin::Days5To10 => Some(10.0),
            LosBin::Days10To20 => Some(20.0),
            LosBin::Days20To30 => Some(30.0),
            LosBin::Days30To40 => Some(40.0),
            LosBin::Days40To50 => Some(50.0),
            LosBin::Days50To75 => Some(75.0),
            LosBin::Days75Plus => None,
        }
    }
}

impl fmt::Display for LosBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LosBin {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LosBin::ALL
            .into_iter()
            .find(|bin| bin.label() == trimmed)
            .ok_or_else(|| ModelError::UnknownLosBin(trimmed.to_string()))
    }
}

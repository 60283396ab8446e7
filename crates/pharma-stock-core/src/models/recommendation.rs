//! Stockout estimates and replenishment recommendations.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Wire label for a stock that never runs out.
pub const INFINITE_LABEL: &str = "infinite";

/// Days until stock is exhausted.
///
/// `Infinite` orders above every finite value and is distinct from any
/// failure. Serialized as a JSON number, or the string `"infinite"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum DaysLeft {
    Finite(f64),
    Infinite,
}

impl DaysLeft {
    pub fn is_infinite(&self) -> bool {
        matches!(self, DaysLeft::Infinite)
    }

    /// The finite value, or `None` when stock never runs out.
    pub fn finite(&self) -> Option<f64> {
        match self {
            DaysLeft::Finite(days) => Some(*days),
            DaysLeft::Infinite => None,
        }
    }

    /// Strict `<` against a finite day count. Never true for `Infinite`.
    pub fn is_less_than(&self, days: f64) -> bool {
        match self {
            DaysLeft::Finite(left) => *left < days,
            DaysLeft::Infinite => false,
        }
    }
}

impl fmt::Display for DaysLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysLeft::Finite(days) => write!(f, "{:.1}", days),
            DaysLeft::Infinite => f.write_str(INFINITE_LABEL),
        }
    }
}

impl Serialize for DaysLeft {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DaysLeft::Finite(days) if days.is_finite() => serializer.serialize_f64(*days),
            _ => serializer.serialize_str(INFINITE_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for DaysLeft {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Label(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(days) => Ok(DaysLeft::Finite(days)),
            Repr::Label(label) if label == INFINITE_LABEL => Ok(DaysLeft::Infinite),
            Repr::Label(label) => Err(de::Error::invalid_value(
                de::Unexpected::Str(&label),
                &"a number or \"infinite\"",
            )),
        }
    }
}

/// Days-left estimate for a named medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockPrediction {
    pub name: String,
    pub days_left: DaysLeft,
}

/// Outcome category of the lead-time replenishment rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCode {
    /// Stock runs out before a delivery can arrive
    UrgentReorder,
    /// Stock exceeds the storage limit
    DeferForStorage,
    /// Stock runs out within two delivery cycles
    ReorderSoon,
    /// Nothing to do
    Sufficient,
}

impl RecommendationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCode::UrgentReorder => "urgent_reorder",
            RecommendationCode::DeferForStorage => "defer_for_storage",
            RecommendationCode::ReorderSoon => "reorder_soon",
            RecommendationCode::Sufficient => "sufficient",
        }
    }

    /// Human-readable action text.
    pub fn message(&self, days_left: DaysLeft) -> String {
        match self {
            RecommendationCode::UrgentReorder => format!(
                "Order immediately, stock will run out in {} days.",
                days_left
            ),
            RecommendationCode::DeferForStorage => {
                "Order less frequently due to storage constraints.".to_string()
            }
            RecommendationCode::ReorderSoon => {
                "Consider ordering soon to avoid stockouts.".to_string()
            }
            RecommendationCode::Sufficient => "Stock level is sufficient for now.".to_string(),
        }
    }
}

impl fmt::Display for RecommendationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replenishment recommendation for a named medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub code: RecommendationCode,
    /// Action text
    pub recommendation: String,
    pub days_left: DaysLeft,
}

impl Recommendation {
    pub fn new(name: impl Into<String>, code: RecommendationCode, days_left: DaysLeft) -> Self {
        Self {
            name: name.into(),
            code,
            recommendation: code.message(days_left),
            days_left,
        }
    }
}

//! Medicine stock records and priority tiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected record contents, detected at the boundary before any decision is made.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
}

/// Check a quantity that must be finite and `>= 0`.
pub(crate) fn check_quantity(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

/// Stock and demand snapshot for one medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineRecord {
    /// Identifier, unique within a request
    pub name: String,
    /// Units on hand
    pub current_stock: f64,
    /// Units consumed per day
    pub daily_demand: f64,
    /// Free-text demand context (e.g., "flu season")
    pub scenario: String,
}

impl MedicineRecord {
    /// Create a new record.
    pub fn new(
        name: impl Into<String>,
        current_stock: f64,
        daily_demand: f64,
        scenario: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            current_stock,
            daily_demand,
            scenario: scenario.into(),
        }
    }

    /// Reject empty names and negative or non-finite quantities.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        check_quantity("current_stock", self.current_stock)?;
        check_quantity("daily_demand", self.daily_demand)?;
        Ok(())
    }
}

/// Demand priority tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority assigned to a named medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriorityAssignment {
    pub name: String,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_zero_quantities() {
        let record = MedicineRecord::new("Saline", 0.0, 0.0, "");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let record = MedicineRecord::new("  ", 10.0, 1.0, "regular");
        assert_eq!(record.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_negative_demand() {
        let record = MedicineRecord::new("Aspirin", 10.0, -1.0, "regular");
        assert_eq!(
            record.validate(),
            Err(ValidationError::Negative {
                field: "daily_demand",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan_stock() {
        let record = MedicineRecord::new("Aspirin", f64::NAN, 1.0, "regular");
        assert!(matches!(
            record.validate(),
            Err(ValidationError::NotFinite {
                field: "current_stock",
                ..
            })
        ));
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"{"name": "Aspirin", "current_stock": 200, "daily_demand": 20, "scenario": "flu season"}"#;
        let record: MedicineRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, MedicineRecord::new("Aspirin", 200.0, 20.0, "flu season"));
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let assignment = PriorityAssignment {
            name: "Aspirin".into(),
            priority: Priority::High,
        };
        let json = serde_json::to_string(&assignment).unwrap();
        assert_eq!(json, r#"{"name":"Aspirin","priority":"high"}"#);
    }
}

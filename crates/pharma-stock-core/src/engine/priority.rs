//! Demand priority classification.
//!
//! Ordered rules, first match wins:
//! 1. demand above [`HIGH_DEMAND_THRESHOLD`] during a flu scenario → high
//! 2. demand above [`MEDIUM_DEMAND_THRESHOLD`] → medium
//! 3. anything else → low

use crate::models::{MedicineRecord, Priority};

/// Daily demand above which a flu-scenario medicine is high priority.
pub const HIGH_DEMAND_THRESHOLD: f64 = 15.0;

/// Daily demand above which a medicine is at least medium priority.
pub const MEDIUM_DEMAND_THRESHOLD: f64 = 10.0;

/// Case-sensitive scenario substring marking flu conditions.
pub const FLU_SCENARIO_MARKER: &str = "flu";

/// Assign a priority tier to a medicine.
pub fn classify_priority(record: &MedicineRecord) -> Priority {
    match record {
        r if r.daily_demand > HIGH_DEMAND_THRESHOLD && r.scenario.contains(FLU_SCENARIO_MARKER) => {
            Priority::High
        }
        r if r.daily_demand > MEDIUM_DEMAND_THRESHOLD => Priority::Medium,
        _ => Priority::Low,
    }
}

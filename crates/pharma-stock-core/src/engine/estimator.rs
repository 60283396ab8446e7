//! Time-to-empty estimate.

use crate::models::{DaysLeft, MedicineRecord};

/// Days until `current_stock` is consumed at `daily_demand`.
///
/// Zero demand never runs out, and neither does a ratio too large to
/// represent. No rounding is applied. Negative demand is outside the accepted
/// domain and must be rejected upstream.
pub fn estimate_days_until_stockout(record: &MedicineRecord) -> DaysLeft {
    if record.daily_demand == 0.0 {
        return DaysLeft::Infinite;
    }

    let days = record.current_stock / record.daily_demand;
    if days.is_finite() {
        DaysLeft::Finite(days)
    } else {
        DaysLeft::Infinite
    }
}

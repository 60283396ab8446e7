//! Replenishment strategies.
//!
//! Two independent rules share this module:
//!
//! - [`LeadTimePolicy`]: days-left against delivery time and storage limit,
//!   four ordered outcomes.
//! - [`CriticalThresholdPolicy`]: a single absolute stock threshold that raises
//!   an alert carrying a demand estimate.

use log::debug;

use crate::config::{CriticalThresholdConfig, LeadTimeConfig};
use crate::models::{
    DaysLeft, DemandObservation, MedicineRecord, Recommendation, RecommendationCode, StockAlert,
    StockLevel,
};

use super::demand::estimate_demand;
use super::estimator::estimate_days_until_stockout;

/// Lead-time based replenishment rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadTimePolicy {
    config: LeadTimeConfig,
}

impl LeadTimePolicy {
    pub fn new(config: LeadTimeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LeadTimeConfig {
        &self.config
    }

    /// Pick the outcome for a days-left estimate. Comparisons are strict, so
    /// equality falls through to the next rule.
    pub fn decide(&self, days_left: DaysLeft, current_stock: f64) -> RecommendationCode {
        let LeadTimeConfig {
            delivery_days,
            storage_limit,
        } = self.config;

        match days_left {
            d if d.is_less_than(delivery_days) => RecommendationCode::UrgentReorder,
            _ if current_stock > storage_limit => RecommendationCode::DeferForStorage,
            d if d.is_less_than(delivery_days * 2.0) => RecommendationCode::ReorderSoon,
            _ => RecommendationCode::Sufficient,
        }
    }

    /// Recommend an action for one medicine.
    pub fn recommend(&self, record: &MedicineRecord) -> Recommendation {
        let days_left = estimate_days_until_stockout(record);
        let code = self.decide(days_left, record.current_stock);
        debug!(
            "{}: {} days left, {} on hand -> {}",
            record.name, days_left, record.current_stock, code
        );
        Recommendation::new(record.name.clone(), code, days_left)
    }
}

/// Absolute-threshold alert rule.
#[derive(Debug, Clone, Default)]
pub struct CriticalThresholdPolicy {
    config: CriticalThresholdConfig,
}

impl CriticalThresholdPolicy {
    pub fn new(config: CriticalThresholdConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CriticalThresholdConfig {
        &self.config
    }

    /// Strictly below the configured threshold.
    pub fn is_critical(&self, current_stock: f64) -> bool {
        current_stock < self.config.critical_threshold
    }

    /// Build the alert for a stock level known to be critical.
    pub fn alert(&self, level: &StockLevel, history: &[DemandObservation]) -> StockAlert {
        let estimate = estimate_demand(history, self.config.season.as_deref());
        let message = format!(
            "Reorder {} immediately: {} units on hand is below the critical level of {}. \
             Estimated demand: {:.1} units.",
            level.drug, level.current_stock, self.config.critical_threshold, estimate.value
        );
        debug!(
            "{}: critical at {} units, estimated demand {} ({})",
            level.drug,
            level.current_stock,
            estimate.value,
            estimate.basis.as_str()
        );

        StockAlert {
            drug: level.drug.clone(),
            current_stock: level.current_stock,
            estimated_demand: estimate.value,
            demand_basis: estimate.basis,
            message,
        }
    }

    /// Alert if `level` is critical, otherwise `None`.
    pub fn evaluate(&self, level: &StockLevel, history: &[DemandObservation]) -> Option<StockAlert> {
        self.is_critical(level.current_stock)
            .then(|| self.alert(level, history))
    }
}

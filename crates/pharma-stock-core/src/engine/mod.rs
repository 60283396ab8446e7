//! Inventory decision engine.
//!
//! Pipeline: MedicineSource → Estimator → Classifier / Replenishment policy → Report

mod demand;
mod estimator;
mod policy;
mod priority;

pub use demand::*;
pub use estimator::*;
pub use policy::*;
pub use priority::*;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{CriticalThresholdConfig, LeadTimeConfig, PolicyConfig};
use crate::export::StockReport;
use crate::models::{
    PriorityAssignment, Recommendation, StockAlert, StockLevel, StockPrediction,
};
use crate::source::{MedicineSource, SourceError};

/// Engine errors. Decisions themselves never fail; only data access can.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Result of applying whichever strategy a [`PolicyConfig`] selects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", content = "items", rename_all = "snake_case")]
pub enum PolicyOutcome {
    Recommendations(Vec<Recommendation>),
    Alerts(Vec<StockAlert>),
}

/// Batch decisions over every medicine a source provides.
pub struct InventoryEngine<'a, S: MedicineSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: MedicineSource + ?Sized> InventoryEngine<'a, S> {
    /// Create an engine reading from `source`.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Priority tier for each medicine.
    pub fn priorities(&self) -> EngineResult<Vec<PriorityAssignment>> {
        let medicines = self.source.medicines()?;
        Ok(medicines
            .iter()
            .map(|m| PriorityAssignment {
                name: m.name.clone(),
                priority: classify_priority(m),
            })
            .collect())
    }

    /// Days-left estimate for each medicine.
    pub fn stock_predictions(&self) -> EngineResult<Vec<StockPrediction>> {
        let medicines = self.source.medicines()?;
        Ok(medicines
            .iter()
            .map(|m| StockPrediction {
                name: m.name.clone(),
                days_left: estimate_days_until_stockout(m),
            })
            .collect())
    }

    /// Lead-time recommendation for each medicine.
    pub fn recommendations(&self, config: &LeadTimeConfig) -> EngineResult<Vec<Recommendation>> {
        let policy = LeadTimePolicy::new(*config);
        let medicines = self.source.medicines()?;
        let recommendations: Vec<Recommendation> =
            medicines.iter().map(|m| policy.recommend(m)).collect();

        info!(
            "Recommended actions for {} medicines (delivery {} days, storage limit {})",
            recommendations.len(),
            config.delivery_days,
            config.storage_limit
        );
        Ok(recommendations)
    }

    /// Critical-stock alerts for the given levels.
    ///
    /// Demand history is only fetched for levels below the threshold.
    pub fn stock_alerts(
        &self,
        config: &CriticalThresholdConfig,
        levels: &[StockLevel],
    ) -> EngineResult<Vec<StockAlert>> {
        let policy = CriticalThresholdPolicy::new(config.clone());
        let mut alerts = Vec::new();

        for level in levels {
            if !policy.is_critical(level.current_stock) {
                continue;
            }
            let history = self.source.demand_history(&level.drug)?;
            alerts.push(policy.alert(level, &history));
        }

        info!(
            "{} of {} stock levels below critical threshold {}",
            alerts.len(),
            levels.len(),
            config.critical_threshold
        );
        Ok(alerts)
    }

    /// Apply the strategy selected by `config` to every medicine in the source.
    pub fn apply(&self, config: &PolicyConfig) -> EngineResult<PolicyOutcome> {
        match config {
            PolicyConfig::LeadTime(lead_time) => {
                Ok(PolicyOutcome::Recommendations(self.recommendations(lead_time)?))
            }
            PolicyConfig::CriticalThreshold(threshold) => {
                let levels: Vec<StockLevel> = self
                    .source
                    .medicines()?
                    .iter()
                    .map(StockLevel::from)
                    .collect();
                Ok(PolicyOutcome::Alerts(self.stock_alerts(threshold, &levels)?))
            }
        }
    }

    /// Combined priority, days-left and recommendation report.
    pub fn report(&self, config: &LeadTimeConfig) -> EngineResult<StockReport> {
        let medicines = self.source.medicines()?;
        Ok(StockReport::build(config, &medicines))
    }
}

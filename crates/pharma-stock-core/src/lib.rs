//! Pharma-Stock Core Library
//!
//! Inventory decision engine: how long medicine stock will last and what to
//! reorder.
//!
//! # Architecture
//!
//! ```text
//!             MedicineSource (in-memory | SQLite)
//!                          │
//!            ┌─────────────┼──────────────────────────┐
//!            │             │                          │
//!            ▼             ▼                          ▼
//!   PriorityClassifier  StockoutEstimator   CriticalThresholdPolicy
//!   high/medium/low     days left                 │
//!                          │                demand estimate
//!                          ▼              (seasonal → overall)
//!                   LeadTimePolicy                │
//!                          │                      ▼
//!                          ▼                 StockAlert
//!                   Recommendation
//!                          │
//!                          ▼
//!                   StockReport (JSON / CSV)
//! ```
//!
//! Shortest-path search lives in the separate `cost_search` crate and is
//! exposed here only through [`find_cheapest_path`].
//!
//! # Modules
//!
//! - [`config`]: Policy configuration and strategy selection
//! - [`db`]: SQLite store for medicines and sales history
//! - [`engine`]: Estimator, classifier, replenishment policies
//! - [`export`]: Stock report export
//! - [`models`]: Domain types (MedicineRecord, Recommendation, StockAlert, etc.)
//! - [`source`]: Data source trait and implementations

pub mod config;
pub mod db;
pub mod engine;
pub mod export;
pub mod models;
pub mod source;

// Re-export commonly used types
pub use config::{CriticalThresholdConfig, LeadTimeConfig, PolicyConfig};
pub use db::Database;
pub use engine::{
    classify_priority, estimate_days_until_stockout, CriticalThresholdPolicy, InventoryEngine,
    LeadTimePolicy, PolicyOutcome,
};
pub use export::StockReport;
pub use models::{
    DaysLeft, DemandObservation, MedicineRecord, Priority, Recommendation, RecommendationCode,
    StockAlert, StockLevel,
};
pub use source::{InMemorySource, MedicineSource};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use cost_search::{astar, AbsoluteDifference, Graph};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PharmaStockError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<db::DbError> for PharmaStockError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::NotFound(name) => PharmaStockError::NotFound(name),
            db::DbError::Validation(v) => PharmaStockError::InvalidInput(v.to_string()),
            other => PharmaStockError::DatabaseError(other.to_string()),
        }
    }
}

impl From<source::SourceError> for PharmaStockError {
    fn from(e: source::SourceError) -> Self {
        match e {
            source::SourceError::Database(db) => db.into(),
            source::SourceError::Validation(v) => v.into(),
        }
    }
}

impl From<engine::EngineError> for PharmaStockError {
    fn from(e: engine::EngineError) -> Self {
        match e {
            engine::EngineError::Source(source) => source.into(),
        }
    }
}

impl From<models::ValidationError> for PharmaStockError {
    fn from(e: models::ValidationError) -> Self {
        PharmaStockError::InvalidInput(e.to_string())
    }
}

impl From<config::ConfigError> for PharmaStockError {
    fn from(e: config::ConfigError) -> Self {
        PharmaStockError::ConfigError(e.to_string())
    }
}

impl From<cost_search::GraphError> for PharmaStockError {
    fn from(e: cost_search::GraphError) -> Self {
        PharmaStockError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for PharmaStockError {
    fn from(e: serde_json::Error) -> Self {
        PharmaStockError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for PharmaStockError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PharmaStockError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Stateless Decisions (exported to FFI)
// =========================================================================

/// Priority tier ("high", "medium" or "low") for one medicine.
#[uniffi::export]
pub fn prioritize_medicine(medicine: FfiMedicine) -> Result<String, PharmaStockError> {
    let record: MedicineRecord = medicine.into();
    record.validate()?;
    Ok(classify_priority(&record).to_string())
}

/// Days until stockout; `None` when demand is zero.
#[uniffi::export]
pub fn days_until_stockout(medicine: FfiMedicine) -> Result<Option<f64>, PharmaStockError> {
    let record: MedicineRecord = medicine.into();
    record.validate()?;
    Ok(estimate_days_until_stockout(&record).finite())
}

/// Lead-time recommendation for one medicine.
#[uniffi::export]
pub fn recommend_stock_action(
    medicine: FfiMedicine,
    delivery_days: f64,
    storage_limit: f64,
) -> Result<FfiRecommendation, PharmaStockError> {
    let record: MedicineRecord = medicine.into();
    record.validate()?;
    let config = LeadTimeConfig::new(delivery_days, storage_limit);
    config.validate()?;
    Ok(LeadTimePolicy::new(config).recommend(&record).into())
}

/// Cheapest path through a `{"node": {"neighbor": cost}}` graph, using the
/// `|goal - node|` heuristic. `None` when the goal is unreachable.
#[uniffi::export]
pub fn find_cheapest_path(
    graph_json: String,
    start: i64,
    goal: i64,
) -> Result<Option<FfiPath>, PharmaStockError> {
    let graph = Graph::from_json(&graph_json)?;
    Ok(astar(&graph, start, goal, &AbsoluteDifference).map(|path| FfiPath {
        nodes: path.nodes,
        cost: path.cost,
    }))
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a database at the given path.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<PharmaStockCore>, PharmaStockError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(PharmaStockCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<PharmaStockCore>, PharmaStockError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(PharmaStockCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe database wrapper for FFI.
#[derive(uniffi::Object)]
pub struct PharmaStockCore {
    db: Arc<Mutex<Database>>,
}

#[uniffi::export]
impl PharmaStockCore {
    // =========================================================================
    // Medicine Operations
    // =========================================================================

    /// Add or update a medicine.
    pub fn upsert_medicine(&self, medicine: FfiMedicine) -> Result<(), PharmaStockError> {
        let record: MedicineRecord = medicine.into();
        let db = self.db.lock()?;
        db.upsert_medicine(&record)?;
        Ok(())
    }

    /// Get a medicine by name.
    pub fn get_medicine(&self, name: String) -> Result<Option<FfiMedicine>, PharmaStockError> {
        let db = self.db.lock()?;
        Ok(db.get_medicine(&name)?.map(|m| m.into()))
    }

    /// All medicines ordered by name.
    pub fn list_medicines(&self) -> Result<Vec<FfiMedicine>, PharmaStockError> {
        let db = self.db.lock()?;
        Ok(db.list_medicines()?.into_iter().map(|m| m.into()).collect())
    }

    /// Delete a medicine. Returns whether it existed.
    pub fn delete_medicine(&self, name: String) -> Result<bool, PharmaStockError> {
        let db = self.db.lock()?;
        Ok(db.delete_medicine(&name)?)
    }

    /// Record a sale for the demand history.
    pub fn record_sale(&self, drug: String, sale: FfiSale) -> Result<(), PharmaStockError> {
        let observation = DemandObservation::try_from(sale)?;
        let db = self.db.lock()?;
        db.record_sale(&drug, &observation)?;
        Ok(())
    }

    // =========================================================================
    // Decision Operations
    // =========================================================================

    /// Priority for each stored medicine.
    pub fn get_priorities(&self) -> Result<Vec<FfiPriority>, PharmaStockError> {
        let db = self.db.lock()?;
        let priorities = InventoryEngine::new(&*db).priorities()?;
        Ok(priorities
            .into_iter()
            .map(|p| FfiPriority {
                name: p.name,
                priority: p.priority.to_string(),
            })
            .collect())
    }

    /// Days-left estimate for each stored medicine.
    pub fn get_stock_predictions(&self) -> Result<Vec<FfiStockPrediction>, PharmaStockError> {
        let db = self.db.lock()?;
        let predictions = InventoryEngine::new(&*db).stock_predictions()?;
        Ok(predictions
            .into_iter()
            .map(|p| FfiStockPrediction {
                name: p.name,
                days_left: p.days_left.finite(),
            })
            .collect())
    }

    /// Lead-time recommendations for each stored medicine.
    pub fn get_recommendations(
        &self,
        delivery_days: f64,
        storage_limit: f64,
    ) -> Result<Vec<FfiRecommendation>, PharmaStockError> {
        let config = LeadTimeConfig::new(delivery_days, storage_limit);
        config.validate()?;

        let db = self.db.lock()?;
        let recs = InventoryEngine::new(&*db).recommendations(&config)?;
        Ok(recs.into_iter().map(|r| r.into()).collect())
    }

    /// Critical-threshold alerts for the supplied stock levels.
    pub fn get_stock_alerts(
        &self,
        critical_threshold: f64,
        season: Option<String>,
        levels: Vec<FfiStockLevel>,
    ) -> Result<Vec<FfiStockAlert>, PharmaStockError> {
        let config = CriticalThresholdConfig {
            critical_threshold,
            season,
        };
        config.validate()?;

        let levels: Vec<StockLevel> = levels.into_iter().map(|l| l.into()).collect();
        for level in &levels {
            level.validate()?;
        }

        let db = self.db.lock()?;
        let alerts = InventoryEngine::new(&*db).stock_alerts(&config, &levels)?;
        Ok(alerts.into_iter().map(|a| a.into()).collect())
    }

    /// Apply whichever strategy a JSON policy document selects. Returns JSON.
    pub fn apply_policy_json(&self, config_json: String) -> Result<String, PharmaStockError> {
        let config = PolicyConfig::from_json(&config_json)?;
        let db = self.db.lock()?;
        let outcome = InventoryEngine::new(&*db).apply(&config)?;
        Ok(serde_json::to_string(&outcome)?)
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export the stock report as JSON.
    pub fn export_report_json(
        &self,
        delivery_days: f64,
        storage_limit: f64,
    ) -> Result<String, PharmaStockError> {
        let report = self.build_report(delivery_days, storage_limit)?;
        Ok(report.to_json()?)
    }

    /// Export the stock report as CSV.
    pub fn export_report_csv(
        &self,
        delivery_days: f64,
        storage_limit: f64,
    ) -> Result<String, PharmaStockError> {
        let report = self.build_report(delivery_days, storage_limit)?;
        Ok(report.to_csv())
    }
}

impl PharmaStockCore {
    fn build_report(
        &self,
        delivery_days: f64,
        storage_limit: f64,
    ) -> Result<StockReport, PharmaStockError> {
        let config = LeadTimeConfig::new(delivery_days, storage_limit);
        config.validate()?;

        let db = self.db.lock()?;
        Ok(InventoryEngine::new(&*db).report(&config)?)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe medicine record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub name: String,
    pub current_stock: f64,
    pub daily_demand: f64,
    pub scenario: String,
}

impl From<MedicineRecord> for FfiMedicine {
    fn from(record: MedicineRecord) -> Self {
        Self {
            name: record.name,
            current_stock: record.current_stock,
            daily_demand: record.daily_demand,
            scenario: record.scenario,
        }
    }
}

impl From<FfiMedicine> for MedicineRecord {
    fn from(medicine: FfiMedicine) -> Self {
        MedicineRecord {
            name: medicine.name,
            current_stock: medicine.current_stock,
            daily_demand: medicine.daily_demand,
            scenario: medicine.scenario,
        }
    }
}

/// FFI-safe priority assignment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPriority {
    pub name: String,
    pub priority: String,
}

/// FFI-safe stock prediction. `days_left` is `None` when stock never runs out.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStockPrediction {
    pub name: String,
    pub days_left: Option<f64>,
}

/// FFI-safe recommendation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecommendation {
    pub name: String,
    pub code: String,
    pub recommendation: String,
    pub days_left: Option<f64>,
}

impl From<Recommendation> for FfiRecommendation {
    fn from(rec: Recommendation) -> Self {
        Self {
            name: rec.name,
            code: rec.code.to_string(),
            recommendation: rec.recommendation,
            days_left: rec.days_left.finite(),
        }
    }
}

/// FFI-safe stock level for the critical-threshold check.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStockLevel {
    pub drug: String,
    pub current_stock: f64,
}

impl From<FfiStockLevel> for StockLevel {
    fn from(level: FfiStockLevel) -> Self {
        StockLevel::new(level.drug, level.current_stock)
    }
}

/// FFI-safe sale. `sale_date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSale {
    pub units_sold: Option<f64>,
    pub sale_date: Option<String>,
    pub season: Option<String>,
}

impl TryFrom<FfiSale> for DemandObservation {
    type Error = PharmaStockError;

    fn try_from(sale: FfiSale) -> Result<Self, Self::Error> {
        let sale_date = sale
            .sale_date
            .map(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d"))
            .transpose()
            .map_err(|e| PharmaStockError::InvalidInput(format!("sale_date: {}", e)))?;

        Ok(DemandObservation {
            units_sold: sale.units_sold,
            sale_date,
            season: sale.season,
        })
    }
}

/// FFI-safe stock alert.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStockAlert {
    pub drug: String,
    pub current_stock: f64,
    pub estimated_demand: f64,
    pub demand_basis: String,
    pub message: String,
}

impl From<StockAlert> for FfiStockAlert {
    fn from(alert: StockAlert) -> Self {
        Self {
            drug: alert.drug,
            current_stock: alert.current_stock,
            estimated_demand: alert.estimated_demand,
            demand_basis: alert.demand_basis.as_str().to_string(),
            message: alert.message,
        }
    }
}

/// FFI-safe search result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPath {
    pub nodes: Vec<i64>,
    pub cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medicine(name: &str, stock: f64, demand: f64, scenario: &str) -> FfiMedicine {
        FfiMedicine {
            name: name.into(),
            current_stock: stock,
            daily_demand: demand,
            scenario: scenario.into(),
        }
    }

    #[test]
    fn test_stateless_decisions() {
        assert_eq!(
            prioritize_medicine(medicine("Aspirin", 200.0, 20.0, "flu season")).unwrap(),
            "high"
        );
        assert_eq!(
            days_until_stockout(medicine("Aspirin", 200.0, 0.0, "regular")).unwrap(),
            None
        );

        let rec = recommend_stock_action(medicine("Aspirin", 50.0, 20.0, "regular"), 3.0, 200.0)
            .unwrap();
        assert_eq!(rec.code, "urgent_reorder");
        assert_eq!(rec.days_left, Some(2.5));
    }

    #[test]
    fn test_invalid_input_rejected_at_boundary() {
        let result = days_until_stockout(medicine("Aspirin", 10.0, -2.0, "regular"));
        assert!(matches!(result, Err(PharmaStockError::InvalidInput(_))));

        let result = recommend_stock_action(medicine("Aspirin", 10.0, 2.0, "regular"), 0.0, 200.0);
        assert!(matches!(result, Err(PharmaStockError::ConfigError(_))));
    }

    #[test]
    fn test_find_cheapest_path() {
        let graph = r#"{"0": {"1": 1, "2": 4}, "1": {"2": 2, "3": 5}, "2": {"3": 1}, "3": {}}"#;

        let path = find_cheapest_path(graph.into(), 0, 3).unwrap().unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2, 3]);
        assert_eq!(path.cost, 4.0);

        assert!(find_cheapest_path(graph.into(), 3, 0).unwrap().is_none());
        assert!(find_cheapest_path("not json".into(), 0, 1).is_err());
    }

    #[test]
    fn test_core_object_round_trip() {
        let core = open_database_in_memory().unwrap();
        core.upsert_medicine(medicine("Antibiotics", 50.0, 15.0, "flu season"))
            .unwrap();
        core.record_sale(
            "Antibiotics".into(),
            FfiSale {
                units_sold: Some(18.0),
                sale_date: Some("2024-01-10".into()),
                season: None,
            },
        )
        .unwrap();

        let priorities = core.get_priorities().unwrap();
        assert_eq!(priorities[0].priority, "medium");

        let alerts = core
            .get_stock_alerts(
                60.0,
                Some("winter".into()),
                vec![FfiStockLevel {
                    drug: "Antibiotics".into(),
                    current_stock: 50.0,
                }],
            )
            .unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].estimated_demand, 18.0);
        assert_eq!(alerts[0].demand_basis, "seasonal");

        let outcome = core
            .apply_policy_json(r#"{"delivery_days": 3, "storage_limit": 200}"#.into())
            .unwrap();
        assert!(outcome.contains("reorder_soon"));
    }

    #[test]
    fn test_bad_sale_date() {
        let core = open_database_in_memory().unwrap();
        let result = core.record_sale(
            "Aspirin".into(),
            FfiSale {
                units_sold: Some(1.0),
                sale_date: Some("yesterday".into()),
                season: None,
            },
        );
        assert!(matches!(result, Err(PharmaStockError::InvalidInput(_))));
    }
}

//! Data sources feeding the engine.
//!
//! Replaces process-wide sample data with an explicitly passed provider so
//! callers and tests can inject their own records.

mod memory;
mod sqlite;

pub use memory::*;

use thiserror::Error;

use crate::db::DbError;
use crate::models::{DemandObservation, MedicineRecord, ValidationError};

/// Data source errors.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Invalid record: {0}")]
    Validation(#[from] ValidationError),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Provider of medicine records and their sales history.
pub trait MedicineSource {
    /// All medicine records, ordered by name.
    fn medicines(&self) -> SourceResult<Vec<MedicineRecord>>;

    /// Sales observations for one drug. Unknown drugs have an empty history.
    fn demand_history(&self, drug: &str) -> SourceResult<Vec<DemandObservation>>;
}

//! Critical-stock alert models and demand history.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::medicine::{check_quantity, ValidationError};
use super::MedicineRecord;

/// On-hand stock for one drug, as supplied to the critical-threshold check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockLevel {
    pub drug: String,
    pub current_stock: f64,
}

impl StockLevel {
    pub fn new(drug: impl Into<String>, current_stock: f64) -> Self {
        Self {
            drug: drug.into(),
            current_stock,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.drug.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        check_quantity("current_stock", self.current_stock)
    }
}

impl From<&MedicineRecord> for StockLevel {
    fn from(record: &MedicineRecord) -> Self {
        Self::new(record.name.clone(), record.current_stock)
    }
}

/// A single historical sale used to estimate demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DemandObservation {
    /// Units sold; `None` when the source value was missing or unparseable
    pub units_sold: Option<f64>,
    pub sale_date: Option<NaiveDate>,
    /// Explicit season label; derived from `sale_date` when absent
    pub season: Option<String>,
}

impl DemandObservation {
    pub fn new(units_sold: f64) -> Self {
        Self {
            units_sold: Some(units_sold),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.sale_date = Some(date);
        self
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Units sold, if present and finite.
    pub fn valid_units(&self) -> Option<f64> {
        self.units_sold.filter(|units| units.is_finite())
    }

    /// Explicit season, else the meteorological season of `sale_date`.
    pub fn effective_season(&self) -> Option<&str> {
        self.season
            .as_deref()
            .or_else(|| self.sale_date.map(season_for_date))
    }
}

/// Northern-hemisphere meteorological season for a date.
pub fn season_for_date(date: NaiveDate) -> &'static str {
    match date.month() {
        12 | 1 | 2 => "winter",
        3..=5 => "spring",
        6..=8 => "summer",
        _ => "autumn",
    }
}

/// Which observations a demand estimate was computed from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemandBasis {
    /// Mean over the requested season
    Seasonal,
    /// Mean over all valid observations
    Overall,
    /// No valid observations; the estimate is zero
    NoHistory,
}

impl DemandBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandBasis::Seasonal => "seasonal",
            DemandBasis::Overall => "overall",
            DemandBasis::NoHistory => "no_history",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DemandEstimate {
    pub value: f64,
    pub basis: DemandBasis,
}

/// Urgent reorder alert raised by the critical-threshold strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockAlert {
    pub drug: String,
    pub current_stock: f64,
    pub estimated_demand: f64,
    pub demand_basis: DemandBasis,
    pub message: String,
}

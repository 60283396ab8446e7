//! Replenishment policy configuration.
//!
//! The strategy is chosen by which fields are supplied:
//!
//! ```text
//! {"delivery_days": 3, "storage_limit": 200}        -> lead-time rule
//! {"critical_threshold": 50, "season": "winter"}     -> critical-threshold alerts
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delivery lead time assumed when none is configured.
pub const DEFAULT_DELIVERY_DAYS: f64 = 3.0;

/// Per-item storage limit assumed when none is configured.
pub const DEFAULT_STORAGE_LIMIT: f64 = 200.0;

pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 50.0;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field}: {value} (must be finite and greater than zero)")]
    InvalidValue { field: &'static str, value: f64 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

fn ensure_positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

/// Settings for the four-branch lead-time rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LeadTimeConfig {
    /// Days before a replenishment order arrives
    pub delivery_days: f64,
    /// Maximum desirable on-hand stock
    pub storage_limit: f64,
}

impl Default for LeadTimeConfig {
    fn default() -> Self {
        Self {
            delivery_days: DEFAULT_DELIVERY_DAYS,
            storage_limit: DEFAULT_STORAGE_LIMIT,
        }
    }
}

impl LeadTimeConfig {
    pub fn new(delivery_days: f64, storage_limit: f64) -> Self {
        Self {
            delivery_days,
            storage_limit,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        ensure_positive("delivery_days", self.delivery_days)?;
        ensure_positive("storage_limit", self.storage_limit)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

/// Settings for the single-rule critical-threshold alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CriticalThresholdConfig {
    /// Absolute stock level below which an urgent reorder is raised
    pub critical_threshold: f64,
    /// Season whose sales should drive the demand estimate, if any
    #[serde(default)]
    pub season: Option<String>,
}

impl Default for CriticalThresholdConfig {
    fn default() -> Self {
        Self {
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
            season: None,
        }
    }
}

impl CriticalThresholdConfig {
    pub fn new(critical_threshold: f64) -> Self {
        Self {
            critical_threshold,
            season: None,
        }
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        ensure_positive("critical_threshold", self.critical_threshold)
    }
}

/// One of the two replenishment strategies, selected by the fields supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PolicyConfig {
    LeadTime(LeadTimeConfig),
    CriticalThreshold(CriticalThresholdConfig),
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig::LeadTime(LeadTimeConfig::default())
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        match self {
            PolicyConfig::LeadTime(config) => config.validate(),
            PolicyConfig::CriticalThreshold(config) => config.validate(),
        }
    }

    /// Parse and validate a policy document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

//! Combined stock report for dashboards and spreadsheets.

use serde::{Deserialize, Serialize};

use crate::config::LeadTimeConfig;
use crate::engine::{classify_priority, LeadTimePolicy};
use crate::models::{DaysLeft, MedicineRecord, Priority, RecommendationCode};

/// Stock report over a set of medicines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockReport {
    /// Generation timestamp (RFC 3339)
    pub generated_at: String,
    /// Lead time used for recommendations
    pub delivery_days: f64,
    /// Storage limit used for recommendations
    pub storage_limit: f64,
    pub items: Vec<StockReportLine>,
}

/// One medicine in a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockReportLine {
    pub name: String,
    pub priority: Priority,
    pub days_left: DaysLeft,
    pub code: RecommendationCode,
    pub recommendation: String,
}

impl StockReport {
    /// Classify and recommend for every record.
    pub fn build(config: &LeadTimeConfig, medicines: &[MedicineRecord]) -> Self {
        let policy = LeadTimePolicy::new(*config);
        let items = medicines
            .iter()
            .map(|m| {
                let rec = policy.recommend(m);
                StockReportLine {
                    name: rec.name,
                    priority: classify_priority(m),
                    days_left: rec.days_left,
                    code: rec.code,
                    recommendation: rec.recommendation,
                }
            })
            .collect();

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            delivery_days: config.delivery_days,
            storage_limit: config.storage_limit,
            items,
        }
    }

    /// Lines needing an urgent reorder.
    pub fn urgent(&self) -> impl Iterator<Item = &StockReportLine> {
        self.items
            .iter()
            .filter(|line| line.code == RecommendationCode::UrgentReorder)
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("name,priority,days_left,code,recommendation\n");

        // Lines
        for line in &self.items {
            let days_left = match line.days_left {
                DaysLeft::Finite(days) => days.to_string(),
                DaysLeft::Infinite => line.days_left.to_string(),
            };
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                escape_csv(&line.name),
                line.priority,
                days_left,
                line.code,
                escape_csv(&line.recommendation),
            ));
        }

        csv
    }
}

/// Escape a CSV field (RFC 4180).
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

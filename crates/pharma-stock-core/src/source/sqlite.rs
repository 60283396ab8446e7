//! SQLite-backed data source.

use super::{MedicineSource, SourceResult};
use crate::db::Database;
use crate::models::{DemandObservation, MedicineRecord};

impl MedicineSource for Database {
    fn medicines(&self) -> SourceResult<Vec<MedicineRecord>> {
        Ok(self.list_medicines()?)
    }

    fn demand_history(&self, drug: &str) -> SourceResult<Vec<DemandObservation>> {
        Ok(self.list_sales(drug)?)
    }
}

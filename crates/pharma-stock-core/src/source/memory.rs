//! In-memory data source.

use std::collections::BTreeMap;

use super::{MedicineSource, SourceResult};
use crate::models::{DemandObservation, MedicineRecord};

/// Records held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    medicines: BTreeMap<String, MedicineRecord>,
    sales: BTreeMap<String, Vec<DemandObservation>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three-medicine sample dataset.
    pub fn sample() -> Self {
        let medicines = [
            MedicineRecord::new("Aspirin", 200.0, 20.0, "flu season"),
            MedicineRecord::new("Ibuprofen", 150.0, 10.0, "regular"),
            MedicineRecord::new("Antibiotics", 50.0, 15.0, "flu season"),
        ];

        Self {
            medicines: medicines
                .into_iter()
                .map(|m| (m.name.clone(), m))
                .collect(),
            sales: BTreeMap::new(),
        }
    }

    /// Insert or replace a record after validating it.
    pub fn insert_medicine(&mut self, record: MedicineRecord) -> SourceResult<()> {
        record.validate()?;
        self.medicines.insert(record.name.clone(), record);
        Ok(())
    }

    /// Builder-style variant of [`InMemorySource::insert_medicine`].
    pub fn with_medicine(mut self, record: MedicineRecord) -> SourceResult<Self> {
        self.insert_medicine(record)?;
        Ok(self)
    }

    /// Append a sales observation for `drug`.
    pub fn record_sale(&mut self, drug: &str, observation: DemandObservation) {
        self.sales
            .entry(drug.to_string())
            .or_default()
            .push(observation);
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }
}

impl MedicineSource for InMemorySource {
    fn medicines(&self) -> SourceResult<Vec<MedicineRecord>> {
        Ok(self.medicines.values().cloned().collect())
    }

    fn demand_history(&self, drug: &str) -> SourceResult<Vec<DemandObservation>> {
        Ok(self.sales.get(drug).cloned().unwrap_or_default())
    }
}

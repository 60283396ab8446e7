//! Sales history operations.

use chrono::NaiveDate;
use rusqlite::params;

use super::{Database, DbError, DbResult};
use crate::models::DemandObservation;

const DATE_FORMAT: &str = "%Y-%m-%d";

impl Database {
    /// Append a sale for `drug`. Returns the new row id.
    pub fn record_sale(&self, drug: &str, observation: &DemandObservation) -> DbResult<i64> {
        let sale_date = observation
            .sale_date
            .map(|d| d.format(DATE_FORMAT).to_string());

        self.conn.execute(
            "INSERT INTO sales (drug, units_sold, sale_date, season) VALUES (?1, ?2, ?3, ?4)",
            params![
                drug,
                observation.valid_units(),
                sale_date,
                observation.season
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All sales for `drug` in insertion order.
    pub fn list_sales(&self, drug: &str) -> DbResult<Vec<DemandObservation>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT units_sold, sale_date, season
            FROM sales
            WHERE drug = ?
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([drug], |row| {
            Ok(SaleRow {
                units_sold: row.get(0)?,
                sale_date: row.get(1)?,
                season: row.get(2)?,
            })
        })?;

        let mut sales = Vec::new();
        for row in rows {
            sales.push(row?.try_into()?);
        }
        Ok(sales)
    }
}

/// Intermediate row struct for database mapping.
struct SaleRow {
    units_sold: Option<f64>,
    sale_date: Option<String>,
    season: Option<String>,
}

impl TryFrom<SaleRow> for DemandObservation {
    type Error = DbError;

    fn try_from(row: SaleRow) -> Result<Self, Self::Error> {
        Ok(DemandObservation {
            units_sold: row.units_sold,
            sale_date: row
                .sale_date
                .map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT))
                .transpose()?,
            season: row.season,
        })
    }
}

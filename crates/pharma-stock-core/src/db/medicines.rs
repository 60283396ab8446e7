//! Medicine stock operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::MedicineRecord;

fn medicine_from_row(row: &Row<'_>) -> rusqlite::Result<MedicineRecord> {
    Ok(MedicineRecord {
        name: row.get(0)?,
        current_stock: row.get(1)?,
        daily_demand: row.get(2)?,
        scenario: row.get(3)?,
    })
}

impl Database {
    /// Insert or update a medicine record.
    pub fn upsert_medicine(&self, record: &MedicineRecord) -> DbResult<()> {
        record.validate()?;

        self.conn.execute(
            r#"
            INSERT INTO medicines (name, current_stock, daily_demand, scenario, updated_at)
            VALUES (?1, ?2, ?3, ?4, datetime('now'))
            ON CONFLICT(name) DO UPDATE SET
                current_stock = excluded.current_stock,
                daily_demand = excluded.daily_demand,
                scenario = excluded.scenario,
                updated_at = datetime('now')
            "#,
            params![
                record.name,
                record.current_stock,
                record.daily_demand,
                record.scenario,
            ],
        )?;
        Ok(())
    }

    /// Get a medicine by name.
    pub fn get_medicine(&self, name: &str) -> DbResult<Option<MedicineRecord>> {
        let record = self
            .conn
            .query_row(
                r#"
                SELECT name, current_stock, daily_demand, scenario
                FROM medicines
                WHERE name = ?
                "#,
                [name],
                medicine_from_row,
            )
            .optional()?;
        Ok(record)
    }

    /// All medicines ordered by name.
    pub fn list_medicines(&self) -> DbResult<Vec<MedicineRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT name, current_stock, daily_demand, scenario
            FROM medicines
            ORDER BY name
            "#,
        )?;

        let rows = stmt.query_map([], medicine_from_row)?;

        let mut medicines = Vec::new();
        for row in rows {
            medicines.push(row?);
        }
        Ok(medicines)
    }

    /// Set the on-hand stock for an existing medicine.
    pub fn update_stock(&self, name: &str, current_stock: f64) -> DbResult<()> {
        crate::models::check_quantity("current_stock", current_stock)?;

        let rows_affected = self.conn.execute(
            "UPDATE medicines SET current_stock = ?1, updated_at = datetime('now') WHERE name = ?2",
            params![current_stock, name],
        )?;
        if rows_affected == 0 {
            return Err(super::DbError::NotFound(name.to_string()));
        }
        Ok(())
    }

    /// Delete a medicine.
    pub fn delete_medicine(&self, name: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM medicines WHERE name = ?", [name])?;
        Ok(rows_affected > 0)
    }
}

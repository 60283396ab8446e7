//! SQLite schema definition.

/// Complete database schema for pharma-stock.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Medicines (current stock snapshot)
-- ============================================================================

CREATE TABLE IF NOT EXISTS medicines (
    name TEXT PRIMARY KEY,
    current_stock REAL NOT NULL CHECK (current_stock >= 0),
    daily_demand REAL NOT NULL CHECK (daily_demand >= 0),
    scenario TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Sales History (append-only demand observations)
-- ============================================================================

CREATE TABLE IF NOT EXISTS sales (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    drug TEXT NOT NULL,
    units_sold REAL,                             -- NULL when missing in the source data
    sale_date TEXT,                              -- ISO 8601 date (YYYY-MM-DD)
    season TEXT,                                 -- explicit label; derived from sale_date when NULL
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_sales_drug ON sales(drug);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        assert!(conn.execute_batch(SCHEMA).is_ok());
    }

    #[test]
    fn test_negative_stock_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let result = conn.execute(
            "INSERT INTO medicines (name, current_stock, daily_demand) VALUES ('A', -1, 1)",
            [],
        );
        assert!(result.is_err());

        let result = conn.execute(
            "INSERT INTO medicines (name, current_stock, daily_demand) VALUES ('A', 1, 1)",
            [],
        );
        assert!(result.is_ok());
    }
}

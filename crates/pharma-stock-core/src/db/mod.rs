//! SQLite store for medicines and their sales history.

mod medicines;
mod sales;
mod schema;

pub use schema::*;

use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

use crate::models::ValidationError;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid record: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid sale date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Medicine not found: {0}")]
    NotFound(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Inventory database. Tables are created on open if missing.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        Self::with_schema(Connection::open(path)?)
    }

    /// Scratch database that disappears when dropped.
    pub fn open_in_memory() -> DbResult<Self> {
        Self::with_schema(Connection::open_in_memory()?)
    }

    fn with_schema(conn: Connection) -> DbResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

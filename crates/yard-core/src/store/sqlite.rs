//! SQLite-backed keyed record store.

use std::path::Path;

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::{decode_stops, encode_stops, StopStore, DEFAULT_STORAGE_KEY};
use crate::{
    error::{DatabaseResultExt, Result},
    models::DispatchStop,
};

const SELECT_RECORD_SQL: &str = "SELECT value FROM records WHERE key = ?1";
const UPSERT_RECORD_SQL: &str = "INSERT INTO records (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Database connection holding the stop collection under one storage key.
pub struct Database {
    connection: Connection,
    key: String,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema,
    /// using the default storage key.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_key(path, DEFAULT_STORAGE_KEY)
    }

    /// Opens the database file, storing the collection under `key`.
    pub fn with_key<P: AsRef<Path>>(path: P, key: impl Into<String>) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self {
            connection,
            key: key.into(),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initializes the schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }

    /// The storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw stored document, if any.
    fn read_raw(&self) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_RECORD_SQL, params![self.key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stop collection")
    }

    /// Replace the stored document. Used to seed raw data in tests.
    pub fn write_raw(&mut self, raw: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_RECORD_SQL,
            params![self.key, raw, Timestamp::now().to_string()],
        )
        .db_context("Failed to write stop collection")?;

        tx.commit().db_context("Failed to commit transaction")
    }
}

impl StopStore for Database {
    fn load(&self) -> Result<Vec<DispatchStop>> {
        let stops = match self.read_raw()? {
            Some(raw) => decode_stops(&raw),
            None => Vec::new(),
        };
        debug!("Loaded {} stop(s) from '{}'", stops.len(), self.key);
        Ok(stops)
    }

    fn save(&mut self, stops: &[DispatchStop]) -> Result<()> {
        let raw = encode_stops(stops)?;
        self.write_raw(&raw)?;
        debug!("Saved {} stop(s) to '{}'", stops.len(), self.key);
        Ok(())
    }
}

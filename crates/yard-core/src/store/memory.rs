//! In-memory store for tests and throwaway sessions.

use super::{decode_stops, encode_stops, StopStore};
use crate::{error::Result, models::DispatchStop};

/// In-memory storage keeping the collection in its serialized form, so reads
/// go through the same decoding as the database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw stored document.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// The stored document, if anything has been saved.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl StopStore for MemoryStore {
    fn load(&self) -> Result<Vec<DispatchStop>> {
        Ok(self.raw.as_deref().map(decode_stops).unwrap_or_default())
    }

    fn save(&mut self, stops: &[DispatchStop]) -> Result<()> {
        self.raw = Some(encode_stops(stops)?);
        Ok(())
    }
}

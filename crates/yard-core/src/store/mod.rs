//! Persistence boundary for the stop collection.
//!
//! The whole collection lives as one JSON array under a single storage key
//! and is read and rewritten wholesale. There is no partial-update protocol
//! and no merge: the last save wins.
//!
//! Loading never fails on bad data. A missing record or a value that is not
//! a JSON array loads as an empty collection; array elements that do not
//! parse as stops are skipped with a warning.
//!
//! This module also owns identifier generation for stops and dependencies.

use jiff::Timestamp;
use log::warn;
use rand::Rng;

use crate::{error::Result, models::DispatchStop};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::Database;

/// Default storage key for the stop collection.
pub const DEFAULT_STORAGE_KEY: &str = "yard-dispatch";

/// Load/save access to the full stop collection.
pub trait StopStore {
    /// Read the full collection. Absent or corrupt data yields an empty list.
    fn load(&self) -> Result<Vec<DispatchStop>>;

    /// Replace the full collection.
    fn save(&mut self, stops: &[DispatchStop]) -> Result<()>;
}

/// New opaque identifier: random hex suffix followed by the current epoch
/// milliseconds in hex.
///
/// ```rust
/// let a = yard_core::store::new_id();
/// let b = yard_core::store::new_id();
/// assert_ne!(a, b);
/// ```
pub fn new_id() -> String {
    let suffix: u64 = rand::thread_rng().gen();
    format!("{suffix:013x}{:x}", Timestamp::now().as_millisecond())
}

/// Current time truncated to the millisecond precision of the stored record.
pub(crate) fn now() -> Timestamp {
    let now = Timestamp::now();
    Timestamp::from_millisecond(now.as_millisecond()).unwrap_or(now)
}

/// Decode a stored collection leniently.
pub(crate) fn decode_stops(raw: &str) -> Vec<DispatchStop> {
    let elements: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(serde_json::Value::Array(elements)) => elements,
        Ok(_) => {
            warn!("Stored stop collection is not an array; treating it as empty");
            return Vec::new();
        }
        Err(e) => {
            warn!("Stored stop collection is not valid JSON ({e}); treating it as empty");
            return Vec::new();
        }
    };

    elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(stop) => Some(stop),
            Err(e) => {
                warn!("Skipping unreadable stop at index {index}: {e}");
                None
            }
        })
        .collect()
}

/// Encode a collection for storage.
pub(crate) fn encode_stops(stops: &[DispatchStop]) -> Result<String> {
    Ok(serde_json::to_string(stops)?)
}

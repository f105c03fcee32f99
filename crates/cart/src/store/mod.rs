//! Synchronous key-value persistence boundary.
//!
//! The engine treats storage the way a browser frontend treats
//! `localStorage`: string keys, JSON string values, blocking reads and
//! writes small enough that synchronous access is acceptable. The store
//! is a private resource of the engine - nothing else should write to
//! its keys.
//!
//! Two implementations are provided: [`MemoryStore`] for tests and
//! ephemeral sessions, and [`JsonFileStore`] for durable local state.

mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::error::StoreError;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// A synchronous string-keyed store of JSON blobs.
pub trait KeyValueStore: std::fmt::Debug {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage fails.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Load a persisted collection, falling back to empty on any failure.
///
/// A missing key is the normal first-visit case. A present but malformed
/// value is discarded with a warning rather than crashing the engine -
/// the session simply starts from an empty collection.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "Discarding malformed persisted collection");
            Vec::new()
        }
    }
}

/// Persist a collection as a JSON array under `key`.
///
/// Write failures (e.g. storage quota exceeded) are logged and swallowed:
/// the in-memory state remains authoritative for the rest of the session.
pub fn save_collection<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, items: &[T]) {
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            error!(key, error = %e, "Failed to serialize collection");
            return;
        }
    };

    if let Err(e) = store.set(key, &json) {
        error!(key, error = %e, "Failed to persist collection");
    }
}

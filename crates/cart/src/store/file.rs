//! File-backed JSON store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StoreError;

use super::KeyValueStore;

/// A [`KeyValueStore`] that keeps one JSON file per key inside a
/// directory (`<dir>/<key>.json`).
///
/// Writes go through a sibling temp file and an atomic rename so a crash
/// mid-write cannot leave a half-serialized collection behind. Payloads
/// are a few kilobytes at most, so synchronous I/O is acceptable here.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers like "cartItems"; strip anything that
        // would escape the storage directory.
        let safe: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        self.dir.join(format!("{safe}.json"))
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read persisted value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        let io_err = |source| StoreError::Io {
            key: key.to_owned(),
            source,
        };

        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();

        assert!(store.get("cartItems").is_none());
        store.set("cartItems", r#"[{"id":"1"}]"#).unwrap();
        assert_eq!(store.get("cartItems").as_deref(), Some(r#"[{"id":"1"}]"#));

        // a second store over the same directory sees the value
        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert!(reopened.get("cartItems").is_some());

        store.remove("cartItems").unwrap();
        assert!(store.get("cartItems").is_none());
        store.remove("cartItems").unwrap();
    }

    #[test]
    fn test_key_sanitization_stays_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        let path = store.path_for("../../etc/passwd");
        assert!(path.starts_with(dir.path()));
    }
}

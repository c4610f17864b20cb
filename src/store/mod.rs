//! Key-value persistence substrate.
//!
//! Every record is serialized text stored under a fixed string key, matching
//! the single-document model of the original storage layer. No concurrency
//! control: single-process, synchronous, last write wins.

pub mod collection;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::TrackerError;

/// Fixed store keys.
pub mod keys {
    /// The entire collection, one JSON array.
    pub const COLLECTION: &str = "animeCollection";
    /// Denormalized copy of the most recently added entry.
    pub const LAST_ADDED: &str = "lastAddedTitle";
    /// Reserved for future per-item user scores; never written today.
    pub const USER_SCORES: &str = "userScores";
}

/// Raw get/set/remove against the substrate.
///
/// Implementations surface substrate failures as distinct errors instead of
/// crashing or silently dropping writes.
pub trait StoreAdapter: Send + Sync {
    /// Returns the serialized text under `key`, or `None` when the record
    /// has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, TrackerError>;

    fn write(&self, key: &str, value: &str) -> Result<(), TrackerError>;

    /// Removes the record if present; absent records are not an error.
    fn delete(&self, key: &str) -> Result<(), TrackerError>;
}

/// File-backed store: one file per key inside a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store, creating the data directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| TrackerError::StoreWrite {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StoreAdapter for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, TrackerError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(TrackerError::StoreRead {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| TrackerError::StoreWrite {
            key: key.to_string(),
            source,
        })?;
        std::fs::write(self.path_for(key), value).map_err(|source| TrackerError::StoreWrite {
            key: key.to_string(),
            source,
        })
    }

    fn delete(&self, key: &str) -> Result<(), TrackerError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(TrackerError::StoreWrite {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// In-memory store for tests and ephemeral use.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreAdapter for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, TrackerError> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TrackerError> {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), TrackerError> {
        self.records.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("hondana-store-test-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn read_missing_key_is_none() {
        let store = FileStore::open(scratch_dir()).unwrap();
        assert!(store.read(keys::COLLECTION).unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let store = FileStore::open(scratch_dir()).unwrap();
        store.write(keys::COLLECTION, "[1,2,3]").unwrap();
        assert_eq!(
            store.read(keys::COLLECTION).unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[test]
    fn delete_missing_key_is_noop() {
        let store = FileStore::open(scratch_dir()).unwrap();
        store.delete(keys::LAST_ADDED).unwrap();
    }

    #[test]
    fn delete_removes_record() {
        let store = FileStore::open(scratch_dir()).unwrap();
        store.write(keys::LAST_ADDED, "{}").unwrap();
        store.delete(keys::LAST_ADDED).unwrap();
        assert!(store.read(keys::LAST_ADDED).unwrap().is_none());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
        store.delete("k").unwrap();
        assert!(store.read("k").unwrap().is_none());
    }
}

//! Durable string-keyed store
//!
//! The file layout is a single flat JSON object:
//!
//! ```json
//! { "selectedProvince": "32", "selectedRegency": "3273" }
//! ```
//!
//! Every mutation rewrites the whole file through a temporary sibling and a
//! rename, so a crash mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Storage file {} is not a JSON object of strings: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Minimal key-value contract: get, set, remove
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Store backed by a JSON file on disk
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Open the store, reading existing entries if the file is present.
    ///
    /// A missing file is an empty store; the file and its parent directory
    /// are created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        info!(
            "Opened key-value store at {} ({} entries)",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let bytes = serde_json::to_vec_pretty(entries).map_err(|e| io_err(io::Error::other(e)))?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, bytes).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;

        debug!("Persisted {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    // Mutations are staged on a copy and kept only once they are on disk
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        let mut staged = entries.clone();
        staged.insert(key.to_string(), value.to_string());
        self.persist(&staged)?;
        *entries = staged;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        let mut staged = entries.clone();
        staged.remove(key);
        self.persist(&staged)?;
        *entries = staged;
        Ok(())
    }
}

/// Store that forgets everything when the process exits
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_remove() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("selectedProvince").unwrap(), None);

        store.set("selectedProvince", "32").unwrap();
        assert_eq!(
            store.get("selectedProvince").unwrap(),
            Some("32".to_string())
        );

        store.remove("selectedProvince").unwrap();
        assert_eq!(store.get("selectedProvince").unwrap(), None);

        // Removing an absent key is fine
        store.remove("selectedProvince").unwrap();
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("selection.json");

        {
            let store = FileKeyValueStore::open(&path).unwrap();
            store.set("selectedProvince", "32").unwrap();
            store.set("selectedRegency", "3273").unwrap();
            store.remove("selectedRegency").unwrap();
        }

        let reopened = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("selectedProvince").unwrap(),
            Some("32".to_string())
        );
        assert_eq!(reopened.get("selectedRegency").unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");

        let store = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(store.get("selectedDistrict").unwrap(), None);
        // Nothing written yet, nothing on disk
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = FileKeyValueStore::open(&path);
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_file_store_no_leftover_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");

        let store = FileKeyValueStore::open(&path).unwrap();
        store.set("selectedProvince", "11").unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("selection.json.tmp").exists());

        let raw: BTreeMap<String, String> =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw.get("selectedProvince").map(String::as_str), Some("11"));
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("state");
        let path = blocker.join("selection.json");

        let store = FileKeyValueStore::open(&path).unwrap();
        // A plain file where the parent directory should be
        fs::write(&blocker, "").unwrap();

        let result = store.set("selectedProvince", "1");
        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert_eq!(store.get("selectedProvince").unwrap(), None);

        // Retrying the same value once the directory can be created reaches disk
        fs::remove_file(&blocker).unwrap();
        store.set("selectedProvince", "1").unwrap();
        assert!(path.exists());

        let reopened = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("selectedProvince").unwrap(),
            Some("1".to_string())
        );
    }

    #[test]
    fn test_failed_remove_keeps_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");

        let store = FileKeyValueStore::open(&path).unwrap();
        store.set("selectedRegency", "3273").unwrap();

        // Replace the file with a directory so the rename fails
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "").unwrap();

        assert!(store.remove("selectedRegency").is_err());
        assert_eq!(
            store.get("selectedRegency").unwrap(),
            Some("3273".to_string())
        );
    }
}

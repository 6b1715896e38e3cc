use std::sync::Arc;

use crate::features::selection::state::Selection;
use crate::modules::storage::KeyValueStore;
#[cfg(test)]
use crate::modules::storage::StorageError;
use crate::shared::constants::{KEY_SELECTED_DISTRICT, KEY_SELECTED_PROVINCE, KEY_SELECTED_REGENCY};

/// The three fixed keys a selection is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKey {
    Province,
    Regency,
    District,
}

impl SelectionKey {
    pub const ALL: [SelectionKey; 3] = [
        SelectionKey::Province,
        SelectionKey::Regency,
        SelectionKey::District,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SelectionKey::Province => KEY_SELECTED_PROVINCE,
            SelectionKey::Regency => KEY_SELECTED_REGENCY,
            SelectionKey::District => KEY_SELECTED_DISTRICT,
        }
    }
}

/// Round-trips selection ids through a key-value store.
///
/// Ids are stored as decimal strings. Store failures are logged and
/// swallowed: losing a remembered selection must never break a request.
#[derive(Clone)]
pub struct SelectionPersistence {
    store: Arc<dyn KeyValueStore>,
}

impl SelectionPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save(&self, key: SelectionKey, id: i64) {
        if let Err(e) = self.store.set(key.as_str(), &id.to_string()) {
            tracing::warn!("Failed to save {}: {}", key.as_str(), e);
        }
    }

    /// Stored id, if any. Empty or non-numeric values read as unset.
    pub fn load(&self, key: SelectionKey) -> Option<i64> {
        let raw = match self.store.get(key.as_str()) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", key.as_str(), e);
                return None;
            }
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!("Ignoring non-numeric {} value '{}'", key.as_str(), raw);
                None
            }
        }
    }

    pub fn delete(&self, key: SelectionKey) {
        if let Err(e) = self.store.remove(key.as_str()) {
            tracing::warn!("Failed to delete {}: {}", key.as_str(), e);
        }
    }

    /// Save the id, or delete the key when the level is cleared
    pub fn write(&self, key: SelectionKey, id: Option<i64>) {
        match id {
            Some(id) => self.save(key, id),
            None => self.delete(key),
        }
    }

    /// Read all three keys in one pass, exactly as stored
    pub fn load_all(&self) -> Selection {
        Selection {
            province: self.load(SelectionKey::Province),
            regency: self.load(SelectionKey::Regency),
            district: self.load(SelectionKey::District),
        }
    }

    pub fn clear(&self) {
        for key in SelectionKey::ALL {
            self.delete(key);
        }
    }
}

/// Store on which every call fails, shared by tests across the feature
#[cfg(test)]
pub struct BrokenStore;

#[cfg(test)]
impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Poisoned)
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Poisoned)
    }
    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Poisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::MemoryKeyValueStore;

    #[test]
    fn test_keys_are_fixed() {
        let keys: Vec<&str> = SelectionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["selectedProvince", "selectedRegency", "selectedDistrict"]
        );
    }

    #[test]
    fn test_save_stores_decimal_string() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let persistence = SelectionPersistence::new(store.clone());

        persistence.save(SelectionKey::Province, 5);
        assert_eq!(
            store.get("selectedProvince").unwrap(),
            Some("5".to_string())
        );
        assert_eq!(persistence.load(SelectionKey::Province), Some(5));

        persistence.delete(SelectionKey::Province);
        assert_eq!(store.get("selectedProvince").unwrap(), None);
    }

    #[test]
    fn test_load_ignores_empty_and_garbage() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store.set("selectedProvince", "").unwrap();
        store.set("selectedRegency", "bandung").unwrap();
        store.set("selectedDistrict", " 100 ").unwrap();

        let persistence = SelectionPersistence::new(store);
        assert_eq!(
            persistence.load_all(),
            Selection {
                province: None,
                regency: None,
                district: Some(100),
            }
        );
    }

    #[test]
    fn test_write_and_clear() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let persistence = SelectionPersistence::new(store.clone());

        persistence.write(SelectionKey::Regency, Some(10));
        assert_eq!(store.get("selectedRegency").unwrap(), Some("10".to_string()));
        persistence.write(SelectionKey::Regency, None);
        assert_eq!(store.get("selectedRegency").unwrap(), None);

        persistence.save(SelectionKey::Province, 1);
        persistence.save(SelectionKey::District, 100);
        persistence.clear();
        assert_eq!(persistence.load_all(), Selection::default());
    }

    #[test]
    fn test_store_failures_are_swallowed() {
        let persistence = SelectionPersistence::new(Arc::new(BrokenStore));

        persistence.save(SelectionKey::Province, 1);
        persistence.delete(SelectionKey::Regency);
        persistence.clear();
        assert_eq!(persistence.load_all(), Selection::default());
    }
}

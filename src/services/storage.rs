//! Prefixed key-value persistence over browser localStorage.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage rejected write: {0}")]
    Write(String),
}

/// Raw string storage backend.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
    fn keys(&self) -> Vec<String>;
}

/// `window.localStorage`. Resolved on every call so the handle stays `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn keys(&self) -> Vec<String> {
        let Some(storage) = Self::local_storage() else {
            return Vec::new();
        };
        let len = storage.length().unwrap_or(0);
        (0..len)
            .filter_map(|i| storage.key(i).ok().flatten())
            .collect()
    }
}

/// In-memory backend, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.items.borrow().keys().cloned().collect()
    }
}

/// JSON values stored under `<prefix><key>`.
#[derive(Debug, Clone)]
pub struct PrefixedStorage<S> {
    backend: S,
    prefix: String,
}

impl<S: KeyValueStorage> PrefixedStorage<S> {
    pub fn new(backend: S, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Missing keys and undecodable values both read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get_item(&self.prefixed(key))?;
        serde_json::from_str(&raw).ok()
    }

    /// Write failures are logged, never surfaced.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|raw| self.backend.set_item(&self.prefixed(key), &raw));
        if let Err(e) = result {
            log::error!("Failed to save to storage: {key}: {e}");
        }
    }

    pub fn remove(&self, key: &str) {
        self.backend.remove_item(&self.prefixed(key));
    }

    /// Remove every key carrying this prefix. Foreign keys are left alone.
    pub fn clear(&self) {
        for key in self.backend.keys() {
            if key.starts_with(&self.prefix) {
                self.backend.remove_item(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_uses_prefix_and_json() {
        let backend = MemoryStorage::new();
        let storage = PrefixedStorage::new(backend.clone(), "watchdog_");

        storage.set("access_token", &"abc".to_string());

        assert_eq!(
            backend.get_item("watchdog_access_token").as_deref(),
            Some("\"abc\"")
        );
        assert_eq!(storage.get::<String>("access_token").as_deref(), Some("abc"));
    }

    #[test]
    fn test_get_missing_and_corrupt_values() {
        let backend = MemoryStorage::new();
        let storage = PrefixedStorage::new(backend.clone(), "watchdog_");

        assert_eq!(storage.get::<String>("missing"), None);

        backend.set_item("watchdog_broken", "{not json").unwrap();
        assert_eq!(storage.get::<String>("broken"), None);
    }

    #[test]
    fn test_remove_only_touches_one_key() {
        let backend = MemoryStorage::new();
        let storage = PrefixedStorage::new(backend.clone(), "watchdog_");
        storage.set("a", &1);
        storage.set("b", &2);

        storage.remove("a");

        assert_eq!(storage.get::<i32>("a"), None);
        assert_eq!(storage.get::<i32>("b"), Some(2));
    }

    #[test]
    fn test_clear_keeps_foreign_keys() {
        let backend = MemoryStorage::new();
        let storage = PrefixedStorage::new(backend.clone(), "watchdog_");
        storage.set("access_token", &"a");
        storage.set("refresh_token", &"r");
        backend.set_item("other_app_key", "\"x\"").unwrap();

        storage.clear();

        assert_eq!(backend.len(), 1);
        assert!(backend.get_item("other_app_key").is_some());
    }
}

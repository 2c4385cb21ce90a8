//! Key/value persistence behind the preference stores.
//!
//! `BrowserStorage` talks to `window.localStorage`; `MemoryStorage` keeps
//! values in process and backs the native tests.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("malformed value under '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, resolved on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Js(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }
}

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut items) = storage.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        storage
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self
            .items
            .lock()
            .map_err(|e| StorageError::Js(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StorageError::Js(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StorageError::Js(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}

/// Read and deserialize the JSON value stored under `key`.
pub fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStorage + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &raw)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use contracts::shared::preferences::{Accent, Mode, ThemeConfig};

    /// Storage whose every call fails, for exercising swallowed errors.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Js("QuotaExceededError".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));

        let shared = storage.clone();
        shared.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn json_helpers_validate_shape() {
        let storage = MemoryStorage::new();
        let config = ThemeConfig::new(Accent::Theme2, Mode::Dark);
        save_json(&storage, "theme", &config).unwrap();
        let loaded: Option<ThemeConfig> = load_json(&storage, "theme").unwrap();
        assert_eq!(loaded, Some(config));

        storage.set("theme", "{not json").unwrap();
        let err = load_json::<ThemeConfig, _>(&storage, "theme").unwrap_err();
        assert!(matches!(err, StorageError::Malformed { ref key, .. } if key == "theme"));

        assert_eq!(load_json::<ThemeConfig, _>(&storage, "absent").unwrap(), None);
    }
}

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Backend rejected the write: {0}")]
    Backend(String),
}

/// Host-provided key-value persistence, the extension's per-install store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str);
}

/// Namespaced, versioned storage key of a persisted type.
pub trait StorageKey {
    const KEY: &'static str;
}

impl<T: StorageKey> StorageKey for Option<T> {
    const KEY: &'static str = T::KEY;
}

pub fn load<T>(store: &impl KeyValueStore) -> Option<T>
where
    T: StorageKey + DeserializeOwned,
{
    let raw = store.get(T::KEY)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            // stale or foreign snapshot, a fresh default beats a crash
            log::warn!("Discarding unreadable {} snapshot: {}", T::KEY, err);
            None
        }
    }
}

pub fn load_or_default<T>(store: &impl KeyValueStore) -> T
where
    T: StorageKey + DeserializeOwned + Default,
{
    load(store).unwrap_or_default()
}

pub fn save<T>(store: &mut impl KeyValueStore, value: &T)
where
    T: StorageKey + Serialize,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            log::error!("Could not serialize {}: {}", T::KEY, err);
            return;
        }
    };
    if let Err(err) = store.set(T::KEY, raw) {
        log::error!("Could not save {} to the host store: {}", T::KEY, err);
    }
}

/// In-memory backend used by tests and previews.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

//! Key/value persistence standing in for browser local storage.
//!
//! Each key holds one JSON document (a collection array or a flag string).

pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

pub const LANGUAGE_KEY: &str = "language";
pub const WELCOME_KEY: &str = "hasSeenWelcome";
pub const SESSION_KEY: &str = "isAuthenticated";

/// Abstraction over string-keyed stores holding serialized values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads a collection. Returns `None` when the key is absent, holds an empty
/// array, or cannot be parsed; parse failures are logged and otherwise ignored
/// so the caller keeps its in-memory default.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<Vec<T>> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to read stored collection");
            return None;
        }
    };
    if raw.trim() == "[]" {
        return None;
    }
    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) if items.is_empty() => None,
        Ok(items) => {
            tracing::debug!(key, count = items.len(), "loaded collection");
            Some(items)
        }
        Err(err) => {
            tracing::error!(key, error = %err, "error loading financial data from store");
            None
        }
    }
}

/// Serializes the full collection under `key`.
pub fn save_collection<T: Serialize>(store: &dyn KeyValueStore, key: &str, items: &[T]) -> Result<()> {
    let json = serde_json::to_string(items)?;
    store.set(key, &json)?;
    tracing::debug!(key, count = items.len(), "saved collection");
    Ok(())
}

/// Reads a `"true"`/`"false"` flag; anything else counts as unset.
pub fn load_flag(store: &dyn KeyValueStore, key: &str) -> Result<bool> {
    Ok(matches!(store.get(key)?.as_deref(), Some("true")))
}

pub fn save_flag(store: &dyn KeyValueStore, key: &str, value: bool) -> Result<()> {
    if value {
        store.set(key, "true")
    } else {
        store.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_keys_load_as_none() {
        let store = MemoryStore::new();
        assert!(load_collection::<u32>(&store, "numbers").is_none());
        store.set("numbers", "[]").unwrap();
        assert!(load_collection::<u32>(&store, "numbers").is_none());
        store.set("numbers", " [ ] ").unwrap();
        assert!(load_collection::<u32>(&store, "numbers").is_none());
    }

    #[test]
    fn corrupt_value_is_ignored() {
        let store = MemoryStore::new();
        store.set("numbers", "{not json").unwrap();
        assert!(load_collection::<u32>(&store, "numbers").is_none());
        assert_eq!(store.get("numbers").unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn saved_collection_loads_back() {
        let store = MemoryStore::new();
        save_collection(&store, "numbers", &[1u32, 2, 3]).unwrap();
        assert_eq!(load_collection::<u32>(&store, "numbers"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn flags_default_to_false() {
        let store = MemoryStore::new();
        assert!(!load_flag(&store, WELCOME_KEY).unwrap());
        save_flag(&store, WELCOME_KEY, true).unwrap();
        assert!(load_flag(&store, WELCOME_KEY).unwrap());
        save_flag(&store, WELCOME_KEY, false).unwrap();
        assert!(store.get(WELCOME_KEY).unwrap().is_none());
    }
}

//! In-memory key-value store for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use cardsmith_core::{
    application::{ApplicationError, ports::KeyValueStore},
    error::CardsmithResult,
};

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with one value already present (testing helper).
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.write() {
            inner.insert(key.into(), value.into());
        }
        store
    }

    /// Read a raw value (testing helper).
    pub fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.get(key).cloned()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> CardsmithResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> CardsmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CardsmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save("k", "v").unwrap();
        assert_eq!(other.load("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let store = MemoryStore::with_value("a", "1");
        store.remove("b").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }
}

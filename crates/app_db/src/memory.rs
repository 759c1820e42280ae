//! In-memory key-value store

use crate::{KeyValueStore, Result};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// Volatile store; contents are lost when dropped
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &Value) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.write("a", &json!({"x": 1})).unwrap();
        assert_eq!(store.read("a").unwrap(), Some(json!({"x": 1})));
        assert!(store.contains("a").unwrap());
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        assert_eq!(store.read("a").unwrap(), None);
    }
}

//! In-process key-value store

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use super::{KeyValueStore, StorageResult};

/// Volatile store backed by a locked `HashMap`
#[derive(Debug, Default)]
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
    fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

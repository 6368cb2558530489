//! Key-value persistence for client preferences
//!
//! Favorites and follow state are small JSON documents stored under fixed
//! keys. Callers receive a [`KeyValueStore`] instead of reaching for ambient
//! storage, so the same logic runs against [`MemoryStore`] in tests and a
//! redb file on the server.

mod memory;

pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Corrupted value for key '{key}': {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// JSON document store addressed by string keys
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<Value>>;

    fn set(&self, key: &str, value: Value) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Read and decode the document under `key`.
///
/// A document that does not match `T` is reported as [`StorageError::Corrupted`].
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> StorageResult<Option<T>> {
    match store.get(key)? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StorageError::Corrupted {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Encode `value` and write it under `key`
pub fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> StorageResult<()> {
    store.set(key, serde_json::to_value(value)?)
}

//! redb-based key-value store for preferences

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde_json::Value;
use shared::storage::{KeyValueStore, StorageError, StorageResult};
use thiserror::Error;

/// Preferences table: key = preference key, value = JSON
pub const PREFERENCES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("preferences");

#[derive(Debug, Error)]
pub enum RedbStoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

impl From<RedbStoreError> for StorageError {
    fn from(err: RedbStoreError) -> Self {
        StorageError::Backend(err.to_string())
    }
}

pub type RedbStoreResult<T> = Result<T, RedbStoreError>;

/// Preference storage on an embedded redb file
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create database
    pub fn open(path: impl AsRef<Path>) -> RedbStoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> RedbStoreResult<Self> {
        let db =
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> RedbStoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    fn read_bytes(&self, key: &str) -> RedbStoreResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn write_bytes(&self, key: &str, bytes: &[u8]) -> RedbStoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn delete(&self, key: &str) -> RedbStoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        match self.read_bytes(key)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| StorageError::Corrupted {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: Value) -> StorageResult<()> {
        let bytes = serde_json::to_vec(&value)?;
        self.write_bytes(key, &bytes)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.delete(key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_remove() {
        let store = RedbStore::open_in_memory().unwrap();
        assert_eq!(store.get("shop_favorites").unwrap(), None);

        store.set("shop_favorites", json!([{"id": 1}])).unwrap();
        assert_eq!(
            store.get("shop_favorites").unwrap(),
            Some(json!([{"id": 1}]))
        );

        store.remove("shop_favorites").unwrap();
        assert_eq!(store.get("shop_favorites").unwrap(), None);
    }

    #[test]
    fn test_invalid_bytes_are_corrupted() {
        let store = RedbStore::open_in_memory().unwrap();
        store.write_bytes("lc_followedUsers", b"{not json").unwrap();
        let err = store.get("lc_followedUsers").unwrap_err();
        assert!(matches!(err, StorageError::Corrupted { .. }));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.set("lc_followedUsers", json!({"alice": true})).unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(
            store.get("lc_followedUsers").unwrap(),
            Some(json!({"alice": true}))
        );
    }
}

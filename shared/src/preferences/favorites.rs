use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::FavoriteShop;
use crate::storage::{self, KeyValueStore, StorageError, StorageResult};
use crate::util::now_millis;

/// Storage key of the favorites list
pub const FAVORITES_KEY: &str = "shop_favorites";

/// Ordered list of saved shops, oldest first
pub struct Favorites {
    store: Arc<dyn KeyValueStore>,
    lock: Mutex<()>,
}

impl Favorites {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// All favorites in insertion order.
    ///
    /// A missing or unreadable document yields an empty list.
    pub fn list(&self) -> StorageResult<Vec<FavoriteShop>> {
        match storage::load::<Vec<FavoriteShop>>(self.store.as_ref(), FAVORITES_KEY) {
            Ok(items) => Ok(items.unwrap_or_default()),
            Err(StorageError::Corrupted { key, source }) => {
                tracing::warn!(key = %key, error = %source, "Discarding corrupted favorites");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_favorite(&self, id: i64) -> StorageResult<bool> {
        Ok(self.list()?.iter().any(|f| f.id == id))
    }

    /// Save a shop. Returns `false` when it was already saved.
    pub fn add(&self, id: i64, name: &str) -> StorageResult<bool> {
        let _guard = self.lock.lock();
        let mut items = self.list()?;
        if items.iter().any(|f| f.id == id) {
            return Ok(false);
        }
        items.push(FavoriteShop {
            id,
            name: name.to_string(),
            timestamp: now_millis(),
        });
        storage::save(self.store.as_ref(), FAVORITES_KEY, &items)?;
        tracing::info!(target: "audit", shop_id = id, name = %name, "Favorite added");
        Ok(true)
    }

    /// Drop a shop. Returns `false` when it was not saved.
    pub fn remove(&self, id: i64) -> StorageResult<bool> {
        let _guard = self.lock.lock();
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|f| f.id != id);
        if items.len() == before {
            return Ok(false);
        }
        storage::save(self.store.as_ref(), FAVORITES_KEY, &items)?;
        tracing::info!(target: "audit", shop_id = id, "Favorite removed");
        Ok(true)
    }

    /// Flip the saved state of a shop, returning the new state
    pub fn toggle(&self, id: i64, name: &str) -> StorageResult<bool> {
        let _guard = self.lock.lock();
        let mut items = self.list()?;
        let saved = if let Some(pos) = items.iter().position(|f| f.id == id) {
            items.remove(pos);
            false
        } else {
            items.push(FavoriteShop {
                id,
                name: name.to_string(),
                timestamp: now_millis(),
            });
            true
        };
        storage::save(self.store.as_ref(), FAVORITES_KEY, &items)?;
        tracing::info!(target: "audit", shop_id = id, saved, "Favorite toggled");
        Ok(saved)
    }
}

use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::FollowMap;
use crate::storage::{self, KeyValueStore, StorageError, StorageResult};

/// Storage key of the follow map
pub const FOLLOW_KEY: &str = "lc_followedUsers";

/// Which accounts the user follows
pub struct FollowStore {
    store: Arc<dyn KeyValueStore>,
    lock: Mutex<()>,
}

impl FollowStore {
    /// Open the store, writing `initial` when nothing usable is persisted yet
    pub fn open(store: Arc<dyn KeyValueStore>, initial: FollowMap) -> StorageResult<Self> {
        let persisted = match storage::load::<FollowMap>(store.as_ref(), FOLLOW_KEY) {
            Ok(map) => map,
            Err(StorageError::Corrupted { key, source }) => {
                tracing::warn!(key = %key, error = %source, "Resetting corrupted follow map");
                None
            }
            Err(e) => return Err(e),
        };
        if persisted.is_none() {
            storage::save(store.as_ref(), FOLLOW_KEY, &initial)?;
            tracing::debug!(entries = initial.len(), "Seeded follow map");
        }
        Ok(Self {
            store,
            lock: Mutex::new(()),
        })
    }

    pub fn follow_map(&self) -> StorageResult<FollowMap> {
        match storage::load::<FollowMap>(self.store.as_ref(), FOLLOW_KEY) {
            Ok(map) => Ok(map.unwrap_or_default()),
            Err(StorageError::Corrupted { key, source }) => {
                tracing::warn!(key = %key, error = %source, "Discarding corrupted follow map");
                Ok(FollowMap::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Unknown users are not followed
    pub fn is_following(&self, user_id: &str) -> StorageResult<bool> {
        Ok(self.follow_map()?.get(user_id).copied().unwrap_or(false))
    }

    /// Flip the follow state of `user_id`, returning the new state
    pub fn toggle(&self, user_id: &str) -> StorageResult<bool> {
        let _guard = self.lock.lock();
        let mut map = self.follow_map()?;
        let following = !map.get(user_id).copied().unwrap_or(false);
        map.insert(user_id.to_string(), following);
        storage::save(self.store.as_ref(), FOLLOW_KEY, &map)?;
        tracing::info!(target: "audit", user_id = %user_id, following, "Follow toggled");
        Ok(following)
    }
}

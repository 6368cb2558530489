//! Preference Models (favorites, follows)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shop saved by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteShop {
    pub id: i64,
    pub name: String,
    /// When it was saved (Unix millis)
    pub timestamp: i64,
}

/// Add favorite payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteCreate {
    pub id: i64,
    pub name: String,
}

/// Followed accounts: user id -> following
pub type FollowMap = BTreeMap<String, bool>;

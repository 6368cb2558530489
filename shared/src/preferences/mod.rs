//! User preferences: favorite shops and followed accounts
//!
//! Both stores read and rewrite a single JSON document. Each holds a mutex
//! across the read-modify-write so concurrent toggles never lose an update.

mod favorites;
mod follow;

pub use favorites::{FAVORITES_KEY, Favorites};
pub use follow::{FOLLOW_KEY, FollowStore};

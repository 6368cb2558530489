//! Data models
//!
//! Shared between storefront-server and the web frontend (via API).
//! All shop IDs are `i64`.

pub mod preference;
pub mod shop;

// Re-exports
pub use preference::*;
pub use shop::*;

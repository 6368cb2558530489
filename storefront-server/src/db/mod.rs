//! Database Module
//!
//! Embedded redb file holding the preference documents

mod store;

pub use store::{PREFERENCES_TABLE, RedbStore, RedbStoreError};

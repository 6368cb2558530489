//! Shared types for the storefront
//!
//! Domain logic used by the server and its tests: opening hours and shop
//! status, catalog models, preference stores, and the error types that
//! travel over HTTP.

pub mod error;
pub mod hours;
pub mod models;
pub mod preferences;
pub mod storage;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use hours::{HoursError, ShopStatus, StatusKind};
pub use storage::{KeyValueStore, StorageError};

//! Unified error system for Storefront
//!
//! This module provides a comprehensive error handling system with:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Opening hours errors
//! - 2xxx: Shop catalog errors
//! - 3xxx: Preference errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::ShopNotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::HoursUnparseable, "cannot read 'whenever'");
//!
//! // Create an error with details
//! let err = AppError::shop_not_found(42)
//!     .with_detail("requested_by", "favorites");
//!
//! // Convert to API response
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};

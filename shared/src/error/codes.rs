//! Unified error codes for the Storefront services
//!
//! Error codes are shared by the server, its clients and the web frontend.
//! They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Opening hours errors
//! - 2xxx: Shop catalog errors
//! - 3xxx: Preference (favorites / follows) errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Hours ====================
    /// Opening hours text could not be parsed
    HoursUnparseable = 1001,
    /// Time of day out of range (hour or minute)
    InvalidTimeOfDay = 1002,
    /// Weekday name not recognized
    InvalidWeekday = 1003,
    /// Reference timestamp could not be parsed
    InvalidTimestamp = 1004,

    // ==================== 2xxx: Shop ====================
    /// Shop not found in the catalog
    ShopNotFound = 2001,

    // ==================== 3xxx: Preference ====================
    /// Shop is not in the favorites list
    FavoriteNotFound = 3001,
    /// Stored preference value could not be decoded
    PreferenceCorrupted = 3002,

    // ==================== 9xxx: System ====================
    /// Preference database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::RequiredField => "Required field is missing",

            // Hours
            ErrorCode::HoursUnparseable => "Opening hours could not be parsed",
            ErrorCode::InvalidTimeOfDay => "Time of day is out of range",
            ErrorCode::InvalidWeekday => "Weekday name is not recognized",
            ErrorCode::InvalidTimestamp => "Timestamp could not be parsed",

            // Shop
            ErrorCode::ShopNotFound => "Shop not found",

            // Preference
            ErrorCode::FavoriteNotFound => "Shop is not a favorite",
            ErrorCode::PreferenceCorrupted => "Stored preference is corrupted",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            7 => Ok(ErrorCode::RequiredField),

            // Hours
            1001 => Ok(ErrorCode::HoursUnparseable),
            1002 => Ok(ErrorCode::InvalidTimeOfDay),
            1003 => Ok(ErrorCode::InvalidWeekday),
            1004 => Ok(ErrorCode::InvalidTimestamp),

            // Shop
            2001 => Ok(ErrorCode::ShopNotFound),

            // Preference
            3001 => Ok(ErrorCode::FavoriteNotFound),
            3002 => Ok(ErrorCode::PreferenceCorrupted),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::HoursUnparseable.code(), 1001);
        assert_eq!(ErrorCode::InvalidTimestamp.code(), 1004);
        assert_eq!(ErrorCode::ShopNotFound.code(), 2001);
        assert_eq!(ErrorCode::FavoriteNotFound.code(), 3001);
        assert_eq!(ErrorCode::PreferenceCorrupted.code(), 3002);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::ShopNotFound.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::HoursUnparseable));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::ShopNotFound));
        assert_eq!(ErrorCode::try_from(9002), Ok(ErrorCode::DatabaseError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(1), Err(InvalidErrorCode(1)));
        assert_eq!(ErrorCode::try_from(9001), Err(InvalidErrorCode(9001)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::ShopNotFound).unwrap();
        assert_eq!(json, "2001");

        let json = serde_json::to_string(&ErrorCode::Success).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("1001").unwrap();
        assert_eq!(code, ErrorCode::HoursUnparseable);

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ShopNotFound.to_string(), "2001");
        assert_eq!(InvalidErrorCode(42).to_string(), "invalid error code: 42");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::ShopNotFound.message(), "Shop not found");
        assert_eq!(
            ErrorCode::HoursUnparseable.message(),
            "Opening hours could not be parsed"
        );
    }
}

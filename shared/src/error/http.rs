//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::ShopNotFound | Self::FavoriteNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::DatabaseError | Self::PreferenceCorrupted => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and parse errors)
            Self::RequiredField
            | Self::HoursUnparseable
            | Self::InvalidTimeOfDay
            | Self::InvalidWeekday
            | Self::InvalidTimestamp => StatusCode::BAD_REQUEST,
        }
    }
}

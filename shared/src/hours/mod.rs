//! Opening hours and shop status
//!
//! Pure, synchronous computation of whether a business is open at a given
//! local wall-clock time, and how long until that changes.
//!
//! - [`time`]: `TimeOfDay` and single-token parsing with 12-hour normalization
//! - [`window`]: `TimeWindow` (free-text ranges, weekly schedules, overnight spans)
//! - [`status`]: `ShopStatus`, `StatusKind` and its badge tokens
//! - [`format`]: countdowns, display hours, relative timestamps
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use shared::hours::{shop_status, StatusKind};
//! use shared::models::OpeningHours;
//!
//! let hours = OpeningHours::from("10:00 AM - 9:00 PM");
//! let now = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap().and_hms_opt(20, 45, 0).unwrap();
//!
//! let status = shop_status(&hours, now);
//! assert!(status.is_open);
//! assert_eq!(status.status, StatusKind::ClosingSoon);
//! assert_eq!(status.time_until_change, "15m");
//! ```

pub mod format;
pub mod status;
pub mod time;
pub mod window;

use thiserror::Error;

pub use format::{format_duration, format_opening_hours, format_time_ago};
pub use status::{
    CLOSING_SOON_MINUTES, OPENING_SOON_MINUTES, ShopStatus, StatusKind, shop_status, status_color,
    status_icon, try_shop_status,
};
pub use time::{MINUTES_PER_DAY, Period, TimeOfDay, parse_time};
pub use window::{
    DayWindows, TimeWindow, day_windows, parse_weekday, try_day_windows, try_window_for, window_for,
};

/// Opening hours that cannot be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoursError {
    #[error("Unparseable hours: '{0}'")]
    Unparseable(String),

    #[error("Invalid time '{value}': {reason}")]
    InvalidTime { value: String, reason: &'static str },

    #[error("Unknown weekday: '{0}'")]
    InvalidWeekday(String),
}

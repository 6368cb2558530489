//! Shop open/closed status and its presentation tokens

use std::fmt;

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::HoursError;
use super::format::format_duration;
use super::time::MINUTES_PER_DAY;
use super::window::{DayWindows, TimeWindow, day_windows, try_day_windows};
use crate::models::OpeningHours;

/// Remaining open minutes at or below which an open shop is "closing soon"
pub const CLOSING_SOON_MINUTES: u32 = 30;

/// Minutes before opening at or below which a closed shop is "opening soon"
pub const OPENING_SOON_MINUTES: u32 = 30;

/// Badge classes for a status string that is not a known [`StatusKind`]
pub const FALLBACK_COLOR: &str = "bg-muted text-muted-foreground";

/// Icon for a status string that is not a known [`StatusKind`]
pub const FALLBACK_ICON: &str = "⚪";

/// Classification of a shop at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusKind {
    Open,
    Closed,
    ClosingSoon,
    OpeningSoon,
}

impl StatusKind {
    pub const ALL: [StatusKind; 4] = [
        StatusKind::Open,
        StatusKind::Closed,
        StatusKind::ClosingSoon,
        StatusKind::OpeningSoon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::ClosingSoon => "closing-soon",
            Self::OpeningSoon => "opening-soon",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == text)
    }

    /// Whether customers can walk in right now
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open | Self::ClosingSoon)
    }

    /// Badge color classes
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Open => "bg-emerald-500/90 text-white",
            Self::ClosingSoon => "bg-amber-500/90 text-white",
            Self::OpeningSoon => "bg-sky-500/90 text-white",
            Self::Closed => "bg-red-500/90 text-white",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Open => "🟢",
            Self::ClosingSoon => "🟡",
            Self::OpeningSoon => "🔵",
            Self::Closed => "🔴",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::ClosingSoon => "Closing soon",
            Self::OpeningSoon => "Opening soon",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge color for a raw status string
pub fn status_color(status: &str) -> &'static str {
    StatusKind::parse(status).map_or(FALLBACK_COLOR, |kind| kind.color_class())
}

/// Icon for a raw status string
pub fn status_icon(status: &str) -> &'static str {
    StatusKind::parse(status).map_or(FALLBACK_ICON, |kind| kind.icon())
}

/// Derived status of a shop, recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopStatus {
    pub is_open: bool,
    pub status: StatusKind,
    /// Countdown to the next transition, e.g. "1h 30m"
    pub time_until_change: String,
    /// Reference time as "HH:MM"
    pub current_time: String,
    /// e.g. "Closes at 21:00", "Opens tomorrow at 10:00"
    pub next_status_time: String,
    /// Share of the day covered by the opening window (0–100)
    pub percent_open_today: f64,
}

impl ShopStatus {
    /// Evaluate a window that repeats every day at a wall-clock time
    pub fn compute(window: &TimeWindow, now: NaiveTime) -> Self {
        let current = now.hour() * 60 + now.minute();
        let clock = Clock::new(now, window);

        if let Some(remaining) = window.minutes_until_close(current) {
            let next_status_time = if window.is_overnight() && current >= window.open.minutes() {
                format!("Closes tomorrow at {}", window.close)
            } else {
                format!("Closes at {}", window.close)
            };
            return clock.open(remaining, next_status_time);
        }

        let next_status_time = if current < window.open.minutes() {
            format!("Opens at {}", window.open)
        } else {
            format!("Opens tomorrow at {}", window.open)
        };
        clock.closed(window.minutes_until_open(current), next_status_time)
    }

    /// Evaluate one weekday of a weekly schedule.
    ///
    /// Before today's opening only the previous day's overnight window can
    /// apply. Today's window counts from its opening time on.
    pub fn compute_weekly(
        previous: &TimeWindow,
        today: &TimeWindow,
        next: &TimeWindow,
        now: NaiveTime,
    ) -> Self {
        let current = now.hour() * 60 + now.minute();
        let clock = Clock::new(now, today);

        if previous.is_overnight() && current < previous.close.minutes() {
            return clock.open(
                previous.close.minutes() - current,
                format!("Closes at {}", previous.close),
            );
        }

        let open = today.open.minutes();
        let close = today.close.minutes();
        if current < open {
            clock.closed(open - current, format!("Opens at {}", today.open))
        } else if today.is_overnight() {
            clock.open(
                close + MINUTES_PER_DAY - current,
                format!("Closes tomorrow at {}", today.close),
            )
        } else if current < close {
            clock.open(close - current, format!("Closes at {}", today.close))
        } else {
            clock.closed(
                MINUTES_PER_DAY - current + next.open.minutes(),
                format!("Opens tomorrow at {}", next.open),
            )
        }
    }

    /// Evaluate the windows resolved for the current weekday
    pub fn for_day(windows: &DayWindows, now: NaiveTime) -> Self {
        match windows {
            DayWindows::Daily(window) => Self::compute(window, now),
            DayWindows::Weekly {
                previous,
                today,
                next,
            } => Self::compute_weekly(previous, today, next, now),
        }
    }
}

/// Fields shared by every outcome at one reference time
struct Clock {
    current_time: String,
    percent_open_today: f64,
}

impl Clock {
    fn new(now: NaiveTime, today: &TimeWindow) -> Self {
        Self {
            current_time: format!("{:02}:{:02}", now.hour(), now.minute()),
            percent_open_today: f64::from(today.duration_minutes()) / f64::from(MINUTES_PER_DAY)
                * 100.0,
        }
    }

    fn open(self, remaining: u32, next_status_time: String) -> ShopStatus {
        let status = if remaining <= CLOSING_SOON_MINUTES {
            StatusKind::ClosingSoon
        } else {
            StatusKind::Open
        };
        ShopStatus {
            is_open: true,
            status,
            time_until_change: format_duration(remaining),
            current_time: self.current_time,
            next_status_time,
            percent_open_today: self.percent_open_today,
        }
    }

    fn closed(self, until_open: u32, next_status_time: String) -> ShopStatus {
        let status = if until_open <= OPENING_SOON_MINUTES {
            StatusKind::OpeningSoon
        } else {
            StatusKind::Closed
        };
        ShopStatus {
            is_open: false,
            status,
            time_until_change: format_duration(until_open),
            current_time: self.current_time,
            next_status_time,
            percent_open_today: self.percent_open_today,
        }
    }
}

/// Status of a shop at `now` (local wall-clock time).
///
/// Malformed hours fall back to 09:00–21:00; see [`try_shop_status`] for the
/// variant that reports them.
pub fn shop_status(hours: &OpeningHours, now: NaiveDateTime) -> ShopStatus {
    let windows = day_windows(hours, now.weekday());
    ShopStatus::for_day(&windows, now.time())
}

/// Status of a shop at `now`, rejecting hours that cannot be parsed
pub fn try_shop_status(hours: &OpeningHours, now: NaiveDateTime) -> Result<ShopStatus, HoursError> {
    let windows = try_day_windows(hours, now.weekday())?;
    Ok(ShopStatus::for_day(&windows, now.time()))
}

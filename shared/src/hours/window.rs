//! Opening windows: free-text range parsing and weekly schedule lookup

use std::sync::LazyLock;

use chrono::Weekday;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::HoursError;
use super::time::{MINUTES_PER_DAY, Period, TimeOfDay};
use crate::models::{OpeningHours, ShopHours};

/// `H[H][[:]MM][ AM|PM] - H[H][[:]MM][ AM|PM]`, matched anywhere in the text
pub(crate) static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):?(\d{2})?\s*(AM|PM)?\s*-\s*(\d{1,2}):?(\d{2})?\s*(AM|PM)?")
        .expect("valid hours range pattern")
});

/// Daily opening window `[open, close)`.
///
/// A close earlier than the open means the window runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WindowParts")]
pub struct TimeWindow {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

#[derive(Deserialize)]
struct WindowParts {
    open: TimeOfDay,
    close: TimeOfDay,
}

impl TryFrom<WindowParts> for TimeWindow {
    type Error = HoursError;

    fn try_from(parts: WindowParts) -> Result<Self, Self::Error> {
        Self::new(parts.open, parts.close)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TimeWindow {
    /// Hours assumed when nothing usable is known: 09:00–21:00
    pub const DEFAULT: Self = Self {
        open: TimeOfDay::hm(9, 0),
        close: TimeOfDay::hm(21, 0),
    };

    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Result<Self, HoursError> {
        if open == TimeOfDay::END_OF_DAY {
            return Err(HoursError::InvalidTime {
                value: open.to_string(),
                reason: "opening time cannot be 24:00",
            });
        }
        Ok(Self { open, close })
    }

    /// Parse a free-text range such as `"9:00 AM - 9:00 PM"` or `"10AM - 9PM"`.
    pub fn parse(text: &str) -> Result<Self, HoursError> {
        let caps = RANGE_PATTERN
            .captures(text)
            .ok_or_else(|| HoursError::Unparseable(text.to_string()))?;

        let open = token_from_captures(&caps, 1, 2, 3, text)?;
        let close = token_from_captures(&caps, 4, 5, 6, text)?;
        Self::new(open, close)
    }

    /// Like [`TimeWindow::parse`], but malformed text falls back to [`TimeWindow::DEFAULT`].
    pub fn parse_lenient(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|err| {
            tracing::debug!(hours = %text, error = %err, "Unparseable hours, using default window");
            Self::DEFAULT
        })
    }

    /// Close falls on the following day
    pub fn is_overnight(&self) -> bool {
        self.close < self.open
    }

    /// Length of the window in minutes
    pub fn duration_minutes(&self) -> u32 {
        let open = self.open.minutes();
        let close = self.close.minutes();
        if self.is_overnight() {
            close + MINUTES_PER_DAY - open
        } else {
            close - open
        }
    }

    /// Half-open membership test on minutes since midnight
    pub fn contains(&self, minute_of_day: u32) -> bool {
        let open = self.open.minutes();
        let close = self.close.minutes();
        if self.is_overnight() {
            minute_of_day >= open || minute_of_day < close
        } else {
            open <= minute_of_day && minute_of_day < close
        }
    }

    /// Minutes left before closing, `None` when currently closed
    pub fn minutes_until_close(&self, minute_of_day: u32) -> Option<u32> {
        if !self.contains(minute_of_day) {
            return None;
        }
        let close = self.close.minutes();
        if minute_of_day < close {
            Some(close - minute_of_day)
        } else {
            Some(close + MINUTES_PER_DAY - minute_of_day)
        }
    }

    /// Minutes until the next opening, wrapping through midnight
    pub fn minutes_until_open(&self, minute_of_day: u32) -> u32 {
        let open = self.open.minutes();
        if minute_of_day < open {
            open - minute_of_day
        } else {
            MINUTES_PER_DAY - minute_of_day + open
        }
    }
}

fn token_from_captures(
    caps: &Captures<'_>,
    hour_idx: usize,
    minute_idx: usize,
    period_idx: usize,
    text: &str,
) -> Result<TimeOfDay, HoursError> {
    let unparseable = || HoursError::Unparseable(text.to_string());

    let hour = caps
        .get(hour_idx)
        .ok_or_else(unparseable)?
        .as_str()
        .parse::<u32>()
        .map_err(|_| unparseable())?;
    let minute = match caps.get(minute_idx) {
        Some(m) => m.as_str().parse::<u32>().map_err(|_| unparseable())?,
        None => 0,
    };
    let period = caps.get(period_idx).and_then(|p| Period::parse(p.as_str()));

    TimeOfDay::from_parts(hour, minute, period)
}

/// Resolve the window that applies on `weekday` (strict).
///
/// Unrecognized weekday names and unparseable times are errors. A schedule
/// without an entry for `weekday` yields [`TimeWindow::DEFAULT`].
pub fn try_window_for(hours: &OpeningHours, weekday: Weekday) -> Result<TimeWindow, HoursError> {
    match hours {
        OpeningHours::Text(text) => TimeWindow::parse(text),
        OpeningHours::Weekly(schedule) => {
            let mut found = None;
            for entry in schedule {
                let day = parse_weekday(&entry.day)?;
                if day == weekday && found.is_none() {
                    found = Some(entry);
                }
            }
            match found {
                Some(entry) => entry_window(entry),
                None => Ok(TimeWindow::DEFAULT),
            }
        }
    }
}

/// Resolve the window that applies on `weekday`, falling back to
/// [`TimeWindow::DEFAULT`] for anything malformed.
pub fn window_for(hours: &OpeningHours, weekday: Weekday) -> TimeWindow {
    match hours {
        OpeningHours::Text(text) => TimeWindow::parse_lenient(text),
        OpeningHours::Weekly(schedule) => schedule
            .iter()
            .find(|entry| parse_weekday(&entry.day).is_ok_and(|day| day == weekday))
            .map(|entry| {
                entry_window(entry).unwrap_or_else(|err| {
                    tracing::debug!(day = %entry.day, error = %err, "Unparseable schedule entry, using default window");
                    TimeWindow::DEFAULT
                })
            })
            .unwrap_or(TimeWindow::DEFAULT),
    }
}

/// Windows that bear on one weekday.
///
/// A free-text range is the same every day, so an overnight window also
/// covers its own early morning. A weekly schedule keeps each day apart: the
/// early morning belongs to the previous day's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayWindows {
    Daily(TimeWindow),
    Weekly {
        previous: TimeWindow,
        today: TimeWindow,
        next: TimeWindow,
    },
}

/// Windows for `weekday` and its neighbours (strict, see [`try_window_for`])
pub fn try_day_windows(hours: &OpeningHours, weekday: Weekday) -> Result<DayWindows, HoursError> {
    match hours {
        OpeningHours::Text(_) => try_window_for(hours, weekday).map(DayWindows::Daily),
        OpeningHours::Weekly(_) => Ok(DayWindows::Weekly {
            previous: try_window_for(hours, weekday.pred())?,
            today: try_window_for(hours, weekday)?,
            next: try_window_for(hours, weekday.succ())?,
        }),
    }
}

/// Windows for `weekday` and its neighbours (lenient, see [`window_for`])
pub fn day_windows(hours: &OpeningHours, weekday: Weekday) -> DayWindows {
    match hours {
        OpeningHours::Text(_) => DayWindows::Daily(window_for(hours, weekday)),
        OpeningHours::Weekly(_) => DayWindows::Weekly {
            previous: window_for(hours, weekday.pred()),
            today: window_for(hours, weekday),
            next: window_for(hours, weekday.succ()),
        },
    }
}

fn entry_window(entry: &ShopHours) -> Result<TimeWindow, HoursError> {
    let open = super::time::parse_time(&entry.open)?;
    let close = super::time::parse_time(&entry.close)?;
    TimeWindow::new(open, close)
}

/// Accepts full or abbreviated English weekday names in any case
pub fn parse_weekday(text: &str) -> Result<Weekday, HoursError> {
    text.trim()
        .parse::<Weekday>()
        .map_err(|_| HoursError::InvalidWeekday(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(open: (u32, u32), close: (u32, u32)) -> TimeWindow {
        TimeWindow::new(
            TimeOfDay::new(open.0, open.1).unwrap(),
            TimeOfDay::new(close.0, close.1).unwrap(),
        )
        .unwrap()
    }

    fn weekly(entries: &[(&str, &str, &str)]) -> OpeningHours {
        OpeningHours::Weekly(
            entries
                .iter()
                .map(|(day, open, close)| ShopHours {
                    day: day.to_string(),
                    open: open.to_string(),
                    close: close.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_parse_24_hour_and_12_hour_agree() {
        let a = TimeWindow::parse("09:00 - 21:00").unwrap();
        let b = TimeWindow::parse("9:00 AM - 9:00 PM").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, window((9, 0), (21, 0)));
    }

    #[test]
    fn test_parse_compact_forms() {
        assert_eq!(
            TimeWindow::parse("10AM - 9PM").unwrap(),
            window((10, 0), (21, 0))
        );
        assert_eq!(
            TimeWindow::parse("Mon-Sat: 8:30am-6pm").unwrap(),
            window((8, 30), (18, 0))
        );
        assert_eq!(
            TimeWindow::parse("12 AM - 12 PM").unwrap(),
            window((0, 0), (12, 0))
        );
        assert_eq!(
            TimeWindow::parse("00:00 - 24:00").unwrap().close,
            TimeOfDay::END_OF_DAY
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            TimeWindow::parse("by appointment"),
            Err(HoursError::Unparseable(_))
        ));
        assert!(matches!(
            TimeWindow::parse("09:00 - 27:00"),
            Err(HoursError::InvalidTime { .. })
        ));
        assert!(matches!(
            TimeWindow::parse("24:00 - 06:00"),
            Err(HoursError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_parse_lenient_falls_back_to_default() {
        assert_eq!(TimeWindow::parse_lenient("closed today"), TimeWindow::DEFAULT);
        assert_eq!(TimeWindow::parse_lenient(""), TimeWindow::DEFAULT);
        assert_eq!(
            TimeWindow::parse_lenient("8:00 - 17:00"),
            window((8, 0), (17, 0))
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let w = window((10, 0), (21, 0));
        assert!(!w.contains(9 * 60 + 59));
        assert!(w.contains(10 * 60));
        assert!(w.contains(20 * 60 + 59));
        assert!(!w.contains(21 * 60));
    }

    #[test]
    fn test_overnight_window() {
        let w = TimeWindow::parse("6:00 PM - 2:00 AM").unwrap();
        assert!(w.is_overnight());
        assert_eq!(w.duration_minutes(), 8 * 60);
        assert!(w.contains(23 * 60));
        assert!(w.contains(60));
        assert!(!w.contains(2 * 60));
        assert!(!w.contains(12 * 60));
        assert_eq!(w.minutes_until_close(23 * 60), Some(3 * 60));
        assert_eq!(w.minutes_until_close(60), Some(60));
        assert_eq!(w.minutes_until_open(12 * 60), 6 * 60);
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let w: TimeWindow = serde_json::from_str(
            r#"{"open":{"hour":18,"minute":0},"close":{"hour":2,"minute":0}}"#,
        )
        .unwrap();
        assert_eq!(w, window((18, 0), (2, 0)));
        assert_eq!(w.duration_minutes(), 8 * 60);

        assert!(serde_json::from_str::<TimeWindow>(
            r#"{"open":{"hour":200,"minute":0},"close":{"hour":2,"minute":0}}"#
        )
        .is_err());
        assert!(serde_json::from_str::<TimeWindow>(
            r#"{"open":{"hour":24,"minute":0},"close":{"hour":6,"minute":0}}"#
        )
        .is_err());
    }

    #[test]
    fn test_zero_length_window_never_open() {
        let w = window((9, 0), (9, 0));
        assert!(!w.is_overnight());
        assert_eq!(w.duration_minutes(), 0);
        assert!(!w.contains(9 * 60));
    }

    #[test]
    fn test_minutes_until_open_wraps_midnight() {
        let w = window((10, 0), (21, 0));
        assert_eq!(w.minutes_until_open(8 * 60), 120);
        assert_eq!(w.minutes_until_open(23 * 60), 60 + 10 * 60);
        assert_eq!(w.minutes_until_open(21 * 60), 3 * 60 + 10 * 60);
    }

    #[test]
    fn test_weekly_schedule_lookup() {
        let hours = weekly(&[
            ("Monday", "08:00", "16:00"),
            ("sat", "10:00 AM", "2:00 PM"),
        ]);
        assert_eq!(window_for(&hours, Weekday::Mon), window((8, 0), (16, 0)));
        assert_eq!(window_for(&hours, Weekday::Sat), window((10, 0), (14, 0)));
        assert_eq!(window_for(&hours, Weekday::Tue), TimeWindow::DEFAULT);
        assert_eq!(
            try_window_for(&hours, Weekday::Tue).unwrap(),
            TimeWindow::DEFAULT
        );
    }

    #[test]
    fn test_weekly_schedule_malformed_entries() {
        let hours = weekly(&[("Funday", "08:00", "16:00"), ("Monday", "late", "16:00")]);

        assert_eq!(window_for(&hours, Weekday::Mon), TimeWindow::DEFAULT);
        assert!(matches!(
            try_window_for(&hours, Weekday::Mon),
            Err(HoursError::InvalidWeekday(_))
        ));

        let hours = weekly(&[("Monday", "late", "16:00")]);
        assert!(matches!(
            try_window_for(&hours, Weekday::Mon),
            Err(HoursError::Unparseable(_))
        ));
    }

    #[test]
    fn test_day_windows_keep_weekly_days_apart() {
        let hours = weekly(&[("Monday", "18:00", "02:00"), ("Tuesday", "10:00", "16:00")]);
        assert_eq!(
            day_windows(&hours, Weekday::Tue),
            DayWindows::Weekly {
                previous: window((18, 0), (2, 0)),
                today: window((10, 0), (16, 0)),
                next: TimeWindow::DEFAULT,
            }
        );

        let text = OpeningHours::from("6:00 PM - 2:00 AM");
        assert_eq!(
            try_day_windows(&text, Weekday::Tue).unwrap(),
            DayWindows::Daily(window((18, 0), (2, 0)))
        );
    }
}

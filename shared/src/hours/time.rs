//! Time-of-day values and single-token parsing ("09:30", "9:30 PM", "9PM")

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::HoursError;

/// Minutes in one day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*(AM|PM)?\s*$").expect("valid time token pattern")
});

/// 12-hour clock period marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    /// Case-insensitive "AM" / "PM"
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("am") {
            Some(Self::Am)
        } else if text.eq_ignore_ascii_case("pm") {
            Some(Self::Pm)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// Normalize a 12-hour clock hour to 24-hour form.
///
/// `12 AM` is midnight, `12 PM` stays noon, other PM hours add 12.
/// Without a period the hour is already 24-hour.
pub fn to_24_hour(hour: u32, period: Option<Period>) -> u32 {
    match period {
        Some(Period::Pm) if hour != 12 => hour + 12,
        Some(Period::Am) if hour == 12 => 0,
        _ => hour,
    }
}

/// Wall-clock time of day with minute precision.
///
/// `24:00` is representable and means "end of day"; it is only
/// meaningful as a closing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "ClockParts")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

/// Unchecked wire form of [`TimeOfDay`]
#[derive(Deserialize)]
struct ClockParts {
    hour: u32,
    minute: u32,
}

impl TryFrom<ClockParts> for TimeOfDay {
    type Error = HoursError;

    fn try_from(parts: ClockParts) -> Result<Self, Self::Error> {
        Self::new(parts.hour, parts.minute)
    }
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self::hm(0, 0);
    pub const END_OF_DAY: Self = Self::hm(24, 0);

    pub(crate) const fn hm(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Validated constructor (24-hour clock)
    pub fn new(hour: u32, minute: u32) -> Result<Self, HoursError> {
        let value = format!("{:02}:{:02}", hour, minute);
        if hour == 24 && minute == 0 {
            return Ok(Self::END_OF_DAY);
        }
        if hour >= 24 {
            return Err(HoursError::InvalidTime {
                value,
                reason: "hour out of range",
            });
        }
        if minute >= 60 {
            return Err(HoursError::InvalidTime {
                value,
                reason: "minute out of range",
            });
        }
        Ok(Self::hm(hour as u8, minute as u8))
    }

    /// Build from clock parts, applying 12-hour normalization when a period is given
    pub fn from_parts(hour: u32, minute: u32, period: Option<Period>) -> Result<Self, HoursError> {
        if period.is_some() && !(1..=12).contains(&hour) {
            return Err(HoursError::InvalidTime {
                value: format!("{}:{:02} {}", hour, minute, period.map_or("", |p| p.as_str())),
                reason: "12-hour clock hour must be between 1 and 12",
            });
        }
        Self::new(to_24_hour(hour, period), minute)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight (1440 for `24:00`)
    pub fn minutes(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse a single time token such as `"09:30"`, `"9:30 AM"`, `"9PM"` or `"21"`.
pub fn parse_time(text: &str) -> Result<TimeOfDay, HoursError> {
    let caps = TOKEN_PATTERN
        .captures(text)
        .ok_or_else(|| HoursError::Unparseable(text.to_string()))?;

    let hour = caps[1]
        .parse::<u32>()
        .map_err(|_| HoursError::Unparseable(text.to_string()))?;
    let minute = match caps.get(2) {
        Some(m) => m
            .as_str()
            .parse::<u32>()
            .map_err(|_| HoursError::Unparseable(text.to_string()))?,
        None => 0,
    };
    let period = caps.get(3).and_then(|p| Period::parse(p.as_str()));

    TimeOfDay::from_parts(hour, minute, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_validates_range() {
        let time: TimeOfDay = serde_json::from_str(r#"{"hour":21,"minute":30}"#).unwrap();
        assert_eq!(time, TimeOfDay::new(21, 30).unwrap());
        assert_eq!(
            serde_json::from_str::<TimeOfDay>(r#"{"hour":24,"minute":0}"#).unwrap(),
            TimeOfDay::END_OF_DAY
        );

        assert!(serde_json::from_str::<TimeOfDay>(r#"{"hour":200,"minute":0}"#).is_err());
        assert!(serde_json::from_str::<TimeOfDay>(r#"{"hour":9,"minute":75}"#).is_err());
    }

    #[test]
    fn test_twelve_hour_normalization() {
        assert_eq!(to_24_hour(12, Some(Period::Am)), 0);
        assert_eq!(to_24_hour(12, Some(Period::Pm)), 12);
        assert_eq!(to_24_hour(9, Some(Period::Pm)), 21);
        assert_eq!(to_24_hour(9, Some(Period::Am)), 9);
        assert_eq!(to_24_hour(17, None), 17);
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("09:30").unwrap(), TimeOfDay::hm(9, 30));
        assert_eq!(parse_time("9:30 AM").unwrap(), TimeOfDay::hm(9, 30));
        assert_eq!(parse_time("9:30 pm").unwrap(), TimeOfDay::hm(21, 30));
        assert_eq!(parse_time("9PM").unwrap(), TimeOfDay::hm(21, 0));
        assert_eq!(parse_time("12 AM").unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(parse_time("12:15 PM").unwrap(), TimeOfDay::hm(12, 15));
        assert_eq!(parse_time(" 21 ").unwrap(), TimeOfDay::hm(21, 0));
        assert_eq!(parse_time("24:00").unwrap(), TimeOfDay::END_OF_DAY);
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert!(matches!(parse_time("noon"), Err(HoursError::Unparseable(_))));
        assert!(matches!(parse_time(""), Err(HoursError::Unparseable(_))));
        assert!(matches!(
            parse_time("25:00"),
            Err(HoursError::InvalidTime { .. })
        ));
        assert!(matches!(
            parse_time("10:75"),
            Err(HoursError::InvalidTime { .. })
        ));
        assert!(matches!(
            parse_time("13 PM"),
            Err(HoursError::InvalidTime { .. })
        ));
        assert!(matches!(
            parse_time("24:30"),
            Err(HoursError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_minutes_and_display() {
        let t = TimeOfDay::new(21, 5).unwrap();
        assert_eq!(t.minutes(), 21 * 60 + 5);
        assert_eq!(t.to_string(), "21:05");
        assert_eq!(TimeOfDay::END_OF_DAY.minutes(), MINUTES_PER_DAY);
        assert!(TimeOfDay::MIDNIGHT < t);
    }
}

//! Human-readable durations, hours and relative timestamps

use chrono::{DateTime, Utc};

use super::window::RANGE_PATTERN;

/// Render a minute count as `"{h}h {m}m"`, dropping a zero component.
///
/// ```
/// use shared::hours::format_duration;
///
/// assert_eq!(format_duration(90), "1h 30m");
/// assert_eq!(format_duration(45), "45m");
/// assert_eq!(format_duration(120), "2h");
/// ```
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours == 0 {
        format!("{}m", mins)
    } else if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, mins)
    }
}

/// Normalize an hours range for display: `"{h}:{mm} - {h}:{mm} {period}"`.
///
/// The period is taken from the closing token as written and defaults to PM.
/// Text that does not contain a range is returned unchanged.
pub fn format_opening_hours(text: &str) -> String {
    let Some(caps) = RANGE_PATTERN.captures(text) else {
        return text.to_string();
    };

    let start_hour = caps[1].parse::<u32>().unwrap_or_default();
    let start_min = caps.get(2).map_or("00", |m| m.as_str());
    let end_hour = caps[4].parse::<u32>().unwrap_or_default();
    let end_min = caps.get(5).map_or("00", |m| m.as_str());
    let period = caps.get(6).map_or("PM", |m| m.as_str());

    format!(
        "{}:{} - {}:{} {}",
        start_hour, start_min, end_hour, end_min, period
    )
}

/// Relative age of a timestamp: "Just now", "5m ago", "3h ago", "Yesterday",
/// "4d ago", or the calendar date after a week.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

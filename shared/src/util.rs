use chrono::{DateTime, Utc};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix millisecond timestamp back to UTC, `None` when out of range
pub fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

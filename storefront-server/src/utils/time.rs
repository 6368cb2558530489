//! 时间工具函数 — 业务时区转换
//!
//! 营业时间按商家所在地的本地时间计算，所有 "现在" 都在这里换算。

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use shared::error::ErrorCode;

use super::{AppError, AppResult};

/// 当前本地时间 (业务时区)
pub fn local_now(tz: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&tz).naive_local()
}

/// 解析 `at` 参数 (YYYY-MM-DDTHH:MM[:SS])
pub fn parse_at(at: &str) -> AppResult<NaiveDateTime> {
    let at = at.trim();
    NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M"))
        .map_err(|_| {
            AppError::with_message(
                ErrorCode::InvalidTimestamp,
                format!("Invalid time '{}', expected YYYY-MM-DDTHH:MM", at),
            )
            .with_detail("at", at)
        })
}

/// `at` 参数存在时解析，否则取当前本地时间
pub fn resolve_at(at: Option<&str>, tz: Tz) -> AppResult<NaiveDateTime> {
    match at {
        Some(at) => parse_at(at),
        None => Ok(local_now(tz)),
    }
}

//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ApiResponse`] - API 响应结构 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`time`] - 业务时区

pub mod logger;
pub mod time;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

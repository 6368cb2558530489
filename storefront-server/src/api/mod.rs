//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`shops`] - 商家目录与营业状态
//! - [`hours`] - 营业时间计算
//! - [`favorites`] - 收藏
//! - [`follows`] - 关注

pub mod favorites;
pub mod follows;
pub mod health;
pub mod hours;
pub mod shops;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

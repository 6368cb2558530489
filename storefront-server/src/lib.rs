//! Storefront Server - 本地商家发现服务
//!
//! # 架构概述
//!
//! - **目录** (`catalog`): 只读商家列表 (JSON 文件或内置数据)
//! - **数据库** (`db`): 嵌入式 redb，保存收藏与关注
//! - **HTTP API** (`api`): 商家实时营业状态、营业时间计算、收藏、关注
//!
//! 营业状态的计算本身在 `shared::hours` 中，纯同步，无 I/O。
//!
//! # 模块结构
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── catalog/       # 商家目录
//! ├── db/            # redb 存储
//! ├── middleware/    # 请求日志
//! ├── routes/        # 路由与中间件组装
//! └── utils/         # 日志、时区
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use catalog::Catalog;
pub use core::{Config, Server, ServerState};
pub use db::RedbStore;
pub use routes::build_app;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// 设置运行环境
///
/// 1. 加载 .env
/// 2. 创建工作目录
/// 3. 初始化日志 (控制台 + 文件)
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    let log_dir = config.log_dir();
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        log_dir.to_str(),
    )?;

    if let Some(name) = &config.rejected_timezone {
        tracing::warn!(
            timezone = %name,
            fallback = %config.timezone.name(),
            "Unknown TIMEZONE, using fallback"
        );
    }

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}

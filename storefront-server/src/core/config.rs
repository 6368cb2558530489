use std::path::PathBuf;

use chrono_tz::Tz;

/// 未设置或无法识别 TIMEZONE 时使用的时区
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Madrid;

/// 解析 TIMEZONE 的值，无法识别的名称原样作为错误返回
pub fn parse_timezone(value: Option<&str>) -> Result<Tz, String> {
    match value.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.parse::<Tz>().map_err(|_| name.to_string()),
        None => Ok(DEFAULT_TIMEZONE),
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./work_dir | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | TIMEZONE | Europe/Madrid | 营业时间所在时区 |
/// | CATALOG_PATH | (unset) | 商家目录 JSON 文件，未设置时使用内置数据 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志 (生产环境默认 true) |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/storefront HTTP_PORT=8080 TIMEZONE=Europe/Paris cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 计算 "现在" 时使用的时区
    pub timezone: Tz,
    /// 无法识别的 TIMEZONE 值 (日志初始化后再报告)
    pub rejected_timezone: Option<String>,
    /// 商家目录文件
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    pub log_json: bool,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        let (timezone, rejected_timezone) =
            match parse_timezone(std::env::var("TIMEZONE").ok().as_deref()) {
                Ok(tz) => (tz, None),
                Err(name) => (DEFAULT_TIMEZONE, Some(name)),
            };

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment,
            timezone,
            rejected_timezone,
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(is_production),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// redb 数据库文件路径
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("storefront.redb")
    }

    /// 日志目录
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_work_dir() {
        let config = Config::with_overrides("/tmp/storefront", 8080);
        assert_eq!(config.http_port, 8080);
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/storefront/storefront.redb")
        );
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/storefront/logs"));
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone(None), Ok(DEFAULT_TIMEZONE));
        assert_eq!(parse_timezone(Some("  ")), Ok(DEFAULT_TIMEZONE));
        assert_eq!(
            parse_timezone(Some("Europe/Paris")),
            Ok(chrono_tz::Europe::Paris)
        );
        assert_eq!(
            parse_timezone(Some("Mars/Olympus")),
            Err("Mars/Olympus".to_string())
        );
    }
}

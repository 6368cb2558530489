//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments
//! Features:
//! - Daily rotating application logs (deleted after 14 days)
//! - Permanent audit logs for preference changes (never deleted)

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Days an application log file is kept
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

const APP_LOG_PREFIX: &str = "app";
const AUDIT_LOG_PREFIX: &str = "audit";

/// Clean up old application log files (older than 14 days)
///
/// Returns the number of deleted files. Audit logs are never touched.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join(APP_LOG_PREFIX);
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let cutoff = Local::now().date_naive() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);
    let mut deleted = 0;

    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // app.YYYY-MM-DD
        let Some(date) = name
            .strip_prefix("app.")
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        else {
            continue;
        };
        if date < cutoff {
            fs::remove_file(&path)?;
            deleted += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(deleted)
}

/// Rolling file layer that keeps (`audit = true`) or drops audit events
fn file_layer<S>(
    dir: &Path,
    prefix: &str,
    json_format: bool,
    audit: bool,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let appender = RollingFileAppender::new(Rotation::DAILY, dir, prefix);
    let filter = filter_fn(move |meta| (meta.target() == "audit") == audit);
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(appender));

    if json_format {
        layer
            .json()
            .with_current_span(true)
            .with_filter(filter)
            .boxed()
    } else {
        layer.with_filter(filter).boxed()
    }
}

/// Initialize the logging system with daily rotating logs
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether to use JSON format (true for production, false for development)
/// * `log_dir` - Optional directory for file logging (e.g., Some("./work_dir/logs"))
///
/// # Examples
/// ```no_run
/// # use storefront_server::init_logger_with_file;
/// // Development setup (console only)
/// init_logger_with_file("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        // Pretty format for development
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let mut layers = vec![console_layer];

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        let app_log_dir = log_dir.join(APP_LOG_PREFIX);
        let audit_log_dir = log_dir.join(AUDIT_LOG_PREFIX);
        fs::create_dir_all(&app_log_dir)?;
        fs::create_dir_all(&audit_log_dir)?;

        // Application logs, subject to the 14-day cleanup
        layers.push(file_layer(&app_log_dir, APP_LOG_PREFIX, json_format, false));
        // Permanent audit logs
        layers.push(file_layer(&audit_log_dir, AUDIT_LOG_PREFIX, json_format, true));

        tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    Ok(())
}

/// Periodic cleanup task - runs every hour to clean old logs
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_removes_only_old_app_logs() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("app");
        let audit_dir = dir.path().join("audit");
        fs::create_dir_all(&app_dir).unwrap();
        fs::create_dir_all(&audit_dir).unwrap();

        let today = Local::now().date_naive();
        let old = today - chrono::Duration::days(30);
        let old_name = format!("app.{}", old.format("%Y-%m-%d"));
        let new_name = format!("app.{}", today.format("%Y-%m-%d"));
        let old_audit = format!("audit.{}", old.format("%Y-%m-%d"));

        fs::write(app_dir.join(&old_name), "old").unwrap();
        fs::write(app_dir.join(&new_name), "new").unwrap();
        fs::write(app_dir.join("notes.txt"), "keep").unwrap();
        fs::write(audit_dir.join(&old_audit), "audit").unwrap();

        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 1);
        assert!(!app_dir.join(&old_name).exists());
        assert!(app_dir.join(&new_name).exists());
        assert!(app_dir.join("notes.txt").exists());
        assert!(audit_dir.join(&old_audit).exists());
    }

    #[test]
    fn test_cleanup_without_app_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 0);
    }
}

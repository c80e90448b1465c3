use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::{EnvironmentProvider, SystemEnvironment};

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
    pub app_log_retention_days: usize,
}

impl LoggingConfig {
    /// Load logging configuration from `LOG_LEVEL`, `APP_LOG_FILE` and `APP_LOG_RETENTION_DAYS`
    pub fn from_provider(env: &dyn EnvironmentProvider) -> Self {
        let log_level = env
            .get_non_empty("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string());

        let app_log_file = env.get_non_empty("APP_LOG_FILE").map(PathBuf::from);

        let app_log_retention_days = env
            .get_non_empty("APP_LOG_RETENTION_DAYS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);

        Self {
            log_level,
            app_log_file,
            app_log_retention_days,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console and optional file output
///
/// The console always logs; when `APP_LOG_FILE` is set a second layer writes
/// to a daily-rotated file, keeping `APP_LOG_RETENTION_DAYS` files.
pub fn init_logging() -> Result<(), LoggingError> {
    init_logging_with(&LoggingConfig::from_provider(&SystemEnvironment))
}

pub fn init_logging_with(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    // CLI output goes to stdout, so logs go to stderr
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    match &config.app_log_file {
        Some(log_file_path) => {
            let file_appender = build_file_appender(log_file_path, config.app_log_retention_days)?;

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_target(true)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter);

            subscriber
                .with(file_layer)
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
        None => {
            subscriber
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
    }

    Ok(())
}

fn build_file_appender(
    log_file_path: &Path,
    retention_days: usize,
) -> Result<RollingFileAppender, LoggingError> {
    let directory = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let file_name = log_file_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .max_log_files(retention_days.max(1))
        .build(directory)
        .map_err(|e| LoggingError::InitializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::from_provider(&MockEnvironment::empty());

        assert_eq!(config.log_level, "info");
        assert_eq!(config.app_log_file, None);
        assert_eq!(config.app_log_retention_days, 7);
    }

    #[test]
    fn test_logging_config_reads_environment() {
        let env = MockEnvironment::empty()
            .with_var("LOG_LEVEL", "asset_portal=debug")
            .with_var("APP_LOG_FILE", "logs/portal.log")
            .with_var("APP_LOG_RETENTION_DAYS", "14");

        let config = LoggingConfig::from_provider(&env);

        assert_eq!(config.log_level, "asset_portal=debug");
        assert_eq!(config.app_log_file, Some(PathBuf::from("logs/portal.log")));
        assert_eq!(config.app_log_retention_days, 14);
    }

    #[test]
    fn test_invalid_retention_falls_back_to_default() {
        let env = MockEnvironment::empty().with_var("APP_LOG_RETENTION_DAYS", "forever");

        assert_eq!(LoggingConfig::from_provider(&env).app_log_retention_days, 7);
    }
}

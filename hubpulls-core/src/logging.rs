//! Logging infrastructure for hubpulls
//!
//! Logs go to stderr. When `logging.directory` is configured they are also
//! written to a daily-rotated `hubpulls.log` in that directory.

use crate::config::LoggingConfig;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_FILE_NAME: &str = "hubpulls.log";

/// Initialize the logging system
///
/// Sets up tracing with:
/// - stderr output
/// - optional rotated file output
/// - configurable log level via config or RUST_LOG env var
pub fn init(config: &LoggingConfig) -> crate::error::Result<LoggingGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &config.directory {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;

            let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    let log_file = config.directory.as_deref().map(log_file_path);
    tracing::debug!(level = %config.level, log_file = ?log_file, "Logging initialized");

    Ok(LoggingGuard { _guard: guard })
}

/// Initialize logging for tests (logs to the test writer)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

/// Guard that keeps the file writer alive
///
/// When dropped, flushes any pending log writes.
pub struct LoggingGuard {
    _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Returns the base log file path inside a log directory
///
/// The rolling appender suffixes this name with the date.
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the configured level when set.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON formatting and daily file output
///
/// File output is only used when `log_dir` exists.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let log_dir = log_dir.filter(|dir| Path::new(dir).is_dir());

    match (json, log_dir) {
        (true, Some(dir)) => {
            let file_appender = tracing_appender::rolling::daily(dir, "staff-server");
            builder.json().with_writer(file_appender).init();
        }
        (true, None) => builder.json().init(),
        (false, Some(dir)) => {
            let file_appender = tracing_appender::rolling::daily(dir, "staff-server");
            builder.with_ansi(false).with_writer(file_appender).init();
        }
        (false, None) => builder.init(),
    }
}

//! Tracing subscriber setup

use std::path::Path;

use anyhow::Context;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    filter::{filter_fn, EnvFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};

use crate::{
    api::middleware::REQUEST_LOG_TARGET,
    config::{LogFormat, LoggingConfig},
};

/// Keeps the file writers flushing; drop only when the process exits
#[must_use]
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

/// Install the global subscriber: stdout plus the optional JSON log files.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> anyhow::Result<LogGuards> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "bookstore_server={level},{REQUEST_LOG_TARGET}={level},tower_http=debug",
            level = config.level
        ))
    });

    let mut guards = Vec::new();

    let stdout = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().pretty().boxed(),
    };

    let app_file = match config.file.as_deref() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            guards.push(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_filter(filter_fn(|meta| meta.target() != REQUEST_LOG_TARGET)),
            )
        }
        None => None,
    };

    let request_file = match config.request_file.as_deref() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            guards.push(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_filter(filter_fn(|meta| meta.target() == REQUEST_LOG_TARGET)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(app_file)
        .with(request_file)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LogGuards { _guards: guards })
}

/// Append-only file writer that never rotates
fn file_appender(path: &str) -> anyhow::Result<RollingFileAppender> {
    let path = Path::new(path);
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path '{}' has no file name", path.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .with_context(|| format!("failed to open log file '{}'", path.display()))
}

//! # Logging Setup
//!
//! Installs a global `tracing` subscriber: a console layer on stdout plus,
//! when a directory is given, a JSON layer writing to a daily rolling file
//! through a non-blocking appender.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from `level`.
//!
//! Keep the returned guard alive for as long as the program logs; dropping
//! it flushes and stops the file writer.

use std::path::Path;
use thiserror::Error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log directory could not be created.
    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),
    /// `level` is not a valid filter directive.
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber.
///
/// `file_prefix` names the rolling files (`<prefix>.YYYY-MM-DD`). Returns the
/// file writer guard when `log_dir` is set.
pub fn setup_logging(level: &str, log_dir: Option<&Path>, file_prefix: &str) -> Result<Option<WorkerGuard>, LoggerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };

    let console_layer = fmt::layer().with_target(true).with_ansi(true);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::daily(dir, file_prefix);
            let (writer, guard) = non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer).json();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    info!(filter = level, file_logging = guard.is_some(), "Logging initialized");
    Ok(guard)
}

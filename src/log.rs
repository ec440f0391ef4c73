// src/log.rs
use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, fmt::writer::MakeWriterExt, prelude::*, EnvFilter};

use crate::config::consts::LOG_FILE;
use crate::error::PersistenceError;
use crate::file::ensure_directory;

/// Install the global subscriber.
///
/// Everything passing `RUST_LOG` (default `info`) goes to `<dir>/debug.log`;
/// warnings and errors are echoed to stderr. Keep the returned guard alive
/// until exit or buffered lines are lost.
pub fn init(dir: &Path) -> Result<WorkerGuard, PersistenceError> {
    ensure_directory(dir)?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr.with_max_level(Level::WARN))
        .with_target(false)
        .without_time();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    Ok(guard)
}

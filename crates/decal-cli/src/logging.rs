// Rust guideline compliant 2026-02-09

//! Tracing setup for the decal CLI.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global subscriber at `level`.
///
/// Human-readable lines go to stderr. With `log_file`, events are appended
/// to that file as JSON through a non-blocking writer instead; the returned
/// guard must outlive every event that should reach the file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(level: Level, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let builder = fmt().with_max_level(level).with_target(false);

    let Some(path) = log_file else {
        let _ = builder.with_writer(std::io::stderr).try_init();
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let _ = builder.json().with_writer(writer).try_init();
    Ok(Some(guard))
}

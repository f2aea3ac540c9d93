//! Stderr diagnostics via `tracing`.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{BenchError, Result};

/// Default filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parses `level`, falling back to [`DEFAULT_LOG_LEVEL`] when it is malformed.
///
/// The second element carries the rejected filter's parse error, if any.
pub fn filter_or_default(level: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(err.to_string())),
    }
}

/// Installs the global `fmt` subscriber, writing to stderr.
///
/// Stdout carries the result lines, so diagnostics must never land there.
/// A malformed filter is reported as a warning, never as an error.
pub fn init_logging(level: &str) -> Result<()> {
    let (filter, rejected) = filter_or_default(level);
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|_| BenchError::Logging("logging already initialized".into()))?;
    if let Some(err) = rejected {
        warn!(filter = level, %err, "invalid log level, using {DEFAULT_LOG_LEVEL}");
    }
    Ok(())
}

//! Error type shared by configuration and sweep execution.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors raised while resolving or running a sweep.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A positional argument could not be parsed as an unsigned integer.
    #[error("invalid argument {position} ({name}): {value:?}: {source}")]
    InvalidArgument {
        /// 1-based position on the command line.
        position: usize,
        /// Parameter the position maps to.
        name: &'static str,
        /// Raw value as supplied.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// Writing a result line failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A global subscriber was already installed.
    #[error("logging error: {0}")]
    Logging(String),
}

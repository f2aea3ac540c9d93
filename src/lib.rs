//! String accumulation micro-benchmark.
//!
//! Compares copy-on-append concatenation against a mutable builder across
//! exponentially growing sizes, printing one line per measurement.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod experiment;
pub mod logging;
pub mod report;
pub mod sweep;

pub use config::{SweepConfig, Variant};
pub use error::{BenchError, Result};
pub use experiment::{Experiment, StringBuilder};
pub use report::Measurement;
pub use sweep::{size_for, PlannedTrial, Sweep, SweepSummary, Trial};

//! Command-line front end shared by every runner binary.

use std::io;

use clap::Parser;
use tracing::info;

use crate::config::Variant;
use crate::error::Result;
use crate::logging::{init_logging, DEFAULT_LOG_LEVEL};
use crate::sweep::Sweep;

/// Arguments accepted by the runners.
#[derive(Parser, Debug)]
#[command(version, about = "String accumulation micro-benchmark")]
pub struct Args {
    /// Positional integers; their meaning depends on the runner.
    #[arg(value_name = "ARG", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Tracing filter for stderr diagnostics.
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// Entry point for `variant`: parses, runs, and exits 1 on failure.
pub fn main_for(variant: Variant, name: &str) {
    let args = Args::parse();
    if let Err(err) = try_main(variant, args) {
        eprintln!("{name} failed: {err}");
        std::process::exit(1);
    }
}

/// Resolves the configuration before printing anything, then runs the sweep.
pub fn try_main(variant: Variant, args: Args) -> Result<()> {
    let config = variant.resolve(&args.values)?;
    if let Err(err) = init_logging(&args.log_level) {
        eprintln!("warning: {err}");
    }
    let stdout = io::stdout();
    let summary = Sweep::new(config).run(stdout.lock())?;
    info!(
        trials = summary.trials,
        lines = summary.lines,
        dropped = ?summary.dropped.iter().map(|e| e.label()).collect::<Vec<_>>(),
        "done"
    );
    Ok(())
}

//! Runs all accumulation strategies, dropping any that exceed 2 s.
#![forbid(unsafe_code)]

use concat_bench::{cli, Variant};

fn main() {
    cli::main_for(Variant::Suite, "string-bench-suite");
}

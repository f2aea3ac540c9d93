//! Runs concat and builder over base^1..=powerLimit.
#![forbid(unsafe_code)]

use concat_bench::{cli, Variant};

fn main() {
    cli::main_for(Variant::Simple, "string-bench");
}

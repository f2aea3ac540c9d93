//! Like string-bench, with a separate exponent cutoff for concat.
#![forbid(unsafe_code)]

use concat_bench::{cli, Variant};

fn main() {
    cli::main_for(Variant::Split, "string-bench-split");
}

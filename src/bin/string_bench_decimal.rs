//! Fixed base-10 sweep over exponents 1..=10.
#![forbid(unsafe_code)]

use concat_bench::{cli, Variant};

fn main() {
    cli::main_for(Variant::Decimal, "string-bench-decimal");
}

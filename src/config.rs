//! Sweep configuration and per-variant argument resolution.

use std::time::Duration;

use crate::error::{BenchError, Result};
use crate::experiment::Experiment;

/// Dropout threshold used by the suite variant.
pub const SUITE_TIMEOUT: Duration = Duration::from_millis(2_000);

/// Flavor of the benchmark runner; each binary pins one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// `<base> <powerLimit>`, concat and builder.
    Simple,
    /// `<base> <startPower> <concatPowerLimit> <powerLimit>`, concat bounded separately.
    Split,
    /// No arguments, base 10 over exponents 1..=10, no `^power` token.
    Decimal,
    /// `<base> <powerLimit>`, four strategies with timeout dropout.
    Suite,
}

impl Variant {
    /// Parameter names mapped to positional arguments, in order.
    pub fn positional(self) -> &'static [&'static str] {
        match self {
            Variant::Simple | Variant::Suite => &["base", "powerLimit"],
            Variant::Split => &["base", "startPower", "concatPowerLimit", "powerLimit"],
            Variant::Decimal => &[],
        }
    }

    /// Argument count below which defaults are used.
    pub fn min_args(self) -> usize {
        self.positional().len()
    }

    /// Whether result lines carry the `<base>^<power>` token.
    pub fn shows_power(self) -> bool {
        !matches!(self, Variant::Decimal)
    }

    /// Experiments run per trial, in print order.
    pub fn experiments(self) -> &'static [Experiment] {
        match self {
            Variant::Simple | Variant::Split | Variant::Decimal => {
                &[Experiment::Concat, Experiment::Builder]
            }
            Variant::Suite => &[
                Experiment::Builder,
                Experiment::FastBuilder,
                Experiment::Concat,
                Experiment::Join,
            ],
        }
    }

    /// Configuration used when too few arguments are supplied.
    pub fn defaults(self) -> SweepConfig {
        let (base, power_limit, concat_power_limit) = match self {
            Variant::Simple | Variant::Suite => (2, 27, 27),
            Variant::Split => (2, 27, 21),
            Variant::Decimal => (10, 10, 10),
        };
        SweepConfig {
            variant: self,
            base,
            start_power: 1,
            concat_power_limit,
            power_limit,
            timeout: (self == Variant::Suite).then_some(SUITE_TIMEOUT),
        }
    }

    /// Resolves raw positional arguments into a configuration.
    ///
    /// Fewer than [`Variant::min_args`] values means defaults; the values are
    /// then ignored entirely. Extra trailing values are ignored too.
    pub fn resolve<S: AsRef<str>>(self, args: &[S]) -> Result<SweepConfig> {
        let mut config = self.defaults();
        let names = self.positional();
        if names.is_empty() || args.len() < names.len() {
            return Ok(config);
        }
        let mut parsed = [0u32; 4];
        for (idx, (name, raw)) in names.iter().zip(args).enumerate() {
            parsed[idx] = parse_arg(idx + 1, name, raw.as_ref())?;
        }
        match self {
            Variant::Simple | Variant::Suite => {
                config.base = parsed[0];
                config.power_limit = parsed[1];
                config.concat_power_limit = parsed[1];
            }
            Variant::Split => {
                config.base = parsed[0];
                config.start_power = parsed[1];
                config.concat_power_limit = parsed[2];
                config.power_limit = parsed[3];
            }
            Variant::Decimal => {}
        }
        Ok(config)
    }
}

fn parse_arg(position: usize, name: &'static str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|source| BenchError::InvalidArgument {
            position,
            name,
            value: raw.to_string(),
            source,
        })
}

/// Fully resolved run parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// Variant that produced this configuration.
    pub variant: Variant,
    /// Base of the size computation.
    pub base: u32,
    /// First exponent of the sweep.
    pub start_power: u32,
    /// Last exponent (inclusive) at which concat still runs.
    pub concat_power_limit: u32,
    /// Last exponent (inclusive) of the sweep.
    pub power_limit: u32,
    /// Experiments slower than this are dropped for later exponents.
    pub timeout: Option<Duration>,
}

impl SweepConfig {
    /// Exponents visited by the sweep.
    pub fn powers(&self) -> std::ops::RangeInclusive<u32> {
        self.start_power..=self.power_limit
    }

    /// Whether `experiment` is scheduled at `power`.
    pub fn runs_at(&self, experiment: Experiment, power: u32) -> bool {
        !experiment.is_quadratic() || power <= self.concat_power_limit
    }
}

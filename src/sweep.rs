//! The exponent sweep driving every experiment.

use std::io::Write;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::SweepConfig;
use crate::error::Result;
use crate::experiment::Experiment;
use crate::report::{Measurement, Reporter};

/// Computes `base^power` through `f64`, truncated (and saturated) to `u64`.
///
/// Exact for every base-2 exponent up to 63 and base-10 exponent up to 19.
pub fn size_for(base: u32, power: u32) -> u64 {
    let exp = i32::try_from(power).unwrap_or(i32::MAX);
    f64::from(base).powi(exp) as u64
}

/// One point of the sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trial {
    /// Exponent.
    pub power: u32,
    /// `base^power`.
    pub size: u64,
}

/// Static schedule for one trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedTrial {
    /// Trial parameters.
    pub trial: Trial,
    /// Experiments scheduled at this trial, in print order.
    pub experiments: Vec<Experiment>,
}

/// Totals reported after a sweep completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Trials visited.
    pub trials: usize,
    /// Result lines emitted.
    pub lines: usize,
    /// Experiments that exceeded the timeout, in drop order.
    pub dropped: Vec<Experiment>,
}

/// Runs experiments across the configured exponent range.
#[derive(Clone, Debug)]
pub struct Sweep {
    config: SweepConfig,
}

impl Sweep {
    /// Creates a sweep over `config`.
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Trials in sweep order.
    pub fn trials(&self) -> impl Iterator<Item = Trial> + '_ {
        self.config.powers().map(move |power| Trial {
            power,
            size: size_for(self.config.base, power),
        })
    }

    /// Schedule the sweep would follow if no experiment timed out.
    pub fn plan(&self) -> Vec<PlannedTrial> {
        self.trials()
            .map(|trial| PlannedTrial {
                trial,
                experiments: self
                    .config
                    .variant
                    .experiments()
                    .iter()
                    .copied()
                    .filter(|exp| self.config.runs_at(*exp, trial.power))
                    .collect(),
            })
            .collect()
    }

    /// Runs the sweep, writing one line per measurement to `out`.
    pub fn run<W: Write>(&self, out: W) -> Result<SweepSummary> {
        let mut reporter = Reporter::new(out, self.config.variant.shows_power());
        self.run_with(|measurement| reporter.emit(&measurement))
    }

    /// Runs the sweep, handing each measurement to `sink` as soon as it exists.
    pub fn run_with<F>(&self, mut sink: F) -> Result<SweepSummary>
    where
        F: FnMut(Measurement) -> Result<()>,
    {
        let config = &self.config;
        info!(
            variant = ?config.variant,
            base = config.base,
            start = config.start_power,
            concat_limit = config.concat_power_limit,
            limit = config.power_limit,
            "sweep starting"
        );
        let mut summary = SweepSummary::default();
        for trial in self.trials() {
            summary.trials += 1;
            debug!(power = trial.power, size = trial.size, "trial");
            for &experiment in config.variant.experiments() {
                if !config.runs_at(experiment, trial.power) {
                    debug!(experiment = experiment.label(), power = trial.power, "past cutoff");
                    continue;
                }
                if summary.dropped.contains(&experiment) {
                    continue;
                }
                let measurement = measure(experiment, config.base, trial);
                let duration = measurement.duration;
                sink(measurement)?;
                summary.lines += 1;
                if config.timeout.is_some_and(|limit| duration > limit) {
                    info!(
                        experiment = experiment.label(),
                        power = trial.power,
                        elapsed_ms = duration.as_millis() as u64,
                        "timed out, dropping from remaining trials"
                    );
                    summary.dropped.push(experiment);
                }
            }
        }
        info!(
            trials = summary.trials,
            lines = summary.lines,
            dropped = summary.dropped.len(),
            "sweep complete"
        );
        Ok(summary)
    }
}

/// Times a single accumulation.
pub fn measure(experiment: Experiment, base: u32, trial: Trial) -> Measurement {
    let start = Instant::now();
    let result = experiment.accumulate(trial.size);
    let duration = start.elapsed();
    Measurement {
        experiment,
        base,
        power: trial.power,
        size: trial.size,
        length: result.len() as u64,
        duration,
    }
}

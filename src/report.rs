//! Result lines written to stdout.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::experiment::Experiment;

/// Outcome of one experiment invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Strategy that ran.
    pub experiment: Experiment,
    /// Base of the trial.
    pub base: u32,
    /// Exponent of the trial.
    pub power: u32,
    /// Requested length, `base^power`.
    pub size: u64,
    /// Length of the string actually produced.
    pub length: u64,
    /// Wall-clock time of the accumulation.
    pub duration: Duration,
}

impl Measurement {
    /// Elapsed whole milliseconds.
    pub fn duration_ms(&self) -> u128 {
        self.duration.as_millis()
    }

    /// Line renderer; `with_power` controls the `<base>^<power>` token.
    pub fn line(&self, with_power: bool) -> Line<'_> {
        Line {
            measurement: self,
            with_power,
        }
    }
}

/// Display adapter for a single result line (no trailing newline).
pub struct Line<'a> {
    measurement: &'a Measurement,
    with_power: bool,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.measurement;
        write!(f, "{}", m.experiment.label())?;
        if self.with_power {
            write!(f, " {}^{}", m.base, m.power)?;
        }
        write!(f, " {} {} {}", m.size, m.length, m.duration_ms())
    }
}

/// Writes measurements as they are produced, one line each.
pub struct Reporter<W: Write> {
    out: W,
    with_power: bool,
    lines: usize,
}

impl<W: Write> Reporter<W> {
    /// Wraps `out`.
    pub fn new(out: W, with_power: bool) -> Self {
        Self {
            out,
            with_power,
            lines: 0,
        }
    }

    /// Emits one line and flushes so progress is visible during long trials.
    pub fn emit(&mut self, measurement: &Measurement) -> Result<()> {
        writeln!(self.out, "{}", measurement.line(self.with_power))?;
        self.out.flush()?;
        self.lines += 1;
        Ok(())
    }

    /// Lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

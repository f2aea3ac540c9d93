//! String accumulation strategies under measurement.
//!
//! Every strategy produces the same digit sequence `0123456789012...` of the
//! requested length; only the way the string grows differs.

use std::hint::black_box;

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Digit appended at `index`: `index mod 10`.
#[inline]
pub fn digit(index: u64) -> &'static str {
    DIGITS[(index % 10) as usize]
}

/// Accumulation strategy exercised by a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Experiment {
    /// Copy-on-append growth of an immutable string, O(size²).
    Concat,
    /// Amortized O(1) appends into a [`StringBuilder`].
    Builder,
    /// Builder preallocated to the final length.
    FastBuilder,
    /// Per-digit pieces collected into a vector and joined once.
    Join,
}

impl Experiment {
    /// Label printed as the first field of each result line.
    pub fn label(self) -> &'static str {
        match self {
            Experiment::Concat => "concat",
            Experiment::Builder => "builder",
            Experiment::FastBuilder => "fast-builder",
            Experiment::Join => "join",
        }
    }

    /// Whether this experiment is bounded by the concat exponent limit.
    pub fn is_quadratic(self) -> bool {
        matches!(self, Experiment::Concat)
    }

    /// Builds the digit sequence of length `size` with this strategy.
    pub fn accumulate(self, size: u64) -> Box<str> {
        match self {
            Experiment::Concat => concat(size),
            Experiment::Builder => {
                let mut builder = StringBuilder::new();
                fill(&mut builder, size);
                builder.build().into_boxed_str()
            }
            Experiment::FastBuilder => {
                let mut builder = StringBuilder::with_capacity(capacity_hint(size));
                fill(&mut builder, size);
                builder.into_string().into_boxed_str()
            }
            Experiment::Join => join(size),
        }
    }
}

/// Growable append-only string buffer.
#[derive(Debug, Default, Clone)]
pub struct StringBuilder {
    internal: String,
}

impl StringBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            internal: String::with_capacity(capacity),
        }
    }

    /// Appends `piece` to the end of the buffer.
    pub fn append(&mut self, piece: &str) -> &mut Self {
        self.internal.push_str(piece);
        self
    }

    /// Number of bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.internal.len()
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty()
    }

    /// Returns an owned copy of the contents; the builder stays usable.
    pub fn build(&self) -> String {
        String::from(self.internal.as_str())
    }

    /// Consumes the builder without copying.
    pub fn into_string(self) -> String {
        self.internal
    }
}

fn fill(builder: &mut StringBuilder, size: u64) {
    for i in 0..size {
        builder.append(digit(i));
    }
}

fn concat(size: u64) -> Box<str> {
    let mut result: Box<str> = Box::from("");
    for i in 0..size {
        // Fresh allocation each step; the previous value is copied, never grown.
        result = black_box([&*result, digit(i)].concat().into_boxed_str());
    }
    result
}

fn join(size: u64) -> Box<str> {
    let mut pieces: Vec<&'static str> = Vec::new();
    for i in 0..size {
        pieces.push(digit(i));
    }
    pieces.concat().into_boxed_str()
}

fn capacity_hint(size: u64) -> usize {
    usize::try_from(size).unwrap_or(usize::MAX)
}

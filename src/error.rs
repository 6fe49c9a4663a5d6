use thiserror::Error;

use crate::level::LogicalState;
use crate::pattern::{MAX_INSTRUCTIONS, MAX_PATTERNS};
use crate::ramp::FADE_STEPS;

/// Defects in a single raw pattern
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is not terminated by 0")]
    MissingTerminator,
    #[error("terminator at position {0} is not the last value")]
    EarlyTerminator(usize),
    #[error("pattern holds {0} instructions, capacity is {max}", max = MAX_INSTRUCTIONS)]
    TooLong(usize),
    #[error("replaying the pattern never advances time")]
    NeverAdvances,
}

/// Startup configuration defects. None of these can occur once the player runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pattern {index}: {error}")]
    Pattern {
        index: usize,
        #[source]
        error: PatternError,
    },
    #[error("catalog holds no patterns")]
    EmptyCatalog,
    #[error("catalog holds more than {max} patterns", max = MAX_PATTERNS)]
    TooManyPatterns,
    #[error("acceleration table needs at least 3 points, got {0}")]
    TableTooShort(usize),
    #[error("acceleration table must start at the off level and end at the on level")]
    TableBounds,
    #[error("acceleration table decreases at index {0}")]
    TableNotMonotonic(usize),
    #[error("fade towards {target:?} takes {steps} steps, expected {expected}", expected = FADE_STEPS)]
    RampLength { target: LogicalState, steps: usize },
}

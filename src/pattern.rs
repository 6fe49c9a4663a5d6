//! Patterns and the pattern catalog
//!
//! Patterns are authored as compact signed values terminated by `0` and
//! decoded once at startup. Decoding validates the terminator and rejects
//! patterns whose replay would never let time advance.

use embassy_time::Duration;
use heapless::Vec;

use crate::error::{ConfigError, PatternError};
use crate::instruction::{Action, Instruction, TERMINATOR};
use crate::level::LogicalState;

/// Maximum number of instructions in a pattern, terminator excluded
pub const MAX_INSTRUCTIONS: usize = 24;

/// Maximum number of patterns in a catalog
pub const MAX_PATTERNS: usize = 16;

/// Patterns shipped with the firmware, in rotation order
pub const BUILTIN_PATTERNS: [&[i16]; 9] = [
    &[
        500, -500, 500, -500, 1, 50, -1, -50, 1, 50, -1, -50, 1, 50, -3000, -2000, 0,
    ],
    &[1, 500, -1, -500, 0],
    &[4000, -1, -2000, 0],
    &[1, 250, -1, -250, 0],
    &[500, -500, -3000, 0],
    &[1, 50, -1, -50, 0],
    &[1, -4000, -2000, 0],
    &[
        2000, -1, -100, 1, 100, -1, -100, 1, 100, -1, -100, 1, 100, -1, -100, 1, -2000, -3000, 0,
    ],
    &[1000, -1000, 0],
];

/// Decoded, immutable instruction sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    instructions: Vec<Instruction, MAX_INSTRUCTIONS>,
}

impl Pattern {
    /// Decode a terminator-bounded raw pattern
    pub fn decode(raw: &[i16]) -> Result<Self, PatternError> {
        let end = raw
            .iter()
            .position(|&value| value == TERMINATOR)
            .ok_or(PatternError::MissingTerminator)?;
        if end + 1 != raw.len() {
            return Err(PatternError::EarlyTerminator(end));
        }
        if end > MAX_INSTRUCTIONS {
            return Err(PatternError::TooLong(end));
        }

        let instructions = raw[..end]
            .iter()
            .filter_map(|&value| Instruction::decode(value))
            .collect();
        let pattern = Self { instructions };

        let advances = [LogicalState::Off, LogicalState::On].into_iter().all(|start| {
            let (first, state) = pattern.replay(start);
            let (second, _) = pattern.replay(state);
            first + second > Duration::from_millis(0)
        });
        if !advances {
            return Err(PatternError::NeverAdvances);
        }

        Ok(pattern)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Nominal duration of one replay starting from `start`, and the state
    /// the replay ends in
    pub fn replay(&self, start: LogicalState) -> (Duration, LogicalState) {
        self.instructions.iter().fold(
            (Duration::from_millis(0), start),
            |(elapsed, state), instruction| match instruction.action(state) {
                Action::Wait(duration) => (elapsed + duration, state),
                Action::Switch(target) => (elapsed, target),
                Action::Fade { target, duration } => {
                    (elapsed + Duration::from_millis(u64::from(duration)), target)
                }
            },
        )
    }
}

/// Ordered set of patterns played in rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    patterns: Vec<Pattern, MAX_PATTERNS>,
}

impl Catalog {
    /// Decode and validate every raw pattern
    pub fn from_raw(raw: &[&[i16]]) -> Result<Self, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if raw.len() > MAX_PATTERNS {
            return Err(ConfigError::TooManyPatterns);
        }

        let mut patterns = Vec::new();
        for (index, values) in raw.iter().enumerate() {
            let pattern =
                Pattern::decode(values).map_err(|error| ConfigError::Pattern { index, error })?;
            patterns
                .push(pattern)
                .map_err(|_| ConfigError::TooManyPatterns)?;
        }

        Ok(Self { patterns })
    }

    /// Catalog of [`BUILTIN_PATTERNS`]
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_raw(&BUILTIN_PATTERNS)
    }

    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }
}

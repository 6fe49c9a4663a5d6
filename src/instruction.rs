use embassy_time::Duration;

use crate::level::LogicalState;

/// Raw value that ends a pattern
pub const TERMINATOR: i16 = 0;

/// Durations below this value switch state in a single step
pub const INSTANT_LIMIT: u16 = 128;

/// How a state change is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Jump straight to the target level
    Instant,
    /// Ramp through intermediate levels over the instruction duration
    Gradual,
}

/// One decoded pattern instruction
///
/// The sign of the raw value selects the target state and the magnitude
/// is the duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    target: LogicalState,
    duration: u16,
}

/// What an instruction does given the current logical state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Target equals the current state: hold the output for the duration
    Wait(Duration),
    /// Switch the output to the target level with no wait
    Switch(LogicalState),
    /// Ramp the output towards the target over `duration` milliseconds
    Fade { target: LogicalState, duration: u16 },
}

impl Instruction {
    /// Decode a raw signed value
    ///
    /// Returns None for the terminator.
    pub const fn decode(raw: i16) -> Option<Self> {
        if raw == TERMINATOR {
            return None;
        }
        Some(Self {
            target: LogicalState::from_sign(raw > 0),
            duration: raw.unsigned_abs(),
        })
    }

    pub const fn new(target: LogicalState, duration: u16) -> Self {
        Self { target, duration }
    }

    pub const fn target(self) -> LogicalState {
        self.target
    }

    /// Duration in milliseconds
    pub const fn duration(self) -> u16 {
        self.duration
    }

    /// Kind of transition this instruction performs when it changes state
    pub const fn kind(self) -> TransitionKind {
        if self.duration < INSTANT_LIMIT {
            TransitionKind::Instant
        } else {
            TransitionKind::Gradual
        }
    }

    /// Resolve the instruction against the current logical state
    pub fn action(self, current: LogicalState) -> Action {
        if self.target == current {
            return Action::Wait(Duration::from_millis(u64::from(self.duration)));
        }
        match self.kind() {
            TransitionKind::Instant => Action::Switch(self.target),
            TransitionKind::Gradual => Action::Fade {
                target: self.target,
                duration: self.duration,
            },
        }
    }
}

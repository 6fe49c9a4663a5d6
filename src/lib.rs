#![no_std]

pub mod acceleration;
pub mod clock;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod level;
pub mod pattern;
pub mod player;
pub mod ramp;

pub use acceleration::AccelerationTable;
pub use clock::{Clock, EmbassyClock, SleepClock, TickCounter, Ticks};
pub use error::{ConfigError, PatternError};
pub use instruction::{Action, Instruction, TransitionKind};
pub use interpreter::Interpreter;
pub use level::{LogicalState, OFF_LEVEL, ON_LEVEL};
pub use pattern::{BUILTIN_PATTERNS, Catalog, Pattern};
pub use player::{PatternPlayer, PlayerConfig};
pub use ramp::{FadeRamp, RampStep};

pub use embassy_time::Duration;

/// Abstract brightness output
///
/// Implement this trait to drive a PWM channel or any other single-channel
/// actuator. Levels range from [`OFF_LEVEL`] to [`ON_LEVEL`].
pub trait BrightnessOutput {
    /// Set the output level; it persists until the next call
    fn set(&mut self, level: u8);
}

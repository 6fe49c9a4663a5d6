//! Brightness levels and the logical on/off state.

/// Number of discrete brightness levels the output accepts
pub const LEVEL_COUNT: u16 = 128;

/// Brightness level of the logical OFF state
pub const OFF_LEVEL: u8 = 0;

/// Brightness level of the logical ON state
#[allow(clippy::cast_possible_truncation)]
pub const ON_LEVEL: u8 = (LEVEL_COUNT - 1) as u8;

/// Abstract on/off flag, tracked independently of the level currently emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogicalState {
    #[default]
    Off,
    On,
}

impl LogicalState {
    /// State encoded by the sign of a raw instruction value
    pub const fn from_sign(positive: bool) -> Self {
        if positive { Self::On } else { Self::Off }
    }

    /// Brightness level that represents this state at rest
    pub const fn level(self) -> u8 {
        match self {
            Self::Off => OFF_LEVEL,
            Self::On => ON_LEVEL,
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

//! Acceleration table for perceptually even fades
//!
//! The eye is far more sensitive to changes near darkness than near full
//! brightness, so a linear duty-cycle ramp looks uneven. The table lists the
//! brightness breakpoints at which the fade step size grows by one level
//! (fading in) or shrinks by one level (fading out).
//!
//! Fading in compares the level against `points[step]`, fading out against
//! `points[step - 1]`. The off-by-one between the two directions shapes the
//! curve and must be kept as is.

use crate::error::ConfigError;
use crate::level::{LogicalState, OFF_LEVEL, ON_LEVEL};
use crate::ramp::{FADE_STEPS, FadeRamp};

/// Reference breakpoints; both directions walk exactly [`FADE_STEPS`] steps
pub const REFERENCE_POINTS: [u8; 8] = [0, 40, 58, 70, 85, 100, 111, 127];

/// Ordered brightness breakpoints, bounded by the off and on levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelerationTable {
    points: &'static [u8],
}

impl AccelerationTable {
    /// Table built from [`REFERENCE_POINTS`]
    pub const REFERENCE: Self = Self {
        points: &REFERENCE_POINTS,
    };

    /// Create a validated table
    pub fn new(points: &'static [u8]) -> Result<Self, ConfigError> {
        let table = Self { points };
        table.validate()?;
        Ok(table)
    }

    pub const fn points(&self) -> &'static [u8] {
        self.points
    }

    /// Step size a fade towards `target` starts with
    pub const fn initial_step(&self, target: LogicalState) -> usize {
        match target {
            LogicalState::On => 1,
            LogicalState::Off => self.points.len() - 2,
        }
    }

    /// Check bounds, ordering and that both fade directions take
    /// exactly [`FADE_STEPS`] steps
    pub fn validate(&self) -> Result<(), ConfigError> {
        let points = self.points;
        if points.len() < 3 {
            return Err(ConfigError::TableTooShort(points.len()));
        }
        if points.first() != Some(&OFF_LEVEL) || points.last() != Some(&ON_LEVEL) {
            return Err(ConfigError::TableBounds);
        }
        if let Some(index) = points.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(ConfigError::TableNotMonotonic(index + 1));
        }

        for target in [LogicalState::On, LogicalState::Off] {
            let steps = FadeRamp::new(self, target, 0).count();
            if steps != usize::from(FADE_STEPS) {
                return Err(ConfigError::RampLength { target, steps });
            }
        }

        Ok(())
    }
}

impl Default for AccelerationTable {
    fn default() -> Self {
        Self::REFERENCE
    }
}

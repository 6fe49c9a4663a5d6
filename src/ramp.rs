//! Fade ramp generator
//!
//! Walks the brightness range from one extreme to the other with a step
//! size driven by the [`AccelerationTable`], and spreads the requested
//! duration over [`FADE_STEPS`] holds so that the holds add up to it exactly.

use embassy_time::Duration;

use crate::acceleration::AccelerationTable;
use crate::level::{LEVEL_COUNT, LogicalState};

/// Number of timed steps in every fade
pub const FADE_STEPS: u16 = 64;

/// One level of a fade and how long to hold it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampStep {
    /// Brightness level to emit
    pub level: u8,
    /// Time to hold the level before the next step
    pub hold: Duration,
    /// Level distance to the next step
    pub step: usize,
}

/// Iterator over the steps of a single fade
#[derive(Debug, Clone)]
pub struct FadeRamp<'a> {
    table: &'a AccelerationTable,
    target: LogicalState,
    /// Walk position, 1-based, ends at [`LEVEL_COUNT`]
    position: usize,
    step: usize,
    /// Nominal hold per step
    hold: u16,
    /// Steps that still get one extra millisecond
    remainder: u16,
}

impl<'a> FadeRamp<'a> {
    /// Create a fade towards `target` lasting `duration` milliseconds
    pub const fn new(table: &'a AccelerationTable, target: LogicalState, duration: u16) -> Self {
        Self {
            table,
            target,
            position: 1,
            step: table.initial_step(target),
            hold: duration / FADE_STEPS,
            remainder: duration % FADE_STEPS,
        }
    }

    pub const fn target(&self) -> LogicalState {
        self.target
    }

    /// Level at the current position, adjusting the step size on the way
    fn advance_level(&mut self) -> usize {
        let points = self.table.points();
        match self.target {
            LogicalState::On => {
                let level = self.position - 1;
                if level >= usize::from(points[self.step]) {
                    self.step += 1;
                }
                level
            }
            LogicalState::Off => {
                let level = usize::from(LEVEL_COUNT) - self.position;
                if level <= usize::from(points[self.step - 1]) {
                    self.step -= 1;
                }
                level
            }
        }
    }

    fn next_hold(&mut self) -> Duration {
        let mut hold = self.hold;
        if self.remainder > 0 {
            self.remainder -= 1;
            hold += 1;
        }
        Duration::from_millis(u64::from(hold))
    }
}

impl Iterator for FadeRamp<'_> {
    type Item = RampStep;

    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<RampStep> {
        if self.position >= usize::from(LEVEL_COUNT) {
            return None;
        }

        let mut level = self.advance_level() as u8;
        self.position += self.step;
        // Last step lands exactly on the target extreme
        if self.position >= usize::from(LEVEL_COUNT) {
            level = self.target.level();
        }

        Some(RampStep {
            level,
            hold: self.next_hold(),
            step: self.step,
        })
    }
}

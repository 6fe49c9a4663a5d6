//! Pattern rotation
//!
//! Plays each catalog pattern for a fixed window, replaying it end to end
//! until the window has elapsed, then moves on to the next one. The
//! logical state carries over from one pattern to the next.
//!
//! # Usage
//!
//! ```ignore
//! static TICKS: TickCounter = TickCounter::new();
//!
//! let catalog = Catalog::builtin()?;
//! let clock = SleepClock::new(&TICKS, || cortex_m::asm::wfi());
//! let mut player = PatternPlayer::new(&catalog, clock, pwm, &PlayerConfig::default())?;
//! player.run();
//! ```

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::BrightnessOutput;
use crate::acceleration::AccelerationTable;
use crate::clock::Clock;
use crate::error::ConfigError;
use crate::interpreter::Interpreter;
use crate::level::LogicalState;
use crate::pattern::Catalog;

/// Default time each pattern is played before rotating (30 s)
pub const DEFAULT_PLAY_WINDOW: Duration = Duration::from_millis(30_000);

/// Configuration for the pattern player
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    /// Minimum time a pattern is replayed before the next one starts
    pub play_window: Duration,
    /// Breakpoints shaping every fade
    pub acceleration: AccelerationTable,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            play_window: DEFAULT_PLAY_WINDOW,
            acceleration: AccelerationTable::REFERENCE,
        }
    }
}

/// Rotation scheduler driving the interpreter through the catalog
pub struct PatternPlayer<'a, C: Clock, O: BrightnessOutput> {
    catalog: &'a Catalog,
    clock: C,
    output: O,
    interpreter: Interpreter,
    window: Duration,
    /// Catalog index of the pattern played next
    position: usize,
}

impl<'a, C: Clock, O: BrightnessOutput> PatternPlayer<'a, C, O> {
    /// Create a player, validating the configuration up front
    pub fn new(
        catalog: &'a Catalog,
        clock: C,
        output: O,
        config: &PlayerConfig,
    ) -> Result<Self, ConfigError> {
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        config.acceleration.validate()?;

        Ok(Self {
            catalog,
            clock,
            output,
            interpreter: Interpreter::new(config.acceleration),
            window: config.play_window,
            position: 0,
        })
    }

    /// Play the current pattern for one window and rotate to the next
    ///
    /// Returns the catalog index of the pattern that was played.
    pub fn play_window(&mut self) -> usize {
        let index = self.position;
        let catalog = self.catalog;

        #[cfg(feature = "esp32-log")]
        println!(
            "[PatternPlayer.play_window] pattern {} starting in {:?}",
            index,
            self.interpreter.state()
        );

        if let Some(pattern) = catalog.get(index) {
            let start = self.clock.now();
            loop {
                self.interpreter
                    .play(pattern, &mut self.clock, &mut self.output);
                if self.clock.now().since(start) >= self.window {
                    break;
                }
            }
        }

        self.position = (index + 1) % catalog.len();
        index
    }

    /// Rotate through the catalog forever
    pub fn run(&mut self) -> ! {
        loop {
            self.play_window();
        }
    }

    /// Catalog index of the pattern played next
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn state(&self) -> LogicalState {
        self.interpreter.state()
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub const fn output(&self) -> &O {
        &self.output
    }
}

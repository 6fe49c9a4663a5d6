//! Time source and blocking wait
//!
//! The tick counter is a fixed-width value that wraps. All comparisons go
//! through [`Ticks::since`] and [`Ticks::has_reached`], which stay correct
//! across a wrap as long as the compared span fits in half the counter range.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

/// Wrapping millisecond counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticks(pub u32);

impl Ticks {
    /// Tick value `duration` after this one
    #[allow(clippy::cast_possible_truncation)]
    pub const fn wrapping_add(self, duration: Duration) -> Self {
        Self(self.0.wrapping_add(duration.as_millis() as u32))
    }

    /// Time elapsed since `earlier`
    #[allow(clippy::cast_lossless)]
    pub const fn since(self, earlier: Self) -> Duration {
        Duration::from_millis(self.0.wrapping_sub(earlier.0) as u64)
    }

    /// Check if this value is at or past `deadline`
    #[allow(clippy::cast_possible_wrap)]
    pub const fn has_reached(self, deadline: Self) -> bool {
        self.0.wrapping_sub(deadline.0) as i32 >= 0
    }
}

/// Monotonic time source plus blocking wait
///
/// Implement this trait to run the player on a specific platform.
pub trait Clock {
    /// Current tick value
    fn now(&self) -> Ticks;

    /// Block until at least `duration` has elapsed
    fn wait(&mut self, duration: Duration);
}

/// Tick counter advanced from the timer interrupt
///
/// Safe to share between the interrupt and the main flow.
pub struct TickCounter {
    ticks: Mutex<Cell<u32>>,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self::starting_at(Ticks(0))
    }

    /// Create a counter that starts at `start`
    pub const fn starting_at(start: Ticks) -> Self {
        Self {
            ticks: Mutex::new(Cell::new(start.0)),
        }
    }

    /// Advance by one tick. Call this from the timer interrupt.
    pub fn advance(&self) {
        critical_section::with(|cs| {
            let ticks = self.ticks.borrow(cs);
            ticks.set(ticks.get().wrapping_add(1));
        });
    }

    pub fn now(&self) -> Ticks {
        critical_section::with(|cs| Ticks(self.ticks.borrow(cs).get()))
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Clock that idles the CPU until the tick counter reaches a deadline
///
/// `idle` is expected to suspend until the next interrupt, e.g. a
/// sleep instruction; every tick wakes the loop to re-check the deadline.
pub struct SleepClock<'a, F: FnMut()> {
    counter: &'a TickCounter,
    idle: F,
}

impl<'a, F: FnMut()> SleepClock<'a, F> {
    pub const fn new(counter: &'a TickCounter, idle: F) -> Self {
        Self { counter, idle }
    }
}

impl<F: FnMut()> Clock for SleepClock<'_, F> {
    fn now(&self) -> Ticks {
        self.counter.now()
    }

    fn wait(&mut self, duration: Duration) {
        let deadline = self.counter.now().wrapping_add(duration);
        while !self.counter.now().has_reached(deadline) {
            (self.idle)();
        }
    }
}

/// Clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> Ticks {
        Ticks(Instant::now().as_millis() as u32)
    }

    fn wait(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}

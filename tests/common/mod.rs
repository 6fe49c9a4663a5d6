#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use pulse_composer::{BrightnessOutput, Clock, Duration, Ticks};

/// Levels of a 64-step fade in with the reference acceleration table
pub const FADE_IN_LEVELS: [u8; 64] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 42, 44, 46, 48, 50, 52, 54, 56, 58,
    61, 64, 67, 70, 74, 78, 82, 86, 91, 96, 101, 107, 113, 127,
];

/// Levels of a 64-step fade out with the reference acceleration table
pub const FADE_OUT_LEVELS: [u8; 64] = [
    127, 121, 115, 109, 103, 97, 92, 87, 82, 78, 74, 70, 67, 64, 61, 58, 56, 54, 52, 50, 48, 46,
    44, 42, 40, 39, 38, 37, 36, 35, 34, 33, 32, 31, 30, 29, 28, 27, 26, 25, 24, 23, 22, 21, 20, 19,
    18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set { at: u32, level: u8 },
    Wait { at: u32, millis: u64 },
}

#[derive(Debug, Default)]
struct Inner {
    now: u32,
    events: Vec<Event>,
}

/// Shared virtual timeline; waits advance it instantly
#[derive(Debug, Clone, Default)]
pub struct Timeline(Rc<RefCell<Inner>>);

impl Timeline {
    pub fn starting_at(now: u32) -> Self {
        let timeline = Self::default();
        timeline.0.borrow_mut().now = now;
        timeline
    }

    pub fn clock(&self) -> FakeClock {
        FakeClock(self.clone())
    }

    pub fn output(&self) -> FakeOutput {
        FakeOutput(self.clone())
    }

    pub fn now(&self) -> u32 {
        self.0.borrow().now
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    /// Every level written to the output, in order
    pub fn levels(&self) -> Vec<u8> {
        self.0
            .borrow()
            .events
            .iter()
            .filter_map(|event| match event {
                Event::Set { level, .. } => Some(*level),
                Event::Wait { .. } => None,
            })
            .collect()
    }
}

pub struct FakeClock(Timeline);

impl Clock for FakeClock {
    fn now(&self) -> Ticks {
        Ticks(self.0.now())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn wait(&mut self, duration: Duration) {
        let mut inner = self.0.0.borrow_mut();
        let at = inner.now;
        let millis = duration.as_millis();
        inner.events.push(Event::Wait { at, millis });
        inner.now = at.wrapping_add(millis as u32);
    }
}

pub struct FakeOutput(Timeline);

impl BrightnessOutput for FakeOutput {
    fn set(&mut self, level: u8) {
        let mut inner = self.0.0.borrow_mut();
        let at = inner.now;
        inner.events.push(Event::Set { at, level });
    }
}

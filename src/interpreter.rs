//! Instruction interpreter
//!
//! Executes decoded instructions against the output and clock while
//! tracking the logical on/off state. The state only changes once a
//! transition has completed.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::BrightnessOutput;
use crate::acceleration::AccelerationTable;
use crate::clock::Clock;
use crate::instruction::{Action, Instruction};
use crate::level::LogicalState;
use crate::pattern::Pattern;
use crate::ramp::FadeRamp;

#[derive(Debug, Clone)]
pub struct Interpreter {
    state: LogicalState,
    table: AccelerationTable,
}

impl Interpreter {
    /// Create an interpreter in the OFF state
    pub const fn new(table: AccelerationTable) -> Self {
        Self {
            state: LogicalState::Off,
            table,
        }
    }

    pub const fn state(&self) -> LogicalState {
        self.state
    }

    /// Play every instruction of `pattern` once, in order
    pub fn play<C: Clock, O: BrightnessOutput>(
        &mut self,
        pattern: &Pattern,
        clock: &mut C,
        output: &mut O,
    ) {
        for &instruction in pattern.instructions() {
            self.execute(instruction, clock, output);
        }
    }

    /// Execute a single instruction
    pub fn execute<C: Clock, O: BrightnessOutput>(
        &mut self,
        instruction: Instruction,
        clock: &mut C,
        output: &mut O,
    ) {
        match instruction.action(self.state) {
            Action::Wait(duration) => clock.wait(duration),
            Action::Switch(target) => {
                output.set(target.level());
                self.state = target;
            }
            Action::Fade { target, duration } => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Interpreter.execute] fading to {:?} over {} ms",
                    target, duration
                );
                for step in FadeRamp::new(&self.table, target, duration) {
                    output.set(step.level);
                    clock.wait(step.hold);
                }
                self.state = target;
            }
        }
    }
}

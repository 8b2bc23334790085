//! Defines the [`Trace`] trait, used to observe the instructions a [`Chip8`] executes.
//!
//! [`Chip8`]: crate::Chip8

use crate::instruction::Instruction;
use crate::state::State;
use crate::timing::Step;

/// A collection of callbacks invoked after each instruction has been applied to the
/// state. Observers see the state but cannot change it or the course of execution.
#[allow(unused_variables)]
pub trait Trace {
    /// Called once `instruction`, fetched as `op` from `address`, has been applied.
    fn executed(
        &mut self,
        address: u16,
        op: u16,
        instruction: &Instruction,
        step: Step,
        state: &State,
    ) {
    }

    /// Called when `op`, fetched from `address`, matched no instruction and was skipped.
    fn unknown(&mut self, address: u16, op: u16, state: &State) {}
}

/// An implementation of [`Trace`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrace;
impl Trace for NoopTrace {}

/// An implementation of [`Trace`] that emits a `trace` level event per instruction.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn executed(
        &mut self,
        address: u16,
        op: u16,
        instruction: &Instruction,
        step: Step,
        state: &State,
    ) {
        tracing::trace!(
            "{:04X} {:04X} {:<14} {:?} v{:02X?} i{:04X}",
            address,
            op,
            instruction.mnemonic,
            step,
            state.v,
            state.i
        );
    }
}

use crate::state::State;

/// The outcome of executing a single instruction.
///
/// Clearing the screen and drawing may only take effect as the first instruction of a
/// frame, and waiting for a key only completes once a release has been observed across
/// a frame boundary. Either way the program counter is rewound so the same instruction
/// runs again on the next step; a host can stop stepping until its next `tick` when it
/// sees a stall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The instruction took effect and the program counter moved on.
    Executed,
    /// A clear or draw instruction was attempted mid-frame.
    StalledForFrame,
    /// A key wait instruction found no released key.
    StalledForKeyRelease,
}

impl Step {
    pub fn is_stalled(&self) -> bool {
        *self != Step::Executed
    }
}

/// Whether no instruction has executed since the last frame boundary.
pub fn is_first_in_frame(state: &State) -> bool {
    state.frame_ticks == 0
}

/// Undoes the fetch of the current instruction so it is retried by the next step.
pub fn stall(state: &mut State, step: Step) -> Step {
    state.pc = state.pc.wrapping_sub(0x2);
    step
}

/// Counts an executed instruction against the current frame.
pub fn count_instruction(state: &mut State) {
    state.frame_ticks = state.frame_ticks.saturating_add(1);
}

/// Handles a frame boundary
/// - resets the instruction count for the frame
/// - decrements both timers, stopping at 0
/// - snapshots the keypad so releases can be detected
pub fn end_frame(state: &mut State) {
    state.frame_ticks = 0;
    state.delay_timer = state.delay_timer.saturating_sub(1);
    state.sound_timer = state.sound_timer.saturating_sub(1);
    state.keypad.snapshot();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stall_rewinds_pc() {
        let mut state = State::new();
        state.pc = 0x202;
        assert_eq!(
            stall(&mut state, Step::StalledForFrame),
            Step::StalledForFrame
        );
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_end_frame_resets_ticks() {
        let mut state = State::new();
        count_instruction(&mut state);
        count_instruction(&mut state);
        assert!(!is_first_in_frame(&state));
        end_frame(&mut state);
        assert!(is_first_in_frame(&state));
    }

    #[test]
    fn test_end_frame_decrements_timers_to_zero() {
        let mut state = State::new();
        state.delay_timer = 2;
        state.sound_timer = 1;
        end_frame(&mut state);
        assert_eq!((state.delay_timer, state.sound_timer), (1, 0));
        end_frame(&mut state);
        assert_eq!((state.delay_timer, state.sound_timer), (0, 0));
    }

    #[test]
    fn test_end_frame_snapshots_keys() {
        let mut state = State::new();
        state.keypad.set(0x3, true);
        end_frame(&mut state);
        state.keypad.set(0x3, false);
        assert_eq!(state.keypad.released_key(), Some(0x3));
    }

    #[test]
    fn test_step_stalls() {
        assert!(!Step::Executed.is_stalled());
        assert!(Step::StalledForFrame.is_stalled());
        assert!(Step::StalledForKeyRelease.is_stalled());
    }
}

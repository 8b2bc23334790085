use crate::error::Error;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;
use crate::timing::Step;

/// Executes one decoded instruction against the state.
///
/// The program counter has already been moved past the instruction when this runs.
pub type Operation = fn(op: u16, state: &mut State) -> Result<Step, Error>;

/// # Instruction
/// A rule that selects an `Operation` for every opcode whose bits under `mask` equal
/// `pattern`.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    pub mask: u16,
    pub pattern: u16,
    pub mnemonic: &'static str,
    pub execute: Operation,
}

const fn rule(
    mask: u16,
    pattern: u16,
    mnemonic: &'static str,
    execute: Operation,
) -> Instruction {
    Instruction {
        mask,
        pattern,
        mnemonic,
        execute,
    }
}

/// Every instruction in the order they are matched.
///
/// The first matching rule wins, so a whole-word rule such as `00E0` must come before
/// the `0nnn` rule that shares its leading nibble. `5xy0` and `9xy0` ignore their
/// trailing nibble.
pub static INSTRUCTIONS: &[Instruction] = &[
    rule(0xFFFF, 0x00E0, "CLS", cls),
    rule(0xFFFF, 0x00EE, "RET", ret),
    rule(0xF000, 0x0000, "SYS addr", sys),
    rule(0xF000, 0x1000, "JP addr", jump),
    rule(0xF000, 0x2000, "CALL addr", call),
    rule(0xF000, 0x3000, "SE Vx, byte", ske),
    rule(0xF000, 0x4000, "SNE Vx, byte", skne),
    rule(0xF000, 0x5000, "SE Vx, Vy", skre),
    rule(0xF000, 0x6000, "LD Vx, byte", load),
    rule(0xF000, 0x7000, "ADD Vx, byte", add),
    rule(0xF00F, 0x8000, "LD Vx, Vy", mv),
    rule(0xF00F, 0x8001, "OR Vx, Vy", or),
    rule(0xF00F, 0x8002, "AND Vx, Vy", and),
    rule(0xF00F, 0x8003, "XOR Vx, Vy", xor),
    rule(0xF00F, 0x8004, "ADD Vx, Vy", addr),
    rule(0xF00F, 0x8005, "SUB Vx, Vy", sub),
    rule(0xF00F, 0x8006, "SHR Vx, Vy", shr),
    rule(0xF00F, 0x8007, "SUBN Vx, Vy", subn),
    rule(0xF00F, 0x800E, "SHL Vx, Vy", shl),
    rule(0xF000, 0x9000, "SNE Vx, Vy", skrne),
    rule(0xF000, 0xA000, "LD I, addr", loadi),
    rule(0xF000, 0xB000, "JP V0, addr", jumpi),
    rule(0xF000, 0xC000, "RND Vx, byte", rnd),
    rule(0xF000, 0xD000, "DRW Vx, Vy, n", draw),
    rule(0xF0FF, 0xE09E, "SKP Vx", skpr),
    rule(0xF0FF, 0xE0A1, "SKNP Vx", skup),
    rule(0xF0FF, 0xF007, "LD Vx, DT", moved),
    rule(0xF0FF, 0xF00A, "LD Vx, K", keyd),
    rule(0xF0FF, 0xF015, "LD DT, Vx", loads),
    rule(0xF0FF, 0xF018, "LD ST, Vx", ld),
    rule(0xF0FF, 0xF01E, "ADD I, Vx", addi),
    rule(0xF0FF, 0xF029, "LD F, Vx", ldspr),
    rule(0xF0FF, 0xF033, "LD B, Vx", bcd),
    rule(0xF0FF, 0xF055, "LD [I], Vx", stor),
    rule(0xF0FF, 0xF065, "LD Vx, [I]", read),
];

/// Selects the Instruction for a given opcode, if there is one
pub fn decode(op: u16) -> Option<&'static Instruction> {
    INSTRUCTIONS
        .iter()
        .find(|instruction| op.matches(instruction.mask, instruction.pattern))
}

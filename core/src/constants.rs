/// Bytes of addressable memory.
pub const MEMORY_SIZE: usize = 4096;

/// Address that ROMs are loaded at and where execution begins.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the top of memory.
pub const MAX_ROM_SIZE: usize = 0xFFF - PROGRAM_START as usize;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Number of return addresses the call stack can hold.
pub const STACK_SIZE: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

/// Index of VF, the register used for carry, borrow, collision and shift-out.
pub const FLAG_REGISTER: usize = 0xF;

/// Frame boundaries (timer decrements and key snapshots) per second.
pub const FRAME_RATE: u32 = 60;

/// Bytes per glyph in `SPRITE_SHEET`.
pub const SPRITE_HEIGHT: u16 = 5;

/// # Sprite sheet
/// The 16 hexadecimal digits as 3-pixel wide, 5-pixel tall sprites.
///
/// Loaded at address 0x000 so the glyph for digit `d` starts at `d * 5`.
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0b1110_0000, 0b1010_0000, 0b1010_0000, 0b1010_0000, 0b1110_0000, // 0
    0b0100_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000, // 1
    0b1110_0000, 0b0010_0000, 0b1110_0000, 0b1000_0000, 0b1110_0000, // 2
    0b1110_0000, 0b0010_0000, 0b1110_0000, 0b0010_0000, 0b1110_0000, // 3
    0b1000_0000, 0b1010_0000, 0b1010_0000, 0b1110_0000, 0b0010_0000, // 4
    0b1110_0000, 0b1000_0000, 0b1110_0000, 0b0010_0000, 0b1110_0000, // 5
    0b1110_0000, 0b1000_0000, 0b1110_0000, 0b1010_0000, 0b1110_0000, // 6
    0b1110_0000, 0b0010_0000, 0b0010_0000, 0b0010_0000, 0b0010_0000, // 7
    0b1110_0000, 0b1010_0000, 0b1110_0000, 0b1010_0000, 0b1110_0000, // 8
    0b1110_0000, 0b1010_0000, 0b1110_0000, 0b0010_0000, 0b1110_0000, // 9
    0b1110_0000, 0b1010_0000, 0b1110_0000, 0b1010_0000, 0b1010_0000, // A
    0b1100_0000, 0b1010_0000, 0b1110_0000, 0b1010_0000, 0b1100_0000, // B
    0b1110_0000, 0b1000_0000, 0b1000_0000, 0b1000_0000, 0b1110_0000, // C
    0b1100_0000, 0b1010_0000, 0b1010_0000, 0b1010_0000, 0b1100_0000, // D
    0b1110_0000, 0b1000_0000, 0b1110_0000, 0b1000_0000, 0b1110_0000, // E
    0b1110_0000, 0b1000_0000, 0b1100_0000, 0b1000_0000, 0b1000_0000, // F
];

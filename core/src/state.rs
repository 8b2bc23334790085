use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG_REGISTER, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET,
    STACK_SIZE,
};
use crate::keypad::Keypad;

/// The machine's internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flag register, written by arithmetic, logic, shifts and draws
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) an 8-bit stack pointer; the number of return addresses on the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - the buzzer sounds while the sound timer is above 0
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the sprite sheet
///     - ROMs are loaded at 0x200
/// - 64x32 frame buffer of 0/1 pixels
///
/// ## Input
/// - a `Keypad` with live and previous-frame key status
///
/// ## Timing
/// - `frame_ticks` counts instructions executed since the last frame boundary
#[derive(Debug, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keypad: Keypad,
    pub frame_ticks: u32,
    pub rng: StdRng,
}

impl State {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A fresh state whose `RND` instructions draw from `rng`.
    pub fn with_rng(rng: StdRng) -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            keypad: Keypad::new(),
            frame_ticks: 0,
            rng,
        }
    }

    /// Reads the byte at `addr`, wrapping addresses past the end of memory.
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[addr as usize % MEMORY_SIZE]
    }

    /// Writes `byte` to `addr`, wrapping addresses past the end of memory.
    pub fn write(&mut self, addr: u16, byte: u8) {
        self.memory[addr as usize % MEMORY_SIZE] = byte;
    }

    /// VF = flag
    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG_REGISTER] = flag as u8;
    }

    /// The value of the pixel at (`x`, `y`); 0 when off the display.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.frame_buffer
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }

    pub fn buzzer_active(&self) -> bool {
        self.sound_timer != 0
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

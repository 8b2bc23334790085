use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{KEY_COUNT, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::Error;
use crate::instruction::decode;
use crate::state::{FrameBuffer, State};
use crate::timing::{count_instruction, end_frame, Step};
use crate::trace::{NoopTrace, Trace};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the machine `state` and is the only way a host touches it.
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - executing one instruction at a time
/// - advancing to the next frame (timers and key snapshots)
/// - inspecting its frame buffer and buzzer for rendering by some display
///
/// The host decides how many instructions run per frame and must call `tick` once per
/// 1/60th of a second.
#[derive(Debug, Clone)]
pub struct Chip8 {
    state: State,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
        }
    }

    /// A machine whose random numbers are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: State::with_rng(StdRng::seed_from_u64(seed)),
        }
    }

    /// Load a rom from a source
    ///
    /// At most one byte more than fits is read, and only then is memory touched, so a ROM
    /// that is too large leaves the machine as it was.
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize, Error> {
        let mut rom = Vec::new();
        reader.take(MAX_ROM_SIZE as u64 + 1).read_to_end(&mut rom)?;

        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }

        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(&rom);
        tracing::debug!(bytes = rom.len(), "loaded ROM");
        Ok(rom.len())
    }

    /// Load a rom from a file
    ///
    /// # Arguments
    /// * `path` the location of the ROM file
    pub fn load_rom_file(&mut self, path: impl AsRef<Path>) -> Result<usize, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::RomNotFound(path.to_path_buf()),
            _ => Error::RomUnreadable(err),
        })?;
        self.load_rom(&mut BufReader::new(file))
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the index of the key on the keypad, `0x0..=0xF`
    /// * `pressed` whether the key is held down
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<(), Error> {
        if key as usize >= KEY_COUNT {
            return Err(Error::InvalidKey(key));
        }
        self.state.keypad.set(key, pressed);
        Ok(())
    }

    pub fn key_press(&mut self, key: u8) -> Result<(), Error> {
        self.set_key(key, true)
    }

    pub fn key_release(&mut self, key: u8) -> Result<(), Error> {
        self.set_key(key, false)
    }

    /// Executes a single instruction
    pub fn step(&mut self) -> Result<Step, Error> {
        self.step_traced(&mut NoopTrace)
    }

    /// Executes a single instruction, reporting it to `trace` afterwards
    /// - fetches the opcode at the pc and moves the pc past it
    /// - decodes and executes it; unknown opcodes are logged and skipped
    /// - counts it against the current frame
    pub fn step_traced<T>(&mut self, trace: &mut T) -> Result<Step, Error>
    where
        T: ?Sized + Trace,
    {
        let address = self.state.pc;
        let op = self.fetch();

        let step = match decode(op) {
            Some(instruction) => {
                let step = (instruction.execute)(op, &mut self.state)?;
                trace.executed(address, op, instruction, step, &self.state);
                step
            }
            None => {
                tracing::warn!("unsupported instruction {:04X} at {:04X}", op, address);
                trace.unknown(address, op, &self.state);
                Step::Executed
            }
        };

        count_instruction(&mut self.state);
        Ok(step)
    }

    /// Advances to the next frame
    /// - allows the next instruction to clear or draw
    /// - decrements the delay and sound timers
    /// - remembers which keys are held so releases can be seen
    pub fn tick(&mut self) {
        end_frame(&mut self.state);
    }

    /// The value (0 or 1) of the pixel at (`x`, `y`)
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.state.pixel(x, y)
    }

    /// Whether the buzzer should be sounding
    pub fn buzzer_active(&self) -> bool {
        self.state.buzzer_active()
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if it has changed since it was last taken
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Gets the opcode currently pointed at by the pc and moves the pc past it.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn fetch(&mut self) -> u16 {
        let pc = self.state.pc;
        let left = u16::from(self.state.read(pc));
        let right = u16::from(self.state.read(pc.wrapping_add(1)));
        self.state.pc = pc.saturating_add(0x2).min(MEMORY_SIZE as u16 - 1);
        left << 8 | right
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

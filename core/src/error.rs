//! Defines the [`Error`] type of the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An error that might occur when loading or running a ROM.
#[derive(Debug, Error)]
pub enum Error {
    /// The ROM file does not exist.
    #[error("ROM file {} does not exist", .0.display())]
    RomNotFound(PathBuf),

    /// The ROM could not be read.
    #[error("unable to read ROM: {0}")]
    RomUnreadable(#[from] io::Error),

    /// The ROM does not fit in memory above the program start address.
    /// `size` counts the bytes read, which stops one past `max`.
    #[error("ROM is too large (at least {size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    // The remaining variants are raised while stepping. The machine is left as it was
    // after fetching the offending instruction; it is up to the host to halt or reset.
    //
    /// A `CALL` at `address` was made with every stack slot already in use.
    #[error("stack overflow: CALL at {address:#05X} exceeds the 16 level call stack")]
    StackOverflow { address: u16 },

    /// A `RET` at `address` was made with an empty call stack.
    #[error("stack underflow: RET at {address:#05X} with an empty call stack")]
    StackUnderflow { address: u16 },

    /// A key index outside of `0x0..=0xF`.
    #[error("no such key {0:#X}")]
    InvalidKey(u8),
}

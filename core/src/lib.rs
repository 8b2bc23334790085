pub use chip8::Chip8;
pub use error::Error;
pub use keypad::Keypad;
pub use state::{FrameBuffer, State};
pub use timing::Step;
pub use trace::{LogTrace, NoopTrace, Trace};

mod chip8;
pub mod constants;
mod error;
pub mod instruction;
mod keypad;
mod opcode;
mod operations;
pub mod state;
mod timing;
pub mod trace;

/// # Opcodes
///
/// Opcodes are 16 bits each, fetched big-endian. An instruction is selected by masking
/// the opcode and comparing the result to a fixed pattern, with masks of increasing
/// specificity:
/// - `0xF000` only the leading nibble selects the instruction (e.g. `1nnn` JP)
/// - `0xF00F` the leading and trailing nibbles select it (e.g. `8xy4` ADD)
/// - `0xF0FF` the leading nibble and low byte select it (e.g. `Fx33` BCD)
/// - `0xFFFF` the whole word is fixed (e.g. `00E0` CLS)
///
/// Nibbles not used to select the instruction carry its operands.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` an immediate byte assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx or the inclusive range V0..=Vx
/// - `(_, _, n, _)` the register Vy
/// - `(_, _, _, n)` a count of sprite rows
pub trait Opcode {
    /// Returns the Opcode's component nibbles.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// Whether the Opcode masked with `mask` equals `pattern`.
    fn matches(&self, mask: u16, pattern: u16) -> bool;

    /// Register index held in the second nibble.
    /// `[_x__]`
    fn x(&self) -> usize;

    /// Register index held in the third nibble.
    /// `[__y_]`
    fn y(&self) -> usize;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_adr]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (
            ((self & 0xF000) >> 12) as u8,
            ((self & 0x0F00) >> 8) as u8,
            ((self & 0x00F0) >> 4) as u8,
            self.n(),
        )
    }

    fn matches(&self, mask: u16, pattern: u16) -> bool {
        self & mask == pattern
    }

    fn x(&self) -> usize {
        self.nibbles().1 as usize
    }

    fn y(&self) -> usize {
        self.nibbles().2 as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}

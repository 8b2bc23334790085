use crate::constants::KEY_COUNT;

/// # Keypad
/// The 16-key hexadecimal keypad.
///
/// Tracks the live pressed status of every key as set by the host, and a snapshot of
/// that status taken at the last frame boundary. Comparing the two is how a key
/// release is detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
    previous: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the live pressed status of `key`.
    ///
    /// Keys outside of `0x0..=0xF` are ignored.
    pub fn set(&mut self, key: u8, pressed: bool) {
        if let Some(slot) = self.pressed.get_mut(key as usize) {
            *slot = pressed;
        }
    }

    /// Whether `key` is currently held down.
    ///
    /// A key index outside of the keypad is never pressed.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }

    /// Copy the live key status into the previous-frame snapshot.
    pub fn snapshot(&mut self) {
        self.previous = self.pressed;
    }

    /// The highest-indexed key that was pressed at the last frame boundary and has
    /// since been released.
    pub fn released_key(&self) -> Option<u8> {
        (0..KEY_COUNT)
            .rev()
            .find(|&key| self.previous[key] && !self.pressed[key])
            .map(|key| key as u8)
    }
}

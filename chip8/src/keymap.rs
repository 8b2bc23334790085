use sdl2::keyboard::Keycode;

/// Translates a host key into a keypad index, or `None` for keys the machine ignores.
///
/// The 4x4 hex pad sits on the left block of the keyboard, row for row:
/// ```text
/// pad       keyboard
/// 1 2 3 C   1 2 3 4
/// 4 5 6 D   Q W E R
/// 7 8 9 E   A S D F
/// A 0 B F   Z X C V
/// ```
pub fn keymap(key: Keycode) -> Option<u8> {
    let key = match key {
        Keycode::X => 0x0,
        Keycode::Num1 => 0x1,
        Keycode::Num2 => 0x2,
        Keycode::Num3 => 0x3,
        Keycode::Q => 0x4,
        Keycode::W => 0x5,
        Keycode::E => 0x6,
        Keycode::A => 0x7,
        Keycode::S => 0x8,
        Keycode::D => 0x9,
        Keycode::Z => 0xA,
        Keycode::C => 0xB,
        Keycode::Num4 => 0xC,
        Keycode::R => 0xD,
        Keycode::F => 0xE,
        Keycode::V => 0xF,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_covers_keypad() {
        let rows = [
            [Keycode::Num1, Keycode::Num2, Keycode::Num3, Keycode::Num4],
            [Keycode::Q, Keycode::W, Keycode::E, Keycode::R],
            [Keycode::A, Keycode::S, Keycode::D, Keycode::F],
            [Keycode::Z, Keycode::X, Keycode::C, Keycode::V],
        ];
        let keypad = [
            [0x1, 0x2, 0x3, 0xC],
            [0x4, 0x5, 0x6, 0xD],
            [0x7, 0x8, 0x9, 0xE],
            [0xA, 0x0, 0xB, 0xF],
        ];
        for (row, keys) in rows.iter().zip(keypad.iter()) {
            for (&code, &key) in row.iter().zip(keys.iter()) {
                assert_eq!(keymap(code), Some(key));
            }
        }
    }

    #[test]
    fn test_keymap_ignores_other_keys() {
        assert_eq!(keymap(Keycode::Space), None);
        assert_eq!(keymap(Keycode::Escape), None);
        assert_eq!(keymap(Keycode::Num5), None);
    }
}

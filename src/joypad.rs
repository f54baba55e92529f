use sdl2::keyboard::Keycode;

/// Caches the most recent key pressed on the host, as a 4-bit code.
///
/// The mapping is fixed; a code of zero means no mapped key is held.
/// This state is not exposed through a bus register; it exists so host
/// input can resume a stopped CPU and so the front end can show it.
#[derive(Clone, Debug, Default)]
pub struct Joypad {
    code: u8,
}

impl Joypad {
    pub fn new() -> Self {
        Joypad { code: 0 }
    }

    /// The currently held key code, in [0, 15].
    pub fn code(&self) -> u8 {
        self.code
    }

    /// Handles a key press. Returns true if the key is one of the mapped
    /// joypad keys.
    pub fn key_down(&mut self, key: Keycode) -> bool {
        match Self::map_key(key) {
            Some(code) => {
                self.code = code;
                true
            }
            None => false,
        }
    }

    /// Handles a key release. The cached code is cleared only when the
    /// released key is the one currently held.
    pub fn key_up(&mut self, key: Keycode) {
        if let Some(code) = Self::map_key(key) {
            if self.code == code {
                self.code = 0;
            }
        }
    }

    fn map_key(key: Keycode) -> Option<u8> {
        let code = match key {
            Keycode::Num1 => 1,
            Keycode::Num2 => 2,
            Keycode::Num3 => 3,
            Keycode::Num4 => 12,
            Keycode::Q => 4,
            Keycode::W => 5,
            Keycode::E => 6,
            Keycode::R => 13,
            Keycode::A => 7,
            Keycode::S => 8,
            Keycode::D => 9,
            Keycode::F => 14,
            Keycode::Z => 10,
            Keycode::X => 0,
            Keycode::C => 11,
            Keycode::V => 15,
            _ => return None,
        };
        Some(code)
    }
}

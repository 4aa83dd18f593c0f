//! Keyboard input handling

/// Keys a paddle responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a browser-style key name to a paddle key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Source of pressed/released key state for the current frame
pub trait KeyboardInput {
    fn is_pressed(&self, key: Key) -> bool;
}

impl<T: KeyboardInput + ?Sized> KeyboardInput for &T {
    fn is_pressed(&self, key: Key) -> bool {
        (**self).is_pressed(key)
    }
}

/// Key state built from key down/up events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Handle key down event. Returns false for keys a paddle ignores.
    pub fn handle_key_down(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.press(key);
                true
            }
            None => false,
        }
    }

    /// Handle key up event. Returns false for keys a paddle ignores.
    pub fn handle_key_up(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.release(key);
                true
            }
            None => false,
        }
    }

    fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
        }
    }
}

impl KeyboardInput for KeyState {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }
}

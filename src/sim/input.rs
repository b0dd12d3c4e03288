//! Keyboard bindings and held-action state

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    /// Pause toggle
    Pause,
    /// Restart after game over
    Restart,
    /// Quit after game over
    Quit,
}

impl Key {
    /// Map a `KeyboardEvent.code` to a logical key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Space" | "ArrowUp" => Some(Key::Jump),
            "Escape" => Some(Key::Pause),
            "KeyR" => Some(Key::Restart),
            "KeyQ" => Some(Key::Quit),
            _ => None,
        }
    }
}

/// Which movement actions are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    /// Record a press or release. Returns false for keys that are not
    /// movement actions so the caller can route them elsewhere.
    pub fn set(&mut self, key: Key, held: bool) -> bool {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Jump => self.jump = held,
            Key::Pause | Key::Restart | Key::Quit => return false,
        }
        true
    }

    /// Horizontal direction: -1, 0 or 1. Left wins when both are held.
    pub fn horizontal(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }
}

use crate::types::KeyCode;
use std::fmt;

/// A key went down, or is auto-repeating while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressedEvent {
    key_code: KeyCode,
    repeat_count: u16,
}

impl KeyPressedEvent {
    pub fn new(key_code: KeyCode, repeat_count: u16) -> Self {
        Self {
            key_code,
            repeat_count,
        }
    }

    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }

    /// Number of auto-repeats so far; zero for the initial press.
    pub fn repeat_count(&self) -> u16 {
        self.repeat_count
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat_count > 0
    }
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyPressedEvent: {} ({} repeats)",
            self.key_code, self.repeat_count
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReleasedEvent {
    key_code: KeyCode,
}

impl KeyReleasedEvent {
    pub fn new(key_code: KeyCode) -> Self {
        Self { key_code }
    }

    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyReleasedEvent: {}", self.key_code)
    }
}

/// A character was produced by the keyboard (text input, after layout and modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTypedEvent {
    key_code: KeyCode,
}

impl KeyTypedEvent {
    pub fn new(key_code: KeyCode) -> Self {
        Self { key_code }
    }

    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }
}

impl fmt::Display for KeyTypedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyTypedEvent: {}", self.key_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_pressed() {
        let first = KeyPressedEvent::new(65, 0);
        assert!(!first.is_repeat());
        assert_eq!(first.to_string(), "KeyPressedEvent: 65 (0 repeats)");

        let held = KeyPressedEvent::new(65, 3);
        assert!(held.is_repeat());
        assert_eq!(held.repeat_count(), 3);
    }

    #[test]
    fn test_key_released_and_typed() {
        assert_eq!(KeyReleasedEvent::new(256).to_string(), "KeyReleasedEvent: 256");
        assert_eq!(KeyTypedEvent::new(97).key_code(), 97);
        assert_eq!(KeyTypedEvent::new(97).to_string(), "KeyTypedEvent: 97");
    }
}

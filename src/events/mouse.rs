use crate::types::MouseCode;
use std::fmt;

/// The cursor moved; coordinates are relative to the window's client area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMovedEvent {
    x: f32,
    y: f32,
}

impl MouseMovedEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseMovedEvent: {}, {}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseScrolledEvent {
    x_offset: f32,
    y_offset: f32,
}

impl MouseScrolledEvent {
    pub fn new(x_offset: f32, y_offset: f32) -> Self {
        Self { x_offset, y_offset }
    }

    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseScrolledEvent: {}, {}", self.x_offset, self.y_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonPressedEvent {
    button: MouseCode,
}

impl MouseButtonPressedEvent {
    pub fn new(button: MouseCode) -> Self {
        Self { button }
    }

    pub fn button(&self) -> MouseCode {
        self.button
    }
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonPressedEvent: {}", self.button)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonReleasedEvent {
    button: MouseCode,
}

impl MouseButtonReleasedEvent {
    pub fn new(button: MouseCode) -> Self {
        Self { button }
    }

    pub fn button(&self) -> MouseCode {
        self.button
    }
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonReleasedEvent: {}", self.button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_display() {
        assert_eq!(
            MouseMovedEvent::new(12.5, 40.0).to_string(),
            "MouseMovedEvent: 12.5, 40"
        );
        assert_eq!(
            MouseScrolledEvent::new(0.0, -1.5).to_string(),
            "MouseScrolledEvent: 0, -1.5"
        );
        assert_eq!(
            MouseButtonPressedEvent::new(1).to_string(),
            "MouseButtonPressedEvent: 1"
        );
        assert_eq!(
            MouseButtonReleasedEvent::new(2).to_string(),
            "MouseButtonReleasedEvent: 2"
        );
    }
}

use super::display_as_name;
use std::fmt;

/// The user or the platform asked the window to close.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowCloseEvent;

/// The window's client area changed size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResizeEvent {
    width: u32,
    height: u32,
}

impl WindowResizeEvent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// A zero-sized client area, which platforms report when the window is minimized.
    pub fn is_minimized(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowResizeEvent: {}, {}", self.width, self.height)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowFocusEvent;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowLostFocusEvent;

/// The window was moved; coordinates are its new top-left corner in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMovedEvent {
    x: i32,
    y: i32,
}

impl WindowMovedEvent {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl fmt::Display for WindowMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowMovedEvent: {}, {}", self.x, self.y)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppTickEvent;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppUpdateEvent;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppRenderEvent;

display_as_name!(
    WindowCloseEvent,
    WindowFocusEvent,
    WindowLostFocusEvent,
    AppTickEvent,
    AppUpdateEvent,
    AppRenderEvent,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloadless_display() {
        assert_eq!(WindowCloseEvent.to_string(), "WindowClose");
        assert_eq!(WindowFocusEvent.to_string(), "WindowFocus");
        assert_eq!(WindowLostFocusEvent.to_string(), "WindowLostFocus");
        assert_eq!(AppTickEvent.to_string(), "AppTick");
        assert_eq!(AppUpdateEvent.to_string(), "AppUpdate");
        assert_eq!(AppRenderEvent.to_string(), "AppRender");
    }

    #[test]
    fn test_window_resize() {
        let resize = WindowResizeEvent::new(1280, 720);
        assert_eq!((resize.width(), resize.height()), (1280, 720));
        assert!(!resize.is_minimized());
        assert!(WindowResizeEvent::new(0, 720).is_minimized());
        assert_eq!(resize.to_string(), "WindowResizeEvent: 1280, 720");
    }

    #[test]
    fn test_window_moved() {
        let moved = WindowMovedEvent::new(-8, 30);
        assert_eq!((moved.x(), moved.y()), (-8, 30));
        assert_eq!(moved.to_string(), "WindowMovedEvent: -8, 30");
    }
}

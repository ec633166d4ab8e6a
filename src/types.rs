/*
    ABSTRACT: Type tags and category flags shared by every event (see event.rs)
    and by the dispatcher (see dispatch.rs) which matches on them.
*/
use std::fmt;

/// Platform key code, as reported by the windowing layer.
pub type KeyCode = u16;

/// Platform mouse button code, as reported by the windowing layer.
pub type MouseCode = u16;

/// Runtime identity of a concrete event variant.
///
/// There is exactly one value per concrete event struct (see `EventVariant::STATIC_TYPE`).
/// It is only ever compared for identity; membership questions go through `EventCategory`.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventType {
    WindowClose,
    WindowResize,
    WindowFocus,
    WindowLostFocus,
    WindowMoved,
    AppTick,
    AppUpdate,
    AppRender,
    KeyPressed,
    KeyReleased,
    KeyTyped,
    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
    MouseScrolled,
}

impl EventType {
    /// Every event type, in declaration order.
    pub const ALL: [EventType; 15] = [
        EventType::WindowClose,
        EventType::WindowResize,
        EventType::WindowFocus,
        EventType::WindowLostFocus,
        EventType::WindowMoved,
        EventType::AppTick,
        EventType::AppUpdate,
        EventType::AppRender,
        EventType::KeyPressed,
        EventType::KeyReleased,
        EventType::KeyTyped,
        EventType::MouseButtonPressed,
        EventType::MouseButtonReleased,
        EventType::MouseMoved,
        EventType::MouseScrolled,
    ];

    /// The symbolic name of this event type, e.g. `"WindowClose"`.
    pub const fn name(self) -> &'static str {
        match self {
            EventType::WindowClose => "WindowClose",
            EventType::WindowResize => "WindowResize",
            EventType::WindowFocus => "WindowFocus",
            EventType::WindowLostFocus => "WindowLostFocus",
            EventType::WindowMoved => "WindowMoved",
            EventType::AppTick => "AppTick",
            EventType::AppUpdate => "AppUpdate",
            EventType::AppRender => "AppRender",
            EventType::KeyPressed => "KeyPressed",
            EventType::KeyReleased => "KeyReleased",
            EventType::KeyTyped => "KeyTyped",
            EventType::MouseButtonPressed => "MouseButtonPressed",
            EventType::MouseButtonReleased => "MouseButtonReleased",
            EventType::MouseMoved => "MouseMoved",
            EventType::MouseScrolled => "MouseScrolled",
        }
    }

    /// The fixed set of categories events of this type belong to.
    pub const fn category_flags(self) -> EventCategory {
        match self {
            EventType::WindowClose
            | EventType::WindowResize
            | EventType::WindowFocus
            | EventType::WindowLostFocus
            | EventType::WindowMoved
            | EventType::AppTick
            | EventType::AppUpdate
            | EventType::AppRender => EventCategory::APPLICATION,
            EventType::KeyPressed | EventType::KeyReleased | EventType::KeyTyped => {
                EventCategory::KEYBOARD.union(EventCategory::INPUT)
            }
            EventType::MouseMoved | EventType::MouseScrolled => {
                EventCategory::MOUSE.union(EventCategory::INPUT)
            }
            EventType::MouseButtonPressed | EventType::MouseButtonReleased => EventCategory::MOUSE
                .union(EventCategory::INPUT)
                .union(EventCategory::MOUSE_BUTTON),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Cross-cutting groups an event can belong to.
    ///
    /// An event's flags are the union of every group its type belongs to, so membership
    /// must be tested with `intersects`/`contains`, never with equality.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EventCategory: u32 {
        const APPLICATION  = 1 << 0;
        const INPUT        = 1 << 1;
        const KEYBOARD     = 1 << 2;
        const MOUSE        = 1 << 3;
        const MOUSE_BUTTON = 1 << 4;
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_event_type_round_trip() {
        for event_type in EventType::ALL {
            let json = serde_json::to_string(&event_type).unwrap();
            assert_eq!(json, format!("\"{}\"", event_type.name()));
            assert_eq!(serde_json::from_str::<EventType>(&json).unwrap(), event_type);
        }
    }

    #[test]
    fn test_category_round_trip() {
        for event_type in EventType::ALL {
            let flags = event_type.category_flags();
            let json = serde_json::to_string(&flags).unwrap();
            assert_eq!(serde_json::from_str::<EventCategory>(&json).unwrap(), flags);
        }
        let empty = serde_json::to_string(&EventCategory::empty()).unwrap();
        assert!(serde_json::from_str::<EventCategory>(&empty)
            .unwrap()
            .is_empty());
    }
}

/*
    ABSTRACT: Definition of the blocking engine `Event` record, the closed set of event variants it can
    carry, and the `EventVariant` trait tying each concrete variant (see events/) to its static type tag.
*/
use crate::{
    events::*,
    types::{EventCategory, EventType},
};
use std::fmt;

/// A concrete event variant, carried inside an `Event` as one arm of `EventKind`.
///
/// Each variant has a fixed static type, and with it a fixed name and category set.
/// The instance accessors on `Event` always agree with these for the variant it carries.
///
/// ### Notes
/// - Sealed: implemented for every struct in `events` and for nothing else. New variants are added
///   to the `event_variants!` list below, which keeps `EventKind`, `EventType` and this trait in sync.
pub trait EventVariant: sealed::Sealed + fmt::Display + Sized + 'static {
    /// The runtime type tag shared by every instance of this variant.
    const STATIC_TYPE: EventType;

    fn static_type() -> EventType {
        Self::STATIC_TYPE
    }

    fn static_name() -> &'static str {
        Self::STATIC_TYPE.name()
    }

    fn static_category_flags() -> EventCategory {
        Self::STATIC_TYPE.category_flags()
    }

    /// Returns the payload if `kind` carries this variant.
    fn from_kind(kind: &EventKind) -> Option<&Self>;

    /// Returns the payload mutably if `kind` carries this variant.
    fn from_kind_mut(kind: &mut EventKind) -> Option<&mut Self>;

    fn into_kind(self) -> EventKind;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! event_variants {
    ($($variant:ident($payload:ty)),+ $(,)?) => {
        /// The closed set of events an `Event` can carry, one arm per `EventType`.
        ///
        /// Match on this (via `Event::kind`) when every variant needs handling; the compiler then
        /// checks exhaustiveness, which a chain of `EventDispatcher::dispatch` calls cannot.
        #[derive(Debug, Clone, PartialEq)]
        pub enum EventKind {
            $($variant($payload),)+
        }

        impl EventKind {
            pub fn event_type(&self) -> EventType {
                match self {
                    $(EventKind::$variant(_) => EventType::$variant,)+
                }
            }
        }

        impl fmt::Display for EventKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(EventKind::$variant(payload) => fmt::Display::fmt(payload, f),)+
                }
            }
        }

        $(
            impl sealed::Sealed for $payload {}

            impl EventVariant for $payload {
                const STATIC_TYPE: EventType = EventType::$variant;

                fn from_kind(kind: &EventKind) -> Option<&Self> {
                    match kind {
                        EventKind::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }

                fn from_kind_mut(kind: &mut EventKind) -> Option<&mut Self> {
                    match kind {
                        EventKind::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }

                fn into_kind(self) -> EventKind {
                    EventKind::$variant(self)
                }
            }

            impl From<$payload> for Event {
                fn from(payload: $payload) -> Self {
                    Event::new(payload)
                }
            }
        )+
    };
}

event_variants! {
    WindowClose(WindowCloseEvent),
    WindowResize(WindowResizeEvent),
    WindowFocus(WindowFocusEvent),
    WindowLostFocus(WindowLostFocusEvent),
    WindowMoved(WindowMovedEvent),
    AppTick(AppTickEvent),
    AppUpdate(AppUpdateEvent),
    AppRender(AppRenderEvent),
    KeyPressed(KeyPressedEvent),
    KeyReleased(KeyReleasedEvent),
    KeyTyped(KeyTypedEvent),
    MouseButtonPressed(MouseButtonPressedEvent),
    MouseButtonReleased(MouseButtonReleasedEvent),
    MouseMoved(MouseMovedEvent),
    MouseScrolled(MouseScrolledEvent),
}

/// Something that happened, raised by a producer (the windowing or input layer) and delivered
/// synchronously through an `EventDispatcher` before being dropped.
///
/// The variant, and therefore the type, name and categories, is fixed at construction.
/// Only `handled` changes afterwards.
///
/// ### Example
///
/// ```rust
/// use hzevent::{Event, EventCategory, EventType, KeyPressedEvent};
///
/// let event = Event::new(KeyPressedEvent::new(65, 0));
/// assert_eq!(event.event_type(), EventType::KeyPressed);
/// assert!(event.is_in_category(EventCategory::INPUT));
/// assert!(!event.handled);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: EventKind,
    /// Set once some handler has consumed this event. Dispatch only ever sets it, never clears it.
    pub handled: bool,
}

impl Event {
    pub fn new<T: EventVariant>(payload: T) -> Self {
        Self {
            kind: payload.into_kind(),
            handled: false,
        }
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    pub fn name(&self) -> &'static str {
        self.event_type().name()
    }

    pub fn category_flags(&self) -> EventCategory {
        self.event_type().category_flags()
    }

    /// `true` if this event belongs to any of the groups in `category`.
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.category_flags().intersects(category)
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// The carried variant, for exhaustive matching. There is no mutable counterpart: swapping
    /// the variant would change the event's type after construction.
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Checked downcast to a concrete variant.
    pub fn downcast_ref<T: EventVariant>(&self) -> Option<&T> {
        T::from_kind(&self.kind)
    }

    /// Checked mutable downcast to a concrete variant.
    pub fn downcast_mut<T: EventVariant>(&mut self) -> Option<&mut T> {
        T::from_kind_mut(&mut self.kind)
    }

    pub fn is<T: EventVariant>(&self) -> bool {
        self.event_type() == T::STATIC_TYPE
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_of_each() -> Vec<Event> {
        vec![
            WindowCloseEvent.into(),
            WindowResizeEvent::new(1280, 720).into(),
            WindowFocusEvent.into(),
            WindowLostFocusEvent.into(),
            WindowMovedEvent::new(10, -20).into(),
            AppTickEvent.into(),
            AppUpdateEvent.into(),
            AppRenderEvent.into(),
            KeyPressedEvent::new(32, 1).into(),
            KeyReleasedEvent::new(32).into(),
            KeyTypedEvent::new(97).into(),
            MouseButtonPressedEvent::new(0).into(),
            MouseButtonReleasedEvent::new(1).into(),
            MouseMovedEvent::new(3.5, 4.0).into(),
            MouseScrolledEvent::new(0.0, -1.0).into(),
        ]
    }

    fn static_type_of(event: &Event) -> EventType {
        match event.kind() {
            EventKind::WindowClose(_) => WindowCloseEvent::static_type(),
            EventKind::WindowResize(_) => WindowResizeEvent::static_type(),
            EventKind::WindowFocus(_) => WindowFocusEvent::static_type(),
            EventKind::WindowLostFocus(_) => WindowLostFocusEvent::static_type(),
            EventKind::WindowMoved(_) => WindowMovedEvent::static_type(),
            EventKind::AppTick(_) => AppTickEvent::static_type(),
            EventKind::AppUpdate(_) => AppUpdateEvent::static_type(),
            EventKind::AppRender(_) => AppRenderEvent::static_type(),
            EventKind::KeyPressed(_) => KeyPressedEvent::static_type(),
            EventKind::KeyReleased(_) => KeyReleasedEvent::static_type(),
            EventKind::KeyTyped(_) => KeyTypedEvent::static_type(),
            EventKind::MouseButtonPressed(_) => MouseButtonPressedEvent::static_type(),
            EventKind::MouseButtonReleased(_) => MouseButtonReleasedEvent::static_type(),
            EventKind::MouseMoved(_) => MouseMovedEvent::static_type(),
            EventKind::MouseScrolled(_) => MouseScrolledEvent::static_type(),
        }
    }

    #[test]
    fn test_instance_type_matches_static_type() {
        let events = one_of_each();
        assert_eq!(events.len(), EventType::ALL.len());
        for (event, expected) in events.iter().zip(EventType::ALL) {
            assert_eq!(event.event_type(), expected);
            assert_eq!(event.event_type(), static_type_of(event));
            assert_eq!(event.name(), expected.name());
            assert_eq!(event.category_flags(), expected.category_flags());
        }
    }

    #[test]
    fn test_is_in_category_is_bitwise_and() {
        let categories = [
            EventCategory::empty(),
            EventCategory::APPLICATION,
            EventCategory::INPUT,
            EventCategory::KEYBOARD,
            EventCategory::MOUSE,
            EventCategory::MOUSE_BUTTON,
            EventCategory::KEYBOARD | EventCategory::MOUSE,
            EventCategory::all(),
        ];
        for event in one_of_each() {
            for category in categories {
                assert_eq!(
                    event.is_in_category(category),
                    (event.category_flags().bits() & category.bits()) != 0,
                    "{} / {:?}",
                    event,
                    category
                );
            }
        }
    }

    #[test]
    fn test_new_event_is_not_handled() {
        for event in one_of_each() {
            assert!(!event.is_handled());
        }
    }

    #[test]
    fn test_default_display_is_name() {
        let event = Event::new(WindowCloseEvent);
        assert_eq!(event.name(), "WindowClose");
        assert_eq!(event.to_string(), "WindowClose");
        assert_eq!(Event::new(AppTickEvent).to_string(), "AppTick");
    }

    #[test]
    fn test_display_includes_payload() {
        let event = Event::new(MouseMovedEvent::new(3.5, 4.0));
        assert_eq!(event.to_string(), "MouseMovedEvent: 3.5, 4");
        assert_eq!(event.name(), "MouseMoved");
    }

    #[test]
    fn test_downcast() {
        let mut event = Event::new(KeyTypedEvent::new(97));
        assert!(event.is::<KeyTypedEvent>());
        assert!(!event.is::<KeyPressedEvent>());
        assert_eq!(event.downcast_ref::<KeyTypedEvent>().map(|e| e.key_code()), Some(97));
        assert!(event.downcast_ref::<KeyReleasedEvent>().is_none());
        assert!(event.downcast_mut::<MouseMovedEvent>().is_none());
        assert!(event.downcast_mut::<KeyTypedEvent>().is_some());
    }
}

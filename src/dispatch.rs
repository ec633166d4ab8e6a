/*
    ABSTRACT: Definition of the stack-scoped `EventDispatcher`, which routes one borrowed `Event`
    (see event.rs) to whichever caller-supplied handler is declared for its concrete variant.
*/
use crate::{
    event::{Event, EventVariant},
    log::CORE_TARGET,
};

/// Routes a single event to type-matched handlers, at the point where the event is raised.
///
/// Each `dispatch` call is an independent check: it runs the handler only if the bound event is of
/// the handler's variant, and folds the handler's result into `Event::handled`. Calls are never
/// short-circuited, so a handler that must not act on an already handled event checks
/// `is_handled` itself, or the caller checks it between dispatches.
///
/// ### Example
///
/// ```rust
/// use hzevent::{Event, EventDispatcher, KeyPressedEvent, WindowCloseEvent, WindowResizeEvent};
///
/// let mut event = Event::new(WindowResizeEvent::new(800, 600));
/// let mut dispatcher = EventDispatcher::new(&mut event);
///
/// let closed = dispatcher.dispatch(|_: &mut WindowCloseEvent| true);
/// let resized = dispatcher.dispatch(|e: &mut WindowResizeEvent| e.is_minimized());
/// let pressed = dispatcher.dispatch(|_: &mut KeyPressedEvent| true);
///
/// assert_eq!((closed, resized, pressed), (false, true, false));
/// assert!(!event.handled);
/// ```
#[derive(Debug)]
pub struct EventDispatcher<'a> {
    event: &'a mut Event,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(event: &'a mut Event) -> Self {
        Self { event }
    }

    /// Invokes `handler` if the bound event is a `T`.
    ///
    /// ### Notes
    /// - On a type mismatch the handler is not called and the event is left untouched.
    /// - On a match, `handled` becomes `handled || handler(..)`. It is never cleared here.
    ///
    /// ### Returns
    /// - `bool`: `true` if the types matched and the handler ran, whatever the handler returned.
    pub fn dispatch<T, F>(&mut self, handler: F) -> bool
    where
        T: EventVariant,
        F: FnOnce(&mut T) -> bool,
    {
        if self.event.event_type() != T::STATIC_TYPE {
            return false;
        }
        let Some(payload) = self.event.downcast_mut::<T>() else {
            // Unreachable while every variant's tag agrees with its `EventKind` arm.
            tracing::error!(
                target: CORE_TARGET,
                event_type = %T::STATIC_TYPE,
                "event tag matched but payload did not, skipping handler"
            );
            return false;
        };

        let handled = handler(payload);
        self.event.handled |= handled;
        tracing::trace!(
            target: CORE_TARGET,
            event = %self.event,
            handled,
            now_handled = self.event.handled,
            "dispatched"
        );
        true
    }

    pub fn event(&self) -> &Event {
        self.event
    }

    pub fn is_handled(&self) -> bool {
        self.event.handled
    }
}

//! # hzevent
//!
//! Blocking event dispatch for an application/engine core.
//!
//! Events are raised by a producer (the windowing or input layer), routed synchronously to
//! whichever handlers are declared for their concrete variant, and dropped. There is no queue,
//! no priority and no cross-thread delivery: whoever raises an event delivers it, right there.
//!
//! ## Quick Start
//!
//! ```rust
//! use hzevent::*;
//!
//! struct Game {
//!     running: bool,
//! }
//!
//! impl Game {
//!     fn on_event(&mut self, event: &mut Event) {
//!         let mut dispatcher = EventDispatcher::new(event);
//!         dispatcher.dispatch(|_: &mut WindowCloseEvent| {
//!             self.running = false;
//!             true
//!         });
//!         dispatcher.dispatch(|e: &mut KeyPressedEvent| e.key_code() == 256);
//!     }
//! }
//!
//! let mut game = Game { running: true };
//! let mut event = Event::new(WindowCloseEvent);
//! game.on_event(&mut event);
//!
//! assert!(!game.running);
//! assert!(event.handled);
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Event`] | An occurrence: one variant, its type tag and categories, and a `handled` flag |
//! | [`EventKind`] | The closed set of variants, for exhaustive matching |
//! | [`EventVariant`] | Ties a concrete event struct to its static [`EventType`] |
//! | [`EventType`] | Runtime identity of a variant |
//! | [`EventCategory`] | Bit flags for cross-cutting groups (input, keyboard, mouse, ...) |
//! | [`EventDispatcher`] | Routes one event to type-matched handlers |
//! | [`Log`] | Logging facility, initialized before the first event and dropped after the last |
//!
//! ## Categories
//!
//! An event belongs to every group its type is in, so test membership rather than equality:
//!
//! ```rust
//! use hzevent::{Event, EventCategory, MouseButtonPressedEvent};
//!
//! let event = Event::new(MouseButtonPressedEvent::new(0));
//! assert!(event.is_in_category(EventCategory::INPUT));
//! assert!(event.is_in_category(EventCategory::MOUSE_BUTTON));
//! assert!(!event.is_in_category(EventCategory::KEYBOARD));
//! ```

mod dispatch;
mod error;
mod event;
mod events;
pub mod log;
mod types;

pub use dispatch::EventDispatcher;
pub use error::Error;
pub use event::{Event, EventKind, EventVariant};
pub use events::*;
pub use log::{Log, LogConfig};
pub use types::{EventCategory, EventType, KeyCode, MouseCode};

#[doc(hidden)]
pub use tracing as __tracing;

/// Convenience alias for `Result<T, hzevent::Error>`.
pub type Result<T = ()> = std::result::Result<T, Error>;

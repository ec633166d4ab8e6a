/*
    ABSTRACT: Concrete event variants raised by the windowing layer (see application.rs) and
    the input layer (see key.rs, mouse.rs). Each one is tagged through `EventVariant` (see event.rs).
*/

/// Renders payload-less events as their bare name.
macro_rules! display_as_name {
    ($($payload:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $payload {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(<$payload as crate::event::EventVariant>::static_name())
                }
            }
        )+
    };
}

pub(crate) use display_as_name;

mod application;
mod key;
mod mouse;

pub use application::*;
pub use key::*;
pub use mouse::*;

// Domain value objects
pub mod event_action;
pub mod event_kind;
pub mod identifiers;

pub use event_action::*;
pub use event_kind::*;
pub use identifiers::*;

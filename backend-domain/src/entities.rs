// Domain entities

pub mod config;
pub mod event;
pub mod payload;

pub use config::*;
pub use event::*;
pub use payload::*;

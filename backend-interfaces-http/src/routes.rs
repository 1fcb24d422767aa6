pub mod public;

pub use public::build_router;

pub mod ops_handlers;
pub mod query_handlers;
pub mod webhook_handlers;

pub use ops_handlers::*;
pub use query_handlers::*;
pub use webhook_handlers::*;

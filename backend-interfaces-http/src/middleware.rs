pub mod webhook_headers;

pub use webhook_headers::*;

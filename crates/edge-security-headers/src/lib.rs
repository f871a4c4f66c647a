#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod config;
pub mod event;
pub mod handler;
pub mod headers;

pub use handler::{handle, InjectorError};
pub use headers::{build_security_headers, SecurityHeaderSet};

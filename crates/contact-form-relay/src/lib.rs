#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod completion;
pub mod config;
pub mod email;
pub mod form;
pub mod relay;

pub use relay::{ContactFormRelay, ProxyRequest, ProxyResponse, RelayError};

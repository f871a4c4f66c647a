//! Outbound email delivery.
//!
//! The relay talks to SES through the [`EmailSender`] trait so the handler can
//! be exercised without network access:
//!
//! - [`EmailSender`] - Trait defining the single send operation
//! - [`SesEmailSender`] - Real implementation using `aws-sdk-ses`
//! - [`mock::MockEmailSender`] - Mock for unit tests (behind `test-utils` feature)

pub mod client;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
pub use client::{EmailError, EmailSender, SentEmail, SesEmailSender};
pub use types::{Body, Content, Destination, EmailPayload, Message};

//! Email sending client.
//!
//! # Example
//!
//! ```ignore
//! use contact_form_relay::email::{EmailSender, SesEmailSender};
//!
//! let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let sender = SesEmailSender::new(aws_sdk_ses::Client::new(&sdk_config));
//! let sent = sender.send_email(&payload).await?;
//! tracing::info!(message_id = %sent.message_id, "delivered");
//! ```

use async_trait::async_trait;
use aws_sdk_ses::error::{BuildError, DisplayErrorContext};
use aws_sdk_ses::types as ses;
use thiserror::Error;

use super::types::EmailPayload;

/// Errors that can occur while handing a message to the email service.
#[derive(Debug, Error)]
pub enum EmailError {
    /// The SDK request could not be assembled
    #[error("invalid SES request: {0}")]
    Build(#[from] BuildError),

    /// The service call failed or was rejected
    #[error("SES send failed: {0}")]
    Ses(String),

    /// The send task ended without producing a result
    #[error("email delivery interrupted: {0}")]
    Interrupted(String),
}

/// Acknowledgement returned by the email service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub message_id: String,
}

/// Trait for outbound email delivery.
///
/// Use `SesEmailSender` for real calls, or `mock::MockEmailSender` in tests.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one message.
    async fn send_email(&self, payload: &EmailPayload) -> Result<SentEmail, EmailError>;
}

/// Amazon SES implementation of `EmailSender`.
pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
}

impl SesEmailSender {
    #[must_use]
    pub const fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

fn content(value: &super::types::Content) -> Result<ses::Content, EmailError> {
    Ok(ses::Content::builder()
        .data(&value.data)
        .charset(&value.charset)
        .build()?)
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send_email(&self, payload: &EmailPayload) -> Result<SentEmail, EmailError> {
        let message = ses::Message::builder()
            .subject(content(&payload.message.subject)?)
            .body(
                ses::Body::builder()
                    .text(content(&payload.message.body.text)?)
                    .build(),
            )
            .build();

        let destination = ses::Destination::builder()
            .set_to_addresses(Some(payload.destination.to_addresses.clone()))
            .build();

        let output = self
            .client
            .send_email()
            .source(&payload.source)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(|err| EmailError::Ses(DisplayErrorContext(&err).to_string()))?;

        Ok(SentEmail {
            message_id: output.message_id().to_string(),
        })
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{EmailError, EmailPayload, EmailSender, SentEmail};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of `EmailSender` for unit tests.
    ///
    /// Configure the next result with `set_result` and inspect captured
    /// payloads with `calls()`. Without a configured result every send
    /// succeeds with message id `mock-message-id`.
    pub struct MockEmailSender {
        result: Mutex<Option<Result<SentEmail, EmailError>>>,
        calls: Mutex<Vec<EmailPayload>>,
    }

    impl MockEmailSender {
        pub fn new() -> Self {
            Self {
                result: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Mock that fails every send with an SES error carrying `message`.
        pub fn failing(message: &str) -> Self {
            let mock = Self::new();
            mock.set_result(Err(EmailError::Ses(message.to_string())));
            mock
        }

        /// Set the result for the next `send_email` call.
        pub fn set_result(&self, result: Result<SentEmail, EmailError>) {
            *self.result.lock().unwrap() = Some(result);
        }

        /// Get all payloads passed to `send_email`.
        pub fn calls(&self) -> Vec<EmailPayload> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockEmailSender {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl EmailSender for MockEmailSender {
        async fn send_email(&self, payload: &EmailPayload) -> Result<SentEmail, EmailError> {
            self.calls.lock().unwrap().push(payload.clone());

            self.result.lock().unwrap().take().unwrap_or_else(|| {
                Ok(SentEmail {
                    message_id: "mock-message-id".to_string(),
                })
            })
        }
    }
}

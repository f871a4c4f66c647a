//! Delivery outcome reporting.
//!
//! The caller's response never depends on whether the email went out. The
//! outcome of the send travels through a [`CompletionSink`] instead, which in
//! production writes it to the function log.

use crate::email::{EmailError, SentEmail};

/// What happened to the one email an invocation tried to send.
#[derive(Debug)]
pub enum DeliveryOutcome {
    Delivered(SentEmail),
    Failed(EmailError),
}

impl DeliveryOutcome {
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

impl From<Result<SentEmail, EmailError>> for DeliveryOutcome {
    fn from(result: Result<SentEmail, EmailError>) -> Self {
        match result {
            Ok(sent) => Self::Delivered(sent),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Receiver for delivery outcomes.
pub trait CompletionSink: Send + Sync {
    fn report(&self, outcome: &DeliveryOutcome);
}

/// Reports outcomes as structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCompletionSink;

impl CompletionSink for TracingCompletionSink {
    fn report(&self, outcome: &DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered(sent) => {
                tracing::info!(message_id = %sent.message_id, "contact form email delivered");
            }
            DeliveryOutcome::Failed(err) => {
                tracing::error!(error = %err, "contact form email delivery failed");
            }
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(clippy::unwrap_used, clippy::must_use_candidate)]
pub mod mock {
    //! Recording sink for tests.

    use super::{CompletionSink, DeliveryOutcome};
    use std::sync::Mutex;

    /// Captures each reported outcome as `Ok(message_id)` or `Err(error text)`.
    #[derive(Default)]
    pub struct RecordingCompletionSink {
        reports: Mutex<Vec<Result<String, String>>>,
    }

    impl RecordingCompletionSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reports(&self) -> Vec<Result<String, String>> {
            self.reports.lock().unwrap().clone()
        }
    }

    impl CompletionSink for RecordingCompletionSink {
        fn report(&self, outcome: &DeliveryOutcome) {
            let entry = match outcome {
                DeliveryOutcome::Delivered(sent) => Ok(sent.message_id.clone()),
                DeliveryOutcome::Failed(err) => Err(err.to_string()),
            };
            self.reports.lock().unwrap().push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        let delivered = DeliveryOutcome::from(Ok(SentEmail {
            message_id: "abc".into(),
        }));
        assert!(delivered.is_delivered());

        let failed = DeliveryOutcome::from(Err(EmailError::Ses("throttled".into())));
        assert!(!failed.is_delivered());
    }

    #[test]
    fn test_recording_sink_captures_error_text() {
        let sink = mock::RecordingCompletionSink::new();
        sink.report(&DeliveryOutcome::Failed(EmailError::Ses(
            "MessageRejected".into(),
        )));

        assert_eq!(
            sink.reports(),
            vec![Err("SES send failed: MessageRejected".to_string())]
        );
    }
}

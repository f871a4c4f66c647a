//! The contact form handler.
//!
//! An invocation yields two independent results: the HTTP response for the
//! browser, which is always the same success body, and a [`Delivery`] for the
//! email send, whose outcome goes to a [`CompletionSink`].

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::completion::{CompletionSink, DeliveryOutcome};
use crate::config::EmailConfig;
use crate::email::{EmailError, EmailPayload, EmailSender, SentEmail};
use crate::form::FormSubmission;

/// Body returned to the browser for every accepted submission.
pub const SUCCESS_BODY: &str = r#"{"result": "Success."}"#;

/// Errors that fail the invocation outright.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("request has no body")]
    MissingBody,

    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// API Gateway proxy request. Only the body is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl ProxyRequest {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            rest: serde_json::Map::new(),
        }
    }
}

/// API Gateway proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub is_base64_encoded: bool,
    pub headers: BTreeMap<String, String>,
    pub status_code: u16,
    pub body: String,
}

impl ProxyResponse {
    /// The fixed 200 response, readable from any origin.
    #[must_use]
    pub fn success() -> Self {
        let headers = BTreeMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ]);

        Self {
            is_base64_encoded: false,
            headers,
            status_code: 200,
            body: SUCCESS_BODY.to_string(),
        }
    }
}

/// The in-flight email send of one invocation.
pub struct Delivery {
    task: JoinHandle<Result<SentEmail, EmailError>>,
}

impl Delivery {
    /// Wait for the send to finish.
    pub async fn outcome(self) -> DeliveryOutcome {
        match self.task.await {
            Ok(result) => result.into(),
            Err(join_err) => DeliveryOutcome::Failed(EmailError::Interrupted(join_err.to_string())),
        }
    }

    /// Wait for the send to finish and hand the outcome to `sink`.
    pub async fn report(self, sink: &dyn CompletionSink) -> DeliveryOutcome {
        let outcome = self.outcome().await;
        sink.report(&outcome);
        outcome
    }
}

/// Result of accepting a submission.
pub struct Invocation {
    pub response: ProxyResponse,
    pub delivery: Delivery,
}

/// Relays contact form submissions to a single inbox.
pub struct ContactFormRelay {
    email: EmailConfig,
    sender: Arc<dyn EmailSender>,
}

impl ContactFormRelay {
    pub fn new(email: EmailConfig, sender: Arc<dyn EmailSender>) -> Self {
        Self { email, sender }
    }

    /// Parse the submission, start the email send and build the response.
    ///
    /// The send runs on a spawned task, so this must be called from within a
    /// Tokio runtime. The returned response is the same whatever the send's
    /// outcome.
    ///
    /// # Errors
    /// Returns [`RelayError`] when the body is absent, is not valid JSON, or
    /// is `null`. No email is sent in that case.
    pub fn handle(&self, request: &ProxyRequest) -> Result<Invocation, RelayError> {
        tracing::info!(event = ?request, "received contact form event");

        let body = request.body.as_deref().ok_or(RelayError::MissingBody)?;
        let form = FormSubmission::parse(body)?;
        let payload = EmailPayload::compose(&self.email, &form);

        let sender = Arc::clone(&self.sender);
        let task = tokio::spawn(async move { sender.send_email(&payload).await });

        Ok(Invocation {
            response: ProxyResponse::success(),
            delivery: Delivery { task },
        })
    }

    /// Handle a request end to end.
    ///
    /// Waits for the send so the platform does not suspend the process
    /// mid-call, reports its outcome to `sink`, then returns the response that
    /// was built before the send completed.
    ///
    /// # Errors
    /// Returns [`RelayError`] for malformed requests, never for send failures.
    pub async fn invoke(
        &self,
        request: &ProxyRequest,
        sink: &dyn CompletionSink,
    ) -> Result<ProxyResponse, RelayError> {
        let Invocation { response, delivery } = self.handle(request)?;
        delivery.report(sink).await;
        Ok(response)
    }
}

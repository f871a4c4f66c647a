//! Email payload types, shaped like the SES `SendEmail` request.

use serde::{Deserialize, Serialize};

use crate::config::EmailConfig;
use crate::form::FormSubmission;

const SUBJECT_PREFIX: &str = "Contact Form: ";

/// Everything needed for one `SendEmail` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailPayload {
    pub source: String,
    pub destination: Destination,
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    pub to_addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    pub subject: Content,
    pub body: Body,
}

/// Plain-text body only; the form never produces HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Body {
    pub text: Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content {
    pub data: String,
    pub charset: String,
}

impl EmailPayload {
    /// Build the notification for a submission.
    ///
    /// Deterministic: the same config and form always yield the same payload.
    #[must_use]
    pub fn compose(config: &EmailConfig, form: &FormSubmission) -> Self {
        let name = form.name.render();
        let text = format!(
            "name: {name}\nemail: {}\nmessage: {}",
            form.email.render(),
            form.message.render()
        );

        Self {
            source: config.sender.clone(),
            destination: Destination {
                to_addresses: vec![config.recipient.clone()],
            },
            message: Message {
                subject: Content {
                    data: format!("{SUBJECT_PREFIX}{name}"),
                    charset: config.charset.clone(),
                },
                body: Body {
                    text: Content {
                        data: text,
                        charset: config.charset.clone(),
                    },
                },
            },
        }
    }
}

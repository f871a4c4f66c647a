//! CloudFront Lambda@Edge event types.
//!
//! Only the parts the injector touches are typed. Every other field is kept
//! in a flattened map so the response goes back to CloudFront as it arrived.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response headers keyed by lower-case header name.
pub type EdgeHeaders = BTreeMap<String, Vec<HeaderEntry>>;

/// A single header value, with the header name in its original casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeEvent {
    #[serde(rename = "Records")]
    pub records: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub cf: CloudFrontPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontPayload {
    pub response: EdgeResponse,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The response CloudFront is about to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeResponse {
    pub headers: EdgeHeaders,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

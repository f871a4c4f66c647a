//! The origin-response handler.

use thiserror::Error;

use crate::event::{EdgeEvent, EdgeResponse};
use crate::headers::SecurityHeaderSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InjectorError {
    #[error("event contains no CloudFront record")]
    MissingResponseRecord,
}

/// Stamp the security headers onto the response carried by `event`.
///
/// Only the first record is read; CloudFront delivers exactly one.
///
/// # Errors
/// Returns [`InjectorError::MissingResponseRecord`] when the event has no
/// records.
pub fn handle(headers: &SecurityHeaderSet, event: EdgeEvent) -> Result<EdgeResponse, InjectorError> {
    let record_count = event.records.len();
    let record = event
        .records
        .into_iter()
        .next()
        .ok_or(InjectorError::MissingResponseRecord)?;

    let mut response = record.cf.response;
    headers.apply(&mut response.headers);

    tracing::debug!(
        record_count,
        header_count = response.headers.len(),
        "security headers applied"
    );
    Ok(response)
}

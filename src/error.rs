use std::time::Duration;

use thiserror::Error;

/// Failure of a single HTTP round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("response body is not valid JSON: {0}")]
    Decode(String),
    /// Non-2xx reply; `message` comes from the body when it carries one.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("form identifier must not be empty")]
    MissingFormId,
    #[error("target element with id \"{id}\" not found")]
    TargetNotFound { id: String },
    #[error("failed to fetch form schema: {0}")]
    FetchFailed(#[source] RequestError),
    #[error("invalid schema format: {reason}")]
    SchemaInvalid { reason: String },
    #[error("submission failed: {0}")]
    SubmissionFailed(#[source] RequestError),
    #[error("base address {0} cannot carry a path")]
    InvalidBaseAddress(String),
    #[error(transparent)]
    Document(#[from] anyhow::Error),
}

impl FormError {
    pub(crate) fn schema_invalid(reason: impl Into<String>) -> Self {
        FormError::SchemaInvalid {
            reason: reason.into(),
        }
    }
}

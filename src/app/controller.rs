use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    client::{Transport, with_timeout},
    error::RequestError,
    form::FieldError,
};

const DEFAULT_REJECTION: &str = "Submission failed";

/// Where the current submit attempt stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one submit attempt. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid { errors: Vec<FieldError> },
    /// The service accepted the submission and replied with this body.
    Accepted(Value),
    /// The request failed or the service refused it.
    Rejected { error: String },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Resets the phase when a submission future is dropped mid-flight.
pub(crate) struct InFlight<'a> {
    phase: &'a mut SubmitPhase,
}

impl<'a> InFlight<'a> {
    pub(crate) fn start(phase: &'a mut SubmitPhase) -> Self {
        *phase = SubmitPhase::Submitting;
        Self { phase }
    }

    pub(crate) fn finish(self, phase: SubmitPhase) {
        *self.phase = phase;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.phase == SubmitPhase::Submitting {
            *self.phase = SubmitPhase::Idle;
        }
    }
}

/// POST the serialized values and interpret the reply.
pub(crate) async fn deliver(
    transport: &dyn Transport,
    url: &Url,
    body: &Value,
    timeout: Duration,
) -> Result<Value, RequestError> {
    let reply = with_timeout(timeout, transport.post_json(url, body)).await?;
    let decoded = reply.json();
    if reply.is_success() {
        return decoded;
    }
    let message = decoded
        .ok()
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(DEFAULT_REJECTION)
        .to_string();
    Err(RequestError::Rejected {
        status: reply.status,
        message,
    })
}

use std::{future::Future, time::Duration};

use tracing::debug;

use super::transport::{HttpReply, Transport};
use crate::{
    app::FormOptions,
    domain::FormSchema,
    error::{FormError, RequestError},
    schema::schema_from_envelope,
};

/// Retrieve and shape-check the schema of `form_id`.
pub async fn fetch_schema(
    transport: &dyn Transport,
    options: &FormOptions,
    form_id: &str,
) -> Result<FormSchema, FormError> {
    if form_id.trim().is_empty() {
        return Err(FormError::MissingFormId);
    }
    let url = options.form_endpoint(form_id)?;
    debug!(%url, "fetching form schema");

    let reply = with_timeout(options.timeout, transport.get(&url))
        .await
        .map_err(FormError::FetchFailed)?;
    if !reply.is_success() {
        return Err(FormError::FetchFailed(RequestError::Status(reply.status)));
    }
    let body = reply.json().map_err(FormError::FetchFailed)?;
    schema_from_envelope(&body)
}

pub(crate) async fn with_timeout<F>(limit: Duration, request: F) -> Result<HttpReply, RequestError>
where
    F: Future<Output = Result<HttpReply, RequestError>>,
{
    tokio::time::timeout(limit, request)
        .await
        .map_err(|_| RequestError::Timeout(limit))?
}

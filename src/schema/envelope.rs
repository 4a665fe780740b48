use serde_json::Value;
use tracing::debug;

use crate::{domain::FormSchema, error::FormError};

/// Response layouts the schema endpoint is known to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `{"success": true, "data": [schema, ...]}`
    SuccessList,
    /// `{"fields": [...], ...}`
    Bare,
    /// `{"success": true, "data": {"fields": [...]}}`
    SuccessObject,
    /// `[schema, ...]`
    List,
}

/// Locate the schema object inside a decoded response body.
pub fn unwrap_envelope(body: &Value) -> Option<(EnvelopeShape, &Value)> {
    let succeeded = body.get("success").is_some_and(is_truthy);
    let data = body.get("data");

    if succeeded
        && let Some(first) = data.and_then(Value::as_array).and_then(|items| items.first())
        && has_fields(first)
    {
        return Some((EnvelopeShape::SuccessList, first));
    }
    if body.is_object() && has_fields(body) {
        return Some((EnvelopeShape::Bare, body));
    }
    if succeeded
        && let Some(inner) = data.filter(|inner| inner.is_object())
        && has_fields(inner)
    {
        return Some((EnvelopeShape::SuccessObject, inner));
    }
    if let Some(first) = body.as_array().and_then(|items| items.first())
        && has_fields(first)
    {
        return Some((EnvelopeShape::List, first));
    }
    None
}

/// Decode a schema from any accepted envelope.
pub fn schema_from_envelope(body: &Value) -> Result<FormSchema, FormError> {
    let (shape, raw) = unwrap_envelope(body)
        .ok_or_else(|| FormError::schema_invalid("no form with a non-empty field list"))?;
    debug!(?shape, "matched schema envelope");
    serde_json::from_value(raw.clone()).map_err(|err| FormError::schema_invalid(err.to_string()))
}

fn has_fields(candidate: &Value) -> bool {
    candidate
        .get("fields")
        .and_then(Value::as_array)
        .is_some_and(|fields| !fields.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

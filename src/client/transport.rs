use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::RequestError;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Result<Value, RequestError> {
        serde_json::from_str(&self.body).map_err(|err| RequestError::Decode(err.to_string()))
    }
}

/// The two requests a form makes against its service.
///
/// Implementations report only transport-level failures; status handling
/// and body decoding happen in the callers.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpReply, RequestError>;

    /// POST `body` encoded as JSON with `Content-Type: application/json`.
    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpReply, RequestError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpReply::new(200, "").is_success());
        assert!(HttpReply::new(204, "").is_success());
        assert!(!HttpReply::new(199, "").is_success());
        assert!(!HttpReply::new(302, "").is_success());
        assert!(!HttpReply::new(500, "").is_success());
    }

    #[test]
    fn undecodable_bodies_are_decode_errors() {
        let reply = HttpReply::new(200, "<html>");
        assert!(matches!(reply.json(), Err(RequestError::Decode(_))));
    }
}

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use super::transport::{HttpReply, Transport};
use crate::error::RequestError;

/// `Transport` backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpReply, RequestError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        into_reply(response).await
    }

    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpReply, RequestError> {
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        into_reply(response).await
    }
}

async fn into_reply(response: Response) -> Result<HttpReply, RequestError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;
    Ok(HttpReply { status, body })
}

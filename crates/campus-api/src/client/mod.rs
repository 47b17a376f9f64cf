use async_trait::async_trait;
use campus_logging::{safe_truncate, RequestLogger};
use campus_types::{AssistantReply, ChatRequest};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::ApiError;

pub mod catalog;
pub mod http;

pub use catalog::CatalogClient;
pub use http::HttpChatTransport;

/// Longest error body carried inside [`ApiError::Status`]
const ERROR_BODY_LIMIT: usize = 500;

/// One round trip to the chat endpoint.
///
/// Implementations report every failure as an `Err`; they never retry.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<AssistantReply, ApiError>;
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for Arc<T> {
    async fn send(&self, request: &ChatRequest) -> Result<AssistantReply, ApiError> {
        (**self).send(request).await
    }
}

/// Send a prepared request and decode a JSON body, logging both sides
pub(crate) async fn execute_json<T: DeserializeOwned>(
    builder: reqwest::RequestBuilder,
    logger: &RequestLogger,
    method: &str,
    url: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    let request_id = logger.request(method, url, body);

    let response = builder.send().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    let headers = response.headers().clone();
    let text = response.text().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    logger.response(&request_id, &status, &headers, &text);

    if !status.is_success() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status,
            body: safe_truncate(&text, ERROR_BODY_LIMIT),
        });
    }

    serde_json::from_str(&text).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

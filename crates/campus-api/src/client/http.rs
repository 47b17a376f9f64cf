use async_trait::async_trait;
use campus_logging::RequestLogger;
use campus_types::{AssistantReply, ChatRequest};

use crate::client::{execute_json, ChatTransport};
use crate::config::CHAT_PATH;
use crate::error::ApiError;

/// reqwest-backed transport for `POST {base_url}/api/chat`
#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    base_url: String,
    client: reqwest::Client,
    logger: RequestLogger,
}

impl HttpChatTransport {
    /// `base_url` is expected to be normalised already (see [`crate::normalize_base_url`])
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new(), RequestLogger::default())
    }

    pub fn with_client(
        base_url: impl Into<String>,
        client: reqwest::Client,
        logger: RequestLogger,
    ) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client,
            logger,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_PATH)
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: &ChatRequest) -> Result<AssistantReply, ApiError> {
        let url = self.chat_url();
        let body = serde_json::to_value(request).map_err(ApiError::Encode)?;

        let builder = self.client.post(&url).json(&body);
        execute_json(builder, &self.logger, "POST", &url, Some(&body)).await
    }
}

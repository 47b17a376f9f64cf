use campus_logging::RequestLogger;

use crate::client::{CatalogClient, HttpChatTransport};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Both backend clients, sharing one connection pool
#[derive(Debug, Clone)]
pub struct ApiClients {
    pub chat: HttpChatTransport,
    pub catalog: CatalogClient,
}

/// Client factory for the backend endpoints
pub struct ClientFactory;

impl ClientFactory {
    /// Build the underlying reqwest client with the configured timeout
    pub fn http_client(config: &ApiConfig) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("campus-assistant/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)
    }

    /// Create the chat transport and catalog client for `config`
    ///
    /// # Arguments
    /// * `config` - Base URL and timeout
    /// * `logger` - HTTP debug logging shared by both clients
    pub fn create(config: &ApiConfig, logger: RequestLogger) -> Result<ApiClients, ApiError> {
        let client = Self::http_client(config)?;

        Ok(ApiClients {
            chat: HttpChatTransport::with_client(&config.base_url, client.clone(), logger.clone()),
            catalog: CatalogClient::with_client(&config.base_url, client, logger),
        })
    }
}

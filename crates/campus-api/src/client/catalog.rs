use campus_logging::RequestLogger;
use campus_types::{Booking, Event, Facility};
use serde::de::DeserializeOwned;

use crate::client::execute_json;
use crate::config::{BOOKINGS_PATH, EVENTS_PATH, FACILITIES_PATH};
use crate::error::ApiError;

/// Client for the read-only list endpoints.
///
/// Records are returned exactly as the backend serves them.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
    logger: RequestLogger,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new(), RequestLogger::default())
    }

    pub fn with_client(
        base_url: impl Into<String>,
        client: reqwest::Client,
        logger: RequestLogger,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client,
            logger,
        }
    }

    pub async fn events(&self) -> Result<Vec<Event>, ApiError> {
        self.fetch_list(EVENTS_PATH).await
    }

    pub async fn facilities(&self) -> Result<Vec<Facility>, ApiError> {
        self.fetch_list(FACILITIES_PATH).await
    }

    pub async fn bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.fetch_list(BOOKINGS_PATH).await
    }

    /// Records from any list endpoint exactly as served, unknown fields included
    pub async fn list_raw(&self, path: &str) -> Result<Vec<serde_json::Value>, ApiError> {
        self.fetch_list(path).await
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.get(&url);
        let records: Vec<T> = execute_json(builder, &self.logger, "GET", &url, None).await?;
        log::debug!("{} returned {} records", path, records.len());
        Ok(records)
    }
}

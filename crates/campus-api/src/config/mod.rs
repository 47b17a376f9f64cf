use campus_types::DEFAULT_API_URL;
use std::env;
use std::time::Duration;

use crate::error::ApiError;

pub mod factory;
pub use factory::{ApiClients, ClientFactory};

/// Chat endpoint, relative to the base URL
pub const CHAT_PATH: &str = "/api/chat";

/// Read-only list endpoints
pub const EVENTS_PATH: &str = "/api/events";
pub const FACILITIES_PATH: &str = "/api/facilities";
pub const BOOKINGS_PATH: &str = "/api/bookings";

/// Primary environment variable for the backend base URL
pub const API_URL_ENV: &str = "CAMPUS_API_URL";

/// Names used by the older web front ends, consulted after [`API_URL_ENV`]
pub const LEGACY_API_URL_ENVS: &[&str] = &["REACT_APP_BACKEND_URL", "REACT_APP_API_URL"];

/// Environment variable for the request timeout in seconds
pub const TIMEOUT_ENV: &str = "CAMPUS_TIMEOUT_SECS";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build a config from a raw base URL, normalising it
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve everything from an optional explicit URL plus the environment.
    /// A zero timeout is never used.
    pub fn resolve(explicit_url: Option<&str>, explicit_timeout: Option<u64>) -> Result<Self, ApiError> {
        let timeout_secs = explicit_timeout
            .filter(|secs| *secs > 0)
            .or_else(timeout_from_env)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self::new(&resolve_base_url(explicit_url))?.with_timeout(Duration::from_secs(timeout_secs)))
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn timeout_from_env() -> Option<u64> {
    let raw = non_empty_env(TIMEOUT_ENV)?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            log::warn!("Ignoring {}={:?}: not a positive number of seconds", TIMEOUT_ENV, raw);
            None
        }
    }
}

/// Pick the base URL.
///
/// Precedence: explicit value > `CAMPUS_API_URL` > legacy front-end
/// variables > [`DEFAULT_API_URL`]. Blank values are skipped.
pub fn resolve_base_url(explicit: Option<&str>) -> String {
    explicit
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.to_string())
        .or_else(|| non_empty_env(API_URL_ENV))
        .or_else(|| LEGACY_API_URL_ENVS.iter().find_map(|name| non_empty_env(name)))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Normalise a base URL so endpoint paths can be appended directly.
///
/// Trims whitespace and trailing slashes, drops a trailing `/api` segment,
/// and assumes `http://` when no scheme is given.
pub fn normalize_base_url(url: &str) -> Result<String, ApiError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidUrl {
            url: url.to_string(),
            reason: "empty".to_string(),
        });
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let mut base = with_scheme.trim_end_matches('/').to_string();
    if let Some(stripped) = base.strip_suffix("/api") {
        base = stripped.trim_end_matches('/').to_string();
    }

    let parsed = reqwest::Url::parse(&base).map_err(|e| ApiError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ApiError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(base)
}

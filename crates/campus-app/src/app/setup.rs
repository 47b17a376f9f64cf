use anyhow::{Context, Result};
use campus_api::{ApiClients, ApiConfig, ClientFactory};
use campus_logging::RequestLogger;

use crate::cli::Cli;

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logger: RequestLogger,
}

impl AppConfig {
    /// Build the backend clients for this configuration
    pub fn clients(&self) -> Result<ApiClients> {
        ClientFactory::create(&self.api, self.logger.clone())
            .context("Failed to create HTTP client")
    }
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    // Precedence: --api-url / CAMPUS_API_URL > legacy env > default
    let api = ApiConfig::resolve(cli.api_url.as_deref(), cli.timeout_secs)
        .context("Invalid backend configuration")?;

    let mut logger = RequestLogger::new(cli.verbose);
    if cli.log_requests {
        logger = logger
            .with_default_logs_dir()
            .context("Failed to prepare request log directory")?;
    }

    log::debug!("Backend: {} (timeout {:?})", api.base_url, api.timeout);

    Ok(AppConfig { api, logger })
}

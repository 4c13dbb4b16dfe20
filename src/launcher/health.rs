//! One-shot gateway healthcheck
//!
//! Intended as the container `HEALTHCHECK` command: exit status is the only
//! thing the runtime looks at.

use crate::config::HealthcheckConfig;
use crate::utils::error::{GatewayError, Result};
use reqwest::Client;
use tracing::{debug, info};

/// GET the health endpoint and require a 2xx response
pub async fn check_health(config: &HealthcheckConfig) -> Result<()> {
    let client = Client::builder()
        .timeout(config.timeout_duration())
        .build()?;

    debug!("Probing gateway health at {}", config.url);
    let response = client
        .get(&config.url)
        .send()
        .await
        .map_err(|e| GatewayError::health(format!("{}: {}", config.url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::health(format!(
            "{} returned {}",
            config.url, status
        )));
    }

    info!("Gateway is healthy ({})", status);
    Ok(())
}

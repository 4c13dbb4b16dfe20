//! Healthcheck probe configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Healthcheck probe configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthcheckConfig {
    /// Gateway health endpoint
    #[serde(default = "default_healthcheck_url")]
    pub url: String,
    /// Request timeout in seconds
    #[serde(default = "default_healthcheck_timeout")]
    pub timeout: u64,
}

impl Default for HealthcheckConfig {
    fn default() -> Self {
        Self {
            url: default_healthcheck_url(),
            timeout: default_healthcheck_timeout(),
        }
    }
}

impl HealthcheckConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

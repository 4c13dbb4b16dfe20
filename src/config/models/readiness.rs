//! Redis readiness gate configuration

use super::*;
use crate::storage::redis::ReadinessPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Readiness gate configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadinessConfig {
    /// Redis connection URL; the gate is skipped when unset or empty
    #[serde(default)]
    pub url: Option<String>,
    /// Number of poll attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Seconds between attempts
    #[serde(default = "default_retry_interval")]
    pub retry_interval: u64,
    /// Per-attempt connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_retries: default_max_retries(),
            retry_interval: default_retry_interval(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl ReadinessConfig {
    /// The configured URL, treating an empty value as unset
    pub fn connection_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// Retry budget for the readiness loop
    pub fn policy(&self) -> ReadinessPolicy {
        ReadinessPolicy {
            max_retries: self.max_retries,
            retry_interval: Duration::from_secs(self.retry_interval),
            connect_timeout: Duration::from_secs(self.connect_timeout),
        }
    }
}

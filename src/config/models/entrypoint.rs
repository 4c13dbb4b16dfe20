//! Top-level entrypoint configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Everything the entrypoint needs before handing off to the gateway
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EntrypointConfig {
    /// Redis readiness gate
    #[serde(default)]
    pub readiness: ReadinessConfig,
    /// Process handoff
    #[serde(default)]
    pub launch: LaunchConfig,
    /// Healthcheck probe
    #[serde(default)]
    pub healthcheck: HealthcheckConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

//! Configuration management for the entrypoint
//!
//! Values are layered as defaults, then an optional YAML file, then
//! environment variables, then command-line flags.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;

/// Main configuration struct for the entrypoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Entrypoint configuration
    pub entrypoint: EntrypointConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let entrypoint: EntrypointConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { entrypoint };
        config.validate()?;
        Ok(config)
    }

    /// Overlay the process environment
    ///
    /// Returns the configuration together with the variables that were ignored.
    pub fn with_env(self) -> (Self, Vec<String>) {
        self.with_env_from(|name| std::env::var(name).ok())
    }

    /// Overlay variables from `lookup`
    pub fn with_env_from<F>(mut self, lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let ignored = self.entrypoint.apply_env(lookup);
        (self, ignored)
    }

    pub fn readiness(&self) -> &ReadinessConfig {
        &self.entrypoint.readiness
    }

    pub fn launch(&self) -> &LaunchConfig {
        &self.entrypoint.launch
    }

    pub fn healthcheck(&self) -> &HealthcheckConfig {
        &self.entrypoint.healthcheck
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.entrypoint.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.entrypoint
            .validate()
            .map_err(|e| GatewayError::Config(format!("Invalid configuration: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.entrypoint)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

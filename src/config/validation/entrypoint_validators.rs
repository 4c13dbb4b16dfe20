//! Entrypoint configuration validators

use super::trait_def::Validate;
use crate::config::loader::is_http_url;
use crate::config::models::*;

impl Validate for EntrypointConfig {
    fn validate(&self) -> Result<(), String> {
        self.readiness.validate()?;
        self.launch.validate()?;
        self.healthcheck.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for ReadinessConfig {
    fn validate(&self) -> Result<(), String> {
        // An empty host in the URL is reported by the gate, not here
        if self.connect_timeout == 0 {
            return Err("Redis connect timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LaunchConfig {
    fn validate(&self) -> Result<(), String> {
        match self.command.first() {
            None => Err("Launch command cannot be empty".to_string()),
            Some(program) if program.trim().is_empty() => {
                Err("Launch program cannot be blank".to_string())
            }
            Some(_) => Ok(()),
        }
    }
}

impl Validate for HealthcheckConfig {
    fn validate(&self) -> Result<(), String> {
        if !is_http_url(&self.url) {
            return Err("Healthcheck URL must start with http:// or https://".to_string());
        }

        if self.timeout == 0 {
            return Err("Healthcheck timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        Ok(())
    }
}

//! Command-line interface

use crate::config::{Config, EntrypointConfig};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Container entrypoint for the AI gateway
#[derive(Parser, Debug, Clone)]
#[command(name = "gateway-entrypoint", version, long_version = crate::LONG_VERSION, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "ENTRYPOINT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Redis URL to wait for (overrides REDIS_URL)
    #[arg(long, global = true)]
    pub redis_url: Option<String>,

    /// Number of reachability attempts (overrides REDIS_MAX_RETRIES)
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,

    /// Seconds between attempts (overrides REDIS_RETRY_INTERVAL)
    #[arg(long, global = true, value_name = "SECS")]
    pub retry_interval: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Wait for Redis, then replace this process with the gateway (default)
    Run {
        /// Gateway command; defaults to GATEWAY_COMMAND or `gateway`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
        command: Vec<String>,
    },
    /// Wait for Redis, then exit
    Wait,
    /// Probe the gateway health endpoint once
    Healthcheck {
        /// Health endpoint (overrides HEALTHCHECK_URL)
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds (overrides HEALTHCHECK_TIMEOUT)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },
}

impl Cli {
    /// Selected subcommand, `run` when none was given
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Run { command: Vec::new() })
    }

    /// Build the effective configuration: file, then environment, then flags
    pub async fn load_config(&self) -> Result<(Config, Vec<String>)> {
        let config = match &self.config {
            Some(path) => Config::from_file(path).await?,
            None => Config::default(),
        };

        let (mut config, ignored) = config.with_env();
        self.apply_overrides(&mut config.entrypoint);
        config.validate()?;

        Ok((config, ignored))
    }

    /// Apply command-line flags on top of `config`
    pub fn apply_overrides(&self, config: &mut EntrypointConfig) {
        if let Some(url) = &self.redis_url {
            config.readiness.url = Some(url.clone());
        }
        if let Some(max_retries) = self.max_retries {
            config.readiness.max_retries = max_retries;
        }
        if let Some(retry_interval) = self.retry_interval {
            config.readiness.retry_interval = retry_interval;
        }

        match &self.command {
            Some(Commands::Run { command }) if !command.is_empty() => {
                config.launch.command = command.clone();
            }
            Some(Commands::Healthcheck { url, timeout }) => {
                if let Some(url) = url {
                    config.healthcheck.url = url.clone();
                }
                if let Some(timeout) = timeout {
                    config.healthcheck.timeout = *timeout;
                }
            }
            _ => {}
        }
    }
}

//! Configuration data models
//!
//! This module defines all configuration structures used by the entrypoint.

#![allow(missing_docs)]

pub mod entrypoint;
pub mod healthcheck;
pub mod launch;
pub mod logging;
pub mod readiness;

// Re-export all configuration types
pub use entrypoint::*;
pub use healthcheck::*;
pub use launch::*;
pub use logging::*;
pub use readiness::*;

/// Default number of readiness poll attempts
pub fn default_max_retries() -> u32 {
    30
}

/// Default seconds between readiness poll attempts
pub fn default_retry_interval() -> u64 {
    1
}

/// Default per-attempt connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    1
}

/// Default gateway command
pub fn default_launch_command() -> Vec<String> {
    vec!["gateway".to_string()]
}

/// Default gateway port, used to derive the healthcheck URL
pub fn default_gateway_port() -> u16 {
    8000
}

/// Default healthcheck URL
pub fn default_healthcheck_url() -> String {
    healthcheck_url_for_port(default_gateway_port())
}

/// Healthcheck URL for a gateway listening locally on `port`
pub fn healthcheck_url_for_port(port: u16) -> String {
    format!("http://127.0.0.1:{}/health", port)
}

/// Default healthcheck timeout in seconds
pub fn default_healthcheck_timeout() -> u64 {
    5
}

/// Default tracing filter directive
pub fn default_log_level() -> String {
    "info".to_string()
}

//! Error types for the entrypoint

use crate::storage::redis::ParseError;
use thiserror::Error;

/// Result type alias for the entrypoint
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the entrypoint
///
/// An unreachable backend is not an error: the readiness gate reports it as
/// an outcome.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection URL could not be resolved
    #[error("Connection URL error: {0}")]
    Parse(#[from] ParseError),

    /// Process handoff errors
    #[error("Failed to launch gateway: {0}")]
    Exec(String),

    /// Healthcheck failures
    #[error("Healthcheck failed: {0}")]
    Health(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl GatewayError {
    /// Whether the error came from the user-supplied connection URL
    pub fn is_parse_error(&self) -> bool {
        matches!(self, GatewayError::Parse(_))
    }
}

//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn exec<S: Into<String>>(message: S) -> Self {
        Self::Exec(message.into())
    }

    pub fn health<S: Into<String>>(message: S) -> Self {
        Self::Health(message.into())
    }
}

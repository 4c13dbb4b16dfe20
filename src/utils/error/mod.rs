//! Error handling for the entrypoint
//!
//! This module defines the crate-wide error type and its constructor helpers.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{GatewayError, Result};

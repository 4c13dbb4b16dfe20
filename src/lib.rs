//! # gateway-entrypoint
//!
//! Container entrypoint for the AI gateway.
//!
//! ## Features
//!
//! - **Redis readiness gate**: resolves `REDIS_URL` and polls the backend with
//!   bounded retries before the gateway starts
//! - **Soft dependency**: an unreachable backend is logged and startup continues
//! - **Process handoff**: replaces itself with the gateway so signals reach it
//! - **Healthcheck**: one-shot probe of the gateway's health endpoint
//!
//! ## Resolving a connection URL
//!
//! ```rust
//! use gateway_entrypoint::ConnectionDescriptor;
//!
//! let descriptor = ConnectionDescriptor::parse("redis://user:p@ss@cache:6380/2").unwrap();
//! assert_eq!(descriptor.host(), "cache");
//! assert_eq!(descriptor.port(), 6380);
//! assert_eq!(descriptor.to_string(), "redis://***@cache:6380/2");
//! ```
//!
//! ## Waiting for the backend
//!
//! ```rust,no_run
//! use gateway_entrypoint::{ConnectionDescriptor, ReadinessPolicy, TcpProbe, await_reachable};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let descriptor = ConnectionDescriptor::parse("redis://localhost")?;
//!     let policy = ReadinessPolicy::default();
//!     let outcome = await_reachable(&descriptor, &policy, &TcpProbe::default()).await;
//!     println!("Redis reachable: {}", outcome.is_reachable());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod launcher;
pub mod storage;
pub mod utils;

// Re-export main types
pub use cli::{Cli, Commands};
pub use config::Config;
pub use launcher::GateReport;
pub use storage::redis::{
    ConnectionDescriptor, Outcome, ParseError, Probe, ReadinessPolicy, Scheme, TcpProbe,
    await_reachable,
};
pub use utils::error::{GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
/// Version string shown by `--version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ENTRYPOINT_GIT_HASH"),
    ", built ",
    env!("ENTRYPOINT_BUILD_TIME"),
    ")"
);

/// Entrypoint build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time as seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("ENTRYPOINT_BUILD_TIME"),
            git_hash: env!("ENTRYPOINT_GIT_HASH"),
        }
    }
}

/// Build information for this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}

//! Utility modules for the entrypoint
//!
//! - **error**: Error types and constructor helpers
//! - **logging**: Subscriber installation

pub mod error;
pub mod logging;

pub use logging::init_logging;

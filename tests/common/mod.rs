//! Common test utilities for gateway-entrypoint

pub mod fixtures;
pub mod probes;

pub use fixtures::{closed_port, readiness_config, spawn_listener};
pub use probes::RecordingProbe;

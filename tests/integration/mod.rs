//! Integration tests for gateway-entrypoint
//!
//! These tests drive the startup sequence through its public API, using
//! real localhost sockets where the behavior depends on the network.

pub mod healthcheck_tests;
pub mod readiness_gate_tests;
pub mod startup_tests;

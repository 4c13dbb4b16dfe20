//! Storage backends the gateway depends on
//!
//! The entrypoint never talks to a backend at the protocol level; it only
//! resolves where the backend lives and whether it accepts connections yet.

pub mod redis;

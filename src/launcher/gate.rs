//! Redis readiness gate
//!
//! Runs once at startup, before the gateway exists. The gate never blocks
//! the gateway from starting; only an unusable URL stops it.

use crate::config::ReadinessConfig;
use crate::storage::redis::{ConnectionDescriptor, Outcome, Probe, TcpProbe, await_reachable};
use crate::utils::error::Result;
use std::time::Duration;
use tracing::{info, warn};

/// What the gate did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateReport {
    /// No Redis URL configured
    Skipped,
    /// The readiness loop ran to completion
    Completed {
        descriptor: ConnectionDescriptor,
        outcome: Outcome,
    },
}

impl GateReport {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GateReport::Skipped => None,
            GateReport::Completed { outcome, .. } => Some(*outcome),
        }
    }
}

/// Run the gate with a real TCP probe
pub async fn run_tcp_gate(config: &ReadinessConfig) -> Result<GateReport> {
    let probe = TcpProbe::new(Duration::from_secs(config.connect_timeout));
    run_gate(config, &probe).await
}

/// Run the gate with the given probe
pub async fn run_gate<P>(config: &ReadinessConfig, probe: &P) -> Result<GateReport>
where
    P: Probe + ?Sized,
{
    let Some(url) = config.connection_url() else {
        info!("REDIS_URL not set, skipping Redis readiness check");
        return Ok(GateReport::Skipped);
    };

    let descriptor = ConnectionDescriptor::parse(url)?;
    info!("Checking Redis readiness at {}", descriptor);

    let outcome = await_reachable(&descriptor, &config.policy(), probe).await;
    if !outcome.is_reachable() {
        warn!("Starting without confirmed Redis connectivity; the gateway will retry on its own");
    }

    Ok(GateReport::Completed {
        descriptor,
        outcome,
    })
}

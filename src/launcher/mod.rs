//! Container startup sequence
//!
//! `run` wires configuration, logging, the Redis readiness gate and the
//! final handoff to the gateway process.

pub mod exec;
pub mod gate;
pub mod health;

pub use exec::hand_off;
pub use gate::{GateReport, run_gate, run_tcp_gate};
pub use health::check_health;

use crate::cli::{Cli, Commands};
use crate::utils::error::Result;
use crate::utils::init_logging;
use tracing::{debug, info, warn};

/// Execute the selected subcommand
///
/// `run` only returns on failure: on success the process has become the
/// gateway.
pub async fn run(cli: Cli) -> Result<()> {
    let (config, ignored) = cli.load_config().await?;
    init_logging(config.logging());
    report_config(&cli, &ignored);

    match cli.command() {
        Commands::Run { .. } => {
            log_banner();
            run_tcp_gate(config.readiness()).await?;
            match hand_off(&config.launch().command)? {}
        }
        Commands::Wait => {
            log_banner();
            run_tcp_gate(config.readiness()).await?;
            Ok(())
        }
        Commands::Healthcheck { .. } => check_health(config.healthcheck()).await,
    }
}

/// Logged after `init_logging`, since loading runs before a subscriber exists
fn report_config(cli: &Cli, ignored: &[String]) {
    match &cli.config {
        Some(path) => info!("Loaded configuration from {:?}", path),
        None => debug!("No configuration file, using defaults and environment"),
    }
    for message in ignored {
        warn!("{}", message);
    }
}

fn log_banner() {
    let build = crate::build_info();
    info!(
        "🚀 Starting gateway entrypoint {} ({})",
        build.version, build.git_hash
    );
}

//! Process handoff
//!
//! The entrypoint replaces itself with the gateway so that signals sent to
//! the container (SIGTERM on shutdown) reach the gateway directly.

use crate::utils::error::{GatewayError, Result};
use std::convert::Infallible;
use std::process::Command;
use tracing::info;

/// Replace the current process with `command`
///
/// Only returns on failure.
pub fn hand_off(command: &[String]) -> Result<Infallible> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| GatewayError::exec("no command to launch"))?;

    info!("Handing off to: {}", command.join(" "));

    let mut cmd = Command::new(program);
    cmd.args(args);
    replace_process(cmd, program)
}

#[cfg(unix)]
fn replace_process(mut cmd: Command, program: &str) -> Result<Infallible> {
    use std::os::unix::process::CommandExt;

    let err = cmd.exec();
    Err(GatewayError::exec(format!("{}: {}", program, err)))
}

// Without exec(2) the entrypoint stays alive as a transparent parent
#[cfg(not(unix))]
fn replace_process(mut cmd: Command, program: &str) -> Result<Infallible> {
    let status = cmd
        .status()
        .map_err(|e| GatewayError::exec(format!("{}: {}", program, e)))?;
    std::process::exit(status.code().unwrap_or(1));
}

//! gateway-entrypoint - container startup for the AI gateway
//!
//! Waits for Redis (best effort), then replaces itself with the gateway.

use clap::Parser;
use gateway_entrypoint::{Cli, launcher};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env is the normal case inside a container
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match launcher::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

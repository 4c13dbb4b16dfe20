//! Logging setup
//!
//! Log lines go to stdout so container runtimes collect them alongside the
//! gateway's own output once the process has been replaced.

use crate::config::{LogFormat, LoggingConfig};
use tracing::warn;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Filter used when the configured directive is rejected
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build a `tracing` filter from a directive such as `info` or `gateway_entrypoint=debug`
///
/// Every comma-separated part must name a level. A bare word like `verbose`
/// would otherwise be read as a target name and silence this crate.
pub fn env_filter(directive: &str) -> Result<EnvFilter, String> {
    let mut parts = directive.split(',').map(str::trim).filter(|p| !p.is_empty()).peekable();
    if parts.peek().is_none() {
        return Err("no directives".to_string());
    }

    for part in parts {
        if !part.contains('=') && part.parse::<LevelFilter>().is_err() {
            return Err(format!("{:?} is not a log level", part));
        }
    }

    EnvFilter::try_new(directive).map_err(|e| e.to_string())
}

/// Filter for `level`, falling back to [`DEFAULT_LOG_FILTER`]
///
/// The second value carries the reason when the fallback was used.
pub(crate) fn resolve_filter(level: &str) -> (EnvFilter, Option<String>) {
    match env_filter(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    }
}

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed; the existing one
/// is kept.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let (filter, rejected) = resolve_filter(&config.level);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };

    if let Some(e) = rejected {
        warn!(
            "Invalid log level {:?} ({}), using {:?}",
            config.level, e, DEFAULT_LOG_FILTER
        );
    }

    installed
}

//! Environment variable loading
//!
//! Environment input never fails startup: a knob that does not parse is
//! reported back to the caller and the previous value is kept.

use super::models::*;
use std::fmt::Display;
use std::str::FromStr;

pub const REDIS_URL: &str = "REDIS_URL";
pub const REDIS_MAX_RETRIES: &str = "REDIS_MAX_RETRIES";
pub const REDIS_RETRY_INTERVAL: &str = "REDIS_RETRY_INTERVAL";
pub const REDIS_CONNECT_TIMEOUT: &str = "REDIS_CONNECT_TIMEOUT";
pub const GATEWAY_COMMAND: &str = "GATEWAY_COMMAND";
pub const GATEWAY_PORT: &str = "GATEWAY_PORT";
pub const HEALTHCHECK_URL: &str = "HEALTHCHECK_URL";
pub const HEALTHCHECK_TIMEOUT: &str = "HEALTHCHECK_TIMEOUT";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_FORMAT: &str = "LOG_FORMAT";

impl EntrypointConfig {
    /// Overlay values from `lookup` onto this configuration
    ///
    /// Returns one message per variable that was set but ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env = EnvReader::new(lookup);

        if let Some(url) = env.get(REDIS_URL) {
            self.readiness.url = Some(url);
        }
        env.knob(REDIS_MAX_RETRIES, &mut self.readiness.max_retries, |_| true);
        env.knob(REDIS_RETRY_INTERVAL, &mut self.readiness.retry_interval, |_| true);
        env.knob(REDIS_CONNECT_TIMEOUT, &mut self.readiness.connect_timeout, |v| *v > 0);

        if let Some(raw) = env.get(GATEWAY_COMMAND) {
            let command: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
            if command.is_empty() {
                env.ignore(format!("Ignoring empty {}", GATEWAY_COMMAND));
            } else {
                self.launch.command = command;
            }
        }

        let mut gateway_port: Option<u16> = None;
        env.knob(GATEWAY_PORT, &mut gateway_port, |p| p.is_some_and(|p| p > 0));
        match env.get(HEALTHCHECK_URL) {
            Some(url) if is_http_url(&url) => self.healthcheck.url = url,
            Some(url) => env.ignore(format!(
                "Ignoring {}={:?}: not an http(s) URL",
                HEALTHCHECK_URL, url
            )),
            None => {
                if let Some(port) = gateway_port {
                    self.healthcheck.url = healthcheck_url_for_port(port);
                }
            }
        }
        env.knob(HEALTHCHECK_TIMEOUT, &mut self.healthcheck.timeout, |v| *v > 0);

        if let Some(level) = env.get(LOG_LEVEL).filter(|level| !level.trim().is_empty()) {
            self.logging.level = level;
        }
        env.knob(LOG_FORMAT, &mut self.logging.format, |_| true);

        env.into_ignored()
    }
}

pub(crate) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Variable lookup that remembers what it had to ignore
struct EnvReader<F> {
    lookup: F,
    ignored: Vec<String>,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn new(lookup: F) -> Self {
        Self {
            lookup,
            ignored: Vec::new(),
        }
    }

    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
    }

    fn ignore(&mut self, message: String) {
        self.ignored.push(message);
    }

    /// Parse `name` into `target` when it is set and acceptable
    fn knob<T, P>(&mut self, name: &str, target: &mut T, accept: P)
    where
        T: Knob,
        P: Fn(&T) -> bool,
    {
        let Some(raw) = self.get(name) else {
            return;
        };

        match T::parse_knob(raw.trim()) {
            Ok(value) if accept(&value) => *target = value,
            Ok(_) => self.ignore(format!("Ignoring {}={:?}: value out of range", name, raw)),
            Err(e) => self.ignore(format!("Ignoring {}={:?}: {}", name, raw, e)),
        }
    }

    fn into_ignored(self) -> Vec<String> {
        self.ignored
    }
}

/// Values that can be read from a single environment variable
trait Knob: Sized {
    fn parse_knob(raw: &str) -> Result<Self, String>;
}

fn parse_display<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| e.to_string())
}

impl Knob for u16 {
    fn parse_knob(raw: &str) -> Result<Self, String> {
        parse_display(raw)
    }
}

impl Knob for u32 {
    fn parse_knob(raw: &str) -> Result<Self, String> {
        parse_display(raw)
    }
}

impl Knob for u64 {
    fn parse_knob(raw: &str) -> Result<Self, String> {
        parse_display(raw)
    }
}

impl Knob for LogFormat {
    fn parse_knob(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

impl<T: Knob> Knob for Option<T> {
    fn parse_knob(raw: &str) -> Result<Self, String> {
        T::parse_knob(raw).map(Some)
    }
}

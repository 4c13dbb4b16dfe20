//! Bounded TCP reachability polling
//!
//! A poll is a plain TCP connect: no handshake, no PING. An exhausted retry
//! budget is an [`Outcome::TimedOut`], not an error, because the gateway
//! retries its own backend connections once it is running.

use super::descriptor::ConnectionDescriptor;
use async_trait::async_trait;
use std::io;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

/// Retry budget for the readiness loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessPolicy {
    /// Number of poll attempts
    pub max_retries: u32,
    /// Delay between attempts
    pub retry_interval: Duration,
    /// Upper bound on a single connect attempt
    pub connect_timeout: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            max_retries: 30,
            retry_interval: Duration::from_secs(1),
            connect_timeout: Duration::from_secs(1),
        }
    }
}

/// Result of a readiness loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A connection succeeded on the given attempt
    Reachable { attempts: u32 },
    /// Every attempt failed
    TimedOut { attempts: u32 },
}

impl Outcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Outcome::Reachable { .. })
    }

    /// Number of probes that were made
    pub fn attempts(&self) -> u32 {
        match self {
            Outcome::Reachable { attempts } | Outcome::TimedOut { attempts } => *attempts,
        }
    }
}

/// A single reachability check against `host:port`
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, host: &str, port: u16) -> io::Result<()>;
}

/// Probe that opens and immediately drops a TCP connection
#[derive(Debug, Clone)]
pub struct TcpProbe {
    connect_timeout: Duration,
}

impl TcpProbe {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new(ReadinessPolicy::default().connect_timeout)
    }
}

#[async_trait]
impl Probe for TcpProbe {
    async fn probe(&self, host: &str, port: u16) -> io::Result<()> {
        connect_within(self.connect_timeout, TcpStream::connect((host, port)))
            .await
            .map(drop)
    }
}

/// Await `connect`, turning an expired `limit` into [`io::ErrorKind::TimedOut`]
pub(crate) async fn connect_within<T, F>(limit: Duration, connect: F) -> io::Result<T>
where
    F: Future<Output = io::Result<T>>,
{
    match tokio::time::timeout(limit, connect).await {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("connect timed out after {:?}", limit),
        )),
    }
}

/// Poll `descriptor` until it accepts a connection or the budget runs out
///
/// Sleeps only between attempts, so a timed-out loop takes roughly
/// `(max_retries - 1) * retry_interval` plus the probes themselves.
pub async fn await_reachable<P>(
    descriptor: &ConnectionDescriptor,
    policy: &ReadinessPolicy,
    probe: &P,
) -> Outcome
where
    P: Probe + ?Sized,
{
    let total = policy.max_retries;
    let address = descriptor.redacted_address();

    for attempt in 1..=total {
        info!(
            "Waiting for Redis at {}... (attempt {}/{})",
            address, attempt, total
        );

        match probe.probe(descriptor.host(), descriptor.port()).await {
            Ok(()) => {
                info!("Redis is reachable at {}", address);
                return Outcome::Reachable { attempts: attempt };
            }
            Err(e) => debug!("Redis probe {}/{} failed: {}", attempt, total, e),
        }

        if attempt < total {
            tokio::time::sleep(policy.retry_interval).await;
        }
    }

    warn!(
        "Redis at {} not reachable after {} attempts, continuing anyway",
        address, total
    );
    Outcome::TimedOut { attempts: total }
}

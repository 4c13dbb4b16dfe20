//! Redis backend resolution and readiness
//!
//! ## Module Structure
//!
//! - `descriptor` - Connection URL parsing into a [`ConnectionDescriptor`]
//! - `readiness` - Bounded TCP reachability polling
//! - `tests` - Module tests

mod descriptor;
mod readiness;

pub use descriptor::{ConnectionDescriptor, DEFAULT_REDIS_PORT, ParseError, Scheme};
pub use readiness::{Outcome, Probe, ReadinessPolicy, TcpProbe, await_reachable};

//! Redis connection URL parsing
//!
//! Accepts the `scheme://[auth@]host[:port][/db]` shape. The parser is
//! permissive: the only input it rejects is one that leaves no host behind.
//! Unknown schemes pass through unstripped and malformed ports fall back to
//! [`DEFAULT_REDIS_PORT`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Port used when the URL carries no usable port
pub const DEFAULT_REDIS_PORT: u16 = 6379;

const PLAIN_PREFIX: &str = "redis://";
const SECURE_PREFIX: &str = "rediss://";

/// Connection scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// `redis://`
    #[default]
    Plain,
    /// `rediss://` (TLS)
    Secure,
}

impl Scheme {
    /// URL prefix for this scheme
    pub fn prefix(self) -> &'static str {
        match self {
            Scheme::Plain => PLAIN_PREFIX,
            Scheme::Secure => SECURE_PREFIX,
        }
    }
}

/// Connection URL could not be resolved to a host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was left for the host after stripping scheme, auth, port and db
    #[error("Redis URL resolves to an empty host")]
    EmptyHost,
}

/// Where a Redis backend lives, resolved from its connection URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    scheme: Scheme,
    host: String,
    port: u16,
    database_index: Option<u32>,
    has_auth: bool,
    /// Credentials were cut by the first `/`, so host and port may hold them
    masked: bool,
}

impl ConnectionDescriptor {
    /// Parse a connection URL
    pub fn parse(url: &str) -> Result<Self, ParseError> {
        let (scheme, rest) = if let Some(rest) = url.strip_prefix(SECURE_PREFIX) {
            (Scheme::Secure, rest)
        } else if let Some(rest) = url.strip_prefix(PLAIN_PREFIX) {
            (Scheme::Plain, rest)
        } else {
            (Scheme::Plain, url)
        };

        // Everything after the first slash is the database selector
        let (authority, path) = match rest.split_once('/') {
            Some((authority, path)) => (authority, Some(path)),
            None => (rest, None),
        };
        let database_index = path.and_then(|db| db.parse::<u32>().ok());
        let masked = path.is_some_and(|path| path.contains('@'));

        // Passwords may contain '@', so only the last one separates auth from host
        let (hostport, has_auth) = match authority.rsplit_once('@') {
            Some((_, hostport)) => (hostport, true),
            None => (authority, masked),
        };

        let (host, port) = split_host_port(hostport);
        if host.is_empty() {
            return Err(ParseError::EmptyHost);
        }

        Ok(Self {
            scheme,
            host: host.to_string(),
            port: port.and_then(parse_port).unwrap_or(DEFAULT_REDIS_PORT),
            database_index,
            has_auth,
            masked,
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Host without IPv6 brackets
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn database_index(&self) -> Option<u32> {
        self.database_index
    }

    pub fn has_auth(&self) -> bool {
        self.has_auth
    }

    /// `host:port`, re-bracketing IPv6 literals
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// [`address`](Self::address) for log lines
    ///
    /// When a password contains `/` the URL is cut inside the credentials and
    /// the host and port are made of them, so the whole address is hidden.
    pub fn redacted_address(&self) -> String {
        if self.masked {
            "***".to_string()
        } else {
            self.address()
        }
    }
}

impl FromStr for ConnectionDescriptor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Credentials are replaced with `***`, so this is safe to log
impl fmt::Display for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme.prefix())?;
        if self.masked {
            return f.write_str("***");
        }
        if self.has_auth {
            f.write_str("***@")?;
        }
        f.write_str(&self.address())?;
        if let Some(db) = self.database_index {
            write!(f, "/{}", db)?;
        }
        Ok(())
    }
}

/// Split `host[:port]` or `[v6]:port` into host and raw port text
fn split_host_port(hostport: &str) -> (&str, Option<&str>) {
    if let Some(bracketed) = hostport.strip_prefix('[') {
        return match bracketed.split_once(']') {
            Some((host, tail)) => (host, tail.strip_prefix(':').map(leading_digits)),
            None => (bracketed, None),
        };
    }

    match hostport.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (hostport, None),
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

/// Digits only, in 1..=65535
fn parse_port(raw: &str) -> Option<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u16>().ok().filter(|port| *port != 0)
}

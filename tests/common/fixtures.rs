//! Test fixtures

use gateway_entrypoint::config::ReadinessConfig;
use tokio::net::TcpListener;

/// A listener on an ephemeral localhost port
pub async fn spawn_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A localhost port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Readiness config with no delay between attempts
pub fn readiness_config(url: Option<&str>, max_retries: u32) -> ReadinessConfig {
    ReadinessConfig {
        url: url.map(str::to_string),
        max_retries,
        retry_interval: 0,
        connect_timeout: 1,
    }
}

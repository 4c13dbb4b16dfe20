//! End-to-end runs of the `wait` and `healthcheck` subcommands

#[cfg(test)]
mod tests {
    use crate::common::{closed_port, spawn_listener};
    use clap::Parser;
    use gateway_entrypoint::launcher::run;
    use gateway_entrypoint::{Cli, GatewayError};
    use std::io::Write;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gateway-entrypoint").chain(args.iter().copied()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_wait_for_reachable_backend() {
        let (_listener, port) = spawn_listener().await;
        let url = format!("redis://127.0.0.1:{}", port);

        let result = run(cli(&["wait", "--redis-url", &url, "--max-retries", "2"])).await;
        assert!(result.is_ok());
    }

    /// Timing out is a warning, not a failure
    #[tokio::test]
    async fn test_wait_for_unreachable_backend_still_succeeds() {
        let url = format!("redis://127.0.0.1:{}", closed_port());

        let result = run(cli(&[
            "wait",
            "--redis-url",
            &url,
            "--max-retries",
            "3",
            "--retry-interval",
            "0",
        ]))
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_wait_with_empty_host_fails() {
        let result = run(cli(&["wait", "--redis-url", "redis://:6379"])).await;
        assert!(matches!(result, Err(GatewayError::Parse(_))));
    }

    #[tokio::test]
    async fn test_wait_with_invalid_config_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"readiness:\n  connect_timeout: 0\n").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let result = run(cli(&["--config", &path, "wait"])).await;
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[tokio::test]
    async fn test_healthcheck_subcommand() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        let url = format!("{}/health", server.uri());

        assert!(run(cli(&["healthcheck", "--url", &url])).await.is_ok());
    }
}

//! Healthcheck probe integration tests

#[cfg(test)]
mod tests {
    use crate::common::closed_port;
    use gateway_entrypoint::GatewayError;
    use gateway_entrypoint::config::HealthcheckConfig;
    use gateway_entrypoint::launcher::check_health;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_health(status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        server
    }

    fn config_for(url: String, timeout: u64) -> HealthcheckConfig {
        HealthcheckConfig { url, timeout }
    }

    #[tokio::test]
    async fn test_healthy_gateway() {
        let server = mock_health(200).await;
        let config = config_for(format!("{}/health", server.uri()), 2);

        assert!(check_health(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_unhealthy_status_fails() {
        let server = mock_health(503).await;
        let config = config_for(format!("{}/health", server.uri()), 2);

        let err = check_health(&config).await.unwrap_err();
        assert!(matches!(err, GatewayError::Health(msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn test_unknown_path_fails() {
        let server = mock_health(200).await;
        let config = config_for(format!("{}/status", server.uri()), 2);

        assert!(check_health(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_connection_refused_fails() {
        let config = config_for(format!("http://127.0.0.1:{}/health", closed_port()), 2);

        let err = check_health(&config).await.unwrap_err();
        assert!(matches!(err, GatewayError::Health(_)));
    }

    #[tokio::test]
    async fn test_slow_gateway_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;
        let config = config_for(format!("{}/health", server.uri()), 1);

        assert!(check_health(&config).await.is_err());
    }
}

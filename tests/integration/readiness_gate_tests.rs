//! Readiness gate integration tests

#[cfg(test)]
mod tests {
    use crate::common::{RecordingProbe, closed_port, readiness_config, spawn_listener};
    use gateway_entrypoint::launcher::{GateReport, run_gate, run_tcp_gate};
    use gateway_entrypoint::{GatewayError, Outcome, ParseError};

    // ==================== Short-circuit ====================

    /// No URL means no polling at all
    #[tokio::test]
    async fn test_unset_url_skips_gate() {
        let probe = RecordingProbe::reachable_from(1);
        let report = run_gate(&readiness_config(None, 30), &probe).await.unwrap();

        assert_eq!(report, GateReport::Skipped);
        assert_eq!(report.outcome(), None);
        assert!(probe.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_url_skips_gate() {
        let probe = RecordingProbe::reachable_from(1);
        let report = run_gate(&readiness_config(Some(""), 30), &probe)
            .await
            .unwrap();

        assert_eq!(report, GateReport::Skipped);
        assert!(probe.calls().is_empty());
    }

    /// An unusable URL is the only fatal condition
    #[tokio::test]
    async fn test_empty_host_is_fatal() {
        let probe = RecordingProbe::reachable_from(1);
        let result = run_gate(&readiness_config(Some("redis://user:pw@:6379/0"), 3), &probe).await;

        assert!(matches!(
            result,
            Err(GatewayError::Parse(ParseError::EmptyHost))
        ));
        assert!(probe.calls().is_empty());
    }

    // ==================== Polling ====================

    #[tokio::test]
    async fn test_refusing_backend_times_out_gracefully() {
        let probe = RecordingProbe::refusing();
        let report = run_gate(&readiness_config(Some("redis://cache:6380"), 3), &probe)
            .await
            .unwrap();

        assert_eq!(report.outcome(), Some(Outcome::TimedOut { attempts: 3 }));
        assert_eq!(probe.calls(), vec![("cache".to_string(), 6380); 3]);
    }

    #[tokio::test]
    async fn test_backend_becomes_reachable() {
        let probe = RecordingProbe::reachable_from(2);
        let report = run_gate(&readiness_config(Some("rediss://:pw@cache/1"), 5), &probe)
            .await
            .unwrap();

        match report {
            GateReport::Completed {
                descriptor,
                outcome,
            } => {
                assert_eq!(outcome, Outcome::Reachable { attempts: 2 });
                assert_eq!(descriptor.host(), "cache");
                assert_eq!(descriptor.port(), 6379);
                assert_eq!(descriptor.database_index(), Some(1));
            }
            GateReport::Skipped => panic!("gate should have run"),
        }
        assert_eq!(probe.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_ipv6_target_reaches_probe_unbracketed() {
        let probe = RecordingProbe::reachable_from(1);
        run_gate(&readiness_config(Some("redis://[::1]:6390"), 1), &probe)
            .await
            .unwrap();

        assert_eq!(probe.calls(), vec![("::1".to_string(), 6390)]);
    }

    // ==================== Real sockets ====================

    #[tokio::test]
    async fn test_tcp_gate_against_listener() {
        let (_listener, port) = spawn_listener().await;
        let url = format!("redis://127.0.0.1:{}", port);

        let report = run_tcp_gate(&readiness_config(Some(url.as_str()), 3)).await.unwrap();
        assert_eq!(report.outcome(), Some(Outcome::Reachable { attempts: 1 }));
    }

    #[tokio::test]
    async fn test_tcp_gate_against_closed_port() {
        let url = format!("redis://127.0.0.1:{}", closed_port());

        let report = run_tcp_gate(&readiness_config(Some(url.as_str()), 2)).await.unwrap();
        assert_eq!(report.outcome(), Some(Outcome::TimedOut { attempts: 2 }));
    }
}

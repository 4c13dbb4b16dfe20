//! Probe fakes

use async_trait::async_trait;
use gateway_entrypoint::Probe;
use std::io;
use std::sync::Mutex;

/// Records every target it is asked about and answers from a script
pub struct RecordingProbe {
    reachable_from: Option<usize>,
    calls: Mutex<Vec<(String, u16)>>,
}

impl RecordingProbe {
    /// Never reachable
    pub fn refusing() -> Self {
        Self {
            reachable_from: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reachable from the given 1-based attempt onwards
    pub fn reachable_from(attempt: usize) -> Self {
        Self {
            reachable_from: Some(attempt),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, u16)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Probe for RecordingProbe {
    async fn probe(&self, host: &str, port: u16) -> io::Result<()> {
        let attempt = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((host.to_string(), port));
            calls.len()
        };

        match self.reachable_from {
            Some(n) if attempt >= n => Ok(()),
            _ => Err(io::Error::from(io::ErrorKind::ConnectionRefused)),
        }
    }
}

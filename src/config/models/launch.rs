//! Gateway process handoff configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Command the entrypoint replaces itself with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Program followed by its arguments
    #[serde(default = "default_launch_command")]
    pub command: Vec<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            command: default_launch_command(),
        }
    }
}

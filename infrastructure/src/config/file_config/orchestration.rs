//! Orchestration configuration from TOML (`[orchestration]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [orchestration]
//! mode = "debate"         # or "sequential"
//! debate_rounds = 3
//! timeout_secs = 120
//! ```

use council_application::{DelegationMode, OrchestrationParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw `[orchestration]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOrchestrationConfig {
    /// Delegation mode: "sequential" or "debate"
    pub mode: String,
    /// Hard cap on debate revision rounds
    pub debate_rounds: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileOrchestrationConfig {
    fn default() -> Self {
        Self {
            mode: "sequential".to_string(),
            debate_rounds: 3,
            timeout_secs: 120,
        }
    }
}

impl FileOrchestrationConfig {
    /// Parse the mode string, falling back to sequential on junk
    pub fn parse_mode(&self) -> Result<DelegationMode, String> {
        self.mode.parse()
    }

    /// Convert into application-level orchestration parameters
    pub fn to_params(&self) -> OrchestrationParams {
        OrchestrationParams::default()
            .with_mode(self.parse_mode().unwrap_or_default())
            .with_debate_rounds(self.debate_rounds)
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
    }
}

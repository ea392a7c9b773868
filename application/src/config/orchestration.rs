//! Orchestration parameters: how one request is distributed.
//!
//! [`OrchestrationParams`] groups the static knobs consumed by the
//! orchestrator: the delegation mode, the debate round budget, and the
//! per-request timeout. The mode is an explicit flag; nothing is inferred
//! from the request itself.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the council distributes one request across its specialists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegationMode {
    /// One specialist at a time, in registration order, no cross-visibility
    #[default]
    Sequential,
    /// All specialists at once, followed by bounded discussion rounds
    Debate,
}

impl DelegationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DelegationMode::Sequential => "sequential",
            DelegationMode::Debate => "debate",
        }
    }
}

impl std::fmt::Display for DelegationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DelegationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(DelegationMode::Sequential),
            "debate" => Ok(DelegationMode::Debate),
            _ => Err(format!(
                "Unknown delegation mode: {}. Valid: sequential, debate",
                s
            )),
        }
    }
}

/// Static orchestration knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationParams {
    /// Delegation mode (explicit flag, no inference)
    pub mode: DelegationMode,
    /// Hard cap on debate revision rounds
    pub debate_rounds: usize,
    /// Timeout for the whole distribution of one request
    pub request_timeout: Duration,
}

impl Default for OrchestrationParams {
    fn default() -> Self {
        Self {
            mode: DelegationMode::Sequential,
            debate_rounds: 3,
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl OrchestrationParams {
    pub fn with_mode(mut self, mode: DelegationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_debate_rounds(mut self, rounds: usize) -> Self {
        self.debate_rounds = rounds;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check the parameter combination is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.debate_rounds == 0 {
            return Err("debate_rounds must be at least 1".to_string());
        }
        if self.request_timeout.is_zero() {
            return Err("request_timeout must be positive".to_string());
        }
        Ok(())
    }
}

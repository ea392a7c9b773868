//! Per-specialist invocation outcomes
//!
//! A failed specialist is data, not an error: the delegation strategies
//! record failures and keep going so the aggregator can still produce a
//! best-effort decision.

use super::kind::SpecialistKind;
use super::report::SpecialistReport;
use serde::{Deserialize, Serialize};

/// Why a specialist invocation produced no report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
    /// The request-level deadline expired before the call finished
    Timeout,
    /// The provider reported an error (fetch failure, bad data, ...)
    Provider(String),
    /// The provider escaped its error contract (a bug, e.g. a panic)
    Internal(String),
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Timeout => write!(f, "timed out"),
            FailureReason::Provider(msg) => write!(f, "provider error: {}", msg),
            FailureReason::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

/// Result of invoking one specialist for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SpecialistOutcome {
    /// The specialist returned a structured report
    Completed {
        specialist: SpecialistKind,
        report: SpecialistReport,
    },
    /// The invocation failed; the reason travels with the outcome
    Failed {
        specialist: SpecialistKind,
        reason: FailureReason,
    },
}

impl SpecialistOutcome {
    pub fn completed(report: SpecialistReport) -> Self {
        SpecialistOutcome::Completed {
            specialist: report.kind(),
            report,
        }
    }

    pub fn failed(specialist: SpecialistKind, reason: FailureReason) -> Self {
        SpecialistOutcome::Failed { specialist, reason }
    }

    /// The specialist this outcome belongs to
    pub fn specialist(&self) -> SpecialistKind {
        match self {
            SpecialistOutcome::Completed { specialist, .. } => *specialist,
            SpecialistOutcome::Failed { specialist, .. } => *specialist,
        }
    }

    /// The report, when the invocation succeeded
    pub fn report(&self) -> Option<&SpecialistReport> {
        match self {
            SpecialistOutcome::Completed { report, .. } => Some(report),
            SpecialistOutcome::Failed { .. } => None,
        }
    }

    /// The failure reason, when the invocation failed
    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match self {
            SpecialistOutcome::Completed { .. } => None,
            SpecialistOutcome::Failed { reason, .. } => Some(reason),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SpecialistOutcome::Completed { .. })
    }
}

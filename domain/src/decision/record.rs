//! Decision record - the terminal artifact of one request
//!
//! Created exactly once by the consensus aggregator and never mutated
//! afterwards. Everything a renderer or API response needs lives here,
//! including explicit notes for specialists that failed.

use crate::specialist::kind::SpecialistKind;
use crate::specialist::outcome::FailureReason;
use serde::{Deserialize, Serialize};

/// Rendered report text for one specialist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistSection {
    /// The specialist this section belongs to
    pub specialist: SpecialistKind,
    /// Report body, produced by the specialist's own schema
    pub body: String,
}

impl SpecialistSection {
    pub fn new(specialist: SpecialistKind, body: impl Into<String>) -> Self {
        Self {
            specialist,
            body: body.into(),
        }
    }
}

/// Explicit note about a specialist that produced no report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureNote {
    /// The specialist that failed
    pub specialist: SpecialistKind,
    /// Why it failed
    pub reason: FailureReason,
}

impl FailureNote {
    pub fn new(specialist: SpecialistKind, reason: FailureReason) -> Self {
        Self { specialist, reason }
    }
}

impl std::fmt::Display for FailureNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.specialist, self.reason)
    }
}

/// Summary of the collaborative debate (debate mode only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateSummary {
    /// Revision rounds actually run
    pub rounds_run: usize,
    /// Whether the debate settled before exhausting its round budget
    pub converged: bool,
    /// Stances shared by at least two specialists
    pub agreement_points: Vec<String>,
    /// Stances held by a single specialist against the rest
    pub disagreement_points: Vec<String>,
    /// One-paragraph narrative of the consensus. When the user supplied a
    /// priority factor, the narrative quotes it verbatim.
    pub consensus_narrative: String,
}

/// Final output of the orchestration core for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Categorical recommendation
    pub recommendation: super::recommendation::Recommendation,
    /// Confidence in the recommendation
    pub confidence: super::recommendation::Confidence,
    /// Supporting factors, verbatim from specialist reports, in
    /// specialist invocation order
    pub supporting_factors: Vec<String>,
    /// Concerns, verbatim from specialist reports, in invocation order
    pub concerns: Vec<String>,
    /// Per-specialist report text (successful specialists only)
    pub specialist_reports: Vec<SpecialistSection>,
    /// One note per failed specialist
    pub failures: Vec<FailureNote>,
    /// True when fewer than all specialists reported
    pub degraded: bool,
    /// True when the debate ran without a stated priority factor, so the
    /// renderer should omit priority-alignment language
    pub priority_missing: bool,
    /// Debate summary, present only in debate mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debate: Option<DebateSummary>,
    /// Expected financial impact, when the cost specialist reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_impact: Option<String>,
    /// Expected lifestyle impact, when the sentiment specialist reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle_impact: Option<String>,
    /// Suggested next steps for the user
    pub next_steps: Vec<String>,
}

impl DecisionRecord {
    /// Whether every specialist contributed a report
    pub fn is_complete(&self) -> bool {
        !self.degraded
    }
}

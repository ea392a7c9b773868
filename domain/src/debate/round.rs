//! Debate round types

use crate::specialist::kind::SpecialistKind;
use crate::specialist::report::SpecialistReport;
use crate::specialist::stance::Stance;
use serde::{Deserialize, Serialize};

/// One specialist's current position in the debate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionStatement {
    /// The specialist holding this position
    pub specialist: SpecialistKind,
    /// Categorical stance on the move
    pub stance: Stance,
    /// The specialist's current reasoning, in its own words
    pub statement: String,
}

impl PositionStatement {
    pub fn new(specialist: SpecialistKind, stance: Stance, statement: impl Into<String>) -> Self {
        Self {
            specialist,
            stance,
            statement: statement.into(),
        }
    }

    /// Initial position derived from a specialist's report: the stance
    /// comes from the report schema, the statement from the report's view
    /// on the user's priority (or its opening summary line).
    pub fn from_report(report: &SpecialistReport) -> Self {
        let statement = report
            .perspective_on_priority()
            .map(str::to_string)
            .unwrap_or_else(|| {
                report
                    .summary_text()
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .to_string()
            });
        Self::new(report.kind(), report.stance(), statement)
    }

    /// Positions match when the categorical stance is the same;
    /// prose differences are not a material change.
    pub fn same_stance(&self, other: &PositionStatement) -> bool {
        self.specialist == other.specialist && self.stance == other.stance
    }
}

/// One synchronized cycle of the debate (Value Object)
///
/// All specialists revise concurrently within a round; rounds themselves
/// are strictly sequential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateRound {
    /// Round number (1-indexed)
    pub round: usize,
    /// Every specialist's position after this round, in registration order
    pub positions: Vec<PositionStatement>,
    /// Deterministic moderator recap of where each specialist stands
    pub moderator_summary: String,
}

impl DebateRound {
    /// Create a round and compose its moderator summary
    pub fn new(round: usize, positions: Vec<PositionStatement>) -> Self {
        let moderator_summary = Self::summarize(round, &positions);
        Self {
            round,
            positions,
            moderator_summary,
        }
    }

    fn summarize(round: usize, positions: &[PositionStatement]) -> String {
        let stances = positions
            .iter()
            .map(|p| format!("{} {}", p.specialist, p.stance.describe()))
            .collect::<Vec<_>>()
            .join("; ");
        format!("Round {}: {}", round, stances)
    }
}

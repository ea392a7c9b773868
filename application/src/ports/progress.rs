//! Progress notification port
//!
//! Defines the interface for reporting progress while a request moves
//! through the council. Implementations live in the presentation layer.

use council_domain::SpecialistKind;

/// Phase of one request's journey through the council
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Specialists produce their initial reports
    Consultation,
    /// Specialists revise positions with visibility into each other
    Debate,
    /// The aggregator folds everything into the decision record
    Synthesis,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Consultation => "consultation",
            Phase::Debate => "debate",
            Phase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Consultation => "Specialist Consultation",
            Phase::Debate => "Collaborative Debate",
            Phase::Synthesis => "Consensus Synthesis",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Callback for progress updates during request handling
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when one specialist finishes a task within a phase
    fn on_specialist_complete(&self, phase: &Phase, specialist: SpecialistKind, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_specialist_complete(&self, _phase: &Phase, _specialist: SpecialistKind, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Consultation.as_str(), "consultation");
        assert_eq!(Phase::Debate.to_string(), "Collaborative Debate");
    }
}

//! Debate transcript and convergence tracking
//!
//! The debate is a bounded state machine: a baseline position snapshot from
//! the initial consultation, then up to `round_budget` revision rounds. A
//! round that leaves every stance unchanged is a no-op; two consecutive
//! no-op rounds mean the debate has converged and further rounds add
//! nothing. The round budget is a hard cap and applies whether or not the
//! debate ever converges.

use super::round::{DebateRound, PositionStatement};
use serde::{Deserialize, Serialize};

/// How many consecutive no-op rounds count as convergence
const STABLE_ROUNDS_FOR_CONVERGENCE: usize = 2;

/// Complete record of a debate, built incrementally round by round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateTranscript {
    /// Positions after the initial consultation, before any revision
    baseline: Vec<PositionStatement>,
    /// Revision rounds actually run
    rounds: Vec<DebateRound>,
    /// Hard cap on revision rounds
    round_budget: usize,
    /// Number of trailing rounds that changed no stance
    stable_streak: usize,
    /// Whether the debate settled before exhausting the budget
    converged: bool,
}

impl DebateTranscript {
    /// Start a transcript from the initial consultation positions
    pub fn new(baseline: Vec<PositionStatement>, round_budget: usize) -> Self {
        Self {
            baseline,
            rounds: Vec::new(),
            round_budget,
            stable_streak: 0,
            converged: false,
        }
    }

    /// Record the next round of revised positions.
    ///
    /// Updates the convergence state: the round is a no-op when every
    /// specialist's stance matches the previous snapshot.
    pub fn record_round(&mut self, positions: Vec<PositionStatement>) {
        let unchanged = Self::stances_match(self.latest_positions(), &positions);
        let round = DebateRound::new(self.rounds.len() + 1, positions);
        self.rounds.push(round);

        if unchanged {
            self.stable_streak += 1;
            if self.stable_streak >= STABLE_ROUNDS_FOR_CONVERGENCE {
                self.converged = true;
            }
        } else {
            self.stable_streak = 0;
        }
    }

    /// Whether another round may run (budget not exhausted, not converged)
    pub fn should_continue(&self) -> bool {
        !self.converged && self.rounds.len() < self.round_budget
    }

    /// The most recent position snapshot (last round, or the baseline)
    pub fn latest_positions(&self) -> &[PositionStatement] {
        self.rounds
            .last()
            .map(|r| r.positions.as_slice())
            .unwrap_or(&self.baseline)
    }

    /// Positions from the initial consultation
    pub fn baseline(&self) -> &[PositionStatement] {
        &self.baseline
    }

    /// Revision rounds actually run
    pub fn rounds(&self) -> &[DebateRound] {
        &self.rounds
    }

    /// Number of revision rounds actually run
    pub fn rounds_run(&self) -> usize {
        self.rounds.len()
    }

    /// The configured hard cap on rounds
    pub fn round_budget(&self) -> usize {
        self.round_budget
    }

    /// Whether the debate settled before exhausting its budget
    pub fn converged(&self) -> bool {
        self.converged
    }

    fn stances_match(previous: &[PositionStatement], current: &[PositionStatement]) -> bool {
        previous.len() == current.len()
            && previous
                .iter()
                .zip(current.iter())
                .all(|(a, b)| a.same_stance(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specialist::kind::SpecialistKind;
    use crate::specialist::stance::Stance;

    fn positions(stances: &[Stance]) -> Vec<PositionStatement> {
        let kinds = SpecialistKind::all();
        stances
            .iter()
            .zip(kinds.iter())
            .map(|(stance, kind)| PositionStatement::new(*kind, *stance, "position"))
            .collect()
    }

    #[test]
    fn test_converges_after_two_stable_rounds() {
        let mut transcript =
            DebateTranscript::new(positions(&[Stance::Favor, Stance::Favor, Stance::Neutral]), 5);

        transcript.record_round(positions(&[Stance::Favor, Stance::Favor, Stance::Neutral]));
        assert!(!transcript.converged());
        assert!(transcript.should_continue());

        transcript.record_round(positions(&[Stance::Favor, Stance::Favor, Stance::Neutral]));
        assert!(transcript.converged());
        assert!(!transcript.should_continue());
        assert_eq!(transcript.rounds_run(), 2);
    }

    #[test]
    fn test_stance_change_resets_streak() {
        let mut transcript =
            DebateTranscript::new(positions(&[Stance::Favor, Stance::Against, Stance::Neutral]), 4);

        transcript.record_round(positions(&[Stance::Favor, Stance::Against, Stance::Neutral]));
        transcript.record_round(positions(&[Stance::Favor, Stance::Favor, Stance::Neutral]));
        assert!(!transcript.converged());

        // One stable round after the change is not enough
        transcript.record_round(positions(&[Stance::Favor, Stance::Favor, Stance::Neutral]));
        assert!(!transcript.converged());
        assert!(transcript.should_continue());

        // The second consecutive stable round is
        transcript.record_round(positions(&[Stance::Favor, Stance::Favor, Stance::Neutral]));
        assert!(transcript.converged());
    }

    #[test]
    fn test_prose_changes_are_not_material() {
        let kinds = SpecialistKind::all();
        let mut transcript = DebateTranscript::new(
            vec![PositionStatement::new(kinds[0], Stance::Favor, "first wording")],
            5,
        );

        transcript.record_round(vec![PositionStatement::new(
            kinds[0],
            Stance::Favor,
            "different wording",
        )]);
        transcript.record_round(vec![PositionStatement::new(
            kinds[0],
            Stance::Favor,
            "yet another wording",
        )]);

        assert!(transcript.converged());
    }

    #[test]
    fn test_budget_is_a_hard_cap() {
        let mut transcript =
            DebateTranscript::new(positions(&[Stance::Favor, Stance::Against, Stance::Neutral]), 2);

        // Alternate stances so the debate never converges
        transcript.record_round(positions(&[Stance::Against, Stance::Favor, Stance::Neutral]));
        assert!(transcript.should_continue());
        transcript.record_round(positions(&[Stance::Favor, Stance::Against, Stance::Neutral]));

        assert!(!transcript.converged());
        assert!(!transcript.should_continue());
        assert_eq!(transcript.rounds_run(), 2);
    }

    #[test]
    fn test_latest_positions_falls_back_to_baseline() {
        let base = positions(&[Stance::Neutral, Stance::Neutral, Stance::Neutral]);
        let transcript = DebateTranscript::new(base.clone(), 3);
        assert_eq!(transcript.latest_positions(), base.as_slice());
    }
}

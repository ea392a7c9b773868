//! Consensus aggregation
//!
//! Folds per-specialist outcomes (and, in debate mode, the transcript) into
//! one [`DecisionRecord`]. The fold is deterministic and pure: identical
//! inputs always produce an identical record.

use super::recommendation::{Confidence, Recommendation};
use super::record::{DebateSummary, DecisionRecord, FailureNote, SpecialistSection};
use crate::debate::round::PositionStatement;
use crate::debate::transcript::DebateTranscript;
use crate::request::profile::RelocationRequest;
use crate::specialist::outcome::SpecialistOutcome;
use crate::specialist::report::SpecialistReport;
use crate::specialist::stance::Stance;

/// Folds specialist outcomes into the final decision record
pub struct ConsensusAggregator;

impl ConsensusAggregator {
    /// Aggregate the outcomes of one request into a decision record.
    ///
    /// `outcomes` must be in specialist invocation order; supporting and
    /// concern lists preserve that order. `transcript` is present only in
    /// debate mode.
    pub fn aggregate(
        request: &RelocationRequest,
        outcomes: &[SpecialistOutcome],
        transcript: Option<&DebateTranscript>,
    ) -> DecisionRecord {
        let priority_missing = transcript.is_some() && request.priority_factor().is_none();

        let successes: Vec<&SpecialistReport> =
            outcomes.iter().filter_map(|o| o.report()).collect();
        let failures: Vec<FailureNote> = outcomes
            .iter()
            .filter_map(|o| {
                o.failure_reason()
                    .map(|reason| FailureNote::new(o.specialist(), reason.clone()))
            })
            .collect();

        if successes.is_empty() {
            return DecisionRecord {
                recommendation: Recommendation::InsufficientData,
                confidence: Confidence::Low,
                supporting_factors: Vec::new(),
                concerns: Vec::new(),
                specialist_reports: Vec::new(),
                failures,
                degraded: true,
                priority_missing,
                debate: transcript.map(|t| Self::debate_summary(t, request, None)),
                financial_impact: None,
                lifestyle_impact: None,
                next_steps: vec![
                    "Re-run the analysis once the specialist data sources are reachable."
                        .to_string(),
                ],
            };
        }

        let stances: Vec<Stance> = successes.iter().map(|r| r.stance()).collect();
        let recommendation = Self::majority(&stances);
        let confidence = Self::confidence(successes.len(), outcomes.len(), transcript);

        let supporting_factors: Vec<String> = successes
            .iter()
            .flat_map(|r| r.supporting_highlights().iter().cloned())
            .collect();
        let concerns: Vec<String> = successes
            .iter()
            .flat_map(|r| r.concern_highlights().iter().cloned())
            .collect();

        let specialist_reports: Vec<SpecialistSection> = successes
            .iter()
            .map(|r| SpecialistSection::new(r.kind(), r.summary_text()))
            .collect();

        let financial_impact = successes.iter().find_map(|r| match r {
            SpecialistReport::CostAnalyst(c) => Some(format!(
                "Overall cost of living in {} is {:.1}% {} than in {}.",
                request.destination,
                c.overall_delta_pct.abs(),
                if c.overall_delta_pct <= 0.0 { "lower" } else { "higher" },
                request.origin,
            )),
            _ => None,
        });
        let lifestyle_impact = successes.iter().find_map(|r| match r {
            SpecialistReport::SentimentAnalyst(s) => Some(format!(
                "{} rates {:.1}/10 for livability ({}).",
                request.destination, s.livability_score, s.overall_sentiment,
            )),
            _ => None,
        });

        let degraded = !failures.is_empty();
        let debate =
            transcript.map(|t| Self::debate_summary(t, request, Some(recommendation)));
        let next_steps = Self::next_steps(request, recommendation, &failures);

        DecisionRecord {
            recommendation,
            confidence,
            supporting_factors,
            concerns,
            specialist_reports,
            failures,
            degraded,
            priority_missing,
            debate,
            financial_impact,
            lifestyle_impact,
            next_steps,
        }
    }

    /// Unweighted majority over favor/against counts. Ties (including
    /// all-neutral) resolve to recommend-with-caution.
    fn majority(stances: &[Stance]) -> Recommendation {
        let favor = stances.iter().filter(|s| **s == Stance::Favor).count();
        let against = stances.iter().filter(|s| **s == Stance::Against).count();

        if favor > against {
            Recommendation::Recommend
        } else if against > favor {
            Recommendation::DoNotRecommend
        } else {
            Recommendation::RecommendWithCaution
        }
    }

    /// Confidence is the lower of two independent caps: the fraction of
    /// specialists that succeeded, and debate convergence.
    fn confidence(
        succeeded: usize,
        total: usize,
        transcript: Option<&DebateTranscript>,
    ) -> Confidence {
        let success_cap = if succeeded == total {
            Confidence::High
        } else if succeeded * 2 >= total {
            Confidence::Medium
        } else {
            Confidence::Low
        };

        let debate_cap = match transcript {
            Some(t) if !t.converged() => Confidence::Medium,
            _ => Confidence::High,
        };

        success_cap.capped_at(debate_cap)
    }

    fn debate_summary(
        transcript: &DebateTranscript,
        request: &RelocationRequest,
        recommendation: Option<Recommendation>,
    ) -> DebateSummary {
        let positions = transcript.latest_positions();
        let (agreement_points, disagreement_points) = Self::stance_clusters(positions);

        DebateSummary {
            rounds_run: transcript.rounds_run(),
            converged: transcript.converged(),
            agreement_points,
            disagreement_points,
            consensus_narrative: Self::narrative(transcript, request, recommendation),
        }
    }

    /// Group final positions by stance: stances shared by two or more
    /// specialists become agreement points, stances held alone against the
    /// rest become disagreement points.
    fn stance_clusters(positions: &[PositionStatement]) -> (Vec<String>, Vec<String>) {
        let mut agreements = Vec::new();
        let mut disagreements = Vec::new();
        let distinct = [Stance::Favor, Stance::Against, Stance::Neutral]
            .iter()
            .filter(|s| positions.iter().any(|p| p.stance == **s))
            .count();

        for stance in [Stance::Favor, Stance::Against, Stance::Neutral] {
            let holders: Vec<String> = positions
                .iter()
                .filter(|p| p.stance == stance)
                .map(|p| p.specialist.to_string())
                .collect();

            match holders.len() {
                0 => {}
                1 if distinct > 1 => {
                    disagreements.push(format!("{} alone {}", holders[0], stance.describe()));
                }
                1 => {}
                _ => {
                    agreements.push(format!(
                        "{} {}",
                        Self::join_names(&holders),
                        Self::describe_shared(stance)
                    ));
                }
            }
        }

        (agreements, disagreements)
    }

    /// Plural phrasing for a stance held by several specialists
    fn describe_shared(stance: Stance) -> &'static str {
        match stance {
            Stance::Favor => "support the move",
            Stance::Against => "advise against the move",
            Stance::Neutral => "are neutral on the move",
        }
    }

    fn narrative(
        transcript: &DebateTranscript,
        request: &RelocationRequest,
        recommendation: Option<Recommendation>,
    ) -> String {
        let rounds = transcript.rounds_run();
        let mut sentences = Vec::new();

        match recommendation {
            Some(rec) => sentences.push(format!(
                "After {} discussion round{}, the council {}.",
                rounds,
                if rounds == 1 { "" } else { "s" },
                rec.describe(),
            )),
            None => sentences.push(
                "No specialist completed its analysis, so the debate produced no consensus."
                    .to_string(),
            ),
        }

        if recommendation.is_some() {
            if transcript.converged() {
                sentences.push(
                    "Positions stabilized before the round budget was exhausted.".to_string(),
                );
            } else {
                sentences.push(
                    "Positions were still shifting when the round budget ran out.".to_string(),
                );
            }
        }

        match request.priority_factor() {
            Some(priority) => sentences.push(format!(
                "The user's stated priority, \"{}\", anchored the discussion and the final weighting.",
                priority,
            )),
            None => sentences.push(
                "No single priority factor was stated, so all perspectives carried equal weight."
                    .to_string(),
            ),
        }

        sentences.join(" ")
    }

    fn next_steps(
        request: &RelocationRequest,
        recommendation: Recommendation,
        failures: &[FailureNote],
    ) -> Vec<String> {
        let mut steps = vec![format!(
            "Spend an extended stay in {} before committing to the move.",
            request.destination,
        )];

        for failure in failures {
            steps.push(format!(
                "Re-run the analysis once the {} data source is reachable ({}).",
                failure.specialist, failure.reason,
            ));
        }

        if recommendation == Recommendation::RecommendWithCaution {
            steps.push(
                "Gather more data on the points of disagreement before deciding.".to_string(),
            );
        }

        if request.finances.is_empty() {
            steps.push(
                "Add income and expense figures for a sharper financial picture.".to_string(),
            );
        }

        steps
    }

    fn join_names(names: &[String]) -> String {
        match names.len() {
            0 => String::new(),
            1 => names[0].clone(),
            2 => format!("{} and {}", names[0], names[1]),
            _ => format!(
                "{} and {}",
                names[..names.len() - 1].join(", "),
                names[names.len() - 1]
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specialist::kind::SpecialistKind;
    use crate::specialist::outcome::FailureReason;
    use crate::specialist::report::{CostReport, MigrationReport, SentimentReport};

    fn request() -> RelocationRequest {
        RelocationRequest::new("Austin", "Seattle")
    }

    fn favor_cost() -> SpecialistOutcome {
        let mut report = CostReport::new(-12.0);
        report.key_insights = vec!["Housing costs drop sharply".to_string()];
        SpecialistOutcome::completed(SpecialistReport::CostAnalyst(report))
    }

    fn against_cost() -> SpecialistOutcome {
        let mut report = CostReport::new(18.0);
        report.key_insights = vec!["Rent nearly doubles".to_string()];
        SpecialistOutcome::completed(SpecialistReport::CostAnalyst(report))
    }

    fn favor_sentiment() -> SpecialistOutcome {
        let mut report = SentimentReport::new(8.0);
        report.overall_sentiment = "positive".to_string();
        report.notable_pros = vec!["Strong food scene".to_string()];
        SpecialistOutcome::completed(SpecialistReport::SentimentAnalyst(report))
    }

    fn against_migration() -> SpecialistOutcome {
        let mut report = MigrationReport::new(6);
        report.regrets_or_warnings =
            vec!["Many regretted the weather".to_string(), "Isolation".to_string()];
        SpecialistOutcome::completed(SpecialistReport::MigrationResearcher(report))
    }

    fn favor_migration() -> SpecialistOutcome {
        let mut report = MigrationReport::new(9);
        report.positive_outcomes = vec!["Career growth paid off".to_string()];
        SpecialistOutcome::completed(SpecialistReport::MigrationResearcher(report))
    }

    #[test]
    fn test_all_failures_yields_insufficient_data() {
        let outcomes = vec![
            SpecialistOutcome::failed(SpecialistKind::CostAnalyst, FailureReason::Timeout),
            SpecialistOutcome::failed(
                SpecialistKind::SentimentAnalyst,
                FailureReason::Provider("503".to_string()),
            ),
            SpecialistOutcome::failed(SpecialistKind::MigrationResearcher, FailureReason::Timeout),
        ];

        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);

        assert_eq!(record.recommendation, Recommendation::InsufficientData);
        assert_eq!(record.confidence, Confidence::Low);
        assert!(record.supporting_factors.is_empty());
        assert_eq!(record.failures.len(), 3);
        assert!(record.degraded);
    }

    #[test]
    fn test_majority_favor_recommends() {
        let outcomes = vec![favor_cost(), favor_sentiment(), against_migration()];
        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);
        assert_eq!(record.recommendation, Recommendation::Recommend);
    }

    #[test]
    fn test_majority_against_does_not_recommend() {
        let outcomes = vec![against_cost(), favor_sentiment(), against_migration()];
        // favor: 1, against: 2
        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);
        assert_eq!(record.recommendation, Recommendation::DoNotRecommend);
    }

    #[test]
    fn test_two_vs_two_tie_is_caution() {
        let outcomes = vec![
            favor_cost(),
            favor_sentiment(),
            against_migration(),
            against_cost(),
        ];
        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);
        assert_eq!(record.recommendation, Recommendation::RecommendWithCaution);
    }

    #[test]
    fn test_all_neutral_is_caution() {
        let outcomes = vec![SpecialistOutcome::completed(SpecialistReport::CostAnalyst(
            CostReport::new(0.0),
        ))];
        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);
        assert_eq!(record.recommendation, Recommendation::RecommendWithCaution);
    }

    #[test]
    fn test_full_success_without_debate_is_high_confidence() {
        let outcomes = vec![favor_cost(), favor_sentiment(), favor_migration()];
        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);
        assert_eq!(record.confidence, Confidence::High);
        assert!(!record.degraded);
    }

    #[test]
    fn test_partial_success_caps_confidence_at_medium() {
        let outcomes = vec![
            SpecialistOutcome::failed(SpecialistKind::CostAnalyst, FailureReason::Timeout),
            favor_sentiment(),
            favor_migration(),
        ];
        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);
        assert_eq!(record.recommendation, Recommendation::Recommend);
        assert_eq!(record.confidence, Confidence::Medium);
        assert!(record.degraded);
        assert_eq!(record.failures.len(), 1);
        assert_eq!(record.failures[0].specialist, SpecialistKind::CostAnalyst);
    }

    #[test]
    fn test_minority_success_floors_confidence_at_low() {
        let outcomes = vec![
            SpecialistOutcome::failed(SpecialistKind::CostAnalyst, FailureReason::Timeout),
            SpecialistOutcome::failed(
                SpecialistKind::SentimentAnalyst,
                FailureReason::Provider("down".to_string()),
            ),
            favor_migration(),
        ];
        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);
        assert_eq!(record.confidence, Confidence::Low);
    }

    #[test]
    fn test_unconverged_debate_caps_confidence_at_medium() {
        let outcomes = vec![favor_cost(), favor_sentiment(), favor_migration()];
        let baseline = vec![
            PositionStatement::new(SpecialistKind::CostAnalyst, Stance::Favor, ""),
            PositionStatement::new(SpecialistKind::SentimentAnalyst, Stance::Favor, ""),
            PositionStatement::new(SpecialistKind::MigrationResearcher, Stance::Favor, ""),
        ];
        let transcript = DebateTranscript::new(baseline, 3);

        let record = ConsensusAggregator::aggregate(&request(), &outcomes, Some(&transcript));
        assert_eq!(record.confidence, Confidence::Medium);
    }

    #[test]
    fn test_converged_debate_allows_high_confidence() {
        let outcomes = vec![favor_cost(), favor_sentiment(), favor_migration()];
        let baseline = vec![
            PositionStatement::new(SpecialistKind::CostAnalyst, Stance::Favor, ""),
            PositionStatement::new(SpecialistKind::SentimentAnalyst, Stance::Favor, ""),
            PositionStatement::new(SpecialistKind::MigrationResearcher, Stance::Favor, ""),
        ];
        let mut transcript = DebateTranscript::new(baseline.clone(), 3);
        transcript.record_round(baseline.clone());
        transcript.record_round(baseline);

        let record = ConsensusAggregator::aggregate(&request(), &outcomes, Some(&transcript));
        assert_eq!(record.recommendation, Recommendation::Recommend);
        assert_eq!(record.confidence, Confidence::High);
    }

    #[test]
    fn test_narrative_quotes_priority_factor() {
        let request = request().with_priority_factor("career growth");
        let outcomes = vec![favor_cost(), favor_sentiment()];
        let baseline = vec![
            PositionStatement::new(SpecialistKind::CostAnalyst, Stance::Favor, ""),
            PositionStatement::new(SpecialistKind::SentimentAnalyst, Stance::Favor, ""),
        ];
        let transcript = DebateTranscript::new(baseline, 3);

        let record = ConsensusAggregator::aggregate(&request, &outcomes, Some(&transcript));
        let debate = record.debate.expect("debate summary present");
        assert!(debate.consensus_narrative.contains("career growth"));
        assert!(!record.priority_missing);
    }

    #[test]
    fn test_priority_missing_flag_in_debate_mode() {
        let outcomes = vec![favor_cost(), favor_sentiment()];
        let transcript = DebateTranscript::new(
            vec![
                PositionStatement::new(SpecialistKind::CostAnalyst, Stance::Favor, ""),
                PositionStatement::new(SpecialistKind::SentimentAnalyst, Stance::Favor, ""),
            ],
            3,
        );

        let record = ConsensusAggregator::aggregate(&request(), &outcomes, Some(&transcript));
        assert!(record.priority_missing);

        let sequential = ConsensusAggregator::aggregate(&request(), &outcomes, None);
        assert!(!sequential.priority_missing);
    }

    #[test]
    fn test_highlights_preserve_invocation_order() {
        let outcomes = vec![favor_cost(), favor_sentiment(), favor_migration()];
        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);
        assert_eq!(
            record.supporting_factors,
            vec![
                "Housing costs drop sharply".to_string(),
                "Strong food scene".to_string(),
                "Career growth paid off".to_string(),
            ]
        );
    }

    #[test]
    fn test_agreement_and_disagreement_points() {
        let outcomes = vec![favor_cost(), favor_sentiment(), against_migration()];
        let baseline = vec![
            PositionStatement::new(SpecialistKind::CostAnalyst, Stance::Favor, ""),
            PositionStatement::new(SpecialistKind::SentimentAnalyst, Stance::Favor, ""),
            PositionStatement::new(SpecialistKind::MigrationResearcher, Stance::Against, ""),
        ];
        let transcript = DebateTranscript::new(baseline, 3);

        let record = ConsensusAggregator::aggregate(&request(), &outcomes, Some(&transcript));
        let debate = record.debate.expect("debate summary present");

        assert_eq!(debate.agreement_points.len(), 1);
        assert!(debate.agreement_points[0].contains("Cost Analyst and Sentiment Analyst"));
        assert_eq!(debate.disagreement_points.len(), 1);
        assert!(debate.disagreement_points[0].contains("Migration Researcher alone"));
    }

    #[test]
    fn test_impact_summaries_extracted() {
        let outcomes = vec![favor_cost(), favor_sentiment()];
        let record = ConsensusAggregator::aggregate(&request(), &outcomes, None);

        let financial = record.financial_impact.expect("cost specialist reported");
        assert!(financial.contains("12.0% lower"));
        let lifestyle = record.lifestyle_impact.expect("sentiment specialist reported");
        assert!(lifestyle.contains("8.0/10"));
    }
}

//! Handle request use case
//!
//! The orchestrator: validates the incoming draft, distributes it through
//! the configured delegation strategy, folds the outcomes into a decision
//! record, and hands that record back. Exactly one of a decision record or
//! a validation failure comes out of every call; a request is never left
//! unresolved, and only validation failures cross this boundary as errors.

use crate::config::OrchestrationParams;
use crate::ports::audit_log::{AuditEvent, AuditLog, NoAuditLog};
use crate::ports::normalizer::{RequestNormalizer, ValidationFailure};
use crate::ports::progress::{NoProgress, Phase, ProgressNotifier};
use crate::ports::specialist::SpecialistProvider;
use crate::strategy::{Deadline, DelegationStrategy};
use council_domain::{ConsensusAggregator, DecisionRecord, RelocationRequest, RequestDraft};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle of one request inside the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Received,
    Validating,
    Distributing,
    Aggregating,
    Completed,
    Rejected,
}

impl RequestState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestState::Received => "received",
            RequestState::Validating => "validating",
            RequestState::Distributing => "distributing",
            RequestState::Aggregating => "aggregating",
            RequestState::Completed => "completed",
            RequestState::Rejected => "rejected",
        }
    }

    /// Legal transitions of the per-request state machine.
    /// `Completed` and `Rejected` are terminal.
    pub fn can_transition_to(&self, next: RequestState) -> bool {
        matches!(
            (self, next),
            (RequestState::Received, RequestState::Validating)
                | (RequestState::Validating, RequestState::Distributing)
                | (RequestState::Validating, RequestState::Rejected)
                | (RequestState::Distributing, RequestState::Aggregating)
                | (RequestState::Aggregating, RequestState::Completed)
        )
    }
}

/// Result of a handled request: the validated request travels with the
/// record so downstream renderers know which cities it was about.
#[derive(Debug, Clone)]
pub struct HandledRequest {
    pub request: RelocationRequest,
    pub record: DecisionRecord,
}

/// Use case for processing one relocation request end to end
pub struct HandleRequestUseCase<N: RequestNormalizer> {
    normalizer: N,
    strategy: Box<dyn DelegationStrategy>,
    specialists: Vec<Arc<dyn SpecialistProvider>>,
    params: OrchestrationParams,
    audit: Arc<dyn AuditLog>,
}

impl<N: RequestNormalizer> HandleRequestUseCase<N> {
    pub fn new(
        normalizer: N,
        strategy: Box<dyn DelegationStrategy>,
        specialists: Vec<Arc<dyn SpecialistProvider>>,
        params: OrchestrationParams,
    ) -> Self {
        Self {
            normalizer,
            strategy,
            specialists,
            params,
            audit: Arc::new(NoAuditLog),
        }
    }

    pub fn with_audit_log(mut self, audit: Arc<dyn AuditLog>) -> Self {
        self.audit = audit;
        self
    }

    pub fn params(&self) -> &OrchestrationParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn handle(&self, draft: RequestDraft) -> Result<HandledRequest, ValidationFailure> {
        self.handle_with_progress(draft, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn handle_with_progress(
        &self,
        draft: RequestDraft,
        progress: &dyn ProgressNotifier,
    ) -> Result<HandledRequest, ValidationFailure> {
        let mut state = RequestState::Received;
        self.audit.record(AuditEvent::new(
            "request_received",
            serde_json::json!({
                "origin": draft.origin,
                "destination": draft.destination,
            }),
        ));

        self.advance(&mut state, RequestState::Validating);
        let request = match self.normalizer.normalize(draft).await {
            Ok(request) => request,
            Err(failure) => {
                warn!("Request rejected: {}", failure);
                self.advance(&mut state, RequestState::Rejected);
                self.audit.record(AuditEvent::new(
                    "request_rejected",
                    serde_json::json!({ "reason": failure.to_string() }),
                ));
                return Err(failure);
            }
        };

        info!(
            "Handling request {} -> {} via {} strategy",
            request.origin,
            request.destination,
            self.strategy.name()
        );

        self.advance(&mut state, RequestState::Distributing);
        let deadline = Deadline::after(self.params.request_timeout);
        let distribution = self
            .strategy
            .distribute(&request, &self.specialists, &deadline, progress)
            .await;

        let succeeded = distribution.outcomes.iter().filter(|o| o.is_success()).count();
        self.audit.record(AuditEvent::new(
            "distribution_completed",
            serde_json::json!({
                "strategy": self.strategy.name(),
                "specialists": distribution.outcomes.len(),
                "succeeded": succeeded,
                "debate_rounds": distribution.transcript.as_ref().map(|t| t.rounds_run()),
            }),
        ));

        self.advance(&mut state, RequestState::Aggregating);
        progress.on_phase_start(&Phase::Synthesis, 1);
        let record = ConsensusAggregator::aggregate(
            &request,
            &distribution.outcomes,
            distribution.transcript.as_ref(),
        );
        progress.on_phase_complete(&Phase::Synthesis);

        self.advance(&mut state, RequestState::Completed);
        self.audit.record(AuditEvent::new(
            "decision_completed",
            serde_json::json!({
                "recommendation": record.recommendation.as_str(),
                "confidence": record.confidence.as_str(),
                "degraded": record.degraded,
            }),
        ));

        Ok(HandledRequest { request, record })
    }

    fn advance(&self, state: &mut RequestState, next: RequestState) {
        debug_assert!(
            state.can_transition_to(next),
            "illegal request state transition: {} -> {}",
            state.as_str(),
            next.as_str()
        );
        debug!("Request state: {} -> {}", state.as_str(), next.as_str());
        *state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DelegationMode;
    use crate::strategy::testing::{StaticSpecialist, report_with_stance};
    use crate::strategy::{DebateStrategy, SequentialStrategy};
    use async_trait::async_trait;
    use council_domain::{
        Confidence, FinancialSnapshot, Recommendation, SpecialistKind, Stance,
    };
    use std::sync::Mutex;
    use std::time::Duration;

    /// Normalizer that accepts any draft carrying both cities
    struct AcceptAllNormalizer;

    #[async_trait]
    impl RequestNormalizer for AcceptAllNormalizer {
        async fn normalize(
            &self,
            draft: RequestDraft,
        ) -> Result<RelocationRequest, ValidationFailure> {
            let origin = draft.origin.ok_or(ValidationFailure::MissingOrigin)?;
            let destination = draft
                .destination
                .ok_or(ValidationFailure::MissingDestination)?;

            let mut request = RelocationRequest::new(origin, destination)
                .with_finances(FinancialSnapshot::new(
                    draft.annual_income,
                    draft.monthly_expenses,
                ))
                .with_preferences(draft.preferences);
            if let Some(priority) = draft.priority_factor {
                request = request.with_priority_factor(priority);
            }
            Ok(request)
        }
    }

    fn favor_council() -> Vec<Arc<dyn SpecialistProvider>> {
        vec![
            Arc::new(StaticSpecialist::new(
                SpecialistKind::CostAnalyst,
                Stance::Favor,
            )),
            Arc::new(StaticSpecialist::new(
                SpecialistKind::SentimentAnalyst,
                Stance::Favor,
            )),
            Arc::new(StaticSpecialist::new(
                SpecialistKind::MigrationResearcher,
                Stance::Favor,
            )),
        ]
    }

    fn draft() -> RequestDraft {
        RequestDraft::new("Austin", "Seattle")
            .with_income(150_000.0)
            .with_priority_factor("outdoor activities")
    }

    #[test]
    fn test_state_machine_legal_paths() {
        use RequestState::*;
        assert!(Received.can_transition_to(Validating));
        assert!(Validating.can_transition_to(Distributing));
        assert!(Validating.can_transition_to(Rejected));
        assert!(Distributing.can_transition_to(Aggregating));
        assert!(Aggregating.can_transition_to(Completed));

        // Terminal states and skips are illegal
        assert!(!Completed.can_transition_to(Validating));
        assert!(!Rejected.can_transition_to(Distributing));
        assert!(!Received.can_transition_to(Distributing));
        assert!(!Distributing.can_transition_to(Completed));
    }

    #[tokio::test]
    async fn test_rejected_draft_invokes_no_specialists() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let specialists: Vec<Arc<dyn SpecialistProvider>> = vec![Arc::new(
            StaticSpecialist::new(SpecialistKind::CostAnalyst, Stance::Favor)
                .with_call_log(Arc::clone(&log)),
        )];

        let use_case = HandleRequestUseCase::new(
            AcceptAllNormalizer,
            Box::new(SequentialStrategy),
            specialists,
            OrchestrationParams::default(),
        );

        let result = use_case
            .handle(RequestDraft {
                destination: Some("Seattle".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(result.unwrap_err(), ValidationFailure::MissingOrigin);
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sequential_full_favor_recommends_with_high_confidence() {
        let use_case = HandleRequestUseCase::new(
            AcceptAllNormalizer,
            Box::new(SequentialStrategy),
            favor_council(),
            OrchestrationParams::default(),
        );

        let handled = use_case.handle(draft()).await.expect("valid draft");
        assert_eq!(handled.record.recommendation, Recommendation::Recommend);
        assert_eq!(handled.record.confidence, Confidence::High);
        assert!(handled.record.debate.is_none());
        assert!(!handled.record.degraded);
    }

    #[tokio::test]
    async fn test_debate_full_favor_converges_to_high_confidence() {
        let params = OrchestrationParams::default().with_mode(DelegationMode::Debate);
        let use_case = HandleRequestUseCase::new(
            AcceptAllNormalizer,
            Box::new(DebateStrategy::new(params.debate_rounds)),
            favor_council(),
            params,
        );

        let handled = use_case.handle(draft()).await.expect("valid draft");
        assert_eq!(handled.record.recommendation, Recommendation::Recommend);
        assert_eq!(handled.record.confidence, Confidence::High);

        let debate = handled.record.debate.expect("debate summary present");
        assert!(debate.converged);
        assert!(debate.consensus_narrative.contains("outdoor activities"));
    }

    #[tokio::test]
    async fn test_cost_timeout_caps_confidence_and_leaves_a_note() {
        let specialists: Vec<Arc<dyn SpecialistProvider>> = vec![
            Arc::new(
                StaticSpecialist::new(SpecialistKind::CostAnalyst, Stance::Favor)
                    .with_delay(Duration::from_millis(500)),
            ),
            Arc::new(StaticSpecialist::new(
                SpecialistKind::SentimentAnalyst,
                Stance::Favor,
            )),
            Arc::new(StaticSpecialist::new(
                SpecialistKind::MigrationResearcher,
                Stance::Favor,
            )),
        ];

        let params = OrchestrationParams::default()
            .with_mode(DelegationMode::Debate)
            .with_request_timeout(Duration::from_millis(80));
        let use_case = HandleRequestUseCase::new(
            AcceptAllNormalizer,
            Box::new(DebateStrategy::new(params.debate_rounds)),
            specialists,
            params,
        );

        let handled = use_case.handle(draft()).await.expect("valid draft");
        // Two of three stances survive; the recommendation stands but
        // confidence may not exceed medium.
        assert_eq!(handled.record.recommendation, Recommendation::Recommend);
        assert!(handled.record.confidence <= Confidence::Medium);
        assert!(handled.record.degraded);
        assert_eq!(handled.record.failures.len(), 1);
        assert_eq!(
            handled.record.failures[0].specialist,
            SpecialistKind::CostAnalyst
        );
    }

    #[tokio::test]
    async fn test_zero_specialists_still_produces_a_record() {
        let use_case = HandleRequestUseCase::new(
            AcceptAllNormalizer,
            Box::new(SequentialStrategy),
            Vec::new(),
            OrchestrationParams::default(),
        );

        let handled = use_case.handle(draft()).await.expect("valid draft");
        assert_eq!(
            handled.record.recommendation,
            Recommendation::InsufficientData
        );
        assert_eq!(handled.record.confidence, Confidence::Low);
    }

    #[tokio::test]
    async fn test_idempotent_provider_keeps_its_stance() {
        let provider = StaticSpecialist::new(SpecialistKind::CostAnalyst, Stance::Favor);
        let request = RelocationRequest::new("Austin", "Seattle");

        let first = provider.invoke(&request).await.expect("first call");
        let second = provider.invoke(&request).await.expect("second call");
        assert_eq!(first.stance(), second.stance());
        assert_eq!(first.stance(), report_with_stance(SpecialistKind::CostAnalyst, Stance::Favor).stance());
    }
}

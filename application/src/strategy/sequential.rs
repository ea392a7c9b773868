//! Sequential-independent delegation
//!
//! Invokes each specialist in its declared registration order. Each call
//! sees only the request, never another specialist's output, and a failure
//! never blocks the specialists after it.

use super::{Deadline, DelegationStrategy, Distribution, invoke_specialist};
use crate::ports::progress::{Phase, ProgressNotifier};
use crate::ports::specialist::SpecialistProvider;
use async_trait::async_trait;
use council_domain::{FailureReason, RelocationRequest, SpecialistOutcome};
use std::sync::Arc;
use tracing::{debug, info};

/// One specialist at a time, isolate-and-continue
pub struct SequentialStrategy;

#[async_trait]
impl DelegationStrategy for SequentialStrategy {
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn distribute(
        &self,
        request: &RelocationRequest,
        specialists: &[Arc<dyn SpecialistProvider>],
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
    ) -> Distribution {
        info!(
            "Sequential consultation of {} specialists",
            specialists.len()
        );
        progress.on_phase_start(&Phase::Consultation, specialists.len());

        let mut outcomes = Vec::with_capacity(specialists.len());

        for provider in specialists {
            let kind = provider.kind();

            let outcome = if deadline.expired() {
                debug!("Deadline expired before {} was invoked", kind);
                SpecialistOutcome::failed(kind, FailureReason::Timeout)
            } else {
                invoke_specialist(Arc::clone(provider), request.clone(), deadline.remaining())
                    .await
            };

            progress.on_specialist_complete(&Phase::Consultation, kind, outcome.is_success());
            outcomes.push(outcome);
        }

        progress.on_phase_complete(&Phase::Consultation);

        Distribution {
            outcomes,
            transcript: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::strategy::testing::{FailingSpecialist, PanickingSpecialist, StaticSpecialist};
    use council_domain::{SpecialistKind, Stance};
    use std::sync::Mutex;
    use std::time::Duration;

    fn request() -> RelocationRequest {
        RelocationRequest::new("Austin", "Seattle")
    }

    fn council(
        log: &Arc<Mutex<Vec<SpecialistKind>>>,
    ) -> Vec<Arc<dyn SpecialistProvider>> {
        vec![
            Arc::new(
                StaticSpecialist::new(SpecialistKind::CostAnalyst, Stance::Favor)
                    .with_call_log(Arc::clone(log)),
            ),
            Arc::new(
                StaticSpecialist::new(SpecialistKind::SentimentAnalyst, Stance::Favor)
                    .with_call_log(Arc::clone(log)),
            ),
            Arc::new(
                StaticSpecialist::new(SpecialistKind::MigrationResearcher, Stance::Favor)
                    .with_call_log(Arc::clone(log)),
            ),
        ]
    }

    #[tokio::test]
    async fn test_invocation_order_is_deterministic() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let specialists = council(&log);
        let deadline = Deadline::after(Duration::from_secs(5));

        let strategy = SequentialStrategy;
        strategy
            .distribute(&request(), &specialists, &deadline, &NoProgress)
            .await;
        let first_run = log.lock().unwrap().clone();
        log.lock().unwrap().clear();

        strategy
            .distribute(&request(), &specialists, &deadline, &NoProgress)
            .await;
        let second_run = log.lock().unwrap().clone();

        let expected = vec![
            SpecialistKind::CostAnalyst,
            SpecialistKind::SentimentAnalyst,
            SpecialistKind::MigrationResearcher,
        ];
        assert_eq!(first_run, expected);
        assert_eq!(second_run, expected);
    }

    #[tokio::test]
    async fn test_failure_does_not_block_later_specialists() {
        let specialists: Vec<Arc<dyn SpecialistProvider>> = vec![
            Arc::new(StaticSpecialist::new(
                SpecialistKind::CostAnalyst,
                Stance::Favor,
            )),
            Arc::new(FailingSpecialist {
                kind: SpecialistKind::SentimentAnalyst,
            }),
            Arc::new(StaticSpecialist::new(
                SpecialistKind::MigrationResearcher,
                Stance::Favor,
            )),
        ];
        let deadline = Deadline::after(Duration::from_secs(5));

        let distribution = SequentialStrategy
            .distribute(&request(), &specialists, &deadline, &NoProgress)
            .await;

        assert_eq!(distribution.outcomes.len(), 3);
        assert!(distribution.outcomes[0].is_success());
        assert!(!distribution.outcomes[1].is_success());
        assert!(distribution.outcomes[2].is_success());
    }

    #[tokio::test]
    async fn test_panicking_specialist_is_isolated() {
        let specialists: Vec<Arc<dyn SpecialistProvider>> = vec![
            Arc::new(PanickingSpecialist {
                kind: SpecialistKind::CostAnalyst,
            }),
            Arc::new(StaticSpecialist::new(
                SpecialistKind::SentimentAnalyst,
                Stance::Favor,
            )),
        ];
        let deadline = Deadline::after(Duration::from_secs(5));

        let distribution = SequentialStrategy
            .distribute(&request(), &specialists, &deadline, &NoProgress)
            .await;

        assert_eq!(distribution.outcomes.len(), 2);
        match distribution.outcomes[0].failure_reason() {
            Some(FailureReason::Internal(detail)) => assert!(detail.contains("panicked")),
            other => panic!("expected internal failure, got {:?}", other),
        }
        assert!(distribution.outcomes[1].is_success());
    }

    #[tokio::test]
    async fn test_expired_deadline_marks_remaining_as_timeout() {
        let specialists: Vec<Arc<dyn SpecialistProvider>> = vec![
            Arc::new(
                StaticSpecialist::new(SpecialistKind::CostAnalyst, Stance::Favor)
                    .with_delay(Duration::from_millis(200)),
            ),
            Arc::new(StaticSpecialist::new(
                SpecialistKind::SentimentAnalyst,
                Stance::Favor,
            )),
        ];
        let deadline = Deadline::after(Duration::from_millis(20));

        let distribution = SequentialStrategy
            .distribute(&request(), &specialists, &deadline, &NoProgress)
            .await;

        assert_eq!(
            distribution.outcomes[0].failure_reason(),
            Some(&FailureReason::Timeout)
        );
        assert_eq!(
            distribution.outcomes[1].failure_reason(),
            Some(&FailureReason::Timeout)
        );
    }

    #[tokio::test]
    async fn test_no_transcript_in_sequential_mode() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let specialists = council(&log);
        let deadline = Deadline::after(Duration::from_secs(5));

        let distribution = SequentialStrategy
            .distribute(&request(), &specialists, &deadline, &NoProgress)
            .await;

        assert!(distribution.transcript.is_none());
    }
}

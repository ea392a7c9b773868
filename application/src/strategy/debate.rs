//! Simultaneous-debate delegation
//!
//! All specialists are consulted concurrently, then revise their positions
//! across a bounded number of discussion rounds. Within a round every
//! revision runs concurrently; rounds themselves are strictly sequential. A
//! debate that settles (two consecutive rounds without a stance change)
//! stops before its round budget runs out.

use super::{Deadline, DelegationStrategy, Distribution, invoke_specialist};
use crate::ports::progress::{Phase, ProgressNotifier};
use crate::ports::specialist::SpecialistProvider;
use async_trait::async_trait;
use council_domain::{
    DebateTranscript, FailureReason, PositionStatement, RelocationRequest, SpecialistKind,
    SpecialistOutcome,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Concurrent consultation followed by bounded revision rounds
pub struct DebateStrategy {
    round_budget: usize,
}

impl DebateStrategy {
    pub fn new(round_budget: usize) -> Self {
        Self { round_budget }
    }
}

#[async_trait]
impl DelegationStrategy for DebateStrategy {
    fn name(&self) -> &'static str {
        "debate"
    }

    async fn distribute(
        &self,
        request: &RelocationRequest,
        specialists: &[Arc<dyn SpecialistProvider>],
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
    ) -> Distribution {
        info!(
            "Debate distribution across {} specialists (budget {} rounds)",
            specialists.len(),
            self.round_budget
        );

        let outcomes = self
            .phase_consultation(request, specialists, deadline, progress)
            .await;

        // Only specialists that produced a report take part in the debate
        let baseline: Vec<PositionStatement> = outcomes
            .iter()
            .filter_map(|o| o.report())
            .map(PositionStatement::from_report)
            .collect();

        if baseline.is_empty() {
            debug!("No specialist completed; skipping the debate");
            return Distribution {
                outcomes,
                transcript: None,
            };
        }

        let transcript = self
            .phase_debate(request, specialists, baseline, deadline, progress)
            .await;

        Distribution {
            outcomes,
            transcript: Some(transcript),
        }
    }
}

impl DebateStrategy {
    /// Consult every specialist concurrently, reassembling results into
    /// registration order.
    async fn phase_consultation(
        &self,
        request: &RelocationRequest,
        specialists: &[Arc<dyn SpecialistProvider>],
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
    ) -> Vec<SpecialistOutcome> {
        progress.on_phase_start(&Phase::Consultation, specialists.len());

        let mut join_set = JoinSet::new();

        for (index, provider) in specialists.iter().enumerate() {
            let provider = Arc::clone(provider);
            let request = request.clone();
            let remaining = deadline.remaining();

            join_set.spawn(async move {
                let outcome = invoke_specialist(provider, request, remaining).await;
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<SpecialistOutcome>> = vec![None; specialists.len()];

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, outcome)) => {
                    progress.on_specialist_complete(
                        &Phase::Consultation,
                        outcome.specialist(),
                        outcome.is_success(),
                    );
                    slots[index] = Some(outcome);
                }
                Err(e) => {
                    warn!("Consultation task join error: {}", e);
                }
            }
        }

        let outcomes: Vec<SpecialistOutcome> = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    SpecialistOutcome::failed(
                        specialists[index].kind(),
                        FailureReason::Internal("consultation task aborted".to_string()),
                    )
                })
            })
            .collect();

        progress.on_phase_complete(&Phase::Consultation);
        outcomes
    }

    /// Run up to `round_budget` revision rounds, stopping early once the
    /// positions settle or the request deadline expires.
    async fn phase_debate(
        &self,
        request: &RelocationRequest,
        specialists: &[Arc<dyn SpecialistProvider>],
        baseline: Vec<PositionStatement>,
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
    ) -> DebateTranscript {
        let providers: HashMap<SpecialistKind, Arc<dyn SpecialistProvider>> = specialists
            .iter()
            .map(|p| (p.kind(), Arc::clone(p)))
            .collect();

        let participants = baseline.len();
        let mut transcript = DebateTranscript::new(baseline, self.round_budget);

        progress.on_phase_start(&Phase::Debate, participants * self.round_budget);

        while transcript.should_continue() {
            if deadline.expired() {
                warn!(
                    "Deadline expired after {} debate rounds; stopping early",
                    transcript.rounds_run()
                );
                break;
            }

            let current: Vec<PositionStatement> = transcript.latest_positions().to_vec();
            let mut handles = Vec::with_capacity(current.len());

            for (index, own) in current.iter().enumerate() {
                let peers: Vec<PositionStatement> = current
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != index)
                    .map(|(_, p)| p.clone())
                    .collect();
                let provider = providers.get(&own.specialist).cloned();
                let request = request.clone();
                let own_position = own.clone();
                let remaining = deadline.remaining();

                handles.push(tokio::spawn(async move {
                    let Some(provider) = provider else {
                        return (own_position, false);
                    };

                    match tokio::time::timeout(
                        remaining,
                        provider.revise(&request, &own_position, &peers),
                    )
                    .await
                    {
                        Ok(Ok(position)) => (position, true),
                        Ok(Err(e)) => {
                            warn!(
                                "Revision by {} failed, keeping prior position: {}",
                                own_position.specialist, e
                            );
                            (own_position, false)
                        }
                        Err(_) => {
                            warn!(
                                "Revision by {} timed out, keeping prior position",
                                own_position.specialist
                            );
                            (own_position, false)
                        }
                    }
                }));
            }

            let results = futures::future::join_all(handles).await;
            let mut positions = Vec::with_capacity(current.len());

            for (fallback, result) in current.into_iter().zip(results) {
                let (position, success) = match result {
                    Ok(r) => r,
                    Err(e) => {
                        warn!("Revision task aborted: {}", e);
                        (fallback, false)
                    }
                };
                progress.on_specialist_complete(&Phase::Debate, position.specialist, success);
                positions.push(position);
            }

            transcript.record_round(positions);
            debug!(
                "Debate round {} recorded (converged: {})",
                transcript.rounds_run(),
                transcript.converged()
            );
        }

        progress.on_phase_complete(&Phase::Debate);
        transcript
    }
}

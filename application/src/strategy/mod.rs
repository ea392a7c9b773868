//! Delegation strategies
//!
//! A strategy decides how one request is distributed across the registered
//! specialists. Strategies never error: a specialist failure is recorded as
//! data in the returned outcomes so the aggregator can still produce a
//! best-effort decision.

pub mod debate;
pub mod sequential;

pub use debate::DebateStrategy;
pub use sequential::SequentialStrategy;

use crate::ports::progress::ProgressNotifier;
use crate::ports::specialist::SpecialistProvider;
use async_trait::async_trait;
use council_domain::{
    DebateTranscript, FailureReason, RelocationRequest, SpecialistOutcome,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::warn;

/// Everything a strategy produces for one request
#[derive(Debug)]
pub struct Distribution {
    /// One outcome per registered specialist, in registration order
    pub outcomes: Vec<SpecialistOutcome>,
    /// Debate transcript, present only when a debate actually ran
    pub transcript: Option<DebateTranscript>,
}

/// Request-level deadline shared by every call a strategy makes
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// A deadline this long from now
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
        }
    }

    /// Time left before the deadline, zero once it has passed
    pub fn remaining(&self) -> Duration {
        self.at.duration_since(Instant::now())
    }

    pub fn expired(&self) -> bool {
        self.remaining().is_zero()
    }
}

/// Produces all specialist outcomes for one request
#[async_trait]
pub trait DelegationStrategy: Send + Sync {
    /// Name of this strategy, for logs and reports
    fn name(&self) -> &'static str;

    /// Distribute the request across the specialists.
    ///
    /// Must return one outcome per specialist, in the given registration
    /// order, and must never panic or error: every failure mode becomes a
    /// `SpecialistOutcome::Failed`.
    async fn distribute(
        &self,
        request: &RelocationRequest,
        specialists: &[Arc<dyn SpecialistProvider>],
        deadline: &Deadline,
        progress: &dyn ProgressNotifier,
    ) -> Distribution;
}

/// Invoke one specialist with the remaining request budget.
///
/// The call runs in its own task so a panicking provider is isolated and
/// reported as an internal failure instead of tearing down the request.
/// On timeout the in-flight call is left to finish on its own; its result
/// is discarded.
pub(crate) async fn invoke_specialist(
    provider: Arc<dyn SpecialistProvider>,
    request: RelocationRequest,
    remaining: Duration,
) -> SpecialistOutcome {
    let kind = provider.kind();
    let handle = tokio::spawn(async move { provider.invoke(&request).await });

    match tokio::time::timeout(remaining, handle).await {
        Ok(Ok(Ok(report))) => SpecialistOutcome::completed(report),
        Ok(Ok(Err(e))) => {
            warn!("Specialist {} failed: {}", kind, e);
            SpecialistOutcome::failed(kind, FailureReason::Provider(e.to_string()))
        }
        Ok(Err(join_err)) => {
            warn!("Specialist {} aborted: {}", kind, join_err);
            let detail = if join_err.is_panic() {
                "specialist panicked".to_string()
            } else {
                join_err.to_string()
            };
            SpecialistOutcome::failed(kind, FailureReason::Internal(detail))
        }
        Err(_) => {
            warn!("Specialist {} timed out", kind);
            SpecialistOutcome::failed(kind, FailureReason::Timeout)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Mock providers shared by the strategy and use-case tests

    use crate::ports::specialist::{ProviderError, SpecialistProvider};
    use async_trait::async_trait;
    use council_domain::{
        CostReport, MigrationReport, PositionStatement, RelocationRequest, SentimentReport,
        SpecialistKind, SpecialistReport, Stance,
    };
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Build a report of the right schema for `kind` with the given stance
    pub fn report_with_stance(kind: SpecialistKind, stance: Stance) -> SpecialistReport {
        match kind {
            SpecialistKind::CostAnalyst => {
                let delta = match stance {
                    Stance::Favor => -12.0,
                    Stance::Against => 14.0,
                    Stance::Neutral => 0.5,
                };
                let mut report = CostReport::new(delta);
                report.key_insights = vec![format!("cost insight ({})", stance)];
                SpecialistReport::CostAnalyst(report)
            }
            SpecialistKind::SentimentAnalyst => {
                let score = match stance {
                    Stance::Favor => 8.0,
                    Stance::Against => 2.0,
                    Stance::Neutral => 5.0,
                };
                let mut report = SentimentReport::new(score);
                report.overall_sentiment = "mock".to_string();
                report.notable_pros = vec![format!("sentiment pro ({})", stance)];
                SpecialistReport::SentimentAnalyst(report)
            }
            SpecialistKind::MigrationResearcher => {
                let mut report = MigrationReport::new(5);
                match stance {
                    Stance::Favor => report.positive_outcomes = vec!["went well".to_string()],
                    Stance::Against => report.regrets_or_warnings = vec!["went badly".to_string()],
                    Stance::Neutral => {}
                }
                SpecialistReport::MigrationResearcher(report)
            }
        }
    }

    /// Provider with a fixed stance and optional artificial latency.
    /// Records every invocation into a shared call log.
    pub struct StaticSpecialist {
        pub kind: SpecialistKind,
        pub stance: Stance,
        pub delay: Option<Duration>,
        pub call_log: Arc<Mutex<Vec<SpecialistKind>>>,
    }

    impl StaticSpecialist {
        pub fn new(kind: SpecialistKind, stance: Stance) -> Self {
            Self {
                kind,
                stance,
                delay: None,
                call_log: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn with_call_log(mut self, log: Arc<Mutex<Vec<SpecialistKind>>>) -> Self {
            self.call_log = log;
            self
        }
    }

    #[async_trait]
    impl SpecialistProvider for StaticSpecialist {
        fn kind(&self) -> SpecialistKind {
            self.kind
        }

        async fn invoke(
            &self,
            _request: &RelocationRequest,
        ) -> Result<SpecialistReport, ProviderError> {
            self.call_log.lock().unwrap().push(self.kind);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(report_with_stance(self.kind, self.stance))
        }
    }

    /// Provider that always fails
    pub struct FailingSpecialist {
        pub kind: SpecialistKind,
    }

    #[async_trait]
    impl SpecialistProvider for FailingSpecialist {
        fn kind(&self) -> SpecialistKind {
            self.kind
        }

        async fn invoke(
            &self,
            _request: &RelocationRequest,
        ) -> Result<SpecialistReport, ProviderError> {
            Err(ProviderError::Unavailable("mock outage".to_string()))
        }
    }

    /// Provider that panics, to exercise the isolation boundary
    pub struct PanickingSpecialist {
        pub kind: SpecialistKind,
    }

    #[async_trait]
    impl SpecialistProvider for PanickingSpecialist {
        fn kind(&self) -> SpecialistKind {
            self.kind
        }

        async fn invoke(
            &self,
            _request: &RelocationRequest,
        ) -> Result<SpecialistReport, ProviderError> {
            panic!("mock provider bug");
        }
    }

    /// Provider whose stance flips on every revision, so a debate with it
    /// never converges
    pub struct FlippingSpecialist {
        pub kind: SpecialistKind,
    }

    #[async_trait]
    impl SpecialistProvider for FlippingSpecialist {
        fn kind(&self) -> SpecialistKind {
            self.kind
        }

        async fn invoke(
            &self,
            _request: &RelocationRequest,
        ) -> Result<SpecialistReport, ProviderError> {
            Ok(report_with_stance(self.kind, Stance::Favor))
        }

        async fn revise(
            &self,
            _request: &RelocationRequest,
            own: &PositionStatement,
            _peers: &[PositionStatement],
        ) -> Result<PositionStatement, ProviderError> {
            let flipped = match own.stance {
                Stance::Favor => Stance::Against,
                Stance::Against => Stance::Favor,
                Stance::Neutral => Stance::Favor,
            };
            Ok(PositionStatement::new(self.kind, flipped, "changed my mind"))
        }
    }

    /// Provider whose revise call always fails
    pub struct BrokenReviser {
        pub kind: SpecialistKind,
    }

    #[async_trait]
    impl SpecialistProvider for BrokenReviser {
        fn kind(&self) -> SpecialistKind {
            self.kind
        }

        async fn invoke(
            &self,
            _request: &RelocationRequest,
        ) -> Result<SpecialistReport, ProviderError> {
            Ok(report_with_stance(self.kind, Stance::Favor))
        }

        async fn revise(
            &self,
            _request: &RelocationRequest,
            _own: &PositionStatement,
            _peers: &[PositionStatement],
        ) -> Result<PositionStatement, ProviderError> {
            Err(ProviderError::Other("revision channel down".to_string()))
        }
    }
}

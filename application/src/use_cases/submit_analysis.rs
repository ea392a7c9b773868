//! Submit analysis use case
//!
//! The async seam behind the front door: a caller submits a draft, gets a
//! job identifier immediately, and looks the result up later. The store
//! entry is created on acceptance and moved to a terminal status exactly
//! once when the orchestrator finishes.

use super::handle_request::HandleRequestUseCase;
use crate::ports::job_store::{JobId, JobRecord, JobStatus, JobStore};
use crate::ports::normalizer::RequestNormalizer;
use crate::ports::report_sink::ReportSink;
use council_domain::RequestDraft;
use std::sync::Arc;
use tracing::{info, warn};

/// Accepts drafts for asynchronous processing
pub struct SubmitAnalysisUseCase<N: RequestNormalizer + 'static> {
    orchestrator: Arc<HandleRequestUseCase<N>>,
    store: Arc<dyn JobStore>,
    sink: Arc<dyn ReportSink>,
}

impl<N: RequestNormalizer + 'static> SubmitAnalysisUseCase<N> {
    pub fn new(
        orchestrator: Arc<HandleRequestUseCase<N>>,
        store: Arc<dyn JobStore>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            orchestrator,
            store,
            sink,
        }
    }

    /// Accept a draft and return its job id without waiting for the result
    pub async fn submit(&self, draft: RequestDraft) -> JobId {
        let id = JobId::generate();
        self.store
            .insert(JobRecord::pending(id.clone(), draft.clone()))
            .await;
        info!("Accepted analysis job {}", id);

        let orchestrator = Arc::clone(&self.orchestrator);
        let store = Arc::clone(&self.store);
        let sink = Arc::clone(&self.sink);
        let job_id = id.clone();

        tokio::spawn(async move {
            store
                .update_status(&job_id, JobStatus::Processing)
                .await;

            let status = match orchestrator.handle(draft).await {
                Ok(handled) => {
                    match sink.deliver(&handled.request, &handled.record).await {
                        Ok(delivered) => {
                            info!("Job {} report delivered to {}", job_id, delivered.location);
                            JobStatus::Completed(Box::new(handled.record))
                        }
                        Err(e) => {
                            warn!("Job {} report delivery failed: {}", job_id, e);
                            JobStatus::Failed(format!("report delivery failed: {}", e))
                        }
                    }
                }
                Err(failure) => JobStatus::Rejected(failure.to_string()),
            };

            if !store.update_status(&job_id, status).await {
                warn!("Job {} status was already terminal", job_id);
            }
        });

        id
    }

    /// Look up the current state of a job
    pub async fn status(&self, id: &JobId) -> Option<JobRecord> {
        self.store.get(id).await
    }

    /// Remove a job entry, e.g. after the caller retrieved the result
    pub async fn delete(&self, id: &JobId) -> bool {
        self.store.delete(id).await
    }
}

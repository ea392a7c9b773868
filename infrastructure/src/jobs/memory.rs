//! In-memory job store
//!
//! The default store behind the async front door: a `RwLock`-guarded map,
//! injected where needed rather than living as process-global state.
//! Terminal statuses are write-once; later updates are refused.

use async_trait::async_trait;
use council_application::{JobId, JobRecord, JobStatus, JobStore};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;

/// Process-local job store
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<JobId, JobRecord>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held
    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn insert(&self, record: JobRecord) -> bool {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&record.id) {
            warn!("Job {} already exists", record.id);
            return false;
        }
        jobs.insert(record.id.clone(), record);
        true
    }

    async fn update_status(&self, id: &JobId, status: JobStatus) -> bool {
        let mut jobs = self.jobs.write().await;
        match jobs.get_mut(id) {
            Some(record) if record.status.is_terminal() => {
                warn!("Refusing to overwrite terminal status of job {}", id);
                false
            }
            Some(record) => {
                if status.is_terminal() {
                    record.completed_at = Some(chrono::Utc::now().to_rfc3339());
                }
                record.status = status;
                true
            }
            None => false,
        }
    }

    async fn get(&self, id: &JobId) -> Option<JobRecord> {
        self.jobs.read().await.get(id).cloned()
    }

    async fn delete(&self, id: &JobId) -> bool {
        self.jobs.write().await.remove(id).is_some()
    }
}

//! Job store port
//!
//! The front door accepts a request, returns a job identifier immediately,
//! and exposes status lookup until the orchestrator completes. The store is
//! an injected abstraction: an entry is created on acceptance, moved to a
//! terminal status exactly once, and may be deleted explicitly by the
//! caller afterwards.

use async_trait::async_trait;
use council_domain::{DecisionRecord, RequestDraft};
use serde::{Deserialize, Serialize};

/// Opaque identifier for one accepted analysis request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

impl JobId {
    /// Generate a timestamp-derived identifier
    pub fn generate() -> Self {
        Self(format!(
            "analysis_{}",
            chrono::Utc::now().format("%Y%m%d_%H%M%S_%6f")
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Lifecycle status of an accepted request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepted, not yet picked up
    Pending,
    /// The orchestrator is working on it
    Processing,
    /// Finished with a decision record
    Completed(Box<DecisionRecord>),
    /// The draft failed validation
    Rejected(String),
    /// The analysis or report delivery failed unexpectedly
    Failed(String),
}

impl JobStatus {
    /// Terminal statuses may never be overwritten
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed(_) | JobStatus::Rejected(_) | JobStatus::Failed(_)
        )
    }
}

/// One entry in the job store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub status: JobStatus,
    pub draft: RequestDraft,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl JobRecord {
    /// Create a fresh pending entry
    pub fn pending(id: JobId, draft: RequestDraft) -> Self {
        Self {
            id,
            status: JobStatus::Pending,
            draft,
            created_at: chrono::Utc::now().to_rfc3339(),
            completed_at: None,
        }
    }
}

/// Store for accepted requests and their eventual results
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Create an entry; returns false if the id already exists
    async fn insert(&self, record: JobRecord) -> bool;

    /// Update an entry's status; returns false when the entry is missing
    /// or already terminal (terminal statuses are write-once).
    async fn update_status(&self, id: &JobId, status: JobStatus) -> bool;

    /// Fetch an entry by id
    async fn get(&self, id: &JobId) -> Option<JobRecord>;

    /// Remove an entry; returns whether it existed
    async fn delete(&self, id: &JobId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_shape() {
        let id = JobId::generate();
        assert!(id.as_str().starts_with("analysis_"));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
        assert!(JobStatus::Rejected("bad".to_string()).is_terminal());
        assert!(JobStatus::Failed("oops".to_string()).is_terminal());
    }
}

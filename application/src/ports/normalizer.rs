//! Request normalizer port
//!
//! Validation policy for incoming request drafts is owned by an external
//! normalizer; the orchestrator only consults it. A rejected draft is the
//! single failure mode that crosses the orchestrator boundary back to the
//! caller.

use async_trait::async_trait;
use council_domain::{RelocationRequest, RequestDraft};
use thiserror::Error;

/// Why a request draft was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Current city is required")]
    MissingOrigin,

    #[error("Destination city is required")]
    MissingDestination,

    #[error("{field} '{value}' is not specific enough; name a city, not a region")]
    NotSpecific { field: &'static str, value: String },

    #[error("Origin and destination are both '{0}'; there is nothing to compare")]
    SameCity(String),
}

/// Turns an unvalidated draft into a validated request, or rejects it
#[async_trait]
pub trait RequestNormalizer: Send + Sync {
    async fn normalize(&self, draft: RequestDraft)
    -> Result<RelocationRequest, ValidationFailure>;
}

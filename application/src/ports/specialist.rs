//! Specialist provider port
//!
//! Defines the capability contract for the three specialist advisors. The
//! orchestration core never inspects a provider's internals: it sees a
//! structured report or a typed error, nothing else. Implementations
//! (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use council_domain::{PositionStatement, RelocationRequest, SpecialistKind, SpecialistReport};
use thiserror::Error;

/// Errors a specialist provider may report
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Malformed data: {0}")]
    Malformed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A specialist advisor on the council
///
/// Providers must be idempotent per call: invoking one twice with an
/// identical request yields reports with the same normalized stance (the
/// prose may differ, the stance may not). No state is retained between
/// requests.
#[async_trait]
pub trait SpecialistProvider: Send + Sync {
    /// Which specialist this provider implements
    fn kind(&self) -> SpecialistKind;

    /// Produce a structured report for the request
    async fn invoke(&self, request: &RelocationRequest)
    -> Result<SpecialistReport, ProviderError>;

    /// Revise the provider's position given everyone else's current
    /// positions (debate mode only).
    ///
    /// The default implementation holds the prior position unchanged,
    /// which is the correct behavior for providers whose judgment does
    /// not depend on the other specialists.
    async fn revise(
        &self,
        _request: &RelocationRequest,
        own: &PositionStatement,
        _peers: &[PositionStatement],
    ) -> Result<PositionStatement, ProviderError> {
        Ok(own.clone())
    }
}

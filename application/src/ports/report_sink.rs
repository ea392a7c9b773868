//! Report sink port
//!
//! The external rendering/persistence boundary. The core hands over a
//! completed decision record and is agnostic to the output format.

use async_trait::async_trait;
use council_domain::{DecisionRecord, RelocationRequest};
use thiserror::Error;

/// Errors that can occur while delivering a report
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Render failed: {0}")]
    Render(String),

    #[error("Write failed: {0}")]
    Write(String),
}

/// Where a delivered report ended up (file path, URL, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredReport {
    pub location: String,
}

/// Accepts completed decision records for rendering and persistence
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn deliver(
        &self,
        request: &RelocationRequest,
        record: &DecisionRecord,
    ) -> Result<DeliveredReport, SinkError>;
}

/// Sink that discards reports, for callers that only want the record
pub struct NoReportSink;

#[async_trait]
impl ReportSink for NoReportSink {
    async fn deliver(
        &self,
        _request: &RelocationRequest,
        _record: &DecisionRecord,
    ) -> Result<DeliveredReport, SinkError> {
        Ok(DeliveredReport {
            location: String::new(),
        })
    }
}

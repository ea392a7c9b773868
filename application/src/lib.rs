//! Application layer for relo-council
//!
//! This crate contains use cases, port definitions, delegation strategies,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod strategy;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DelegationMode, OrchestrationParams};
pub use ports::{
    audit_log::{AuditEvent, AuditLog, NoAuditLog},
    job_store::{JobId, JobRecord, JobStatus, JobStore},
    normalizer::{RequestNormalizer, ValidationFailure},
    progress::{NoProgress, Phase, ProgressNotifier},
    report_sink::{DeliveredReport, NoReportSink, ReportSink, SinkError},
    specialist::{ProviderError, SpecialistProvider},
};
pub use strategy::{
    Deadline, DebateStrategy, DelegationStrategy, Distribution, SequentialStrategy,
};
pub use use_cases::handle_request::{HandleRequestUseCase, HandledRequest, RequestState};
pub use use_cases::submit_analysis::SubmitAnalysisUseCase;

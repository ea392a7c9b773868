//! Domain layer for relo-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A fixed set of specialist advisors (cost, sentiment, migration) each
//! produce one structured report per relocation request. The consensus
//! aggregator folds their normalized stances into a single decision record.
//!
//! ## Debate
//!
//! In debate mode the specialists see each other's positions and may revise
//! them across a bounded number of rounds. The transcript tracks stance
//! stability so a settled debate stops early.

pub mod core;
pub mod debate;
pub mod decision;
pub mod request;
pub mod specialist;

// Re-export commonly used types
pub use crate::core::city::CityName;
pub use debate::{
    round::{DebateRound, PositionStatement},
    transcript::DebateTranscript,
};
pub use decision::{
    aggregate::ConsensusAggregator,
    recommendation::{Confidence, Recommendation},
    record::{DebateSummary, DecisionRecord, FailureNote, SpecialistSection},
};
pub use request::profile::{FinancialSnapshot, RelocationRequest, RequestDraft};
pub use specialist::{
    kind::SpecialistKind,
    outcome::{FailureReason, SpecialistOutcome},
    report::{CostReport, MigrationReport, SentimentReport, SpecialistReport},
    stance::Stance,
};

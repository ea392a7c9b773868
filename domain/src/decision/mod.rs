//! Decision record and consensus aggregation

pub mod aggregate;
pub mod recommendation;
pub mod record;

pub use aggregate::ConsensusAggregator;
pub use recommendation::{Confidence, Recommendation};
pub use record::{DebateSummary, DecisionRecord, FailureNote, SpecialistSection};

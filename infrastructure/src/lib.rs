//! Infrastructure layer for relo-council
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, including configuration file loading, the city
//! database, web-backed specialist providers, the in-memory job store,
//! the markdown report renderer, and the JSONL audit log.

pub mod cities;
pub mod config;
pub mod jobs;
pub mod logging;
pub mod normalizer;
pub mod render;
pub mod specialists;

// Re-export commonly used types
pub use cities::{CityDatabase, CityDatabaseError, CityMatcher, CityRecord};
pub use config::{
    ConfigLoader, FileConfig, FileOrchestrationConfig, FileReportsConfig, FileSpecialistsConfig,
};
pub use jobs::InMemoryJobStore;
pub use logging::JsonlAuditLog;
pub use normalizer::BasicRequestNormalizer;
pub use render::MarkdownReportRenderer;

#[cfg(feature = "web-tools")]
pub use specialists::{
    BraveSearchClient, CitySentimentProvider, CostOfLivingProvider, MigrationStoriesProvider,
    SearchClient, SearchHit,
};

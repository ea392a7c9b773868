//! Specialist provider adapters
//!
//! Web-backed implementations of the specialist port, gated behind the
//! `web-tools` feature (they pull in `reqwest` and `scraper`).

#[cfg(feature = "web-tools")]
pub mod cost;
#[cfg(feature = "web-tools")]
pub mod html;
#[cfg(feature = "web-tools")]
pub mod migration;
#[cfg(feature = "web-tools")]
pub mod search;
#[cfg(feature = "web-tools")]
pub mod sentiment;

#[cfg(feature = "web-tools")]
pub use cost::CostOfLivingProvider;
#[cfg(feature = "web-tools")]
pub use migration::MigrationStoriesProvider;
#[cfg(feature = "web-tools")]
pub use search::{BraveSearchClient, SearchClient, SearchHit};
#[cfg(feature = "web-tools")]
pub use sentiment::CitySentimentProvider;

//! City reference data and name matching

pub mod database;
pub mod matcher;

pub use database::{CityDatabase, CityDatabaseError, CityRecord};
pub use matcher::CityMatcher;

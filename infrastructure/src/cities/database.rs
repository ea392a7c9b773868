//! City reference database
//!
//! A JSON database of known US cities with their display names and the URL
//! slugs used by the cost-of-living data source. The database is optional;
//! without it the matcher falls back to formatting slugs from raw input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// One known city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Bare city name, e.g. "Austin"
    pub city: String,
    /// Two-letter state code, e.g. "TX"
    pub state: String,
    /// Human-facing name, e.g. "Austin, TX"
    pub display_name: String,
    /// Slug used in cost-comparison URLs, e.g. "austin-tx"
    pub url_slug: String,
}

/// Errors loading the database file
#[derive(Error, Debug)]
pub enum CityDatabaseError {
    #[error("Could not read city database {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("City database {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// In-memory city database
#[derive(Debug, Clone, Default)]
pub struct CityDatabase {
    records: Vec<CityRecord>,
}

impl CityDatabase {
    /// An empty database; the matcher will rely on fallback slugs
    pub fn empty() -> Self {
        Self::default()
    }

    /// Construct from records directly (used by tests and embedders)
    pub fn from_records(records: Vec<CityRecord>) -> Self {
        Self { records }
    }

    /// Load a JSON map of display name -> record from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CityDatabaseError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CityDatabaseError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let map: HashMap<String, CityRecord> =
            serde_json::from_str(&contents).map_err(|source| CityDatabaseError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let mut records: Vec<CityRecord> = map.into_values().collect();
        records.sort_by(|a, b| a.display_name.cmp(&b.display_name));

        info!("Loaded {} cities from {}", records.len(), path.display());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_json_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
  "Austin, TX": {{"city": "Austin", "state": "TX", "display_name": "Austin, TX", "url_slug": "austin-tx"}},
  "Seattle, WA": {{"city": "Seattle", "state": "WA", "display_name": "Seattle, WA", "url_slug": "seattle-wa"}}
}}"#
        )
        .unwrap();

        let db = CityDatabase::load(&path).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.records()[0].city, "Austin");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = CityDatabase::load("/nonexistent/cities.json");
        assert!(matches!(result, Err(CityDatabaseError::Io { .. })));
    }

    #[test]
    fn test_load_bad_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            CityDatabase::load(&path),
            Err(CityDatabaseError::Parse { .. })
        ));
    }
}

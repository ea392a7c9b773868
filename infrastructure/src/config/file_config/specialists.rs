//! Specialist data-source configuration from TOML (`[specialists]` section)
//!
//! ```toml
//! [specialists]
//! brave_api_key = "..."       # or set BRAVE_API_KEY in the environment
//! city_database = "data/cities.json"
//! http_timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw `[specialists]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpecialistsConfig {
    /// API key for the web search backend
    pub brave_api_key: Option<String>,
    /// Path to the city database JSON, if one is installed
    pub city_database: Option<PathBuf>,
    /// Timeout for individual specialist HTTP calls
    pub http_timeout_secs: u64,
}

impl Default for FileSpecialistsConfig {
    fn default() -> Self {
        Self {
            brave_api_key: None,
            city_database: None,
            http_timeout_secs: 30,
        }
    }
}

impl FileSpecialistsConfig {
    /// API key from config, falling back to the `BRAVE_API_KEY` env var
    pub fn resolve_api_key(&self) -> Option<String> {
        self.brave_api_key
            .clone()
            .or_else(|| std::env::var("BRAVE_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }
}

//! City name value object

use serde::{Deserialize, Serialize};

/// A city involved in a relocation decision (Value Object)
///
/// Represents either the origin or the destination of a move. The
/// orchestration core treats city names as opaque identifiers; whether a
/// name is specific enough is decided by the request normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityName {
    name: String,
}

impl CityName {
    /// Create a new city name
    ///
    /// # Panics
    /// Panics if the name is empty or only whitespace
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "City name cannot be empty");
        Self { name: name.trim().to_string() }
    }

    /// Try to create a new city name, returning None if invalid
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self { name: trimmed.to_string() })
        }
    }

    /// Get the city name
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Consume and return the inner name
    pub fn into_string(self) -> String {
        self.name
    }

    /// Case-insensitive equality, for duplicate detection
    pub fn eq_ignore_case(&self, other: &CityName) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for CityName {
    fn from(s: &str) -> Self {
        CityName::new(s)
    }
}

impl From<String> for CityName {
    fn from(s: String) -> Self {
        CityName::new(s)
    }
}

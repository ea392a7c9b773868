//! Request normalizer
//!
//! Owns the validation policy for incoming drafts: both cities must be
//! present and specific (a bare state name is not a destination), and the
//! two cities must differ. When a city database is available, matched
//! names are canonicalized to their display form.

use crate::cities::CityMatcher;
use async_trait::async_trait;
use council_application::{RequestNormalizer, ValidationFailure};
use council_domain::{FinancialSnapshot, RelocationRequest, RequestDraft};
use std::sync::Arc;
use tracing::debug;

/// US state names; a draft naming one of these instead of a city is
/// rejected as insufficiently specific.
const US_STATES: &[&str] = &[
    "alabama", "alaska", "arizona", "arkansas", "california", "colorado", "connecticut",
    "delaware", "florida", "georgia", "hawaii", "idaho", "illinois", "indiana", "iowa", "kansas",
    "kentucky", "louisiana", "maine", "maryland", "massachusetts", "michigan", "minnesota",
    "mississippi", "missouri", "montana", "nebraska", "nevada", "new hampshire", "new jersey",
    "new mexico", "new york state", "north carolina", "north dakota", "ohio", "oklahoma",
    "oregon", "pennsylvania", "rhode island", "south carolina", "south dakota", "tennessee",
    "texas", "utah", "vermont", "virginia", "washington state", "west virginia", "wisconsin",
    "wyoming",
];

/// Default normalizer consulted by the orchestrator
pub struct BasicRequestNormalizer {
    matcher: Option<Arc<CityMatcher>>,
}

impl BasicRequestNormalizer {
    pub fn new() -> Self {
        Self { matcher: None }
    }

    /// Canonicalize matched city names through the database
    pub fn with_matcher(mut self, matcher: Arc<CityMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    fn resolve(&self, field: &'static str, raw: Option<String>) -> Result<String, ValidationFailure> {
        let raw = raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let Some(name) = raw else {
            return Err(match field {
                "origin" => ValidationFailure::MissingOrigin,
                _ => ValidationFailure::MissingDestination,
            });
        };

        if US_STATES.contains(&name.to_lowercase().as_str()) {
            return Err(ValidationFailure::NotSpecific { field, value: name });
        }

        // Canonicalize when the database knows this city
        if let Some(matcher) = &self.matcher
            && let Some(record) = matcher.find(&name)
        {
            debug!("Canonicalized '{}' to '{}'", name, record.display_name);
            return Ok(record.display_name.clone());
        }

        Ok(name)
    }
}

impl Default for BasicRequestNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestNormalizer for BasicRequestNormalizer {
    async fn normalize(
        &self,
        draft: RequestDraft,
    ) -> Result<RelocationRequest, ValidationFailure> {
        let origin = self.resolve("origin", draft.origin)?;
        let destination = self.resolve("destination", draft.destination)?;

        if origin.eq_ignore_ascii_case(&destination) {
            return Err(ValidationFailure::SameCity(origin));
        }

        let mut request = RelocationRequest::new(origin, destination)
            .with_finances(FinancialSnapshot::new(
                draft.annual_income,
                draft.monthly_expenses,
            ))
            .with_preferences(draft.preferences)
            .with_likes(draft.current_city_likes)
            .with_dislikes(draft.current_city_dislikes);

        if let Some(priority) = draft.priority_factor.filter(|p| !p.trim().is_empty()) {
            request = request.with_priority_factor(priority.trim().to_string());
        }

        Ok(request)
    }
}

//! City name matching
//!
//! Resolves free-form user input ("nyc", "san fran", "Seatle") to a known
//! city record: exact match first, then a small alias table, then fuzzy
//! matching. Also produces URL slugs for the cost-comparison data source,
//! with a regex-based fallback for cities outside the database.

use super::database::{CityDatabase, CityRecord};
use std::sync::OnceLock;
use tracing::debug;

/// Minimum similarity for a fuzzy hit
const FUZZY_CUTOFF: f64 = 0.6;

/// Common shorthand for large cities
const ALIASES: &[(&str, &str)] = &[
    ("nyc", "New York, NY"),
    ("new york city", "New York, NY"),
    ("la", "Los Angeles, CA"),
    ("sf", "San Francisco, CA"),
    ("san fran", "San Francisco, CA"),
    ("philly", "Philadelphia, PA"),
    ("vegas", "Las Vegas, NV"),
    ("dc", "Washington, DC"),
];

/// Resolves user-typed city names against the database
#[derive(Debug, Clone, Default)]
pub struct CityMatcher {
    database: CityDatabase,
}

impl CityMatcher {
    pub fn new(database: CityDatabase) -> Self {
        Self { database }
    }

    /// Find the best matching record for a user-typed name
    pub fn find(&self, name: &str) -> Option<&CityRecord> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        // Exact match on city or display name (case-insensitive)
        if let Some(record) = self.database.records().iter().find(|r| {
            r.city.eq_ignore_ascii_case(name) || r.display_name.eq_ignore_ascii_case(name)
        }) {
            return Some(record);
        }

        // Alias table
        let lowered = name.to_lowercase();
        if let Some((_, canonical)) = ALIASES.iter().find(|(alias, _)| *alias == lowered) {
            if let Some(record) = self
                .database
                .records()
                .iter()
                .find(|r| r.display_name.eq_ignore_ascii_case(canonical))
            {
                return Some(record);
            }
        }

        // Fuzzy match on display names
        let (best, score) = self
            .database
            .records()
            .iter()
            .map(|r| (r, similarity(name, &r.display_name).max(similarity(name, &r.city))))
            .max_by(|a, b| a.1.total_cmp(&b.1))?;

        if score >= FUZZY_CUTOFF {
            debug!("Fuzzy-matched '{}' to '{}' ({:.2})", name, best.display_name, score);
            Some(best)
        } else {
            None
        }
    }

    /// URL slug for a city: the matched record's slug, or a formatted
    /// fallback for cities the database does not know.
    pub fn url_slug(&self, name: &str) -> String {
        match self.find(name) {
            Some(record) => record.url_slug.clone(),
            None => fallback_slug(name),
        }
    }
}

/// Lowercase-dash slug with a trailing state name or abbreviation removed
pub fn fallback_slug(name: &str) -> String {
    static STATE_SUFFIX: OnceLock<regex::Regex> = OnceLock::new();
    let state_suffix = STATE_SUFFIX.get_or_init(|| {
        regex::Regex::new(
            r"(?i)(?:,\s*|\s+)(AL|AK|AZ|AR|CA|CO|CT|DE|FL|GA|HI|ID|IL|IN|IA|KS|KY|LA|ME|MD|MA|MI|MN|MS|MO|MT|NE|NV|NH|NJ|NM|NY|NC|ND|OH|OK|OR|PA|RI|SC|SD|TN|TX|UT|VT|VA|WA|WV|WI|WY|Alabama|Alaska|Arizona|Arkansas|California|Colorado|Connecticut|Delaware|Florida|Georgia|Hawaii|Idaho|Illinois|Indiana|Iowa|Kansas|Kentucky|Louisiana|Maine|Maryland|Massachusetts|Michigan|Minnesota|Mississippi|Missouri|Montana|Nebraska|Nevada|New Hampshire|New Jersey|New Mexico|New York|North Carolina|North Dakota|Ohio|Oklahoma|Oregon|Pennsylvania|Rhode Island|South Carolina|South Dakota|Tennessee|Texas|Utah|Vermont|Virginia|Washington|West Virginia|Wisconsin|Wyoming)\s*$",
        )
        .expect("state suffix pattern is valid")
    });

    let stripped = state_suffix.replace(name.trim(), "");
    let mut slug = String::with_capacity(stripped.len());
    let mut prev_dash = false;

    for ch in stripped.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash && !slug.is_empty() {
            slug.push('-');
            prev_dash = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Similarity ratio in [0, 1], based on the longest common subsequence of
/// the lowercased names (the same shape of score difflib produces).
fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for &ca in &a {
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut prev, &mut current);
    }

    let common = prev[b.len()];
    (2.0 * common as f64) / ((a.len() + b.len()) as f64)
}

//! Cost-of-living specialist
//!
//! Fetches the cost-of-living comparison page for the two cities, strips
//! the page to text, and extracts the overall percentage difference plus
//! per-category comparisons into a [`CostReport`]. Any fetch or parse
//! problem surfaces as a [`ProviderError`], which the delegation strategy
//! records as a specialist failure.

use super::html::extract_text;
use crate::cities::CityMatcher;
use async_trait::async_trait;
use council_application::{ProviderError, SpecialistProvider};
use council_domain::{CostReport, RelocationRequest, SpecialistKind, SpecialistReport, Stance};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Cost comparison page base URL
const COMPARE_URL: &str = "https://www.nerdwallet.com/cost-of-living-calculator/compare";

/// Categories extracted into their own comparison lines
const CATEGORIES: &[&str] = &["housing", "food", "transportation", "taxes"];

/// Web-backed cost analyst
pub struct CostOfLivingProvider {
    client: reqwest::Client,
    matcher: Arc<CityMatcher>,
}

impl CostOfLivingProvider {
    pub fn new(matcher: Arc<CityMatcher>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Other(format!("HTTP client init failed: {}", e)))?;

        Ok(Self { client, matcher })
    }

    /// Comparison URL for the request's two cities
    pub fn comparison_url(&self, request: &RelocationRequest) -> String {
        format!(
            "{}/{}-vs-{}",
            COMPARE_URL,
            self.matcher.url_slug(request.origin.as_str()),
            self.matcher.url_slug(request.destination.as_str()),
        )
    }
}

#[async_trait]
impl SpecialistProvider for CostOfLivingProvider {
    fn kind(&self) -> SpecialistKind {
        SpecialistKind::CostAnalyst
    }

    async fn invoke(
        &self,
        request: &RelocationRequest,
    ) -> Result<SpecialistReport, ProviderError> {
        let url = self.comparison_url(request);
        debug!("Fetching cost comparison from {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "relo-council/0.4 (cost analyst)")
            .send()
            .await
            .map_err(|e| ProviderError::Fetch(format!("Cost page request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ProviderError::Fetch(format!(
                "Cost page returned {}",
                response.status()
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ProviderError::Fetch(format!("Cost page body unreadable: {}", e)))?;

        let text = extract_text(&html);
        let report = parse_cost_report(&text, request)?;
        Ok(SpecialistReport::CostAnalyst(report))
    }
}

/// A percentage paired with a direction word, e.g. "38% higher"
fn find_percent_delta(text: &str, prefix: &str) -> Option<f64> {
    let pattern = format!(
        r"(?i){}[^%]{{0,120}}?(\d+(?:\.\d+)?)%\s*(higher|lower)",
        regex::escape(prefix)
    );
    let regex = regex::Regex::new(&pattern).ok()?;

    let captures = regex.captures(text)?;
    let magnitude: f64 = captures[1].parse().ok()?;
    let sign = if captures[2].eq_ignore_ascii_case("lower") {
        -1.0
    } else {
        1.0
    };
    Some(magnitude * sign)
}

/// Build a cost report from the comparison page text
fn parse_cost_report(text: &str, request: &RelocationRequest) -> Result<CostReport, ProviderError> {
    let overall = find_percent_delta(text, "cost of living")
        .ok_or_else(|| ProviderError::Malformed("no overall cost difference found".to_string()))?;

    let mut report = CostReport::new(overall);

    for category in CATEGORIES {
        if let Some(delta) = find_percent_delta(text, category) {
            let line = format!(
                "{} costs are about {:.0}% {} in {}.",
                capitalize(category),
                delta.abs(),
                if delta < 0.0 { "lower" } else { "higher" },
                request.destination,
            );
            match *category {
                "housing" => report.housing = line,
                "food" => report.food = line,
                "transportation" => report.transportation = line,
                _ => report.taxes = line,
            }
        }
    }

    report.key_insights.push(format!(
        "Overall cost of living is {:.1}% {} in {} than in {}.",
        overall.abs(),
        if overall < 0.0 { "lower" } else { "higher" },
        request.destination,
        request.origin,
    ));
    if let Some(surplus) = request.finances.monthly_surplus() {
        report.key_insights.push(format!(
            "Current monthly surplus of ${:.0} would absorb a {:.1}% cost shift.",
            surplus,
            overall.abs(),
        ));
    }

    if let Some(priority) = request.priority_factor() {
        let verdict = match report.stance() {
            Stance::Favor => "the cost picture works in its favor",
            Stance::Against => "the cost picture works against it",
            Stance::Neutral => "costs are close to a wash",
        };
        report.perspective_on_priority = Some(format!(
            "Weighing '{}': {}.",
            priority, verdict
        ));
    }

    Ok(report)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

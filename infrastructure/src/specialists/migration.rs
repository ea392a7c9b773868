//! Migration-experience specialist
//!
//! Searches for first-hand accounts of the same move and buckets the
//! snippets into reasons, challenges, positive outcomes, and warnings.
//! Deterministic keyword heuristics keep the stance stable across calls.

use super::search::{SearchClient, SearchHit};
use async_trait::async_trait;
use council_application::{ProviderError, SpecialistProvider};
use council_domain::{MigrationReport, RelocationRequest, SpecialistKind, SpecialistReport};
use std::sync::Arc;
use tracing::debug;

const REGRET_MARKERS: &[&str] = &["regret", "warn", "mistake", "moved back", "wish i"];
const CHALLENGE_MARKERS: &[&str] = &["challenge", "hard", "difficult", "struggle", "stress"];
const POSITIVE_MARKERS: &[&str] = &["love", "glad", "best decision", "happy", "worth it", "great"];

/// Reason keywords mapped to the canonical phrasing used in reports
const REASON_MARKERS: &[(&str, &str)] = &[
    ("job", "career opportunities"),
    ("career", "career opportunities"),
    ("cost", "cost of living"),
    ("cheap", "cost of living"),
    ("family", "family proximity"),
    ("weather", "weather"),
    ("school", "schools"),
];

/// How many citations the report keeps
const MAX_CITATIONS: usize = 5;

/// Search-backed migration researcher
pub struct MigrationStoriesProvider {
    search: Arc<dyn SearchClient>,
}

impl MigrationStoriesProvider {
    pub fn new(search: Arc<dyn SearchClient>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl SpecialistProvider for MigrationStoriesProvider {
    fn kind(&self) -> SpecialistKind {
        SpecialistKind::MigrationResearcher
    }

    async fn invoke(
        &self,
        request: &RelocationRequest,
    ) -> Result<SpecialistReport, ProviderError> {
        let query = format!(
            "moving from {} to {} experience reddit",
            request.origin, request.destination
        );
        debug!("Migration search: {}", query);

        let hits = self.search.search(&query).await?;
        if hits.is_empty() {
            return Err(ProviderError::Malformed(format!(
                "no migration stories found for {} to {}",
                request.origin, request.destination
            )));
        }

        Ok(SpecialistReport::MigrationResearcher(build_report(
            &hits, request,
        )))
    }
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

fn snippet(hit: &SearchHit) -> String {
    let source = if hit.description.is_empty() {
        &hit.title
    } else {
        &hit.description
    };
    source.chars().take(160).collect()
}

/// Fold search hits into a migration report
fn build_report(hits: &[SearchHit], request: &RelocationRequest) -> MigrationReport {
    let mut report = MigrationReport::new(hits.len());

    for hit in hits {
        let text = format!("{} {}", hit.title, hit.description).to_lowercase();

        if contains_any(&text, REGRET_MARKERS) {
            report.regrets_or_warnings.push(snippet(hit));
        } else if contains_any(&text, POSITIVE_MARKERS) {
            report.positive_outcomes.push(snippet(hit));
        }
        if contains_any(&text, CHALLENGE_MARKERS) {
            report.common_challenges.push(snippet(hit));
        }

        for (marker, reason) in REASON_MARKERS {
            if text.contains(marker) && !report.common_reasons.iter().any(|r| r == reason) {
                report.common_reasons.push(reason.to_string());
            }
        }

        if report.citations.len() < MAX_CITATIONS {
            report.citations.push(hit.url.clone());
        }
    }

    report.summary = format!(
        "Of {} accounts of moving from {} to {}, {} leaned positive and {} carried regrets or warnings.",
        report.sources_considered,
        request.origin,
        request.destination,
        report.positive_outcomes.len(),
        report.regrets_or_warnings.len(),
    );

    if let Some(priority) = request.priority_factor() {
        let mentioned = hits.iter().any(|hit| {
            format!("{} {}", hit.title, hit.description)
                .to_lowercase()
                .contains(&priority.to_lowercase())
        });
        report.perspective_on_priority = Some(if mentioned {
            format!(
                "People who made this move talk directly about '{}' in their accounts.",
                priority
            )
        } else {
            format!(
                "None of the collected accounts single out '{}' either way.",
                priority
            )
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::Stance;

    fn hit(title: &str, description: &str) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            url: format!("https://reddit.com/r/relocation/{}", title.len()),
            description: description.to_string(),
        }
    }

    fn request() -> RelocationRequest {
        RelocationRequest::new("Austin", "Seattle")
    }

    #[test]
    fn test_positive_accounts_favor_the_move() {
        let hits = vec![
            hit("Best decision ever", "So glad we moved, worth it for the job market"),
            hit("One year later", "We love it here, happy with the change"),
        ];
        let report = build_report(&hits, &request());
        assert_eq!(report.stance(), Stance::Favor);
        assert_eq!(report.positive_outcomes.len(), 2);
        assert!(report.regrets_or_warnings.is_empty());
    }

    #[test]
    fn test_regrets_count_against() {
        let hits = vec![
            hit("I regret moving", "Biggest mistake, we moved back after a year"),
            hit("A warning", "I warn anyone considering this, it was hard"),
            hit("Neutral logistics post", "Truck rental and box counts"),
        ];
        let report = build_report(&hits, &request());
        assert_eq!(report.stance(), Stance::Against);
        assert_eq!(report.regrets_or_warnings.len(), 2);
    }

    #[test]
    fn test_reasons_are_deduplicated() {
        let hits = vec![
            hit("Moved for the job", "Career move, new job in tech"),
            hit("Also for work", "The job market pulled us in"),
        ];
        let report = build_report(&hits, &request());
        assert_eq!(
            report
                .common_reasons
                .iter()
                .filter(|r| r.as_str() == "career opportunities")
                .count(),
            1
        );
    }

    #[test]
    fn test_citations_are_capped() {
        let hits: Vec<SearchHit> = (0..8)
            .map(|i| hit(&format!("Story {}", i), "some account"))
            .collect();
        let report = build_report(&hits, &request());
        assert_eq!(report.citations.len(), MAX_CITATIONS);
        assert_eq!(report.sources_considered, 8);
    }

    #[test]
    fn test_priority_mention_detection() {
        let hits = vec![hit(
            "Outdoor life",
            "The outdoor activities are endless here, glad we came",
        )];
        let request = request().with_priority_factor("outdoor activities");
        let report = build_report(&hits, &request);
        assert!(
            report
                .perspective_on_priority
                .unwrap()
                .contains("outdoor activities")
        );
    }

    #[test]
    fn test_summary_names_both_cities() {
        let hits = vec![hit("A move", "went fine, great")];
        let report = build_report(&hits, &request());
        assert!(report.summary.contains("Austin"));
        assert!(report.summary.contains("Seattle"));
    }
}

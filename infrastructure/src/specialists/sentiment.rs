//! Sentiment specialist
//!
//! Judges the destination's vibe and livability from web search snippets.
//! The scoring is a deterministic keyword balance, so identical requests
//! always land on the same stance.

use super::search::{SearchClient, SearchHit};
use async_trait::async_trait;
use council_application::{ProviderError, SpecialistProvider};
use council_domain::{RelocationRequest, SentimentReport, SpecialistKind, SpecialistReport};
use std::sync::Arc;
use tracing::debug;

const POSITIVE_MARKERS: &[&str] = &[
    "love", "great", "amazing", "beautiful", "friendly", "vibrant", "best", "thriving", "safe",
    "worth it",
];
const NEGATIVE_MARKERS: &[&str] = &[
    "hate", "expensive", "crime", "traffic", "dirty", "worst", "avoid", "unaffordable",
    "depressing", "overrated",
];

/// How many highlight snippets each list keeps
const MAX_HIGHLIGHTS: usize = 5;

/// Search-backed sentiment analyst
pub struct CitySentimentProvider {
    search: Arc<dyn SearchClient>,
}

impl CitySentimentProvider {
    pub fn new(search: Arc<dyn SearchClient>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl SpecialistProvider for CitySentimentProvider {
    fn kind(&self) -> SpecialistKind {
        SpecialistKind::SentimentAnalyst
    }

    async fn invoke(
        &self,
        request: &RelocationRequest,
    ) -> Result<SpecialistReport, ProviderError> {
        let query = format!("living in {} pros and cons", request.destination);
        debug!("Sentiment search: {}", query);

        let hits = self.search.search(&query).await?;
        if hits.is_empty() {
            return Err(ProviderError::Malformed(format!(
                "no search results for {}",
                request.destination
            )));
        }

        Ok(SpecialistReport::SentimentAnalyst(build_report(
            &hits, request,
        )))
    }
}

fn count_markers(text: &str, markers: &[&str]) -> usize {
    let lowered = text.to_lowercase();
    markers.iter().filter(|m| lowered.contains(*m)).count()
}

fn snippet(hit: &SearchHit) -> String {
    let source = if hit.description.is_empty() {
        &hit.title
    } else {
        &hit.description
    };
    let mut text: String = source.chars().take(160).collect();
    if text.len() < source.len() {
        text.push('…');
    }
    text
}

/// Fold search hits into a sentiment report
fn build_report(hits: &[SearchHit], request: &RelocationRequest) -> SentimentReport {
    let mut positive_total = 0usize;
    let mut negative_total = 0usize;
    let mut pros = Vec::new();
    let mut cons = Vec::new();

    for hit in hits {
        let text = format!("{} {}", hit.title, hit.description);
        let positive = count_markers(&text, POSITIVE_MARKERS);
        let negative = count_markers(&text, NEGATIVE_MARKERS);
        positive_total += positive;
        negative_total += negative;

        if positive > negative && pros.len() < MAX_HIGHLIGHTS {
            pros.push(snippet(hit));
        } else if negative > positive && cons.len() < MAX_HIGHLIGHTS {
            cons.push(snippet(hit));
        }
    }

    let mentions = positive_total + negative_total;
    let score = if mentions == 0 {
        5.0
    } else {
        let balance = (positive_total as f64 - negative_total as f64) / mentions as f64;
        (5.0 + 5.0 * balance).clamp(0.0, 10.0)
    };

    let mut report = SentimentReport::new(score);
    report.overall_sentiment = match score {
        s if s > 6.0 => "positive".to_string(),
        s if s < 4.0 => "negative".to_string(),
        _ => "mixed".to_string(),
    };
    report.vibe_description = hits
        .first()
        .map(snippet)
        .unwrap_or_default();
    report.notable_pros = pros;
    report.notable_cons = cons;

    let matched: Vec<&String> = request
        .preferences
        .iter()
        .filter(|preference| {
            let wanted = preference.to_lowercase();
            hits.iter().any(|hit| {
                hit.title.to_lowercase().contains(&wanted)
                    || hit.description.to_lowercase().contains(&wanted)
            })
        })
        .collect();
    report.alignment_with_preferences = if request.preferences.is_empty() {
        "No preferences were stated.".to_string()
    } else {
        format!(
            "{} of {} stated preferences came up in coverage of {}.",
            matched.len(),
            request.preferences.len(),
            request.destination,
        )
    };

    if let Some(priority) = request.priority_factor() {
        report.perspective_on_priority = Some(format!(
            "On '{}': public sentiment about {} reads {} overall.",
            priority, request.destination, report.overall_sentiment,
        ));
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
            url: "https://example.com".to_string(),
            description: description.to_string(),
        }
    }

    fn request() -> RelocationRequest {
        RelocationRequest::new("Austin", "Seattle")
    }

    #[test]
    fn test_positive_coverage_scores_favor() {
        let hits = vec![
            hit("Why I love Seattle", "Beautiful, vibrant, and friendly city"),
            hit("Seattle is great", "The food scene is amazing and worth it"),
        ];
        let report = build_report(&hits, &request());
        assert!(report.livability_score > 6.0);
        assert_eq!(report.overall_sentiment, "positive");
        assert_eq!(report.stance(), Stance::Favor);
        assert!(!report.notable_pros.is_empty());
    }

    #[test]
    fn test_negative_coverage_scores_against() {
        let hits = vec![
            hit("Seattle is overrated", "Expensive, traffic is the worst, avoid"),
            hit("Why people leave", "Crime and unaffordable housing"),
        ];
        let report = build_report(&hits, &request());
        assert!(report.livability_score < 4.0);
        assert_eq!(report.stance(), Stance::Against);
        assert!(!report.notable_cons.is_empty());
    }

    #[test]
    fn test_no_markers_is_neutral() {
        let hits = vec![hit("Seattle facts", "Population and geography overview")];
        let report = build_report(&hits, &request());
        assert_eq!(report.livability_score, 5.0);
        assert_eq!(report.overall_sentiment, "mixed");
        assert_eq!(report.stance(), Stance::Neutral);
    }

    #[test]
    fn test_preference_alignment_counts_mentions() {
        let hits = vec![hit(
            "Outdoors in Seattle",
            "Endless hiking and kayaking for outdoor lovers, truly great",
        )];
        let request =
            request().with_preferences(vec!["hiking".to_string(), "nightlife".to_string()]);
        let report = build_report(&hits, &request);
        assert!(report.alignment_with_preferences.contains("1 of 2"));
    }

    #[test]
    fn test_same_hits_same_stance() {
        let hits = vec![hit("Love Seattle", "great and friendly")];
        let first = build_report(&hits, &request());
        let second = build_report(&hits, &request());
        assert_eq!(first.stance(), second.stance());
        assert_eq!(first.livability_score, second.livability_score);
    }
}

//! Structured specialist reports
//!
//! Each specialist returns one domain-specific report per invocation. The
//! report owns the thresholds that reduce its fields to a [`Stance`], so the
//! aggregator never needs to understand cost percentages or livability
//! scores.

use super::kind::SpecialistKind;
use super::stance::Stance;
use serde::{Deserialize, Serialize};

/// Cost-of-living comparison between the two cities
///
/// `overall_delta_pct` is the destination's overall cost relative to the
/// origin: negative means the destination is cheaper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// Overall cost difference in percent (negative = destination cheaper)
    pub overall_delta_pct: f64,
    /// Housing cost comparison
    pub housing: String,
    /// Food and grocery cost comparison
    pub food: String,
    /// Transportation cost comparison
    pub transportation: String,
    /// Tax differences
    pub taxes: String,
    /// Key financial insights from the comparison
    pub key_insights: Vec<String>,
    /// How the cost picture relates to the user's stated priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective_on_priority: Option<String>,
}

impl CostReport {
    /// Cost deltas inside this band are treated as noise, not a signal
    pub const MATERIALITY_PCT: f64 = 5.0;

    pub fn new(overall_delta_pct: f64) -> Self {
        Self {
            overall_delta_pct,
            housing: String::new(),
            food: String::new(),
            transportation: String::new(),
            taxes: String::new(),
            key_insights: Vec::new(),
            perspective_on_priority: None,
        }
    }

    /// Stance from the overall delta: favor when the destination is
    /// materially cheaper, against when materially more expensive.
    pub fn stance(&self) -> Stance {
        if self.overall_delta_pct <= -Self::MATERIALITY_PCT {
            Stance::Favor
        } else if self.overall_delta_pct >= Self::MATERIALITY_PCT {
            Stance::Against
        } else {
            Stance::Neutral
        }
    }
}

/// Destination vibe, culture, and livability judgment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Overall sentiment about the city (positive/mixed/negative)
    pub overall_sentiment: String,
    /// General vibe and culture of the city
    pub vibe_description: String,
    /// Livability on a 0-10 scale
    pub livability_score: f64,
    /// How well the city aligns with the user's stated preferences
    pub alignment_with_preferences: String,
    /// Notable positive aspects
    pub notable_pros: Vec<String>,
    /// Notable negative aspects
    pub notable_cons: Vec<String>,
    /// How lifestyle factors relate to the user's stated priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective_on_priority: Option<String>,
}

impl SentimentReport {
    /// Scores above this favor the destination
    pub const FAVOR_ABOVE: f64 = 6.0;
    /// Scores below this count against the destination
    pub const AGAINST_BELOW: f64 = 4.0;

    pub fn new(livability_score: f64) -> Self {
        Self {
            overall_sentiment: String::new(),
            vibe_description: String::new(),
            livability_score,
            alignment_with_preferences: String::new(),
            notable_pros: Vec::new(),
            notable_cons: Vec::new(),
            perspective_on_priority: None,
        }
    }

    /// Stance from the livability score, with a neutral band around the
    /// midpoint of the 0-10 scale.
    pub fn stance(&self) -> Stance {
        if self.livability_score > Self::FAVOR_ABOVE {
            Stance::Favor
        } else if self.livability_score < Self::AGAINST_BELOW {
            Stance::Against
        } else {
            Stance::Neutral
        }
    }
}

/// Themes extracted from people who made a similar move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationReport {
    /// Number of migration stories considered
    pub sources_considered: usize,
    /// Common reasons people gave for the move
    pub common_reasons: Vec<String>,
    /// Common challenges faced during or after the move
    pub common_challenges: Vec<String>,
    /// Common positive outcomes people reported
    pub positive_outcomes: Vec<String>,
    /// Regrets or warnings from those who made the move
    pub regrets_or_warnings: Vec<String>,
    /// Source URLs backing the themes
    pub citations: Vec<String>,
    /// Overall summary of the migration experiences
    pub summary: String,
    /// How real experiences relate to the user's stated priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective_on_priority: Option<String>,
}

impl MigrationReport {
    pub fn new(sources_considered: usize) -> Self {
        Self {
            sources_considered,
            common_reasons: Vec::new(),
            common_challenges: Vec::new(),
            positive_outcomes: Vec::new(),
            regrets_or_warnings: Vec::new(),
            citations: Vec::new(),
            summary: String::new(),
            perspective_on_priority: None,
        }
    }

    /// Stance from the balance of reported outcomes: favor when positive
    /// mentions outnumber regrets and warnings.
    pub fn stance(&self) -> Stance {
        let positive = self.positive_outcomes.len();
        let negative = self.regrets_or_warnings.len();
        if positive > negative {
            Stance::Favor
        } else if negative > positive {
            Stance::Against
        } else {
            Stance::Neutral
        }
    }
}

/// A structured result from one specialist invocation
///
/// Tagged union over the three report schemas. Immutable once returned;
/// owned by the aggregation step for the duration of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "specialist", rename_all = "snake_case")]
pub enum SpecialistReport {
    CostAnalyst(CostReport),
    SentimentAnalyst(SentimentReport),
    MigrationResearcher(MigrationReport),
}

impl SpecialistReport {
    /// The specialist that produced this report
    pub fn kind(&self) -> SpecialistKind {
        match self {
            SpecialistReport::CostAnalyst(_) => SpecialistKind::CostAnalyst,
            SpecialistReport::SentimentAnalyst(_) => SpecialistKind::SentimentAnalyst,
            SpecialistReport::MigrationResearcher(_) => SpecialistKind::MigrationResearcher,
        }
    }

    /// Normalized stance, using the thresholds owned by each schema
    pub fn stance(&self) -> Stance {
        match self {
            SpecialistReport::CostAnalyst(r) => r.stance(),
            SpecialistReport::SentimentAnalyst(r) => r.stance(),
            SpecialistReport::MigrationResearcher(r) => r.stance(),
        }
    }

    /// Self-reported positive highlights, passed through verbatim.
    ///
    /// The cost report carries a single insight list; it counts as
    /// supporting material only when the cost stance favors the move.
    pub fn supporting_highlights(&self) -> &[String] {
        match self {
            SpecialistReport::CostAnalyst(r) => {
                if r.stance() == Stance::Favor {
                    &r.key_insights
                } else {
                    &[]
                }
            }
            SpecialistReport::SentimentAnalyst(r) => &r.notable_pros,
            SpecialistReport::MigrationResearcher(r) => &r.positive_outcomes,
        }
    }

    /// Self-reported negative highlights, passed through verbatim
    pub fn concern_highlights(&self) -> &[String] {
        match self {
            SpecialistReport::CostAnalyst(r) => {
                if r.stance() == Stance::Against {
                    &r.key_insights
                } else {
                    &[]
                }
            }
            SpecialistReport::SentimentAnalyst(r) => &r.notable_cons,
            SpecialistReport::MigrationResearcher(r) => &r.regrets_or_warnings,
        }
    }

    /// The specialist's view on the user's priority factor, if stated
    pub fn perspective_on_priority(&self) -> Option<&str> {
        match self {
            SpecialistReport::CostAnalyst(r) => r.perspective_on_priority.as_deref(),
            SpecialistReport::SentimentAnalyst(r) => r.perspective_on_priority.as_deref(),
            SpecialistReport::MigrationResearcher(r) => r.perspective_on_priority.as_deref(),
        }
    }

    /// Report body text for the final record, one specialist per section
    pub fn summary_text(&self) -> String {
        match self {
            SpecialistReport::CostAnalyst(r) => {
                let mut lines = vec![format!(
                    "Overall cost difference: {:+.1}% ({})",
                    r.overall_delta_pct,
                    if r.overall_delta_pct < 0.0 {
                        "destination is cheaper"
                    } else {
                        "destination is more expensive"
                    }
                )];
                for (label, text) in [
                    ("Housing", &r.housing),
                    ("Food", &r.food),
                    ("Transportation", &r.transportation),
                    ("Taxes", &r.taxes),
                ] {
                    if !text.is_empty() {
                        lines.push(format!("{}: {}", label, text));
                    }
                }
                lines.join("\n")
            }
            SpecialistReport::SentimentAnalyst(r) => {
                let mut lines = vec![format!(
                    "Livability {:.1}/10 ({})",
                    r.livability_score, r.overall_sentiment
                )];
                if !r.vibe_description.is_empty() {
                    lines.push(r.vibe_description.clone());
                }
                if !r.alignment_with_preferences.is_empty() {
                    lines.push(format!(
                        "Preference alignment: {}",
                        r.alignment_with_preferences
                    ));
                }
                lines.join("\n")
            }
            SpecialistReport::MigrationResearcher(r) => {
                let mut lines = vec![format!(
                    "Based on {} migration stories.",
                    r.sources_considered
                )];
                if !r.summary.is_empty() {
                    lines.push(r.summary.clone());
                }
                if !r.citations.is_empty() {
                    lines.push(format!("Sources: {}", r.citations.join(", ")));
                }
                lines.join("\n")
            }
        }
    }
}

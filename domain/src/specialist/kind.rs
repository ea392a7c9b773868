//! Specialist identity
//!
//! The council has a fixed, closed set of specialists registered at
//! construction time. New kinds are a source change, not a runtime event.

use serde::{Deserialize, Serialize};

/// The three specialist advisors on the council
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistKind {
    /// Compares cost of living between the two cities
    CostAnalyst,
    /// Judges the destination's vibe, culture, and livability
    SentimentAnalyst,
    /// Collects experiences from people who made a similar move
    MigrationResearcher,
}

impl SpecialistKind {
    /// All kinds in their canonical registration order
    pub fn all() -> [SpecialistKind; 3] {
        [
            SpecialistKind::CostAnalyst,
            SpecialistKind::SentimentAnalyst,
            SpecialistKind::MigrationResearcher,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialistKind::CostAnalyst => "cost_analyst",
            SpecialistKind::SentimentAnalyst => "sentiment_analyst",
            SpecialistKind::MigrationResearcher => "migration_researcher",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SpecialistKind::CostAnalyst => "Cost Analyst",
            SpecialistKind::SentimentAnalyst => "Sentiment Analyst",
            SpecialistKind::MigrationResearcher => "Migration Researcher",
        }
    }
}

impl std::fmt::Display for SpecialistKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for SpecialistKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "cost" | "cost_analyst" => Ok(SpecialistKind::CostAnalyst),
            "sentiment" | "sentiment_analyst" => Ok(SpecialistKind::SentimentAnalyst),
            "migration" | "migration_researcher" => Ok(SpecialistKind::MigrationResearcher),
            _ => Err(format!(
                "Unknown specialist: {}. Valid: cost, sentiment, migration",
                s
            )),
        }
    }
}

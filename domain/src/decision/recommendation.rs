//! Recommendation and confidence categories

use serde::{Deserialize, Serialize};

/// Final recommendation for the relocation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    /// The council favors the move
    Recommend,
    /// Split or inconclusive evidence; proceed carefully
    RecommendWithCaution,
    /// The council advises against the move
    DoNotRecommend,
    /// Too few specialists reported to say anything
    InsufficientData,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Recommend => "recommend",
            Recommendation::RecommendWithCaution => "recommend-with-caution",
            Recommendation::DoNotRecommend => "do-not-recommend",
            Recommendation::InsufficientData => "insufficient-data",
        }
    }

    /// Verdict phrasing for narratives and reports
    pub fn describe(&self) -> &'static str {
        match self {
            Recommendation::Recommend => "recommends the move",
            Recommendation::RecommendWithCaution => "recommends the move with caution",
            Recommendation::DoNotRecommend => "does not recommend the move",
            Recommendation::InsufficientData => "could not gather enough data to decide",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Recommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recommend" => Ok(Recommendation::Recommend),
            "recommend-with-caution" => Ok(Recommendation::RecommendWithCaution),
            "do-not-recommend" => Ok(Recommendation::DoNotRecommend),
            "insufficient-data" => Ok(Recommendation::InsufficientData),
            _ => Err(format!("Unknown recommendation: {}", s)),
        }
    }
}

/// Confidence in the recommendation
///
/// Ordered so that `min` combines independent caps: fewer specialist
/// successes and a non-converging debate each push confidence down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Apply an upper bound: the result is never above `cap`
    pub fn capped_at(self, cap: Confidence) -> Confidence {
        self.min(cap)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

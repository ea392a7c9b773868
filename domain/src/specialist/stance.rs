//! Normalized specialist stance

use serde::{Deserialize, Serialize};

/// Categorical reduction of a specialist's judgment on the move
///
/// Each report schema owns the thresholds that map its domain fields to a
/// stance; the aggregator only ever sees these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// The specialist's data supports the move
    Favor,
    /// The specialist's data argues against the move
    Against,
    /// The data is inconclusive either way
    Neutral,
}

impl Stance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Favor => "favor",
            Stance::Against => "against",
            Stance::Neutral => "neutral",
        }
    }

    /// Human phrasing used in summaries ("supports the move", ...)
    pub fn describe(&self) -> &'static str {
        match self {
            Stance::Favor => "supports the move",
            Stance::Against => "advises against the move",
            Stance::Neutral => "is neutral on the move",
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Relocation request entities
//!
//! [`RelocationRequest`] is the immutable, validated input consumed by the
//! delegation strategies. [`RequestDraft`] is its unvalidated counterpart as
//! submitted by a caller; the request normalizer port turns one into the
//! other.

use crate::core::city::CityName;
use serde::{Deserialize, Serialize};

/// Financial situation of the user (Value Object)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Annual income in the user's currency, if shared
    pub annual_income: Option<f64>,
    /// Typical monthly expenses, if shared
    pub monthly_expenses: Option<f64>,
}

impl FinancialSnapshot {
    pub fn new(annual_income: Option<f64>, monthly_expenses: Option<f64>) -> Self {
        Self {
            annual_income,
            monthly_expenses,
        }
    }

    /// Monthly income minus monthly expenses, when both are known
    pub fn monthly_surplus(&self) -> Option<f64> {
        match (self.annual_income, self.monthly_expenses) {
            (Some(income), Some(expenses)) => Some(income / 12.0 - expenses),
            _ => None,
        }
    }

    /// Whether the user shared any financial information at all
    pub fn is_empty(&self) -> bool {
        self.annual_income.is_none() && self.monthly_expenses.is_none()
    }
}

/// A validated relocation request (Value Object)
///
/// Immutable once constructed. Every specialist receives a shared reference
/// to the same request; nothing downstream may mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelocationRequest {
    /// The city the user currently lives in
    pub origin: CityName,
    /// The city the user is considering moving to
    pub destination: CityName,
    /// Income and expenses, as far as the user shared them
    pub finances: FinancialSnapshot,
    /// What the user values in a city (free-text tags)
    pub preferences: Vec<String>,
    /// What the user likes about the current city
    pub current_city_likes: Vec<String>,
    /// What the user dislikes about the current city
    pub current_city_dislikes: Vec<String>,
    /// The single factor that should dominate the decision, if stated.
    /// Only consulted in debate mode.
    pub priority_factor: Option<String>,
}

impl RelocationRequest {
    /// Create a request with the two required cities
    pub fn new(origin: impl Into<CityName>, destination: impl Into<CityName>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            finances: FinancialSnapshot::default(),
            preferences: Vec::new(),
            current_city_likes: Vec::new(),
            current_city_dislikes: Vec::new(),
            priority_factor: None,
        }
    }

    pub fn with_finances(mut self, finances: FinancialSnapshot) -> Self {
        self.finances = finances;
        self
    }

    pub fn with_preferences(mut self, preferences: Vec<String>) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_likes(mut self, likes: Vec<String>) -> Self {
        self.current_city_likes = likes;
        self
    }

    pub fn with_dislikes(mut self, dislikes: Vec<String>) -> Self {
        self.current_city_dislikes = dislikes;
        self
    }

    pub fn with_priority_factor(mut self, factor: impl Into<String>) -> Self {
        self.priority_factor = Some(factor.into());
        self
    }

    /// The priority factor, if one was stated
    pub fn priority_factor(&self) -> Option<&str> {
        self.priority_factor.as_deref()
    }
}

/// An unvalidated relocation request as submitted by a caller
///
/// All fields are raw; the request normalizer decides whether the draft is
/// complete and specific enough to become a [`RelocationRequest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestDraft {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub annual_income: Option<f64>,
    pub monthly_expenses: Option<f64>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub current_city_likes: Vec<String>,
    #[serde(default)]
    pub current_city_dislikes: Vec<String>,
    pub priority_factor: Option<String>,
}

impl RequestDraft {
    /// Create a draft with the two city fields set
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: Some(origin.into()),
            destination: Some(destination.into()),
            ..Default::default()
        }
    }

    pub fn with_income(mut self, income: f64) -> Self {
        self.annual_income = Some(income);
        self
    }

    pub fn with_expenses(mut self, expenses: f64) -> Self {
        self.monthly_expenses = Some(expenses);
        self
    }

    pub fn with_preferences(mut self, preferences: Vec<String>) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_priority_factor(mut self, factor: impl Into<String>) -> Self {
        self.priority_factor = Some(factor.into());
        self
    }
}

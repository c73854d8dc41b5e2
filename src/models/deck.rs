//! Deck and the options preset (deck config) it points to
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub config_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub id: i64,
    pub name: String,
    pub desired_retention: Option<f64>,
}

impl DeckConfig {
    /// Target used for the under-target comparison.
    ///
    /// A missing value and an explicit 0 both yield 0.0, and a target of 0 is
    /// never missed since observed retention is never negative.
    pub fn target_retention(&self) -> f64 {
        self.desired_retention.unwrap_or(0.0)
    }
}

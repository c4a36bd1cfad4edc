//! Triage level and classification result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency classification for a region's intake. Ordered: a level only ever
/// escalates within one classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageLevel {
    Green,
    Amber,
    Red,
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriageLevel::Green => "green",
            TriageLevel::Amber => "amber",
            TriageLevel::Red => "red",
        };
        f.write_str(s)
    }
}

/// Outcome of one classification pass over a flat answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub level: TriageLevel,
    /// Human-readable reasons in rule declaration order.
    pub reasons: Vec<String>,
    /// Differential pinned to rank first by a red-flag rule, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forced_key: Option<String>,
}

impl TriageResult {
    pub fn green() -> Self {
        Self {
            level: TriageLevel::Green,
            reasons: Vec::new(),
            forced_key: None,
        }
    }
}

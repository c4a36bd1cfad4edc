//! Engine configuration with conservative defaults.

use serde::{Deserialize, Serialize};

/// Master configuration for the intake engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
}

/// Ranking and gating tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    /// Differentials shown outside the forced red pathway.
    pub top_k: usize,
    /// Penalty subtracted when a gate's contradiction predicate holds.
    pub gate_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            gate_penalty: 1.5,
        }
    }
}

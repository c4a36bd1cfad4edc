//! Clinician-facing summary output contract.
//!
//! Field names follow the persisted document shape consumed by the intake
//! handler (`topDifferentials`, `objectiveTests`, `detailedTop`, ...).

use serde::{Deserialize, Serialize};

use crate::core::triage::TriageLevel;

/// Triage block embedded in a summary. The forced key is internal routing
/// state and is not part of the persisted contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSummary {
    pub level: TriageLevel,
    pub reasons: Vec<String>,
}

/// Compact ranked entry for list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDifferential {
    pub name: String,
    /// Display score, clamped to a minimum of 0. Forced pathways show 999.
    pub score: f64,
}

/// Full ranked entry with rationale and per-differential tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedDifferential {
    pub key: String,
    pub name: String,
    pub score: f64,
    pub rationale: Vec<String>,
    pub objective_tests: Vec<String>,
}

/// Complete output of one engine invocation for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Canonical region identifier (e.g. `"ankle"`, `"cervicalSpine"`).
    pub region: String,
    pub triage: TriageSummary,
    pub top_differentials: Vec<TopDifferential>,
    /// Deduplicated, order-preserving union of level defaults and each top
    /// differential's own tests.
    pub objective_tests: Vec<String>,
    /// One templated sentence keyed by triage level.
    pub narrative: String,
    pub detailed_top: Vec<DetailedDifferential>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_with_contract_field_names() {
        let s = Summary {
            region: "ankle".into(),
            triage: TriageSummary {
                level: TriageLevel::Green,
                reasons: vec![],
            },
            top_differentials: vec![TopDifferential {
                name: "Lateral ligament sprain (ATFL/CFL)".into(),
                score: 5.0,
            }],
            objective_tests: vec!["Anterior drawer test".into()],
            narrative: "narrative".into(),
            detailed_top: vec![],
        };
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("topDifferentials").is_some());
        assert!(json.get("objectiveTests").is_some());
        assert!(json.get("detailedTop").is_some());
    }
}

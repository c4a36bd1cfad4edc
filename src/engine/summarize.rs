//! Ranker and summary builder.

use crate::config::ScoringConfig;
use crate::core::differential::{Score, ScoredDifferential};
use crate::core::summary::{DetailedDifferential, Summary, TopDifferential, TriageSummary};
use crate::core::triage::{TriageLevel, TriageResult};
use crate::engine::rules::RegionSpec;

/// Display value pinned on forced urgent pathways, per the output contract.
const FORCED_DISPLAY_SCORE: f64 = 999.0;

/// Rationale attached to the forced pathway's single entry.
const FORCED_RATIONALE: &str = "Urgent pathway triggered";

fn narrative_for(spec: &RegionSpec, level: TriageLevel) -> String {
    let sentence = match level {
        TriageLevel::Red => {
            "red flag findings require urgent clinical review before physical assessment."
        }
        TriageLevel::Amber => {
            "caution indicators present; review the highlighted risks before objective testing."
        }
        TriageLevel::Green => "no red flags identified; proceed with routine objective assessment.",
    };
    format!("{} intake: {}", spec.label, sentence)
}

/// Append items to `out`, keeping first-seen order and dropping exact-string
/// duplicates.
fn push_deduped(out: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !out.iter().any(|t| t == item) {
            out.push((*item).to_string());
        }
    }
}

/// Forced red pathway: a single pinned differential, never diluted by the
/// generic ranking below. Intentionally a distinct code path.
fn forced_summary(spec: &RegionSpec, triage: &TriageResult, forced_key: &str) -> Summary {
    let info = spec
        .differential(forced_key)
        .unwrap_or_else(|| panic!("forced key {forced_key} missing from {} registry", spec.name));

    let mut tests = Vec::new();
    push_deduped(&mut tests, info.tests);
    push_deduped(&mut tests, spec.default_tests.red_checklist);

    Summary {
        region: spec.name.to_string(),
        triage: TriageSummary {
            level: triage.level,
            reasons: triage.reasons.clone(),
        },
        top_differentials: vec![TopDifferential {
            name: info.name.to_string(),
            score: FORCED_DISPLAY_SCORE,
        }],
        objective_tests: tests.clone(),
        narrative: narrative_for(spec, TriageLevel::Red),
        detailed_top: vec![DetailedDifferential {
            key: info.key.to_string(),
            name: info.name.to_string(),
            score: FORCED_DISPLAY_SCORE,
            rationale: vec![FORCED_RATIONALE.to_string()],
            objective_tests: tests,
        }],
    }
}

/// Assemble the clinician-facing summary from scored differentials.
///
/// Excluded entries never appear. Remaining entries sort by unclamped score
/// descending, tie-broken by registry base descending; the incoming slice is
/// in registry order and the sort is stable, so full ties keep declaration
/// order. Display scores clamp at 0.
pub fn summarize(
    spec: &RegionSpec,
    scored: &[ScoredDifferential],
    triage: &TriageResult,
    config: &ScoringConfig,
) -> Summary {
    if triage.level == TriageLevel::Red {
        if let Some(forced) = &triage.forced_key {
            return forced_summary(spec, triage, forced);
        }
    }

    let mut ranked: Vec<&ScoredDifferential> =
        scored.iter().filter(|s| !s.score.is_excluded()).collect();
    ranked.sort_by(|a, b| {
        let by_score = b.score.points().total_cmp(&a.score.points());
        if by_score.is_ne() {
            return by_score;
        }
        let base = |s: &ScoredDifferential| {
            spec.differential(&s.key).map(|d| d.base).unwrap_or(0.0)
        };
        base(b).total_cmp(&base(a))
    });
    ranked.truncate(config.top_k);

    let mut tests = Vec::new();
    let defaults = match triage.level {
        TriageLevel::Green => spec.default_tests.green,
        TriageLevel::Amber => spec.default_tests.amber,
        TriageLevel::Red => spec.default_tests.red,
    };
    push_deduped(&mut tests, defaults);

    let mut top = Vec::with_capacity(ranked.len());
    let mut detailed = Vec::with_capacity(ranked.len());
    for s in &ranked {
        let info = spec
            .differential(&s.key)
            .unwrap_or_else(|| panic!("key {} missing from {} registry", s.key, spec.name));
        push_deduped(&mut tests, info.tests);
        let display = s.score.points().max(0.0);
        top.push(TopDifferential {
            name: info.name.to_string(),
            score: display,
        });
        detailed.push(DetailedDifferential {
            key: info.key.to_string(),
            name: info.name.to_string(),
            score: display,
            rationale: s.why.clone(),
            objective_tests: info.tests.iter().map(|t| t.to_string()).collect(),
        });
    }

    Summary {
        region: spec.name.to_string(),
        triage: TriageSummary {
            level: triage.level,
            reasons: triage.reasons.clone(),
        },
        top_differentials: top,
        objective_tests: tests,
        narrative: narrative_for(spec, triage.level),
        detailed_top: detailed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::differential::DifferentialInfo;
    use crate::engine::rules::TriageTests;

    static REGISTRY: &[DifferentialInfo] = &[
        DifferentialInfo {
            key: "a",
            name: "Alpha",
            base: 1.0,
            urgent_only: false,
            tests: &["Shared test", "Alpha test"],
        },
        DifferentialInfo {
            key: "b",
            name: "Beta",
            base: 0.8,
            urgent_only: false,
            tests: &["Shared test", "Beta test"],
        },
        DifferentialInfo {
            key: "c",
            name: "Gamma",
            base: 0.5,
            urgent_only: false,
            tests: &[],
        },
        DifferentialInfo {
            key: "d",
            name: "Delta",
            base: 0.2,
            urgent_only: false,
            tests: &[],
        },
        DifferentialInfo {
            key: "urgent",
            name: "Urgent bucket",
            base: 0.0,
            urgent_only: true,
            tests: &["Urgent referral"],
        },
    ];

    fn spec() -> RegionSpec {
        RegionSpec {
            name: "test",
            label: "Test",
            adapter: &[],
            registry: REGISTRY,
            red_rules: &[],
            amber_rules: &[],
            gates: &[],
            rules: &[],
            suppressions: &[],
            default_tests: TriageTests {
                green: &["Observation", "Shared test"],
                amber: &["Observation", "Neurovascular screen"],
                red: &["Immediate review"],
                red_checklist: &["Vital signs", "Urgent referral"],
            },
        }
    }

    fn points(key: &str, v: f64) -> ScoredDifferential {
        ScoredDifferential {
            key: key.into(),
            score: Score::Points(v),
            why: vec![format!("{key} reason")],
        }
    }

    #[test]
    fn sorts_truncates_and_dedupes_tests() {
        let scored = vec![
            points("a", 2.0),
            points("b", 4.0),
            points("c", 3.0),
            points("d", 1.0),
        ];
        let s = summarize(
            &spec(),
            &scored,
            &TriageResult::green(),
            &ScoringConfig::default(),
        );
        let names: Vec<&str> = s.top_differentials.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Beta", "Gamma", "Alpha"]);
        // Level defaults first, then per-differential tests, no duplicates.
        assert_eq!(
            s.objective_tests,
            ["Observation", "Shared test", "Beta test", "Alpha test"]
        );
        assert!(s.narrative.contains("routine objective assessment"));
    }

    #[test]
    fn ties_break_by_registry_base_descending() {
        let scored = vec![points("c", 2.0), points("b", 2.0), points("a", 2.0)];
        let s = summarize(
            &spec(),
            &scored,
            &TriageResult::green(),
            &ScoringConfig::default(),
        );
        let keys: Vec<&str> = s.detailed_top.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn excluded_never_ranks_and_negatives_clamp_for_display() {
        let scored = vec![
            points("a", -2.0),
            ScoredDifferential {
                key: "urgent".into(),
                score: Score::Excluded,
                why: vec![],
            },
            points("b", 1.0),
        ];
        let s = summarize(
            &spec(),
            &scored,
            &TriageResult::green(),
            &ScoringConfig::default(),
        );
        assert!(s.detailed_top.iter().all(|d| d.key != "urgent"));
        // True ordering preserved: Beta ranks above Alpha despite the clamp.
        assert_eq!(s.detailed_top[0].key, "b");
        assert_eq!(s.detailed_top[1].key, "a");
        assert_eq!(s.detailed_top[1].score, 0.0);
    }

    #[test]
    fn forced_red_pins_a_single_differential() {
        let triage = TriageResult {
            level: TriageLevel::Red,
            reasons: vec!["Hot, red joint with fever".into()],
            forced_key: Some("urgent".into()),
        };
        let scored = vec![
            points("a", 10.0),
            ScoredDifferential {
                key: "urgent".into(),
                score: Score::Forced,
                why: vec![],
            },
        ];
        let s = summarize(&spec(), &scored, &triage, &ScoringConfig::default());
        assert_eq!(s.detailed_top.len(), 1);
        assert_eq!(s.detailed_top[0].key, "urgent");
        assert_eq!(s.detailed_top[0].score, 999.0);
        assert_eq!(
            s.detailed_top[0].rationale,
            vec!["Urgent pathway triggered".to_string()]
        );
        // Differential tests first, then the red checklist, deduplicated.
        assert_eq!(s.objective_tests, ["Urgent referral", "Vital signs"]);
    }

    #[test]
    fn unforced_red_uses_generic_ranking_with_red_defaults() {
        let triage = TriageResult {
            level: TriageLevel::Red,
            reasons: vec!["Unilateral calf swelling".into()],
            forced_key: None,
        };
        let scored = vec![points("a", 2.0), points("b", 1.0)];
        let s = summarize(&spec(), &scored, &triage, &ScoringConfig::default());
        assert_eq!(s.detailed_top.len(), 2);
        assert_eq!(s.objective_tests[0], "Immediate review");
    }
}

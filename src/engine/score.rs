//! Weighted differential scoring.
//!
//! Pure: no I/O, no shared state, identical output for identical input.

use tracing::debug;

use crate::core::answers::AnswerSet;
use crate::core::differential::{Score, ScoredDifferential};
use crate::core::triage::{TriageLevel, TriageResult};
use crate::config::ScoringConfig;
use crate::engine::rules::RegionSpec;

/// Score every registry entry against the flat answers and triage outcome.
///
/// Output order follows registry declaration order, which the ranker's
/// stable sort relies on for deterministic tie-breaking.
pub fn score(
    spec: &RegionSpec,
    set: &AnswerSet,
    triage: &TriageResult,
    config: &ScoringConfig,
) -> Vec<ScoredDifferential> {
    let mut scored: Vec<ScoredDifferential> = spec
        .registry
        .iter()
        .map(|d| ScoredDifferential::new(d.key, d.base))
        .collect();

    // Forced red pathway dominates: nothing else competes.
    if triage.level == TriageLevel::Red {
        if let Some(forced) = &triage.forced_key {
            debug_assert!(
                spec.differential(forced).is_some(),
                "forced key {forced} missing from {} registry",
                spec.name
            );
            for s in &mut scored {
                s.score = if &s.key == forced {
                    Score::Forced
                } else {
                    Score::Excluded
                };
            }
            debug!(region = spec.name, forced = forced.as_str(), "forced pathway scoring");
            return scored;
        }
    }

    // Urgent-only buckets can only ever rank via the forced path above.
    for (s, info) in scored.iter_mut().zip(spec.registry) {
        if info.urgent_only {
            s.score = Score::Excluded;
        }
    }

    for gate in spec.gates {
        if gate.contradicted_when.eval(set) {
            debug_assert!(
                spec.differential(gate.key).is_some(),
                "gate key {} missing from {} registry",
                gate.key,
                spec.name
            );
            if let Some(s) = scored.iter_mut().find(|s| s.key == gate.key) {
                s.add(-config.gate_penalty, gate.why);
            }
        }
    }

    for rule in spec.rules.iter().chain(spec.suppressions) {
        if rule.when.eval(set) {
            debug_assert!(
                spec.differential(rule.key).is_some(),
                "rule key {} missing from {} registry",
                rule.key,
                spec.name
            );
            if let Some(s) = scored.iter_mut().find(|s| s.key == rule.key) {
                s.add(rule.delta, rule.why);
            }
        }
    }

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answers::FlatAnswer;
    use crate::core::differential::DifferentialInfo;
    use crate::engine::rules::{GateRule, Pred, ScoreRule, TriageTests};

    static REGISTRY: &[DifferentialInfo] = &[
        DifferentialInfo {
            key: "sprain",
            name: "Sprain",
            base: 1.0,
            urgent_only: false,
            tests: &["Ligament stress test"],
        },
        DifferentialInfo {
            key: "fracture",
            name: "Fracture",
            base: 0.4,
            urgent_only: false,
            tests: &["X-ray"],
        },
        DifferentialInfo {
            key: "infection",
            name: "Septic joint",
            base: 0.0,
            urgent_only: true,
            tests: &["Urgent bloods"],
        },
    ];

    static RULES: &[ScoreRule] = &[
        ScoreRule {
            key: "sprain",
            when: Pred::SingleIs("mech", "twist"),
            delta: 2.0,
            why: "Twisting mechanism",
        },
        ScoreRule {
            key: "fracture",
            when: Pred::Yes("cantWalk"),
            delta: 2.0,
            why: "Unable to weight-bear",
        },
    ];

    static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
        key: "sprain",
        when: Pred::Yes("cantWalk"),
        delta: -1.5,
        why: "Fracture pattern suppresses sprain",
    }];

    static GATES: &[GateRule] = &[GateRule {
        key: "sprain",
        contradicted_when: Pred::MultiAnsweredWithout("site", "lateral"),
        why: "Pain location does not fit a lateral pattern",
    }];

    fn spec() -> RegionSpec {
        RegionSpec {
            name: "test",
            label: "Test",
            adapter: &[],
            registry: REGISTRY,
            red_rules: &[],
            amber_rules: &[],
            gates: GATES,
            rules: RULES,
            suppressions: SUPPRESSIONS,
            default_tests: TriageTests {
                green: &[],
                amber: &[],
                red: &[],
                red_checklist: &[],
            },
        }
    }

    fn find<'a>(scored: &'a [ScoredDifferential], key: &str) -> &'a ScoredDifferential {
        scored.iter().find(|s| s.key == key).unwrap()
    }

    #[test]
    fn bases_initialize_and_rules_accumulate() {
        let set = AnswerSet::new(vec![FlatAnswer::Single {
            id: "mech".into(),
            value: "twist".into(),
        }]);
        let scored = score(&spec(), &set, &TriageResult::green(), &ScoringConfig::default());
        assert_eq!(find(&scored, "sprain").score, Score::Points(3.0));
        assert_eq!(find(&scored, "fracture").score, Score::Points(0.4));
    }

    #[test]
    fn urgent_only_is_excluded_outside_forced_red() {
        let scored = score(
            &spec(),
            &AnswerSet::default(),
            &TriageResult::green(),
            &ScoringConfig::default(),
        );
        assert_eq!(find(&scored, "infection").score, Score::Excluded);
    }

    #[test]
    fn forced_red_short_circuits_everything() {
        let triage = TriageResult {
            level: TriageLevel::Red,
            reasons: vec!["Hot, red joint with fever".into()],
            forced_key: Some("infection".into()),
        };
        let set = AnswerSet::new(vec![FlatAnswer::Single {
            id: "mech".into(),
            value: "twist".into(),
        }]);
        let scored = score(&spec(), &set, &triage, &ScoringConfig::default());
        assert_eq!(find(&scored, "infection").score, Score::Forced);
        assert_eq!(find(&scored, "sprain").score, Score::Excluded);
        assert_eq!(find(&scored, "fracture").score, Score::Excluded);
    }

    #[test]
    fn unforced_red_keeps_generic_scoring() {
        let triage = TriageResult {
            level: TriageLevel::Red,
            reasons: vec!["Unilateral calf swelling".into()],
            forced_key: None,
        };
        let scored = score(&spec(), &AnswerSet::default(), &triage, &ScoringConfig::default());
        assert_eq!(find(&scored, "sprain").score, Score::Points(1.0));
        assert_eq!(find(&scored, "infection").score, Score::Excluded);
    }

    #[test]
    fn gates_penalize_contradicted_patterns() {
        let set = AnswerSet::new(vec![FlatAnswer::Multi {
            id: "site".into(),
            values: vec!["medial".into()],
        }]);
        let cfg = ScoringConfig::default();
        let scored = score(&spec(), &set, &TriageResult::green(), &cfg);
        assert_eq!(
            find(&scored, "sprain").score,
            Score::Points(1.0 - cfg.gate_penalty)
        );
        assert_eq!(
            find(&scored, "sprain").why,
            vec!["Pain location does not fit a lateral pattern".to_string()]
        );
    }

    #[test]
    fn suppression_decrements_the_competitor() {
        let set = AnswerSet::new(vec![FlatAnswer::Single {
            id: "cantWalk".into(),
            value: "yes".into(),
        }]);
        let scored = score(&spec(), &set, &TriageResult::green(), &ScoringConfig::default());
        assert_eq!(find(&scored, "fracture").score, Score::Points(2.4));
        // base 1.0 - 1.5 suppression; scores may go negative
        assert_eq!(find(&scored, "sprain").score, Score::Points(-0.5));
    }
}

//! Triage classifier: ordered red/amber predicate evaluation.

use tracing::debug;

use crate::core::answers::AnswerSet;
use crate::core::triage::{TriageLevel, TriageResult};
use crate::engine::rules::{RegionSpec, TriageEffect};

/// Classify a flat answer set against the region's triage rules.
///
/// All red rules are evaluated first; every match appends its reason and the
/// first matching rule with a forced key wins the pin. Once any red rule has
/// fired, amber rules are skipped entirely and the level never downgrades.
/// With no red match, every matching amber rule appends its reason. Reason
/// order is rule declaration order, independent of input order.
pub fn classify(spec: &RegionSpec, set: &AnswerSet) -> TriageResult {
    let mut result = TriageResult::green();

    for rule in spec.red_rules {
        if !rule.when.eval(set) {
            continue;
        }
        result.level = TriageLevel::Red;
        result.reasons.push(rule.reason.to_string());
        if let TriageEffect::Red { forced: Some(key) } = rule.effect {
            if result.forced_key.is_none() {
                result.forced_key = Some(key.to_string());
            }
        }
    }
    if result.level == TriageLevel::Red {
        debug!(region = spec.name, forced = ?result.forced_key, "red flag triage");
        return result;
    }

    for rule in spec.amber_rules {
        if rule.when.eval(set) {
            result.level = TriageLevel::Amber;
            result.reasons.push(rule.reason.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answers::FlatAnswer;
    use crate::engine::rules::{Pred, TriageRule, TriageTests};

    static RED: &[TriageRule] = &[
        TriageRule {
            when: Pred::Yes("rf_fever"),
            effect: TriageEffect::Red {
                forced: Some("inflammatory_infection"),
            },
            reason: "Hot, red joint with fever",
        },
        TriageRule {
            when: Pred::Yes("rf_deformity"),
            effect: TriageEffect::Red {
                forced: Some("fracture"),
            },
            reason: "Obvious deformity after injury",
        },
        TriageRule {
            when: Pred::Yes("rf_calf"),
            effect: TriageEffect::Red { forced: None },
            reason: "Unilateral calf swelling",
        },
    ];

    static AMBER: &[TriageRule] = &[TriageRule {
        when: Pred::SingleIs("weightBear", "unable"),
        effect: TriageEffect::Amber,
        reason: "Unable to weight-bear",
    }];

    fn spec() -> RegionSpec {
        RegionSpec {
            name: "test",
            label: "Test",
            adapter: &[],
            registry: &[],
            red_rules: RED,
            amber_rules: AMBER,
            gates: &[],
            rules: &[],
            suppressions: &[],
            default_tests: TriageTests {
                green: &[],
                amber: &[],
                red: &[],
                red_checklist: &[],
            },
        }
    }

    fn yes(id: &str) -> FlatAnswer {
        FlatAnswer::Single {
            id: id.into(),
            value: "yes".into(),
        }
    }

    #[test]
    fn default_is_green_with_no_reasons() {
        let r = classify(&spec(), &AnswerSet::default());
        assert_eq!(r.level, TriageLevel::Green);
        assert!(r.reasons.is_empty());
        assert!(r.forced_key.is_none());
    }

    #[test]
    fn red_short_circuits_amber() {
        let set = AnswerSet::new(vec![
            yes("rf_fever"),
            FlatAnswer::Single {
                id: "weightBear".into(),
                value: "unable".into(),
            },
        ]);
        let r = classify(&spec(), &set);
        assert_eq!(r.level, TriageLevel::Red);
        assert_eq!(r.reasons, vec!["Hot, red joint with fever".to_string()]);
        assert_eq!(r.forced_key.as_deref(), Some("inflammatory_infection"));
    }

    #[test]
    fn multiple_red_matches_all_append_first_forced_wins() {
        let set = AnswerSet::new(vec![yes("rf_fever"), yes("rf_deformity"), yes("rf_calf")]);
        let r = classify(&spec(), &set);
        assert_eq!(r.reasons.len(), 3);
        assert_eq!(r.forced_key.as_deref(), Some("inflammatory_infection"));
    }

    #[test]
    fn unforced_red_leaves_forced_key_empty() {
        let set = AnswerSet::new(vec![yes("rf_calf")]);
        let r = classify(&spec(), &set);
        assert_eq!(r.level, TriageLevel::Red);
        assert!(r.forced_key.is_none());
    }

    #[test]
    fn amber_fires_without_red() {
        let set = AnswerSet::new(vec![FlatAnswer::Single {
            id: "weightBear".into(),
            value: "unable".into(),
        }]);
        let r = classify(&spec(), &set);
        assert_eq!(r.level, TriageLevel::Amber);
        assert_eq!(r.reasons, vec!["Unable to weight-bear".to_string()]);
    }
}

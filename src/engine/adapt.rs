//! Adapter interpreter: canonical namespaced answers → flat answer set.
//!
//! Total over its domain: every flat id in the region's adapter table is
//! produced, substituting the type-appropriate empty default when the
//! canonical source question is absent or carries the wrong tag. Missing
//! data is never an error here.

use tracing::debug;

use crate::core::answers::{
    AnswerSet, AnswerValue, CanonicalAnswers, FlatAnswer, UnknownToken,
};
use crate::engine::rules::{FieldMap, MapSource, RegionSpec};

/// Result of adapting one canonical document.
#[derive(Debug, Clone, Default)]
pub struct AdaptOutcome {
    pub set: AnswerSet,
    /// Option tokens that matched no known option for their field.
    /// Data-quality signal only; scoring treats them as not selected.
    pub unknown: Vec<UnknownToken>,
}

/// Strip the `"<prefix>."` namespace from an option token. Tokens without a
/// prefix pass through unchanged.
fn strip_prefix(token: &str) -> &str {
    match token.rsplit_once('.') {
        Some((_, bare)) => bare,
        None => token,
    }
}

/// Apply the exclusive-"none" rule to a prefix-stripped multi-select:
/// exactly `["none"]` means an explicit empty set; `"none"` co-occurring
/// with other tokens is dropped and the others kept.
fn apply_none_rule(tokens: Vec<String>) -> Vec<String> {
    if tokens.len() == 1 && tokens[0] == "none" {
        return Vec::new();
    }
    tokens.into_iter().filter(|t| t != "none").collect()
}

fn adapt_field(
    field: &FieldMap,
    canonical: &CanonicalAnswers,
    unknown: &mut Vec<UnknownToken>,
) -> FlatAnswer {
    let id = field.flat_id.to_string();
    match &field.source {
        MapSource::Single { question, options } => {
            let value = match canonical.get(*question) {
                Some(AnswerValue::Single(raw)) => {
                    let bare = strip_prefix(raw);
                    if options.contains(&bare) {
                        bare.to_string()
                    } else {
                        unknown.push(UnknownToken {
                            flat_id: id.clone(),
                            raw: raw.clone(),
                        });
                        String::new()
                    }
                }
                _ => String::new(),
            };
            FlatAnswer::Single { id, value }
        }
        MapSource::Multi { question, options } => {
            let values = match canonical.get(*question) {
                Some(AnswerValue::Multi(raw)) => {
                    let mut kept = Vec::new();
                    for token in raw {
                        let bare = strip_prefix(token);
                        if bare == "none" || options.contains(&bare) {
                            kept.push(bare.to_string());
                        } else {
                            unknown.push(UnknownToken {
                                flat_id: id.clone(),
                                raw: token.clone(),
                            });
                        }
                    }
                    apply_none_rule(kept)
                }
                _ => Vec::new(),
            };
            FlatAnswer::Multi { id, values }
        }
        MapSource::YesNo { question } => {
            let value = match canonical.get(*question) {
                Some(AnswerValue::Bool(true)) => "yes",
                Some(AnswerValue::Bool(false)) => "no",
                _ => "",
            };
            FlatAnswer::Single {
                id,
                value: value.to_string(),
            }
        }
        MapSource::Slider { question } => {
            let value = match canonical.get(*question) {
                Some(AnswerValue::Int(v)) => *v as f64,
                Some(AnswerValue::Num(v)) => *v,
                _ => 0.0,
            };
            FlatAnswer::Slider { id, value }
        }
        MapSource::SingleAsMulti { question, options } => {
            let values = match canonical.get(*question) {
                Some(AnswerValue::Single(raw)) => {
                    let bare = strip_prefix(raw);
                    if bare == "none" {
                        Vec::new()
                    } else if options.contains(&bare) {
                        vec![bare.to_string()]
                    } else {
                        unknown.push(UnknownToken {
                            flat_id: id.clone(),
                            raw: raw.clone(),
                        });
                        Vec::new()
                    }
                }
                _ => Vec::new(),
            };
            FlatAnswer::Multi { id, values }
        }
        MapSource::Recode { question, map } => {
            let value = match canonical.get(*question) {
                Some(AnswerValue::Single(raw)) => {
                    let bare = strip_prefix(raw);
                    match map.iter().find(|(from, _)| *from == bare) {
                        Some((_, to)) => to.to_string(),
                        None => {
                            unknown.push(UnknownToken {
                                flat_id: id.clone(),
                                raw: raw.clone(),
                            });
                            String::new()
                        }
                    }
                }
                _ => String::new(),
            };
            FlatAnswer::Single { id, value }
        }
        MapSource::MissingSingle => FlatAnswer::Single {
            id,
            value: String::new(),
        },
        MapSource::MissingMulti => FlatAnswer::Multi { id, values: Vec::new() },
        MapSource::MissingSlider => FlatAnswer::Slider { id, value: 0.0 },
    }
}

/// Adapt a canonical answer document into the region's flat answer set.
pub fn adapt(spec: &RegionSpec, canonical: &CanonicalAnswers) -> AdaptOutcome {
    let mut unknown = Vec::new();
    let answers: Vec<FlatAnswer> = spec
        .adapter
        .iter()
        .map(|field| adapt_field(field, canonical, &mut unknown))
        .collect();
    if !unknown.is_empty() {
        debug!(region = spec.name, count = unknown.len(), "unmapped option tokens");
    }
    AdaptOutcome {
        set: AnswerSet::new(answers),
        unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answers::AnswerValue;
    use std::collections::BTreeMap;

    static FIELDS: &[FieldMap] = &[
        FieldMap {
            flat_id: "X_mech",
            source: MapSource::Single {
                question: "test.mechanism.type",
                options: &["inversionRoll", "directBlow"],
            },
        },
        FieldMap {
            flat_id: "X_site",
            source: MapSource::Multi {
                question: "test.pain.site",
                options: &["lateralATFL", "medialDeltoid"],
            },
        },
        FieldMap {
            flat_id: "X_rf",
            source: MapSource::YesNo {
                question: "test.redflags.fever",
            },
        },
        FieldMap {
            flat_id: "X_stiff",
            source: MapSource::Slider {
                question: "test.stiffness.minutes",
            },
        },
        FieldMap {
            flat_id: "X_support",
            source: MapSource::Recode {
                question: "test.gait.support",
                map: &[("oneCrutch", "support"), ("twoCrutches", "support")],
            },
        },
        FieldMap {
            flat_id: "X_gap",
            source: MapSource::MissingMulti,
        },
    ];

    fn spec() -> RegionSpec {
        RegionSpec {
            name: "test",
            label: "Test",
            adapter: FIELDS,
            registry: &[],
            red_rules: &[],
            amber_rules: &[],
            gates: &[],
            rules: &[],
            suppressions: &[],
            default_tests: crate::engine::rules::TriageTests {
                green: &[],
                amber: &[],
                red: &[],
                red_checklist: &[],
            },
        }
    }

    fn canonical(entries: &[(&str, AnswerValue)]) -> CanonicalAnswers {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<BTreeMap<_, _>>()
    }

    #[test]
    fn strips_namespace_prefixes() {
        let doc = canonical(&[(
            "test.mechanism.type",
            AnswerValue::Single("mechanism.inversionRoll".into()),
        )]);
        let out = adapt(&spec(), &doc);
        assert_eq!(out.set.single("X_mech"), "inversionRoll");
        assert!(out.unknown.is_empty());
    }

    #[test]
    fn exclusive_none_empties_the_set() {
        let doc = canonical(&[(
            "test.pain.site",
            AnswerValue::Multi(vec!["site.none".into()]),
        )]);
        let out = adapt(&spec(), &doc);
        assert!(out.set.multi("X_site").is_empty());
    }

    #[test]
    fn none_alongside_other_tokens_is_dropped() {
        let doc = canonical(&[(
            "test.pain.site",
            AnswerValue::Multi(vec!["site.none".into(), "site.lateralATFL".into()]),
        )]);
        let out = adapt(&spec(), &doc);
        assert_eq!(out.set.multi("X_site"), ["lateralATFL".to_string()]);
    }

    #[test]
    fn unknown_tokens_are_surfaced_not_scored() {
        let doc = canonical(&[
            (
                "test.mechanism.type",
                AnswerValue::Single("mechanism.teleported".into()),
            ),
            (
                "test.pain.site",
                AnswerValue::Multi(vec!["site.lateralATFL".into(), "site.elbow".into()]),
            ),
        ]);
        let out = adapt(&spec(), &doc);
        assert_eq!(out.set.single("X_mech"), "");
        assert_eq!(out.set.multi("X_site"), ["lateralATFL".to_string()]);
        assert_eq!(out.unknown.len(), 2);
        assert_eq!(out.unknown[0].raw, "mechanism.teleported");
    }

    #[test]
    fn wrong_tag_defaults_instead_of_guessing() {
        let doc = canonical(&[
            ("test.redflags.fever", AnswerValue::Text("yes".into())),
            ("test.stiffness.minutes", AnswerValue::Text("30".into())),
        ]);
        let out = adapt(&spec(), &doc);
        assert_eq!(out.set.single("X_rf"), "");
        assert_eq!(out.set.slider("X_stiff"), 0.0);
    }

    #[test]
    fn bool_renders_as_yes_no() {
        let doc = canonical(&[("test.redflags.fever", AnswerValue::Bool(true))]);
        let out = adapt(&spec(), &doc);
        assert!(out.set.yes("X_rf"));
    }

    #[test]
    fn recode_maps_tokens_through_the_table() {
        let doc = canonical(&[(
            "test.gait.support",
            AnswerValue::Single("support.oneCrutch".into()),
        )]);
        let out = adapt(&spec(), &doc);
        assert_eq!(out.set.single("X_support"), "support");
    }

    #[test]
    fn missing_fields_still_appear_with_defaults() {
        let out = adapt(&spec(), &CanonicalAnswers::new());
        assert_eq!(out.set.answers().len(), FIELDS.len());
        assert!(out.set.multi("X_gap").is_empty());
    }
}

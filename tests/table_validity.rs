//! Structural cross-checks over the static region tables.
//!
//! The rule tables are plain data reviewed by clinicians; these tests catch
//! the referential mistakes a reviewer is most likely to let through: a rule
//! weighting a differential that was renamed in the registry, a predicate
//! reading a flat id no adapter row produces, a forced key that does not
//! resolve, or an urgent-only differential accidentally given a base weight.

use std::collections::HashSet;

use clintake::engine::{Pred, TriageEffect};
use clintake::{Region, ALL_REGIONS};

/// Collect every flat id a predicate tree reads.
fn collect_flat_ids(pred: &Pred, out: &mut HashSet<&'static str>) {
    match pred {
        Pred::Yes(id)
        | Pred::SingleIs(id, _)
        | Pred::MultiHas(id, _)
        | Pred::MultiAnsweredWithout(id, _)
        | Pred::SliderAtLeast(id, _) => {
            out.insert(id);
        }
        Pred::Not(inner) => collect_flat_ids(inner, out),
        Pred::All(preds) | Pred::Any(preds) => {
            for p in *preds {
                collect_flat_ids(p, out);
            }
        }
    }
}

#[test]
fn registry_keys_are_unique() {
    for region in ALL_REGIONS {
        let spec = region.spec();
        let mut seen = HashSet::new();
        for d in spec.registry {
            assert!(seen.insert(d.key), "{}: duplicate key {}", spec.name, d.key);
        }
    }
}

#[test]
fn adapter_flat_ids_are_unique() {
    for region in ALL_REGIONS {
        let spec = region.spec();
        let mut seen = HashSet::new();
        for field in spec.adapter {
            assert!(
                seen.insert(field.flat_id),
                "{}: duplicate flat id {}",
                spec.name,
                field.flat_id
            );
        }
    }
}

#[test]
fn every_rule_key_resolves_in_the_registry() {
    for region in ALL_REGIONS {
        let spec = region.spec();
        for rule in spec.rules.iter().chain(spec.suppressions) {
            assert!(
                spec.differential(rule.key).is_some(),
                "{}: score rule key {} missing from registry",
                spec.name,
                rule.key
            );
        }
        for gate in spec.gates {
            assert!(
                spec.differential(gate.key).is_some(),
                "{}: gate key {} missing from registry",
                spec.name,
                gate.key
            );
        }
    }
}

#[test]
fn every_forced_key_resolves_in_the_registry() {
    for region in ALL_REGIONS {
        let spec = region.spec();
        for rule in spec.red_rules {
            if let TriageEffect::Red { forced: Some(key) } = rule.effect {
                assert!(
                    spec.differential(key).is_some(),
                    "{}: forced key {} missing from registry",
                    spec.name,
                    key
                );
            }
        }
    }
}

#[test]
fn amber_rules_never_carry_a_red_effect() {
    for region in ALL_REGIONS {
        let spec = region.spec();
        for rule in spec.amber_rules {
            assert!(
                matches!(rule.effect, TriageEffect::Amber),
                "{}: amber rule {:?} escalates beyond amber",
                spec.name,
                rule.reason
            );
        }
    }
}

#[test]
fn every_predicate_reads_an_adapted_flat_id() {
    for region in ALL_REGIONS {
        let spec = region.spec();
        let adapted: HashSet<&str> = spec.adapter.iter().map(|f| f.flat_id).collect();

        let mut referenced = HashSet::new();
        for rule in spec.red_rules.iter().chain(spec.amber_rules) {
            collect_flat_ids(&rule.when, &mut referenced);
        }
        for rule in spec.rules.iter().chain(spec.suppressions) {
            collect_flat_ids(&rule.when, &mut referenced);
        }
        for gate in spec.gates {
            collect_flat_ids(&gate.contradicted_when, &mut referenced);
        }

        for id in referenced {
            assert!(
                adapted.contains(id),
                "{}: predicate reads {} but no adapter row produces it",
                spec.name,
                id
            );
        }
    }
}

#[test]
fn urgent_only_differentials_carry_no_base_weight() {
    for region in ALL_REGIONS {
        let spec = region.spec();
        for d in spec.registry {
            if d.urgent_only {
                assert_eq!(
                    d.base, 0.0,
                    "{}: urgent-only {} has a nonzero base",
                    spec.name, d.key
                );
            }
        }
    }
}

#[test]
fn every_region_names_at_least_one_forced_pathway() {
    for region in ALL_REGIONS {
        let spec = region.spec();
        let has_forced = spec
            .red_rules
            .iter()
            .any(|r| matches!(r.effect, TriageEffect::Red { forced: Some(_) }));
        assert!(has_forced, "{}: no forced red pathway declared", spec.name);
    }
}

#[test]
fn differentials_with_tests_exist_for_every_registry_entry() {
    for region in ALL_REGIONS {
        let spec = region.spec();
        for d in spec.registry {
            assert!(
                !d.tests.is_empty(),
                "{}: {} lists no objective tests",
                spec.name,
                d.key
            );
        }
    }
}

#[test]
fn region_names_round_trip_through_lookup() {
    for region in ALL_REGIONS {
        assert_eq!(Region::from_name(region.name()).unwrap(), region);
        assert_eq!(region.spec().name, region.name());
    }
}

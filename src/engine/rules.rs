//! Rule-table and adapter-table types shared by every region.
//!
//! A region is described entirely by one `RegionSpec` of static data:
//! how canonical answers flatten (`FieldMap`), which differentials exist
//! (`DifferentialInfo`), and the red/amber/gating/weighting/suppression
//! rules the generic engine interprets. Keeping the rules as data keeps the
//! medical content reviewable without touching engine code.

use crate::core::answers::AnswerSet;
use crate::core::differential::{DifferentialInfo, DifferentialKey};

/// Predicate over a flat answer set. Interpreted by the engine; rule tables
/// compose these in `static` slices.
#[derive(Debug, Clone, Copy)]
pub enum Pred {
    /// Single-choice answer coerces to true (`"yes"`).
    Yes(&'static str),
    /// Single-choice answer equals the given token.
    SingleIs(&'static str, &'static str),
    /// Multi-choice answer contains the given token.
    MultiHas(&'static str, &'static str),
    /// Multi-choice answer was given (non-empty) but lacks the token.
    /// Used by location gates: an unanswered field never contradicts.
    MultiAnsweredWithout(&'static str, &'static str),
    /// Slider value is at least the threshold.
    SliderAtLeast(&'static str, f64),
    Not(&'static Pred),
    All(&'static [Pred]),
    Any(&'static [Pred]),
}

impl Pred {
    pub fn eval(&self, set: &AnswerSet) -> bool {
        match self {
            Pred::Yes(id) => set.yes(id),
            Pred::SingleIs(id, token) => set.single(id) == *token,
            Pred::MultiHas(id, token) => set.multi_has(id, token),
            Pred::MultiAnsweredWithout(id, token) => {
                !set.multi(id).is_empty() && !set.multi_has(id, token)
            }
            Pred::SliderAtLeast(id, min) => set.slider(id) >= *min,
            Pred::Not(inner) => !inner.eval(set),
            Pred::All(preds) => preds.iter().all(|p| p.eval(set)),
            Pred::Any(preds) => preds.iter().any(|p| p.eval(set)),
        }
    }
}

/// Effect of a matching triage rule.
#[derive(Debug, Clone, Copy)]
pub enum TriageEffect {
    /// Escalate to red; optionally pin a single differential.
    Red {
        forced: Option<DifferentialKey>,
    },
    /// Escalate to amber unless already red.
    Amber,
}

/// One predicate→effect triage rule. Declaration order is evaluation order
/// and therefore reason order.
#[derive(Debug, Clone, Copy)]
pub struct TriageRule {
    pub when: Pred,
    pub effect: TriageEffect,
    pub reason: &'static str,
}

/// One weighted scoring contribution for a differential.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRule {
    pub key: DifferentialKey,
    pub when: Pred,
    pub delta: f64,
    pub why: &'static str,
}

/// Location/mechanism gate: when the answers contradict a differential's
/// defining pattern, a fixed penalty (from config) is subtracted. The
/// differential stays visible, just ranked low.
#[derive(Debug, Clone, Copy)]
pub struct GateRule {
    pub key: DifferentialKey,
    pub contradicted_when: Pred,
    pub why: &'static str,
}

/// Where a flat field's value comes from in the canonical document.
///
/// `options` lists the bare tokens known to the rule tables; tokens outside
/// the list are treated as not selected and surfaced as unknown. `Missing*`
/// entries document scorer-referenced fields the questionnaire does not yet
/// collect; they always emit the safe default.
#[derive(Debug, Clone, Copy)]
pub enum MapSource {
    /// Canonical single-choice question; value tokens are prefix-stripped.
    Single {
        question: &'static str,
        options: &'static [&'static str],
    },
    /// Canonical multi-choice question; prefix-stripped with the
    /// exclusive-"none" rule applied.
    Multi {
        question: &'static str,
        options: &'static [&'static str],
    },
    /// Canonical bool rendered as a `"yes"`/`"no"` single for the scorer.
    YesNo { question: &'static str },
    /// Canonical int/num question rendered as a slider value.
    Slider { question: &'static str },
    /// Canonical single-choice fanned out into a one-token multi field.
    SingleAsMulti {
        question: &'static str,
        options: &'static [&'static str],
    },
    /// Canonical single-choice recoded token-by-token; the map doubles as
    /// the allowlist.
    Recode {
        question: &'static str,
        map: &'static [(&'static str, &'static str)],
    },
    MissingSingle,
    MissingMulti,
    MissingSlider,
}

/// One row of a region's adapter table: flat id ← canonical source.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    pub flat_id: &'static str,
    pub source: MapSource,
}

/// Region-level default objective tests per triage level, plus the fixed
/// checklist appended on the forced red pathway.
#[derive(Debug, Clone, Copy)]
pub struct TriageTests {
    pub green: &'static [&'static str],
    pub amber: &'static [&'static str],
    pub red: &'static [&'static str],
    pub red_checklist: &'static [&'static str],
}

/// Complete static description of one body region.
#[derive(Debug, Clone, Copy)]
pub struct RegionSpec {
    /// Canonical region identifier (e.g. `"cervicalSpine"`).
    pub name: &'static str,
    /// Clinician-facing label used in narratives.
    pub label: &'static str,
    pub adapter: &'static [FieldMap],
    pub registry: &'static [DifferentialInfo],
    pub red_rules: &'static [TriageRule],
    pub amber_rules: &'static [TriageRule],
    pub gates: &'static [GateRule],
    pub rules: &'static [ScoreRule],
    /// Cross-differential suppressions, applied after weighted accumulation.
    pub suppressions: &'static [ScoreRule],
    pub default_tests: TriageTests,
}

impl RegionSpec {
    pub fn differential(&self, key: &str) -> Option<&'static DifferentialInfo> {
        self.registry.iter().find(|d| d.key == key)
    }
}

//! Canonical answer documents and the flat per-region answer set.
//!
//! Clients submit one flat map of namespaced question ids
//! (`"ankle.mechanism.type"`) to tagged values. The region adapter turns
//! that document into an [`AnswerSet`] of scorer-facing flat fields; rule
//! predicates only ever read the flat form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One tagged answer value in the canonical document.
///
/// The tag travels with the value (`{"kind": "single", "value": ...}`), so a
/// mistyped submission is visible as a tag mismatch rather than silently
/// coerced. Adapters treat a wrong tag the same as an absent answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum AnswerValue {
    Bool(bool),
    Int(i64),
    Num(f64),
    Text(String),
    /// Single-choice option token, namespaced (`"mechanism.inversionRoll"`).
    Single(String),
    /// Multi-choice option tokens, namespaced.
    Multi(Vec<String>),
    /// ISO-8601 date string; opaque to the engine.
    Date(String),
    /// Nested sub-answers; opaque to the engine.
    Map(BTreeMap<String, AnswerValue>),
}

/// Canonical answer document: namespaced question id → tagged value.
pub type CanonicalAnswers = BTreeMap<String, AnswerValue>;

/// One scorer-facing flat field produced by a region adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FlatAnswer {
    /// Bare single-choice token; empty string when unanswered.
    Single { id: String, value: String },
    /// Bare multi-choice tokens; empty when unanswered or explicit "none".
    Multi { id: String, values: Vec<String> },
    /// Numeric value; 0.0 when unanswered.
    Slider { id: String, value: f64 },
}

impl FlatAnswer {
    pub fn id(&self) -> &str {
        match self {
            FlatAnswer::Single { id, .. }
            | FlatAnswer::Multi { id, .. }
            | FlatAnswer::Slider { id, .. } => id,
        }
    }
}

/// Option token that matched no known option for its field. Surfaced as a
/// data-quality signal; never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownToken {
    pub flat_id: String,
    /// Original namespaced token as submitted.
    pub raw: String,
}

/// Flat answer set for one region, total over the adapter table.
///
/// Accessors never fail: an absent or differently-typed field reads as the
/// type-appropriate empty default, matching adapter output for missing data.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    answers: Vec<FlatAnswer>,
}

const NO_TOKENS: &[String] = &[];

impl AnswerSet {
    pub fn new(answers: Vec<FlatAnswer>) -> Self {
        Self { answers }
    }

    pub fn answers(&self) -> &[FlatAnswer] {
        &self.answers
    }

    fn find(&self, id: &str) -> Option<&FlatAnswer> {
        // Adapter tables hold a dozen-odd fields; linear scan beats a map.
        self.answers.iter().find(|a| a.id() == id)
    }

    /// Bare token of a single-choice field; `""` when unanswered.
    pub fn single(&self, id: &str) -> &str {
        match self.find(id) {
            Some(FlatAnswer::Single { value, .. }) => value,
            _ => "",
        }
    }

    /// Bare tokens of a multi-choice field; empty when unanswered.
    pub fn multi(&self, id: &str) -> &[String] {
        match self.find(id) {
            Some(FlatAnswer::Multi { values, .. }) => values,
            _ => NO_TOKENS,
        }
    }

    /// Slider value; `0.0` when unanswered.
    pub fn slider(&self, id: &str) -> f64 {
        match self.find(id) {
            Some(FlatAnswer::Slider { value, .. }) => *value,
            _ => 0.0,
        }
    }

    /// True when a yes/no field was answered `"yes"`.
    pub fn yes(&self, id: &str) -> bool {
        self.single(id) == "yes"
    }

    pub fn multi_has(&self, id: &str, token: &str) -> bool {
        self.multi(id).iter().any(|t| t == token)
    }
}

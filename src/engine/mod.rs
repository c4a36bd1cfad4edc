//! Generic triage-and-scoring engine, parameterized by per-region rule
//! tables.
//!
//! Pipeline: adapt → classify → score → summarize. Every stage is a pure
//! function over immutable input; the engine holds no state and is safe to
//! call concurrently.

pub mod adapt;
pub mod classify;
pub mod rules;
pub mod score;
pub mod summarize;

pub use adapt::{adapt, AdaptOutcome};
pub use classify::classify;
pub use rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};
pub use score::score;
pub use summarize::summarize;

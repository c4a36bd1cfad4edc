//! Core data types for the intake triage engine.
//!
//! Everything here is created fresh per invocation from immutable input;
//! nothing is shared or mutated across invocations.

pub mod answers;
pub mod differential;
pub mod summary;
pub mod triage;

pub use answers::{AnswerSet, AnswerValue, CanonicalAnswers, FlatAnswer, UnknownToken};
pub use differential::{DifferentialInfo, DifferentialKey, Score, ScoredDifferential};
pub use summary::{DetailedDifferential, Summary, TopDifferential, TriageSummary};
pub use triage::{TriageLevel, TriageResult};

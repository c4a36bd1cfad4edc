//! Rule-based clinical intake triage and differential-scoring engine.
//!
//! Given a patient's structured questionnaire answers for a body region,
//! classify urgency (green/amber/red triage) and rank a small set of
//! candidate clinical differentials with supporting rationale and
//! recommended objective tests for a clinician to review.
//!
//! The pipeline is adapt → classify → score → summarize: one generic engine
//! (`engine`) parameterized by per-region rule tables (`regions`). Every
//! stage is a pure function over immutable input; invocations share no
//! state, so the engine may be called concurrently without coordination.
//! Missing or mistyped answers resolve to safe defaults rather than errors;
//! the only fallible edges are region-name lookup and answer-document
//! parsing.

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod logging;
pub mod regions;

use tracing::{debug, info_span};

pub use crate::config::{EngineConfig, ScoringConfig};
pub use crate::core::{
    AnswerSet, AnswerValue, CanonicalAnswers, DetailedDifferential, FlatAnswer, Score,
    ScoredDifferential, Summary, TopDifferential, TriageLevel, TriageResult, TriageSummary,
    UnknownToken,
};
pub use crate::error::{EngineError, Result};
pub use crate::regions::{Region, ALL_REGIONS};

/// Run the full pipeline for one region with default configuration.
pub fn build_summary(region: Region, answers: &CanonicalAnswers) -> Summary {
    build_summary_with(region, answers, &EngineConfig::default())
}

/// Run the full pipeline for one region with explicit configuration.
pub fn build_summary_with(
    region: Region,
    answers: &CanonicalAnswers,
    config: &EngineConfig,
) -> Summary {
    let spec = region.spec();
    let span = info_span!("intake", region = spec.name);
    let _g = span.enter();

    debug!(phase = "adapt", "normalize canonical answers");
    let adapted = engine::adapt(spec, answers);
    debug!(phase = "classify", "evaluate red and amber rules");
    let triage = engine::classify(spec, &adapted.set);
    debug!(phase = "score", level = %triage.level, "weighted differential scoring");
    let scored = engine::score(spec, &adapted.set, &triage, &config.scoring);
    debug!(phase = "summarize", "rank and assemble");
    engine::summarize(spec, &scored, &triage, &config.scoring)
}

/// Deserialize a canonical answer document from JSON, for callers holding a
/// raw client-submitted payload.
pub fn parse_answers(json: &str) -> Result<CanonicalAnswers> {
    Ok(serde_json::from_str(json)?)
}

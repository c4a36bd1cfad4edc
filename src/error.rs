//! Error types for the intake triage engine.
//!
//! The engine itself is total (missing or mistyped answers resolve to safe
//! defaults); errors only exist at the caller-facing edges.

use thiserror::Error;

/// Error type for engine entry points.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Region identifier the registry does not know.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Canonical answer document that does not deserialize.
    #[error("Invalid answer document: {0}")]
    InvalidAnswers(#[from] serde_json::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::UnknownRegion("kneee".to_string());
        assert_eq!(err.to_string(), "Unknown region: kneee");
    }
}

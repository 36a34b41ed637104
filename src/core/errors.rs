//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for exemplar operations
#[derive(Debug, Error)]
pub enum Error {
    /// An edge insertion would close a cycle in the segmentation graph.
    /// This is a builder invariant violation, never a recoverable input
    /// condition; callers abort the affected unit and continue the run.
    #[error("Cycle detected in segmentation graph: {from} -> {to}")]
    CycleDetected { from: String, to: String },

    /// The caller-specified scope has no located unit in the parsed source
    #[error("Scope `{scope}` not found in {file}")]
    UnresolvedScope { file: PathBuf, scope: String },

    /// The unit contains no locatable program element
    #[error("No locatable program element in {0}")]
    MalformedUnit(PathBuf),

    /// Parsing errors
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Create a parse error for a file
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Whether this error indicates a broken internal invariant rather than
    /// a bad input. Invariant violations are logged loudly; input problems
    /// are skipped quietly.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::CycleDetected { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_detected_is_invariant_violation() {
        let err = Error::CycleDetected {
            from: "a".to_string(),
            to: "b".to_string(),
        };
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_unresolved_scope_is_not_invariant_violation() {
        let err = Error::UnresolvedScope {
            file: PathBuf::from("lib.rs"),
            scope: "missing".to_string(),
        };
        assert!(!err.is_invariant_violation());
    }
}

//! Harness error types.

use thiserror::Error;

/// Main error type used across the harness.
///
/// Time-limit and memory-limit outcomes are deliberately *not* errors:
/// they are verdicts (see `harness::Verdict`). Errors here are conditions
/// that prevent a run from producing a verdict at all.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Input token stream did not match the problem schema
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// No registered problem under the given name
    #[error("Unknown problem: {0}")]
    UnknownProblem(String),

    /// A configured limit is outside the accepted range
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal harness error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HarnessError {
    /// Returns the error code string for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            HarnessError::MalformedInput(_) => "MALFORMED_INPUT",
            HarnessError::UnknownProblem(_) => "UNKNOWN_PROBLEM",
            HarnessError::InvalidLimit(_) => "INVALID_LIMIT",
            HarnessError::Io(_) => "IO_ERROR",
            HarnessError::Serialization(_) => "SERIALIZATION_ERROR",
            HarnessError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias using HarnessError
pub type HarnessResult<T> = Result<T, HarnessError>;

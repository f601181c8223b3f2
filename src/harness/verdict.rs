//! Verdict types for validation runs.

use serde::{Deserialize, Serialize};

/// Verdict for a single solver run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Finished within limits with the expected output
    Accepted,
    /// Finished within limits with different output
    WrongAnswer,
    /// Exceeded the wall-clock ceiling
    TimeLimitExceeded,
    /// Exceeded the memory ceiling (reported by the external judge only)
    MemoryLimitExceeded,
    /// Solver returned an error or panicked
    RuntimeError,
    /// The harness itself failed to produce a verdict
    JudgeError,
}

impl Verdict {
    /// Short verdict code
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::Accepted => "AC",
            Verdict::WrongAnswer => "WA",
            Verdict::TimeLimitExceeded => "TLE",
            Verdict::MemoryLimitExceeded => "MLE",
            Verdict::RuntimeError => "RE",
            Verdict::JudgeError => "JE",
        }
    }

    /// Anything but Accepted counts as failure
    pub fn is_failure(&self) -> bool {
        !matches!(self, Verdict::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Verdict::Accepted.code(), "AC");
        assert_eq!(Verdict::TimeLimitExceeded.code(), "TLE");
        assert_eq!(Verdict::WrongAnswer.to_string(), "WA");
    }

    #[test]
    fn test_failure_classification() {
        assert!(!Verdict::Accepted.is_failure());
        assert!(Verdict::TimeLimitExceeded.is_failure());
        assert!(Verdict::JudgeError.is_failure());
    }

    #[test]
    fn test_wire_form() {
        let json = serde_json::to_string(&Verdict::TimeLimitExceeded).unwrap();
        assert_eq!(json, "\"TIME_LIMIT_EXCEEDED\"");
    }
}

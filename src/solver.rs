//! Solver contract and problem registry.
//!
//! A problem bundles two pure entry points over the same parsed instance:
//! the reference solver at the intended complexity class, and the
//! degraded solver exactly one class worse under a declared policy. Both
//! must be deterministic and produce byte-identical answer text for every
//! valid instance; the degraded variant's only extra observable effect is
//! guard diagnostics on stderr.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::complexity::ComplexityClass;
use crate::config::GuardConfig;
use crate::degrade::Degradation;
use crate::error::{HarnessError, HarnessResult};
use crate::problems;

/// Which solver entry point to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Intended optimal-complexity algorithm
    Reference,
    /// Output-equivalent, asymptotically worse variant
    Degraded,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Reference => write!(f, "reference"),
            Variant::Degraded => write!(f, "degraded"),
        }
    }
}

/// A fixture problem: parsing, both solvers, and instance generation.
///
/// `run` owns the whole pipeline (parse, solve, format) so each call is a
/// fresh invocation with freshly allocated working state; nothing is
/// carried across runs.
pub trait Problem: Send + Sync + std::fmt::Debug {
    /// Stable registry name (kebab-case)
    fn name(&self) -> &'static str;

    /// One-line statement of the problem
    fn summary(&self) -> &'static str;

    /// Declared class of the reference solver
    fn reference_class(&self) -> ComplexityClass;

    /// Declared class of the degraded solver
    fn degraded_class(&self) -> ComplexityClass {
        self.reference_class().degraded()
    }

    /// Degradation policy the slow variant implements
    fn degradation(&self) -> Degradation;

    /// Parse an instance from `input`, run the chosen variant, and return
    /// the answer text exactly as it belongs on stdout (trailing newline
    /// included). The guard config tunes the degraded variant's flush
    /// threshold; the reference variant never touches a guard.
    fn run(&self, variant: Variant, input: &str, guard: &GuardConfig) -> HarnessResult<String>;

    /// Generate a deterministic instance of roughly the given size.
    ///
    /// Same rng state + same size must yield the same instance text.
    fn generate(&self, rng: &mut StdRng, size: usize) -> String;

    /// Instance sizes for a validation ramp, smallest first. The last
    /// entries are expected to push the degraded variant past a ~2 s
    /// ceiling while the reference stays comfortably inside it.
    fn validation_sizes(&self) -> Vec<usize>;
}

/// All registered fixture problems
pub fn all() -> Vec<Box<dyn Problem>> {
    vec![
        Box::new(problems::array_sum::ArraySum),
        Box::new(problems::subset_sum::SubsetSum),
        Box::new(problems::matrix_multiply::MatrixMultiply),
        Box::new(problems::n_queens::NQueens),
        Box::new(problems::coin_change::CoinChange),
        Box::new(problems::shortest_routes::ShortestRoutes),
        Box::new(problems::planet_queries::PlanetQueries),
    ]
}

/// Look up a problem by registry name
pub fn find(name: &str) -> HarnessResult<Box<dyn Problem>> {
    all()
        .into_iter()
        .find(|p| p.name() == name)
        .ok_or_else(|| HarnessError::UnknownProblem(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        let problems = all();
        let mut names: Vec<&str> = problems.iter().map(|p| p.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), problems.len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("array-sum").is_ok());
        let err = find("no-such-problem").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_PROBLEM");
    }

    #[test]
    fn test_every_policy_matches_declared_classes() {
        for problem in all() {
            assert!(
                problem
                    .degradation()
                    .raises(problem.reference_class(), problem.degraded_class()),
                "{} declares a policy/class mismatch",
                problem.name()
            );
        }
    }
}

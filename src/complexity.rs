//! Declared complexity classes and the degradation policy between them.

use serde::{Deserialize, Serialize};

/// Asymptotic complexity class declared for a solver.
///
/// This is metadata attached to a solver, never measured. The dominant
/// size parameter is problem-specific (array length, matrix dimension,
/// target sum, steps per query) and documented per problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplexityClass {
    /// O(1)
    Constant,
    /// O(log n)
    Logarithmic,
    /// O(n)
    Linear,
    /// O(n log n)
    Linearithmic,
    /// O(n²)
    Quadratic,
    /// O(n³)
    Cubic,
    /// O(n⁴)
    Quartic,
    /// O(base^n)
    Exponential { base: u32 },
    /// O(n!)
    Factorial,
}

impl ComplexityClass {
    /// Canonical big-O notation for this class
    pub fn notation(&self) -> String {
        match self {
            ComplexityClass::Constant => "O(1)".to_string(),
            ComplexityClass::Logarithmic => "O(log n)".to_string(),
            ComplexityClass::Linear => "O(n)".to_string(),
            ComplexityClass::Linearithmic => "O(n log n)".to_string(),
            ComplexityClass::Quadratic => "O(n^2)".to_string(),
            ComplexityClass::Cubic => "O(n^3)".to_string(),
            ComplexityClass::Quartic => "O(n^4)".to_string(),
            ComplexityClass::Exponential { base } => format!("O({}^n)", base),
            ComplexityClass::Factorial => "O(n!)".to_string(),
        }
    }

    /// The class a degraded variant of this class must declare.
    ///
    /// One step on a fixed ladder: polynomial classes gain one extra
    /// dimension, exponential classes gain one branching factor, and
    /// logarithmic per-query work falls back to linear simulation. Each
    /// shipped fixture is exactly one step worse than its reference.
    pub fn degraded(&self) -> ComplexityClass {
        match self {
            ComplexityClass::Constant => ComplexityClass::Linear,
            ComplexityClass::Logarithmic => ComplexityClass::Linear,
            ComplexityClass::Linear => ComplexityClass::Quadratic,
            ComplexityClass::Linearithmic => ComplexityClass::Quadratic,
            ComplexityClass::Quadratic => ComplexityClass::Cubic,
            ComplexityClass::Cubic => ComplexityClass::Quartic,
            ComplexityClass::Quartic => ComplexityClass::Quartic,
            ComplexityClass::Exponential { base } => {
                ComplexityClass::Exponential { base: base + 1 }
            }
            ComplexityClass::Factorial => ComplexityClass::Factorial,
        }
    }
}

impl std::fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

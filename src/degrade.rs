//! Degradation transform vocabulary.
//!
//! Every degraded fixture routes its extra work through one of these
//! policies, so the degradation ratio is configurable data instead of
//! hand-duplicated loops. The equivalence rule for all of them: the added
//! computation is a mathematical no-op. Either the same integer quantity
//! is computed several times and divided back out (exact, because the
//! copies are identical integers), or redundant branches merge through an
//! idempotent operator, or the extra work is a pure counter loop whose
//! result never reaches the answer path.

use serde::{Deserialize, Serialize};

use crate::complexity::ComplexityClass;
use crate::guard::WorkUnit;

/// Degradation policy applied to a reference solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Degradation {
    /// Compute the same integer quantity `copies` times, sum, divide.
    /// Exact divisibility holds because all copies are identical.
    RepeatAndDivide { copies_track: SizeTrack },

    /// Add `extra` logically redundant branches to a recursion whose
    /// results merge through an idempotent operator (A ∨ B ∨ B ≡ A ∨ B).
    RedundantBranches { extra: u32 },

    /// Pure counter loop per algorithm step; the loop feeds the guard and
    /// nothing else.
    CounterPadding { per_step_track: SizeTrack },

    /// Re-run an idempotent relaxation pass extra times; monotone
    /// min-merge makes repetition a no-op on the final answer.
    RepeatedPasses { passes_track: SizeTrack },

    /// Replace a pruned/logarithmic strategy with exhaustive or stepwise
    /// enumeration of the same answer set.
    ExhaustiveEnumeration,
}

/// How a policy's multiplier scales with the instance.
///
/// Degradation must raise the asymptotic class, not just the constant, so
/// multipliers track an instance dimension rather than a fixed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizeTrack {
    /// Multiplier equals the primary instance size n
    PrimarySize,
    /// Multiplier equals the target/limit parameter (e.g. DP target sum)
    TargetParameter,
}

impl Degradation {
    /// Human-readable description for reports and `list` output
    pub fn describe(&self) -> String {
        match self {
            Degradation::RepeatAndDivide { copies_track } => {
                format!("repeat-and-divide, {} copies", copies_track.describe())
            }
            Degradation::RedundantBranches { extra } => {
                format!("{} redundant recursive branch(es), idempotent merge", extra)
            }
            Degradation::CounterPadding { per_step_track } => {
                format!("counter padding, {} iterations per step", per_step_track.describe())
            }
            Degradation::RepeatedPasses { passes_track } => {
                format!("{} repeated idempotent passes", passes_track.describe())
            }
            Degradation::ExhaustiveEnumeration => "exhaustive candidate enumeration".to_string(),
        }
    }

    /// Check that this policy takes `reference` to `degraded` in one step
    /// of the documented ladder.
    pub fn raises(&self, reference: ComplexityClass, degraded: ComplexityClass) -> bool {
        reference.degraded() == degraded
            || matches!(self, Degradation::ExhaustiveEnumeration)
    }
}

impl SizeTrack {
    fn describe(&self) -> &'static str {
        match self {
            SizeTrack::PrimarySize => "n",
            SizeTrack::TargetParameter => "target",
        }
    }
}

/// Compute `quantity()` exactly `copies` times, sum the identical results
/// and divide the sum back down.
///
/// The division is exact for every instance, not just typical ones: all
/// `copies` summands come from the same pure closure over the same data,
/// so the sum is precisely `copies * quantity()`. Overflow is the
/// caller's contract (the summand bound times `copies` must fit i64, the
/// same width the reference uses). The debug assertion pins the
/// exact-divisibility invariant.
pub fn repeat_and_divide<F>(copies: usize, guard: &mut WorkUnit, quantity: F) -> i64
where
    F: Fn() -> i64,
{
    let copies = copies.max(1);
    let mut sum: i64 = 0;
    for _ in 0..copies {
        let q = quantity();
        sum += q;
        guard.tick(q as u64);
    }
    debug_assert!(sum % copies as i64 == 0, "redundant copies must divide exactly");
    sum / copies as i64
}

/// Run a pure padding loop of `iterations` guard ticks.
///
/// The accumulated value never reaches the caller; the guard keeps the
/// loop observable.
pub fn counter_padding(iterations: u64, guard: &mut WorkUnit) {
    for i in 0..iterations {
        guard.tick(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_and_divide_is_exact() {
        let mut guard = WorkUnit::new(u64::MAX);
        for copies in 1..=17 {
            for value in [-9i64, -1, 0, 1, 7, 123_456_789] {
                assert_eq!(repeat_and_divide(copies, &mut guard, || value), value);
            }
        }
    }

    #[test]
    fn test_repeat_and_divide_zero_copies_clamped() {
        let mut guard = WorkUnit::new(u64::MAX);
        assert_eq!(repeat_and_divide(0, &mut guard, || 42), 42);
    }

    #[test]
    fn test_counter_padding_feeds_guard_only() {
        let mut guard = WorkUnit::new(u64::MAX);
        counter_padding(1000, &mut guard);
        assert_eq!(guard.ticks(), 1000);
    }

    #[test]
    fn test_policies_raise_one_class() {
        let policy = Degradation::RepeatAndDivide {
            copies_track: SizeTrack::PrimarySize,
        };
        assert!(policy.raises(ComplexityClass::Linear, ComplexityClass::Quadratic));
        assert!(!policy.raises(ComplexityClass::Linear, ComplexityClass::Cubic));

        let policy = Degradation::RedundantBranches { extra: 1 };
        assert!(policy.raises(
            ComplexityClass::Exponential { base: 2 },
            ComplexityClass::Exponential { base: 3 }
        ));
    }
}

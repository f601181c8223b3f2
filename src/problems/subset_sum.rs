//! Subset sum: does any subset of the array hit the target exactly?
//!
//! Input: `n`, the array, then the target. Output: `YES` or `NO`.
//! Reference is the textbook O(2^n) include/exclude recursion. The
//! degraded variant re-evaluates the exclude branch through an explicit
//! extra-branch count, merging with logical OR, for O(3^n).

use rand::Rng;
use rand::rngs::StdRng;

use crate::complexity::ComplexityClass;
use crate::config::GuardConfig;
use crate::degrade::Degradation;
use crate::error::HarnessResult;
use crate::guard::WorkUnit;
use crate::io::TokenReader;
use crate::solver::{Problem, Variant};

#[derive(Debug)]
pub struct SubsetSum;

/// Redundant exclude-branch re-evaluations in the degraded recursion
const EXTRA_BRANCHES: u32 = 1;

struct Instance {
    values: Vec<i64>,
    target: i64,
}

impl Instance {
    fn parse(input: &str) -> HarnessResult<Self> {
        let mut reader = TokenReader::new(input);
        let n: usize = reader.next()?;
        let values = reader.take(n)?;
        let target = reader.next()?;
        Ok(Self { values, target })
    }
}

fn reference(values: &[i64], target: i64, index: usize) -> bool {
    if target == 0 {
        return true;
    }
    if index == values.len() {
        return false;
    }
    reference(values, target - values[index], index + 1)
        || reference(values, target, index + 1)
}

/// Same recursion with `extra` redundant exclude branches. Every branch
/// is evaluated before merging, so the work is forced even when an early
/// branch already found the target; OR is idempotent, so the answer is
/// unchanged.
fn degraded(values: &[i64], target: i64, index: usize, extra: u32, guard: &mut WorkUnit) -> bool {
    if target == 0 {
        return true;
    }
    if index == values.len() {
        return false;
    }
    guard.tick(target.unsigned_abs());
    let include = degraded(values, target - values[index], index + 1, extra, guard);
    let mut hit = include;
    for _ in 0..=extra {
        let exclude = degraded(values, target, index + 1, extra, guard);
        hit = hit || exclude;
    }
    hit
}

impl Problem for SubsetSum {
    fn name(&self) -> &'static str {
        "subset-sum"
    }

    fn summary(&self) -> &'static str {
        "Exact subset sum decision"
    }

    fn reference_class(&self) -> ComplexityClass {
        ComplexityClass::Exponential { base: 2 }
    }

    fn degradation(&self) -> Degradation {
        Degradation::RedundantBranches {
            extra: EXTRA_BRANCHES,
        }
    }

    fn run(&self, variant: Variant, input: &str, guard_cfg: &GuardConfig) -> HarnessResult<String> {
        let inst = Instance::parse(input)?;
        let found = match variant {
            Variant::Reference => reference(&inst.values, inst.target, 0),
            Variant::Degraded => {
                let mut guard = WorkUnit::new(guard_cfg.flush_every);
                let found = degraded(&inst.values, inst.target, 0, EXTRA_BRANCHES, &mut guard);
                guard.finish();
                found
            }
        };
        Ok(format!("{}\n", if found { "YES" } else { "NO" }))
    }

    fn generate(&self, rng: &mut StdRng, size: usize) -> String {
        let values: Vec<i64> = (0..size).map(|_| rng.random_range(1i64..=100)).collect();
        // unreachable target: forces both recursions through the full tree
        let target: i64 = values.iter().sum::<i64>() + 1;
        let mut out = format!("{}\n", size);
        let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        out.push_str(&joined.join(" "));
        out.push_str(&format!("\n{}\n", target));
        out
    }

    fn validation_sizes(&self) -> Vec<usize> {
        vec![12, 15, 18, 21]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuardConfig;
    use rand::SeedableRng;

    fn guard_cfg() -> GuardConfig {
        GuardConfig {
            flush_every: u64::MAX,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let out = SubsetSum
            .run(Variant::Reference, "3\n1 2 3\n5\n", &guard_cfg())
            .unwrap();
        assert_eq!(out, "YES\n");
    }

    #[test]
    fn test_degraded_scenario_matches() {
        let out = SubsetSum
            .run(Variant::Degraded, "3\n1 2 3\n5\n", &guard_cfg())
            .unwrap();
        assert_eq!(out, "YES\n");
    }

    #[test]
    fn test_unreachable_target_is_no() {
        let input = "4\n2 4 6 8\n21\n";
        let fast = SubsetSum.run(Variant::Reference, input, &guard_cfg()).unwrap();
        let slow = SubsetSum.run(Variant::Degraded, input, &guard_cfg()).unwrap();
        assert_eq!(fast, "NO\n");
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_zero_target_is_yes_for_empty_subset() {
        let input = "3\n5 6 7\n0\n";
        let fast = SubsetSum.run(Variant::Reference, input, &guard_cfg()).unwrap();
        let slow = SubsetSum.run(Variant::Degraded, input, &guard_cfg()).unwrap();
        assert_eq!(fast, "YES\n");
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_equivalence_on_generated_instances() {
        let mut rng = StdRng::seed_from_u64(23);
        for size in [1, 5, 10, 13] {
            let input = SubsetSum.generate(&mut rng, size);
            let fast = SubsetSum.run(Variant::Reference, &input, &guard_cfg()).unwrap();
            let slow = SubsetSum.run(Variant::Degraded, &input, &guard_cfg()).unwrap();
            assert_eq!(fast, slow, "size {}", size);
        }
    }
}

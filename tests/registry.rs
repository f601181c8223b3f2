//! Registry-wide properties: equivalence, determinism, and answer
//! formatting across every fixture problem, exercised in-process with
//! instance sizes small enough for the degraded variants.

use rand::SeedableRng;
use rand::rngs::StdRng;

use slowbench::config::GuardConfig;
use slowbench::solver::{self, Variant};

/// Sizes safe for the degraded variant of each problem in a debug test
/// run; the meaning of "size" is problem-specific.
fn quick_sizes(name: &str) -> Vec<usize> {
    match name {
        "array-sum" => vec![1, 40, 150],
        "subset-sum" => vec![2, 8, 12],
        "matrix-multiply" => vec![1, 6, 14],
        "n-queens" => vec![10, 16, 20],
        "coin-change" => vec![5, 60, 150],
        "shortest-routes" => vec![2, 8, 18],
        "planet-queries" => vec![4, 500, 5_000],
        other => panic!("no quick sizes for {}", other),
    }
}

fn guard_cfg() -> GuardConfig {
    GuardConfig {
        flush_every: u64::MAX,
    }
}

#[test]
fn test_every_problem_is_output_equivalent() {
    for problem in solver::all() {
        for size in quick_sizes(problem.name()) {
            let mut rng = StdRng::seed_from_u64(0xFEED ^ size as u64);
            let input = problem.generate(&mut rng, size);
            let fast = problem
                .run(Variant::Reference, &input, &guard_cfg())
                .unwrap_or_else(|e| panic!("{} reference failed: {}", problem.name(), e));
            let slow = problem
                .run(Variant::Degraded, &input, &guard_cfg())
                .unwrap_or_else(|e| panic!("{} degraded failed: {}", problem.name(), e));
            assert_eq!(
                fast,
                slow,
                "{} diverged at size {}",
                problem.name(),
                size
            );
        }
    }
}

#[test]
fn test_every_problem_is_deterministic() {
    for problem in solver::all() {
        let size = quick_sizes(problem.name())[1];
        let mut rng = StdRng::seed_from_u64(0xACE ^ size as u64);
        let input = problem.generate(&mut rng, size);
        for variant in [Variant::Reference, Variant::Degraded] {
            let first = problem.run(variant, &input, &guard_cfg()).unwrap();
            let second = problem.run(variant, &input, &guard_cfg()).unwrap();
            assert_eq!(first, second, "{} {} not deterministic", problem.name(), variant);
        }
    }
}

#[test]
fn test_generation_is_reproducible() {
    for problem in solver::all() {
        let size = quick_sizes(problem.name())[1];
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        assert_eq!(
            problem.generate(&mut rng_a, size),
            problem.generate(&mut rng_b, size),
            "{} generator not reproducible",
            problem.name()
        );
    }
}

#[test]
fn test_answers_end_with_single_newline() {
    for problem in solver::all() {
        let size = quick_sizes(problem.name())[0];
        let mut rng = StdRng::seed_from_u64(99);
        let input = problem.generate(&mut rng, size);
        let answer = problem.run(Variant::Reference, &input, &guard_cfg()).unwrap();
        assert!(answer.ends_with('\n'), "{} answer missing newline", problem.name());
        assert!(!answer.ends_with("\n\n"), "{} answer has blank tail", problem.name());
    }
}

#[test]
fn test_declared_classes_follow_the_ladder() {
    for problem in solver::all() {
        let reference = problem.reference_class();
        let degraded = problem.degraded_class();
        assert!(
            problem.degradation().raises(reference, degraded),
            "{}: {} does not degrade to {}",
            problem.name(),
            reference,
            degraded
        );
    }
}

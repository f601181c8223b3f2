//! Planet queries: follow a functional-graph successor pointer k steps.
//!
//! Input: `n q`, then `next[1..n]` (1-indexed successors), then `q`
//! queries `x k`. Output: one line per query, the planet reached from x
//! after k steps.
//!
//! Reference precomputes a binary-lifting table and answers each query
//! in O(log k). The degraded variant walks the k steps one by one with
//! guard work per step, O(k) per query.

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
pub struct PlanetQueries;

/// Lifting table depth; covers every k below 2^30
const LOG: usize = 30;

/// Planets in generated instances; the ramp dimension is k, not n
const GEN_PLANETS: usize = 1_000;

/// Queries per generated instance
const GEN_QUERIES: usize = 20;

struct Instance {
    next: Vec<usize>,
    queries: Vec<(usize, u64)>,
}

impl Instance {
    fn parse(input: &str) -> HarnessResult<Self> {
        let mut reader = TokenReader::new(input);
        let n: usize = reader.next()?;
        let q: usize = reader.next()?;
        let mut next = Vec::with_capacity(n);
        for _ in 0..n {
            let to: usize = reader.next()?;
            next.push(to - 1);
        }
        let mut queries = Vec::with_capacity(q);
        for _ in 0..q {
            let x: usize = reader.next()?;
            let k: u64 = reader.next()?;
            queries.push((x - 1, k));
        }
        Ok(Self { next, queries })
    }
}

fn reference(inst: &Instance) -> String {
    let n = inst.next.len();
    // up[j][v] = 2^j-th successor of v, built per invocation
    let mut up = vec![vec![0usize; n]; LOG];
    up[0].copy_from_slice(&inst.next);
    for j in 1..LOG {
        for v in 0..n {
            up[j][v] = up[j - 1][up[j - 1][v]];
        }
    }

    let mut out = String::with_capacity(inst.queries.len() * 8);
    for &(x, k) in &inst.queries {
        let mut v = x;
        for (j, row) in up.iter().enumerate() {
            if (k >> j) & 1 == 1 {
                v = row[v];
            }
        }
        out.push_str(&format!("{}\n", v + 1));
    }
    out
}

fn degraded(inst: &Instance, guard: &mut WorkUnit) -> String {
    let mut out = String::with_capacity(inst.queries.len() * 8);
    for &(x, k) in &inst.queries {
        let mut v = x;
        for step in 0..k {
            v = inst.next[v];
            guard.tick(v as u64 ^ step);
        }
        out.push_str(&format!("{}\n", v + 1));
    }
    out
}

impl Problem for PlanetQueries {
    fn name(&self) -> &'static str {
        "planet-queries"
    }

    fn summary(&self) -> &'static str {
        "k-th successor queries on a functional graph"
    }

    fn reference_class(&self) -> ComplexityClass {
        ComplexityClass::Logarithmic
    }

    fn degradation(&self) -> Degradation {
        Degradation::ExhaustiveEnumeration
    }

    fn run(&self, variant: Variant, input: &str, guard_cfg: &GuardConfig) -> HarnessResult<String> {
        let inst = Instance::parse(input)?;
        let answer = match variant {
            Variant::Reference => reference(&inst),
            Variant::Degraded => {
                let mut guard = WorkUnit::new(guard_cfg.flush_every);
                let answer = degraded(&inst, &mut guard);
                guard.finish();
                answer
            }
        };
        Ok(answer)
    }

    /// `size` bounds the per-query step count k; the planet count is
    /// fixed. The reference cost barely moves with `size`, the degraded
    /// walk is linear in it.
    fn generate(&self, rng: &mut StdRng, size: usize) -> String {
        let k_max = (size as u64).max(1).min(1 << (LOG - 1));
        let mut out = format!("{} {}\n", GEN_PLANETS, GEN_QUERIES);
        let successors: Vec<String> = (0..GEN_PLANETS)
            .map(|_| rng.random_range(1..=GEN_PLANETS).to_string())
            .collect();
        out.push_str(&successors.join(" "));
        out.push('\n');
        for _ in 0..GEN_QUERIES {
            let x = rng.random_range(1..=GEN_PLANETS);
            let k = rng.random_range(k_max / 2..=k_max);
            out.push_str(&format!("{} {}\n", x, k));
        }
        out
    }

    fn validation_sizes(&self) -> Vec<usize> {
        vec![100_000, 10_000_000, 500_000_000]
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
    fn test_cycle_walk() {
        // 1 -> 2 -> 3 -> 1 cycle
        let input = "3 4\n2 3 1\n1 1\n1 3\n1 4\n2 300000000\n";
        let fast = PlanetQueries.run(Variant::Reference, input, &guard_cfg()).unwrap();
        // 300000000 % 3 == 0, so the walk from 2 lands back on 2
        assert_eq!(fast, "2\n1\n2\n2\n");
    }

    #[test]
    fn test_self_loop() {
        let input = "2 2\n1 1\n2 5\n1 7\n";
        let fast = PlanetQueries.run(Variant::Reference, input, &guard_cfg()).unwrap();
        let slow = PlanetQueries.run(Variant::Degraded, input, &guard_cfg()).unwrap();
        assert_eq!(fast, "1\n1\n");
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_zero_steps_stays_put() {
        let input = "3 1\n2 3 1\n3 0\n";
        let fast = PlanetQueries.run(Variant::Reference, input, &guard_cfg()).unwrap();
        let slow = PlanetQueries.run(Variant::Degraded, input, &guard_cfg()).unwrap();
        assert_eq!(fast, "3\n");
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_equivalence_on_generated_instances() {
        let mut rng = StdRng::seed_from_u64(71);
        for size in [1, 64, 1_000, 20_000] {
            let input = PlanetQueries.generate(&mut rng, size);
            let fast = PlanetQueries.run(Variant::Reference, &input, &guard_cfg()).unwrap();
            let slow = PlanetQueries.run(Variant::Degraded, &input, &guard_cfg()).unwrap();
            assert_eq!(fast, slow, "size {}", size);
        }
    }
}

//! Matrix multiply: C = A × B over n×n integer matrices; the answer is
//! the sum of C's entries.
//!
//! Input: `n`, then the n² entries of A, then the n² entries of B.
//! Output: one line, the entry sum of the product.
//! Reference is the naive O(n³) triple loop. The degraded variant
//! computes every dot product n times and divides the total back down,
//! for O(n⁴).

use rand::Rng;
use rand::rngs::StdRng;

use crate::complexity::ComplexityClass;
use crate::config::GuardConfig;
use crate::degrade::{self, Degradation, SizeTrack};
use crate::error::HarnessResult;
use crate::guard::WorkUnit;
use crate::io::TokenReader;
use crate::solver::{Problem, Variant};

#[derive(Debug)]
pub struct MatrixMultiply;

struct Instance {
    n: usize,
    a: Vec<i64>,
    b: Vec<i64>,
}

impl Instance {
    fn parse(input: &str) -> HarnessResult<Self> {
        let mut reader = TokenReader::new(input);
        let n: usize = reader.next()?;
        let a = reader.take(n * n)?;
        let b = reader.take(n * n)?;
        Ok(Self { n, a, b })
    }

    #[inline]
    fn dot(&self, i: usize, j: usize) -> i64 {
        let n = self.n;
        let mut sum = 0i64;
        for k in 0..n {
            sum += self.a[i * n + k] * self.b[k * n + j];
        }
        sum
    }
}

fn reference(inst: &Instance) -> i64 {
    let mut total = 0i64;
    for i in 0..inst.n {
        for j in 0..inst.n {
            total += inst.dot(i, j);
        }
    }
    total
}

fn degraded(inst: &Instance, guard: &mut WorkUnit) -> i64 {
    let mut total = 0i64;
    for i in 0..inst.n {
        for j in 0..inst.n {
            // n identical dot products, summed and divided exactly
            total += degrade::repeat_and_divide(inst.n, guard, || inst.dot(i, j));
        }
    }
    total
}

impl Problem for MatrixMultiply {
    fn name(&self) -> &'static str {
        "matrix-multiply"
    }

    fn summary(&self) -> &'static str {
        "Entry sum of an n x n matrix product"
    }

    fn reference_class(&self) -> ComplexityClass {
        ComplexityClass::Cubic
    }

    fn degradation(&self) -> Degradation {
        Degradation::RepeatAndDivide {
            copies_track: SizeTrack::PrimarySize,
        }
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
        Ok(format!("{}\n", answer))
    }

    fn generate(&self, rng: &mut StdRng, size: usize) -> String {
        // entries stay in [-10, 10]: n repeated dot products of n terms
        // peak below 100·n², far inside i64 for any practical n
        let mut out = format!("{}\n", size);
        for _ in 0..2 {
            for _ in 0..size {
                let entries: Vec<String> = (0..size)
                    .map(|_| rng.random_range(-10i64..=10).to_string())
                    .collect();
                out.push_str(&entries.join(" "));
                out.push('\n');
            }
        }
        out
    }

    fn validation_sizes(&self) -> Vec<usize> {
        vec![40, 80, 160, 320]
    }
}

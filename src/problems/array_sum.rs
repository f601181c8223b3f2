//! Array sum: add up `n` integers.
//!
//! Input: `n`, then `n` values. Output: one line, the sum.
//! Reference is a single O(n) pass; the degraded variant recomputes each
//! element's contribution n times and divides back down, for O(n²).

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
pub struct ArraySum;

struct Instance {
    values: Vec<i64>,
}

impl Instance {
    fn parse(input: &str) -> HarnessResult<Self> {
        let mut reader = TokenReader::new(input);
        let n: usize = reader.next()?;
        let values = reader.take(n)?;
        Ok(Self { values })
    }
}

fn reference(inst: &Instance) -> i64 {
    inst.values.iter().sum()
}

fn degraded(inst: &Instance, guard: &mut WorkUnit) -> i64 {
    let n = inst.values.len();
    let mut total = 0i64;
    for &value in &inst.values {
        // n identical copies of the element, summed and divided back out
        total += degrade::repeat_and_divide(n, guard, || value);
    }
    total
}

impl Problem for ArraySum {
    fn name(&self) -> &'static str {
        "array-sum"
    }

    fn summary(&self) -> &'static str {
        "Sum of an integer array"
    }

    fn reference_class(&self) -> ComplexityClass {
        ComplexityClass::Linear
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
        let mut out = format!("{}\n", size);
        for i in 0..size {
            let sep = if i + 1 == size { '\n' } else { ' ' };
            // bounded so n copies of any element stay well inside i64
            out.push_str(&format!("{}{}", rng.random_range(-1_000_000i64..=1_000_000), sep));
        }
        out
    }

    fn validation_sizes(&self) -> Vec<usize> {
        vec![2_000, 16_000, 64_000, 256_000]
    }
}

//! Coin change: count the unordered coin combinations that reach a
//! target sum, modulo 1e9+7.
//!
//! Input: `n x`, then the `n` coin values. Output: one line, the count.
//! Reference is the bottom-up O(n·x) table (coins in the outer loop, so
//! {1,2} → 3 counts once). The degraded variant keeps the same table and
//! pads every transition with a pure counter loop of x ticks, one
//! polynomial degree in the target.

use rand::Rng;
use rand::rngs::StdRng;

use crate::complexity::ComplexityClass;
use crate::config::GuardConfig;
use crate::constants::COUNTING_MOD;
use crate::degrade::{self, Degradation, SizeTrack};
use crate::error::HarnessResult;
use crate::guard::WorkUnit;
use crate::io::TokenReader;
use crate::solver::{Problem, Variant};

#[derive(Debug)]
pub struct CoinChange;

struct Instance {
    coins: Vec<usize>,
    target: usize,
}

impl Instance {
    fn parse(input: &str) -> HarnessResult<Self> {
        let mut reader = TokenReader::new(input);
        let n: usize = reader.next()?;
        let target: usize = reader.next()?;
        let coins = reader.take(n)?;
        Ok(Self { coins, target })
    }
}

fn reference(inst: &Instance) -> u64 {
    // table allocated per invocation; nothing survives the call
    let mut dp = vec![0u64; inst.target + 1];
    dp[0] = 1;
    for &coin in &inst.coins {
        if coin == 0 {
            continue;
        }
        for sum in coin..=inst.target {
            dp[sum] = (dp[sum] + dp[sum - coin]) % COUNTING_MOD;
        }
    }
    dp[inst.target]
}

fn degraded(inst: &Instance, guard: &mut WorkUnit) -> u64 {
    let mut dp = vec![0u64; inst.target + 1];
    dp[0] = 1;
    for &coin in &inst.coins {
        if coin == 0 {
            continue;
        }
        for sum in coin..=inst.target {
            dp[sum] = (dp[sum] + dp[sum - coin]) % COUNTING_MOD;
            // x wasted ticks per transition; the padding result never
            // feeds the table
            degrade::counter_padding(inst.target as u64, guard);
        }
    }
    dp[inst.target]
}

impl Problem for CoinChange {
    fn name(&self) -> &'static str {
        "coin-change"
    }

    fn summary(&self) -> &'static str {
        "Count unordered coin combinations reaching a target"
    }

    fn reference_class(&self) -> ComplexityClass {
        ComplexityClass::Quadratic
    }

    fn degradation(&self) -> Degradation {
        Degradation::CounterPadding {
            per_step_track: SizeTrack::TargetParameter,
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

    /// `size` is the target sum; the coin set stays small and always
    /// contains 1 so every target is reachable.
    fn generate(&self, rng: &mut StdRng, size: usize) -> String {
        let target = size.max(1);
        let n = 20.min(target.max(2));
        let mut coins = vec![1usize];
        while coins.len() < n {
            coins.push(rng.random_range(1..=target.min(1000)));
        }
        let joined: Vec<String> = coins.iter().map(|c| c.to_string()).collect();
        format!("{} {}\n{}\n", n, target, joined.join(" "))
    }

    fn validation_sizes(&self) -> Vec<usize> {
        vec![500, 2_000, 8_000, 16_000]
    }
}

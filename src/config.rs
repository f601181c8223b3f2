//! Configuration for the slowbench harness
//!
//! Loaded from environment variables with sensible defaults; nothing here
//! is required to be set.

use std::env;

use crate::constants::{
    DEFAULT_GENERATOR_SEED, DEFAULT_GUARD_FLUSH_EVERY, DEFAULT_MEMORY_LIMIT_KB,
    DEFAULT_TIME_LIMIT_MS, MAX_TIME_LIMIT_MS,
};
use crate::error::{HarnessError, HarnessResult};

/// Harness configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Execution limits for validation runs
    pub limits: LimitsConfig,

    /// Anti-optimization guard tuning
    pub guard: GuardConfig,

    /// Instance generation
    pub generator: GeneratorConfig,
}

/// Execution limits configuration
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    /// Wall-clock ceiling per solver run in milliseconds
    pub time_limit_ms: u64,

    /// Memory ceiling in KB. Not enforced in-process: recorded in reports
    /// for the external judge environment.
    pub memory_limit_kb: u64,
}

/// Anti-optimization guard configuration
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Guard ticks between diagnostic flushes (K)
    pub flush_every: u64,
}

/// Instance generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for deterministic instance generation
    pub seed: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> HarnessResult<Self> {
        let config = Self {
            limits: LimitsConfig {
                time_limit_ms: env_or("SLOWBENCH_TIME_LIMIT_MS", DEFAULT_TIME_LIMIT_MS),
                memory_limit_kb: env_or("SLOWBENCH_MEMORY_LIMIT_KB", DEFAULT_MEMORY_LIMIT_KB),
            },
            guard: GuardConfig {
                flush_every: env_or("SLOWBENCH_GUARD_FLUSH_EVERY", DEFAULT_GUARD_FLUSH_EVERY),
            },
            generator: GeneratorConfig {
                seed: env_or("SLOWBENCH_GENERATOR_SEED", DEFAULT_GENERATOR_SEED),
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> HarnessResult<()> {
        if self.limits.time_limit_ms == 0 || self.limits.time_limit_ms > MAX_TIME_LIMIT_MS {
            return Err(HarnessError::InvalidLimit(format!(
                "time limit must be in 1..={} ms, got {}",
                MAX_TIME_LIMIT_MS, self.limits.time_limit_ms
            )));
        }
        if self.guard.flush_every == 0 {
            return Err(HarnessError::InvalidLimit(
                "guard flush interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: LimitsConfig {
                time_limit_ms: DEFAULT_TIME_LIMIT_MS,
                memory_limit_kb: DEFAULT_MEMORY_LIMIT_KB,
            },
            guard: GuardConfig {
                flush_every: DEFAULT_GUARD_FLUSH_EVERY,
            },
            generator: GeneratorConfig {
                seed: DEFAULT_GENERATOR_SEED,
            },
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.limits.time_limit_ms, DEFAULT_TIME_LIMIT_MS);
        assert_eq!(config.guard.flush_every, DEFAULT_GUARD_FLUSH_EVERY);
    }

    #[test]
    fn test_zero_time_limit_rejected() {
        let mut config = Config::default();
        config.limits.time_limit_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_flush_interval_rejected() {
        let mut config = Config::default();
        config.guard.flush_every = 0;
        assert!(config.validate().is_err());
    }
}

//! Crate-wide constants
//!
//! Defaults for execution limits, the anti-optimization guard, and the
//! fixture problems. Everything here can be overridden through the
//! environment (see `config`).

// =============================================================================
// EXECUTION LIMIT DEFAULTS
// =============================================================================

/// Default wall-clock ceiling per solver run, in milliseconds
pub const DEFAULT_TIME_LIMIT_MS: u64 = 2000;

/// Maximum configurable wall-clock ceiling, in milliseconds
pub const MAX_TIME_LIMIT_MS: u64 = 30_000;

/// Default memory ceiling in KB (report metadata; enforced by the external judge)
pub const DEFAULT_MEMORY_LIMIT_KB: u64 = 256 * 1024;

// =============================================================================
// ANTI-OPTIMIZATION GUARD DEFAULTS
// =============================================================================

/// Default number of guard ticks between diagnostic flushes.
///
/// Must stay small relative to the total added work of every degraded
/// fixture, so the flush I/O itself never dominates the intended
/// complexity class.
pub const DEFAULT_GUARD_FLUSH_EVERY: u64 = 100_000;

/// Prefix for every guard diagnostic line on stderr. The scored stdout
/// stream never carries this tag.
pub const GUARD_DIAG_TAG: &str = "[slowbench:guard]";

// =============================================================================
// VALIDATION DEFAULTS
// =============================================================================

/// Default seed for deterministic instance generation
pub const DEFAULT_GENERATOR_SEED: u64 = 0x51_0b3c;

// =============================================================================
// PROBLEM CONSTANTS
// =============================================================================

/// Modulus for counting DP answers (coin change)
pub const COUNTING_MOD: u64 = 1_000_000_007;

/// Board dimension for the queens fixture
pub const QUEENS_BOARD: usize = 8;

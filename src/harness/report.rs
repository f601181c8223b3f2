//! Validation report model and timing statistics.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::complexity::ComplexityClass;
use crate::degrade::Degradation;
use crate::error::HarnessResult;
use crate::solver::Variant;

use super::runner::CaseResult;

/// Full result of one validation sweep over a problem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Unique id of this sweep
    pub run_id: Uuid,

    /// When the sweep finished
    pub generated_at: DateTime<Utc>,

    /// Problem registry name
    pub problem: String,

    /// Declared class of the reference solver
    pub reference_class: ComplexityClass,

    /// Declared class of the degraded solver
    pub degraded_class: ComplexityClass,

    /// Degradation policy under validation
    pub degradation: Degradation,

    /// Wall-clock ceiling applied to each run (ms)
    pub time_limit_ms: u64,

    /// Memory ceiling, metadata only (enforced by the external judge)
    pub memory_limit_kb: u64,

    /// Generator seed the instances came from
    pub seed: u64,

    /// Per-size results, smallest first
    pub cases: Vec<CaseResult>,

    /// True when every comparable case produced byte-identical answers
    pub equivalence_ok: bool,

    /// Smallest size where the reference passed and the degraded variant
    /// exceeded the ceiling
    pub separation_at: Option<usize>,

    /// Timing statistics over completed reference runs (ms)
    pub reference_timing: Option<TimingStats>,

    /// Timing statistics over completed degraded runs (ms)
    pub degraded_timing: Option<TimingStats>,
}

impl ValidationReport {
    /// True when the sweep demonstrated everything it set out to show:
    /// equivalence wherever both variants finished, and a separation
    /// witness.
    pub fn is_conclusive(&self) -> bool {
        self.equivalence_ok && self.separation_at.is_some()
    }

    /// Timing stats for one variant
    pub fn timing(&self, variant: Variant) -> Option<&TimingStats> {
        match variant {
            Variant::Reference => self.reference_timing.as_ref(),
            Variant::Degraded => self.degraded_timing.as_ref(),
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> HarnessResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Aggregated wall-clock statistics across completed runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingStats {
    /// Number of completed runs
    pub samples: u32,
    pub avg_ms: f64,
    pub median_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub stddev_ms: f64,
}

impl TimingStats {
    /// Compute statistics from raw wall-clock samples; None when empty
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len();
        let avg_ms = samples.iter().sum::<f64>() / n as f64;
        let min_ms = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_ms = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median_ms = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        let variance = samples.iter().map(|t| (t - avg_ms).powi(2)).sum::<f64>() / n as f64;
        let stddev_ms = variance.sqrt();

        Some(Self {
            samples: n as u32,
            avg_ms,
            median_ms,
            min_ms,
            max_ms,
            stddev_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_samples() {
        let stats = TimingStats::from_samples(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(stats.samples, 3);
        assert!((stats.avg_ms - 20.0).abs() < 1e-9);
        assert!((stats.median_ms - 20.0).abs() < 1e-9);
        assert!((stats.min_ms - 10.0).abs() < 1e-9);
        assert!((stats.max_ms - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_even_sample_median() {
        let stats = TimingStats::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((stats.median_ms - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_samples() {
        assert!(TimingStats::from_samples(&[]).is_none());
    }
}

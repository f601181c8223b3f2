//! Validation runner.
//!
//! Runs each solver the way the external judge does: as a one-shot
//! process (this binary's own `run` subcommand) with the instance piped
//! to stdin, a wall-clock ceiling around it, and a kill on timeout.
//! Process-level execution keeps TLE handling honest: a timed-out
//! solver is terminated, not left burning CPU behind the sweep.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::Config;
use crate::error::{HarnessError, HarnessResult};
use crate::solver::{self, Variant};

use super::report::{TimingStats, ValidationReport};
use super::verdict::Verdict;

/// Outcome of one solver run under the ceiling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Which entry point ran
    pub variant: Variant,

    /// Verdict after output comparison
    pub verdict: Verdict,

    /// Wall-clock time in milliseconds (the ceiling itself for TLE)
    pub time_ms: u64,

    /// Answer text captured from stdout, present when the run completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    /// Error message (RE and JE verdicts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Results for one instance size of the validation ramp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    /// Instance size the generator was asked for
    pub size: usize,

    pub reference: RunOutcome,
    pub degraded: RunOutcome,

    /// Whether both answers matched; None unless both runs completed
    pub answers_match: Option<bool>,
}

/// Executes solver runs through the `run` subcommand of a slowbench
/// binary.
pub struct SolverRunner {
    exe: PathBuf,
    config: Config,
}

impl SolverRunner {
    /// Create a runner around the given slowbench binary
    pub fn new(exe: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            exe: exe.into(),
            config,
        }
    }

    /// Runner around the currently running binary (CLI use)
    pub fn for_current_exe(config: Config) -> HarnessResult<Self> {
        let exe = std::env::current_exe()?;
        Ok(Self::new(exe, config))
    }

    /// Path of the solver binary being driven
    pub fn exe(&self) -> &Path {
        &self.exe
    }

    /// Run one variant on one instance under the wall-clock ceiling.
    ///
    /// The child is killed when the ceiling passes; guard diagnostics on
    /// the child's stderr are captured and discarded so they can never
    /// mix into the answer stream being compared.
    pub async fn run_once(&self, problem_name: &str, variant: Variant, input: &str) -> RunOutcome {
        let limit = Duration::from_millis(self.config.limits.time_limit_ms);
        let start = Instant::now();

        let spawned = Command::new(&self.exe)
            .args(["run", "--problem", problem_name, "--variant"])
            .arg(variant.to_string())
            .env(
                "SLOWBENCH_GUARD_FLUSH_EVERY",
                self.config.guard.flush_every.to_string(),
            )
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                return RunOutcome {
                    variant,
                    verdict: Verdict::JudgeError,
                    time_ms: 0,
                    answer: None,
                    error: Some(format!("failed to spawn solver: {}", e)),
                };
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            // a write error means the solver exited before draining its
            // stdin; the exit status below carries the real verdict
            let _ = stdin.write_all(input.as_bytes()).await;
            // dropping the handle closes the pipe, end of input
        }

        match timeout(limit, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                let time_ms = start.elapsed().as_millis() as u64;
                if output.status.success() {
                    RunOutcome {
                        variant,
                        verdict: Verdict::Accepted,
                        time_ms,
                        answer: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                        error: None,
                    }
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    RunOutcome {
                        variant,
                        verdict: Verdict::RuntimeError,
                        time_ms,
                        answer: None,
                        error: Some(stderr.chars().take(500).collect()),
                    }
                }
            }
            Ok(Err(e)) => RunOutcome {
                variant,
                verdict: Verdict::JudgeError,
                time_ms: start.elapsed().as_millis() as u64,
                answer: None,
                error: Some(format!("failed to collect solver output: {}", e)),
            },
            // Timeout: dropping the wait future drops the child, which
            // kills the process
            Err(_) => RunOutcome {
                variant,
                verdict: Verdict::TimeLimitExceeded,
                time_ms: self.config.limits.time_limit_ms,
                answer: None,
                error: None,
            },
        }
    }

    /// Run the full validation sweep for a problem.
    ///
    /// Instances come from the problem's generator with a per-size seed,
    /// so a sweep is reproducible from the report's seed field. The ramp
    /// stops at the first separation witness: larger sizes only repeat
    /// the same verdict with more wasted wall-clock.
    pub async fn run_validation(
        &self,
        problem_name: &str,
        sizes: Option<Vec<usize>>,
    ) -> HarnessResult<ValidationReport> {
        let problem = solver::find(problem_name)?;
        let sizes = sizes.unwrap_or_else(|| problem.validation_sizes());
        if sizes.is_empty() {
            return Err(HarnessError::Internal(
                "validation sweep needs at least one size".to_string(),
            ));
        }

        let mut cases: Vec<CaseResult> = Vec::with_capacity(sizes.len());
        let mut equivalence_ok = true;
        let mut separation_at = None;

        for size in sizes {
            let mut rng = StdRng::seed_from_u64(self.config.generator.seed ^ size as u64);
            let input = problem.generate(&mut rng, size);
            tracing::info!(problem = problem_name, size, "running validation case");

            let reference = self.run_once(problem_name, Variant::Reference, &input).await;
            let mut degraded = self.run_once(problem_name, Variant::Degraded, &input).await;

            let answers_match = match (&reference.answer, &degraded.answer) {
                (Some(a), Some(b)) => Some(normalize(a) == normalize(b)),
                _ => None,
            };
            if answers_match == Some(false) {
                degraded.verdict = Verdict::WrongAnswer;
                equivalence_ok = false;
                tracing::warn!(
                    problem = problem_name,
                    size,
                    "degraded variant diverged from reference"
                );
            }

            let separated = reference.verdict == Verdict::Accepted
                && degraded.verdict == Verdict::TimeLimitExceeded;

            tracing::info!(
                problem = problem_name,
                size,
                reference = %reference.verdict,
                degraded = %degraded.verdict,
                "case finished"
            );
            cases.push(CaseResult {
                size,
                reference,
                degraded,
                answers_match,
            });

            if separated {
                separation_at = Some(size);
                tracing::info!(problem = problem_name, size, "complexity separation observed");
                break;
            }
        }

        let reference_timing =
            TimingStats::from_samples(&completed_times(&cases, Variant::Reference));
        let degraded_timing = TimingStats::from_samples(&completed_times(&cases, Variant::Degraded));

        Ok(ValidationReport {
            run_id: uuid::Uuid::new_v4(),
            generated_at: chrono::Utc::now(),
            problem: problem.name().to_string(),
            reference_class: problem.reference_class(),
            degraded_class: problem.degraded_class(),
            degradation: problem.degradation(),
            time_limit_ms: self.config.limits.time_limit_ms,
            memory_limit_kb: self.config.limits.memory_limit_kb,
            seed: self.config.generator.seed,
            cases,
            equivalence_ok,
            separation_at,
            reference_timing,
            degraded_timing,
        })
    }
}

/// Answer comparison ignores the trailing newline and CRLF differences,
/// nothing else: answers must otherwise be byte-identical.
fn normalize(answer: &str) -> String {
    answer.trim_end().replace("\r\n", "\n")
}

fn completed_times(cases: &[CaseResult], variant: Variant) -> Vec<f64> {
    cases
        .iter()
        .map(|c| match variant {
            Variant::Reference => &c.reference,
            Variant::Degraded => &c.degraded,
        })
        .filter(|outcome| outcome.answer.is_some())
        .map(|outcome| outcome.time_ms as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tolerates_trailing_newline_only() {
        assert_eq!(normalize("6\n"), normalize("6"));
        assert_eq!(normalize("7\r\n7\r\n"), normalize("7\n7\n"));
        assert_ne!(normalize("6 7"), normalize("67"));
    }

    #[test]
    fn test_completed_times_skips_unfinished_runs() {
        let finished = RunOutcome {
            variant: Variant::Reference,
            verdict: Verdict::Accepted,
            time_ms: 12,
            answer: Some("1\n".to_string()),
            error: None,
        };
        let timed_out = RunOutcome {
            variant: Variant::Degraded,
            verdict: Verdict::TimeLimitExceeded,
            time_ms: 2000,
            answer: None,
            error: None,
        };
        let cases = vec![CaseResult {
            size: 10,
            reference: finished,
            degraded: timed_out,
            answers_match: None,
        }];
        assert_eq!(completed_times(&cases, Variant::Reference), vec![12.0]);
        assert!(completed_times(&cases, Variant::Degraded).is_empty());
    }
}

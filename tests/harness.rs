//! Validation-harness tests against the real solver binary.

use slowbench::config::Config;
use slowbench::harness::{SolverRunner, Verdict};
use slowbench::solver::Variant;

fn runner(time_limit_ms: u64) -> SolverRunner {
    let mut config = Config::default();
    config.limits.time_limit_ms = time_limit_ms;
    SolverRunner::new(env!("CARGO_BIN_EXE_slowbench"), config)
}

#[tokio::test]
async fn test_accepted_run_returns_answer() {
    let outcome = runner(5_000)
        .run_once("array-sum", Variant::Reference, "3\n1 2 3\n")
        .await;
    assert_eq!(outcome.verdict, Verdict::Accepted);
    assert_eq!(outcome.answer.as_deref(), Some("6\n"));
    assert!(outcome.error.is_none());
}

#[tokio::test]
async fn test_malformed_input_is_runtime_error() {
    let outcome = runner(5_000)
        .run_once("array-sum", Variant::Reference, "3\n1 2\n")
        .await;
    assert_eq!(outcome.verdict, Verdict::RuntimeError);
    assert!(outcome.error.unwrap().contains("Malformed input"));
}

#[tokio::test]
async fn test_unknown_problem_is_runtime_error() {
    let outcome = runner(5_000)
        .run_once("no-such-problem", Variant::Reference, "")
        .await;
    assert_eq!(outcome.verdict, Verdict::RuntimeError);
}

#[tokio::test]
async fn test_degraded_walk_exceeds_tight_ceiling() {
    // 23 elements and an unreachable target: the redundant-branch
    // recursion visits ~3^23 nodes, far past a 200 ms ceiling
    let values: Vec<String> = (1..=23).map(|v| v.to_string()).collect();
    let input = format!("23\n{}\n100000\n", values.join(" "));
    let outcome = runner(200)
        .run_once("subset-sum", Variant::Degraded, &input)
        .await;
    assert_eq!(outcome.verdict, Verdict::TimeLimitExceeded);
    assert!(outcome.answer.is_none());
}

#[tokio::test]
async fn test_sweep_reports_equivalence_and_timing() {
    let report = runner(10_000)
        .run_validation("coin-change", Some(vec![40, 120]))
        .await
        .unwrap();
    assert_eq!(report.problem, "coin-change");
    assert_eq!(report.cases.len(), 2);
    assert!(report.equivalence_ok);
    for case in &report.cases {
        assert_eq!(case.reference.verdict, Verdict::Accepted);
        assert_eq!(case.degraded.verdict, Verdict::Accepted);
        assert_eq!(case.answers_match, Some(true));
    }
    let reference_timing = report.timing(Variant::Reference).unwrap();
    let degraded_timing = report.timing(Variant::Degraded).unwrap();
    assert_eq!(reference_timing.samples, 2);
    assert_eq!(degraded_timing.samples, 2);
    assert!(reference_timing.max_ms >= reference_timing.min_ms);
}

#[tokio::test]
async fn test_sweep_stops_at_separation_witness() {
    // 250 ms ceiling: size 150 finishes on both variants, size 30000
    // separates, the final size must never run
    let report = runner(250)
        .run_validation("array-sum", Some(vec![150, 30_000, 60_000]))
        .await
        .unwrap();
    assert_eq!(report.separation_at, Some(30_000));
    assert_eq!(report.cases.len(), 2);
    let last = report.cases.last().unwrap();
    assert_eq!(last.reference.verdict, Verdict::Accepted);
    assert_eq!(last.degraded.verdict, Verdict::TimeLimitExceeded);
    assert!(report.is_conclusive());
}

#[tokio::test]
async fn test_report_serializes_round_trip() {
    let report = runner(5_000)
        .run_validation("array-sum", Some(vec![25]))
        .await
        .unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: slowbench::harness::ValidationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.problem, report.problem);
    assert_eq!(back.cases.len(), report.cases.len());
    assert_eq!(back.run_id, report.run_id);
}

#[tokio::test]
async fn test_unknown_problem_sweep_fails_fast() {
    let err = runner(1_000)
        .run_validation("no-such-problem", None)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_PROBLEM");
}

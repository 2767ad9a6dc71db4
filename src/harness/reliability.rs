//! Pass/fail counting trials.

use crate::result::ReliabilityResult;

use super::performance::fan_out;

/// Run `predicate` `iterations` times and count pass/fail outcomes.
///
/// Unlike the predicate-mode timed trial there is no early exit: every
/// iteration runs and is tallied. `is_valid` is true when at least one
/// iteration ran.
pub fn run_reliability_trial<F>(iterations: usize, mut predicate: F) -> ReliabilityResult
where
    F: FnMut() -> bool,
{
    let mut passed = 0;
    let mut failed = 0;

    for _ in 0..iterations {
        if predicate() {
            passed += 1;
        } else {
            failed += 1;
        }
    }

    ReliabilityResult {
        is_valid: passed + failed > 0,
        passed,
        failed,
    }
}

/// Concurrent counterpart of [`run_reliability_trial`].
///
/// `iterations` is split into `degree_of_parallelism` equal integer-divided
/// sub-trials (remainder dropped); per-worker counts are merged by
/// summation.
///
/// # Panics
///
/// Panics if `degree_of_parallelism` is 0.
pub fn run_concurrent_reliability_trial<F>(
    iterations: usize,
    degree_of_parallelism: usize,
    predicate: F,
) -> ReliabilityResult
where
    F: Fn() -> bool + Sync,
{
    assert!(degree_of_parallelism > 0, "degree of parallelism must be at least 1");
    let sub_iterations = iterations / degree_of_parallelism;

    let worker_results = fan_out(degree_of_parallelism, || {
        run_reliability_trial(sub_iterations, &predicate)
    });

    let mut passed = 0;
    let mut failed = 0;
    for result in &worker_results {
        passed += result.passed;
        failed += result.failed;
    }

    ReliabilityResult {
        is_valid: passed + failed > 0,
        passed,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn counts_every_outcome_with_no_early_exit() {
        let mut calls = 0;
        let result = run_reliability_trial(10, || {
            calls += 1;
            calls % 3 != 0
        });

        // Failures do not stop the loop.
        assert_eq!(calls, 10);
        assert!(result.is_valid);
        assert_eq!(result.passed, 7);
        assert_eq!(result.failed, 3);
        assert!((result.percent_passed() - 70.0).abs() < 1e-12);
    }

    #[test]
    fn zero_iterations_is_invalid() {
        let result = run_reliability_trial(0, || true);
        assert!(!result.is_valid);
        assert_eq!(result.passed + result.failed, 0);
    }

    #[test]
    fn concurrent_counts_merge_by_summation() {
        let calls = AtomicUsize::new(0);
        let result = run_concurrent_reliability_trial(100, 7, || {
            calls.fetch_add(1, Ordering::Relaxed) % 2 == 0
        });

        // 7 workers of 14 iterations each; the remainder is dropped.
        assert_eq!(result.passed + result.failed, 98);
        assert!(result.is_valid);
        assert_eq!(result.passed, 49);
        assert_eq!(result.failed, 49);
    }
}

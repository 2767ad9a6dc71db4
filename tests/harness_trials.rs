//! End-to-end behavior of the timed-trial and reliability harnesses.

use std::sync::atomic::{AtomicUsize, Ordering};

use perfcmp::harness::{
    run_concurrent_predicate_trial, run_concurrent_reliability_trial, run_concurrent_trial,
    run_predicate_trial, run_reliability_trial, run_trial,
};

fn busy_work() {
    std::hint::black_box((0..200u64).sum::<u64>());
}

#[test]
fn serial_trial_records_every_iteration() {
    let result = run_trial(200, busy_work);

    assert!(result.is_valid);
    assert_eq!(result.iterations, 200);
    assert_eq!(result.degree_of_parallelism, 1);
    assert_eq!(result.descriptive.count, 200);
    assert!(result.descriptive.mean >= 0.0);
    assert!(result.descriptive.histogram.is_some());
    // Wall time covers the per-iteration measurements.
    assert!(result.total_milliseconds >= result.descriptive.sum);
    assert!(result.total_seconds >= 0.0);
}

#[test]
fn predicate_trial_failing_on_fifth_call_keeps_four_samples() {
    let calls = AtomicUsize::new(0);
    let result = run_predicate_trial(10, || {
        busy_work();
        calls.fetch_add(1, Ordering::Relaxed) + 1 != 5
    });

    assert!(!result.is_valid);
    assert_eq!(result.iterations, 4);
    assert_eq!(result.descriptive.count, 4);
    // The loop stopped at the failure; later iterations never ran.
    assert_eq!(calls.load(Ordering::Relaxed), 5);
}

#[test]
fn concurrent_trial_truncates_to_the_equal_split() {
    let calls = AtomicUsize::new(0);
    let result = run_concurrent_trial(100, 7, || {
        calls.fetch_add(1, Ordering::Relaxed);
        busy_work();
    });

    // 100 mod 7 = 2 remainder iterations are dropped.
    assert_eq!(result.iterations, 98);
    assert_eq!(calls.load(Ordering::Relaxed), 98);
    assert_eq!(result.degree_of_parallelism, 7);
    assert_eq!(result.descriptive.count, 98);
    assert!(result.descriptive.histogram.is_some());
    assert!(result.is_valid);
}

#[test]
fn concurrent_trial_statistics_cover_the_merged_sample() {
    let result = run_concurrent_trial(400, 4, busy_work);

    assert_eq!(result.descriptive.count, 400);
    // Percentile endpoints of the merged distribution bracket the mean.
    assert!(result.descriptive.percentile(0) <= result.descriptive.mean);
    assert!(result.descriptive.percentile(100) >= result.descriptive.mean);
    // The outer wall-clock span is bounded below by the per-worker share of
    // summed latency: 4 workers ran concurrently.
    assert!(result.total_milliseconds >= result.descriptive.sum / 4.0 - 1e-9);
}

#[test]
fn concurrent_predicate_trial_is_invalid_when_any_worker_fails() {
    let calls = AtomicUsize::new(0);
    let result = run_concurrent_predicate_trial(80, 4, || {
        calls.fetch_add(1, Ordering::Relaxed) != 33
    });

    assert!(!result.is_valid);
    assert!(result.iterations < 80);
}

#[test]
fn reliability_trial_counts_without_early_exit() {
    let calls = AtomicUsize::new(0);
    let result = run_reliability_trial(100, || {
        calls.fetch_add(1, Ordering::Relaxed) % 10 != 0
    });

    assert_eq!(calls.load(Ordering::Relaxed), 100);
    assert!(result.is_valid);
    assert_eq!(result.passed, 90);
    assert_eq!(result.failed, 10);
    assert!((result.percent_passed() - 90.0).abs() < 1e-12);
    assert!((result.percent_failed() - 10.0).abs() < 1e-12);
}

#[test]
fn concurrent_reliability_trial_sums_worker_counts() {
    let calls = AtomicUsize::new(0);
    let result = run_concurrent_reliability_trial(90, 4, || {
        calls.fetch_add(1, Ordering::Relaxed) % 3 == 0
    });

    // 90 / 4 = 22 iterations per worker.
    assert_eq!(result.passed + result.failed, 88);
    assert!(result.is_valid);
    // Counter values 0..88: 30 of them divisible by 3.
    assert_eq!(result.passed, 30);
}

#[test]
fn zero_iteration_reliability_trial_is_invalid() {
    let result = run_reliability_trial(0, || true);
    assert!(!result.is_valid);
}

//! Timed execution of an operation, serial and concurrent.

use std::thread;

use crate::clock;
use crate::result::PerformanceResult;
use crate::statistics;

/// Number of histogram buckets built for a completed trial.
pub const HISTOGRAM_BUCKETS: usize = 20;

/// Time `iterations` calls of `operation`, serially.
///
/// Each iteration records the tick delta around exactly one call, converted
/// to milliseconds. The returned result carries descriptive statistics over
/// the per-iteration sample, a 20-bucket histogram, and the outer wall-clock
/// span of the whole run (first tick to last tick, measured separately from
/// the per-iteration deltas).
pub fn run_trial<F>(iterations: usize, mut operation: F) -> PerformanceResult
where
    F: FnMut(),
{
    run_action_trial(iterations, &mut operation, false)
}

fn run_action_trial(
    iterations: usize,
    operation: &mut dyn FnMut(),
    as_worker: bool,
) -> PerformanceResult {
    let start = clock::now();
    let mut measures = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let iteration_start = clock::now();
        operation();
        let iteration_stop = clock::now();
        measures.push(clock::elapsed_millis(iteration_start, iteration_stop));
    }

    let stop = clock::now();

    // Workers retain the raw sample for the post-join merge and skip the
    // histogram; it is rebuilt once over the merged sequence.
    let mut descriptive = statistics::analyze(&measures, as_worker);
    if !as_worker {
        descriptive.histogram = statistics::histogram_with_bucket_count(&measures, HISTOGRAM_BUCKETS);
    }

    PerformanceResult {
        is_valid: true,
        iterations,
        degree_of_parallelism: 1,
        total_ticks: stop - start,
        total_seconds: clock::elapsed_seconds(start, stop),
        total_milliseconds: clock::elapsed_millis(start, stop),
        descriptive,
    }
}

/// Time up to `iterations` calls of a pass/fail `predicate`, serially.
///
/// The loop stops at the first failure; only successful-iteration latencies
/// are retained and `is_valid` reflects whether the whole run completed. The
/// result's `iterations` counts the recorded (successful) iterations.
pub fn run_predicate_trial<F>(iterations: usize, mut predicate: F) -> PerformanceResult
where
    F: FnMut() -> bool,
{
    run_predicate_trial_inner(iterations, &mut predicate, false)
}

fn run_predicate_trial_inner(
    iterations: usize,
    predicate: &mut dyn FnMut() -> bool,
    as_worker: bool,
) -> PerformanceResult {
    let start = clock::now();
    let mut measures = Vec::with_capacity(iterations);
    let mut valid = true;

    for _ in 0..iterations {
        let iteration_start = clock::now();
        valid &= predicate();
        let iteration_stop = clock::now();
        if !valid {
            break;
        }
        measures.push(clock::elapsed_millis(iteration_start, iteration_stop));
    }

    let stop = clock::now();

    let mut descriptive = statistics::analyze(&measures, as_worker);
    if !as_worker {
        descriptive.histogram = statistics::histogram_with_bucket_count(&measures, HISTOGRAM_BUCKETS);
    }

    PerformanceResult {
        is_valid: valid,
        iterations: descriptive.count,
        degree_of_parallelism: 1,
        total_ticks: stop - start,
        total_seconds: clock::elapsed_seconds(start, stop),
        total_milliseconds: clock::elapsed_millis(start, stop),
        descriptive,
    }
}

/// Time `iterations` calls of `operation`, fanned out across a fixed number
/// of concurrent workers.
///
/// `iterations` is split into `degree_of_parallelism` equal integer-divided
/// sub-trials (remainder iterations are dropped); one worker thread runs
/// each sub-trial independently, retaining its raw sample and skipping the
/// histogram. After the barrier join, every worker's raw sample is
/// concatenated and descriptive statistics are recomputed over the merged
/// sequence, so percentiles reflect the true global distribution rather than
/// an average of per-worker percentiles. Total wall time is the outer span
/// from before the first worker starts to after the last completes.
///
/// A worker panic (the operation panicking) propagates and aborts the run.
///
/// # Panics
///
/// Panics if `degree_of_parallelism` is 0.
pub fn run_concurrent_trial<F>(
    iterations: usize,
    degree_of_parallelism: usize,
    operation: F,
) -> PerformanceResult
where
    F: Fn() + Sync,
{
    assert!(degree_of_parallelism > 0, "degree of parallelism must be at least 1");
    let sub_iterations = iterations / degree_of_parallelism;

    let start = clock::now();
    let worker_results = fan_out(degree_of_parallelism, || {
        run_action_trial(sub_iterations, &mut || operation(), true)
    });
    let stop = clock::now();

    merge_worker_results(worker_results, degree_of_parallelism, start, stop)
}

/// Concurrent counterpart of [`run_predicate_trial`].
///
/// Each worker fails fast independently; the merged result is valid only
/// when every worker's sub-trial completed without a failure. Total wall
/// time is the outer span, as for the action path.
///
/// # Panics
///
/// Panics if `degree_of_parallelism` is 0.
pub fn run_concurrent_predicate_trial<F>(
    iterations: usize,
    degree_of_parallelism: usize,
    predicate: F,
) -> PerformanceResult
where
    F: Fn() -> bool + Sync,
{
    assert!(degree_of_parallelism > 0, "degree of parallelism must be at least 1");
    let sub_iterations = iterations / degree_of_parallelism;

    let start = clock::now();
    let worker_results = fan_out(degree_of_parallelism, || {
        run_predicate_trial_inner(sub_iterations, &mut || predicate(), true)
    });
    let stop = clock::now();

    merge_worker_results(worker_results, degree_of_parallelism, start, stop)
}

/// Run `worker` once on each of `count` scoped threads and collect the
/// results in spawn order. A panicking worker is resumed on the joining
/// thread, aborting the measurement.
pub(crate) fn fan_out<R, W>(count: usize, worker: W) -> Vec<R>
where
    R: Send,
    W: Fn() -> R + Sync,
{
    thread::scope(|scope| {
        let handles: Vec<_> = (0..count).map(|_| scope.spawn(&worker)).collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

fn merge_worker_results(
    worker_results: Vec<PerformanceResult>,
    degree_of_parallelism: usize,
    start: u64,
    stop: u64,
) -> PerformanceResult {
    let mut raw = Vec::new();
    let mut completed = 0;
    let mut valid = true;

    for result in &worker_results {
        valid &= result.is_valid;
        completed += result.iterations;
        let worker_raw = result
            .descriptive
            .raw_data
            .as_deref()
            .expect("workers retain their raw sample");
        raw.extend_from_slice(worker_raw);
    }

    let mut descriptive = statistics::analyze(&raw, false);
    descriptive.histogram = statistics::histogram_with_bucket_count(&raw, HISTOGRAM_BUCKETS);

    PerformanceResult {
        is_valid: valid,
        iterations: completed,
        degree_of_parallelism,
        total_ticks: stop - start,
        total_seconds: clock::elapsed_seconds(start, stop),
        total_milliseconds: clock::elapsed_millis(start, stop),
        descriptive,
    }
}

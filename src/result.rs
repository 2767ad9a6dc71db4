//! Result types produced by the harness and the analysis layer.
//!
//! All of these are plain data: created fresh per harness invocation, fully
//! populated before being returned, and owned by the caller afterwards. The
//! harness never mutates a result after handing it out. Rendering lives in
//! [`crate::output`]; nothing here depends on it.

use serde::{Deserialize, Serialize};

use crate::analysis::TwoSampleHypothesis;

/// Number of entries in the percentile table (indices 0..=100).
pub const PERCENTILE_TABLE_LEN: usize = 101;

/// One histogram bin.
///
/// Bins are contiguous and of fixed width; a value belongs to the bucket
/// when `value > range_low && value <= range_high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Exclusive lower bound.
    pub range_low: f64,
    /// Inclusive upper bound.
    pub range_high: f64,
    /// Number of samples that fell in this bucket.
    pub count: usize,
}

/// Summary statistics of one latency sample.
///
/// Produced by [`crate::statistics::analyze`]. With fewer than 2 samples the
/// variance and standard deviation are NaN; with fewer than 3 (or a zero
/// standard deviation) the skewness is NaN. Callers must guard against
/// non-finite values rather than expect errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptiveResult {
    /// Number of observations.
    pub count: usize,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sum of all observations.
    pub sum: f64,
    /// Sum of absolute deviations from the mean.
    pub sum_abs_error: f64,
    /// Sum of squared deviations from the mean.
    pub sum_squared_error: f64,
    /// Sample variance (divisor `n - 1`).
    pub variance: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Adjusted Fisher-Pearson skewness.
    pub skewness: f64,
    /// Percentile table, indices 0..=100. Non-decreasing.
    percentiles: Vec<f64>,
    /// Histogram, when one was built for this sample.
    pub histogram: Option<Vec<Bucket>>,
    /// The raw sample in trial order, when retained.
    pub raw_data: Option<Vec<f64>>,
}

impl DescriptiveResult {
    /// Assemble a result from computed fields. Used by the statistics module.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        count: usize,
        min: f64,
        max: f64,
        mean: f64,
        sum: f64,
        sum_abs_error: f64,
        sum_squared_error: f64,
        variance: f64,
        std_dev: f64,
        skewness: f64,
        percentiles: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(percentiles.len(), PERCENTILE_TABLE_LEN);
        Self {
            count,
            min,
            max,
            range: max - min,
            mean,
            sum,
            sum_abs_error,
            sum_squared_error,
            variance,
            std_dev,
            skewness,
            percentiles,
            histogram: None,
            raw_data: None,
        }
    }

    /// Value at the given percentile (0..=100).
    ///
    /// # Panics
    ///
    /// Panics if `percent > 100`.
    pub fn percentile(&self, percent: usize) -> f64 {
        assert!(percent <= 100, "percentile index must be 0..=100");
        self.percentiles[percent]
    }

    /// Median, i.e. the 50th percentile.
    pub fn median(&self) -> f64 {
        self.percentiles[50]
    }

    /// First quartile (25th percentile).
    pub fn first_quartile(&self) -> f64 {
        self.percentiles[25]
    }

    /// Third quartile (75th percentile).
    pub fn third_quartile(&self) -> f64 {
        self.percentiles[75]
    }

    /// Interquartile range, `p75 - p25`.
    pub fn iqr(&self) -> f64 {
        self.percentiles[75] - self.percentiles[25]
    }
}

/// A named reference to one side of a comparison. Purely descriptive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleInfo {
    /// Caller-supplied label ("first", "vec", ...).
    pub label: String,
    /// Number of observations in the sample.
    pub count: usize,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
}

/// Outcome of a two-sample hypothesis test over a pair of latency samples.
///
/// Immutable after construction; the same shape is produced whether the
/// underlying test was a Z-test or a T-test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The alternative hypothesis that was tested.
    pub hypothesis: TwoSampleHypothesis,
    /// Hypothesized difference between the means (absolute value).
    pub hypothesized_difference: f64,
    /// Observed difference, `mean1 - mean2`.
    pub observed_difference: f64,
    /// Standard error of the observed difference.
    pub standard_error: f64,
    /// The test statistic (z or t).
    pub statistic: f64,
    /// Probability of a difference at least this extreme under the null.
    pub p_value: f64,
    /// Significance level the verdict was taken at.
    pub alpha: f64,
    /// Whether the null hypothesis is rejected at `alpha`.
    pub significant: bool,
    /// 95% confidence interval for the observed difference.
    pub confidence: (f64, f64),
    /// Descriptive reference to the first sample.
    pub first_sample: SampleInfo,
    /// Descriptive reference to the second sample.
    pub second_sample: SampleInfo,
}

/// Outcome of one timed trial run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// False only in predicate mode, when an iteration reported failure and
    /// ended the run early.
    pub is_valid: bool,
    /// Iterations actually recorded. For predicate trials this counts only
    /// the successful iterations.
    pub iterations: usize,
    /// Number of concurrent workers the trial ran with (1 for serial).
    pub degree_of_parallelism: usize,
    /// Wall-clock span of the whole run, in ticks.
    pub total_ticks: u64,
    /// Wall-clock span of the whole run, in seconds.
    pub total_seconds: f64,
    /// Wall-clock span of the whole run, in milliseconds.
    pub total_milliseconds: f64,
    /// Per-iteration latency statistics, in milliseconds.
    pub descriptive: DescriptiveResult,
}

/// Outcome of a reliability trial: pass/fail counts, no timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReliabilityResult {
    /// True when at least one iteration ran.
    pub is_valid: bool,
    /// Iterations whose predicate returned true.
    pub passed: usize,
    /// Iterations whose predicate returned false.
    pub failed: usize,
}

impl ReliabilityResult {
    /// Percentage of iterations that passed. NaN when nothing ran.
    pub fn percent_passed(&self) -> f64 {
        (self.passed * 100) as f64 / (self.passed + self.failed) as f64
    }

    /// Percentage of iterations that failed. NaN when nothing ran.
    pub fn percent_failed(&self) -> f64 {
        (self.failed * 100) as f64 / (self.passed + self.failed) as f64
    }
}

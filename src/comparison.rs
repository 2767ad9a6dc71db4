//! End-to-end comparison of two operations.

use crate::analysis::{compare_descriptives, TwoSampleHypothesis, DEFAULT_ALPHA};
use crate::harness;
use crate::output;
use crate::result::{ComparisonResult, PerformanceResult};

/// Entry point for comparing the latency of two operations.
///
/// Use the builder to configure and run a comparison end-to-end: both
/// operations are timed independently (serially, or fanned out when a
/// parallelism above 1 is set), their samples are analyzed, and the
/// appropriate two-sample test turns the pair into a significance verdict.
///
/// # Example
///
/// ```ignore
/// use perfcmp::{Comparison, TwoSampleHypothesis};
///
/// let outcome = Comparison::new()
///     .iterations(10_000)
///     .labels("vec", "list")
///     .hypothesis(TwoSampleHypothesis::FirstValueIsSmallerThanSecond)
///     .run(|| vec_op(), || list_op());
/// assert!(outcome.significant());
/// ```
#[derive(Debug, Clone)]
pub struct Comparison {
    iterations: usize,
    degree_of_parallelism: usize,
    first_label: String,
    second_label: String,
    hypothesized_difference: f64,
    hypothesis: TwoSampleHypothesis,
    alpha: f64,
}

impl Default for Comparison {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparison {
    /// Create with default configuration: 1000 serial iterations, labels
    /// "first"/"second", two-sided hypothesis at a zero difference, alpha
    /// 0.05.
    pub fn new() -> Self {
        Self {
            iterations: 1000,
            degree_of_parallelism: 1,
            first_label: "first".to_string(),
            second_label: "second".to_string(),
            hypothesized_difference: 0.0,
            hypothesis: TwoSampleHypothesis::default(),
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Set the number of timed iterations per operation.
    pub fn iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Set the number of concurrent workers per trial (1 = serial).
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    pub fn parallelism(mut self, n: usize) -> Self {
        assert!(n > 0, "degree of parallelism must be at least 1");
        self.degree_of_parallelism = n;
        self
    }

    /// Label the two sides of the comparison for reporting.
    pub fn labels(mut self, first: &str, second: &str) -> Self {
        self.first_label = first.to_string();
        self.second_label = second.to_string();
        self
    }

    /// Set the hypothesized difference between the means, in milliseconds.
    /// The absolute value is taken.
    pub fn hypothesized_difference(mut self, difference: f64) -> Self {
        self.hypothesized_difference = difference.abs();
        self
    }

    /// Set the alternative hypothesis under test.
    pub fn hypothesis(mut self, hypothesis: TwoSampleHypothesis) -> Self {
        self.hypothesis = hypothesis;
        self
    }

    /// Set the significance level (default 0.05).
    pub fn significance_level(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Time both operations and test the difference between their means.
    pub fn run<A, B>(self, first_operation: A, second_operation: B) -> ComparisonOutcome
    where
        A: Fn() + Sync,
        B: Fn() + Sync,
    {
        let (first, second) = if self.degree_of_parallelism > 1 {
            (
                harness::run_concurrent_trial(
                    self.iterations,
                    self.degree_of_parallelism,
                    first_operation,
                ),
                harness::run_concurrent_trial(
                    self.iterations,
                    self.degree_of_parallelism,
                    second_operation,
                ),
            )
        } else {
            (
                harness::run_trial(self.iterations, first_operation),
                harness::run_trial(self.iterations, second_operation),
            )
        };

        let comparison = compare_descriptives(
            &self.first_label,
            &first.descriptive,
            &self.second_label,
            &second.descriptive,
            self.hypothesized_difference,
            self.hypothesis,
            self.alpha,
        );

        ComparisonOutcome {
            comparison,
            first,
            second,
        }
    }
}

/// Everything a finished comparison produced: the significance verdict plus
/// the full trial results it was derived from.
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    /// The two-sample test verdict.
    pub comparison: ComparisonResult,
    /// Trial result of the first operation.
    pub first: PerformanceResult,
    /// Trial result of the second operation.
    pub second: PerformanceResult,
}

impl ComparisonOutcome {
    /// Whether the difference was significant at the configured level.
    pub fn significant(&self) -> bool {
        self.comparison.significant
    }

    /// Human-readable report of the verdict and both trials, at the given
    /// numeric precision.
    pub fn render_report(&self, precision: usize) -> String {
        let mut report = String::new();
        report.push_str(&output::format_comparison(&self.comparison, precision));
        report.push('\n');
        report.push_str(&format!(
            "-----------------------------{}--------------------------------------\n",
            self.comparison.first_sample.label
        ));
        report.push_str(&output::format_performance(&self.first, precision));
        report.push_str(&format!(
            "-----------------------------{}--------------------------------------\n",
            self.comparison.second_sample.label
        ));
        report.push_str(&output::format_performance(&self.second, precision));
        report
    }
}

/// Time both operations serially and return whether their difference is
/// significant. Shorthand for the common assertion-style usage.
pub fn run_performance_comparison<A, B>(
    iterations: usize,
    first_operation: A,
    second_operation: B,
    hypothesized_difference: f64,
    hypothesis: TwoSampleHypothesis,
) -> bool
where
    A: Fn() + Sync,
    B: Fn() + Sync,
{
    Comparison::new()
        .iterations(iterations)
        .hypothesized_difference(hypothesized_difference)
        .hypothesis(hypothesis)
        .run(first_operation, second_operation)
        .significant()
}

/// Concurrent counterpart of [`run_performance_comparison`].
pub fn run_concurrent_performance_comparison<A, B>(
    iterations: usize,
    degree_of_parallelism: usize,
    first_operation: A,
    second_operation: B,
    hypothesized_difference: f64,
    hypothesis: TwoSampleHypothesis,
) -> bool
where
    A: Fn() + Sync,
    B: Fn() + Sync,
{
    Comparison::new()
        .iterations(iterations)
        .parallelism(degree_of_parallelism)
        .hypothesized_difference(hypothesized_difference)
        .hypothesis(hypothesis)
        .run(first_operation, second_operation)
        .significant()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let c = Comparison::new();
        assert_eq!(c.iterations, 1000);
        assert_eq!(c.degree_of_parallelism, 1);
        assert_eq!(c.first_label, "first");
        assert_eq!(c.hypothesized_difference, 0.0);
        assert_eq!(c.hypothesis, TwoSampleHypothesis::ValuesAreDifferent);
        assert_eq!(c.alpha, DEFAULT_ALPHA);
    }

    #[test]
    fn hypothesized_difference_is_taken_absolute() {
        let c = Comparison::new().hypothesized_difference(-2.5);
        assert_eq!(c.hypothesized_difference, 2.5);
    }

    #[test]
    fn outcome_carries_both_trials_and_labels() {
        let outcome = Comparison::new()
            .iterations(100)
            .labels("noop", "spin")
            .run(
                || {},
                || {
                    std::hint::black_box((0..100).sum::<u64>());
                },
            );

        assert_eq!(outcome.comparison.first_sample.label, "noop");
        assert_eq!(outcome.comparison.second_sample.label, "spin");
        assert_eq!(outcome.first.iterations, 100);
        assert_eq!(outcome.second.iterations, 100);
        assert!(outcome.first.is_valid && outcome.second.is_valid);
    }

    #[test]
    fn single_iteration_comparison_is_inconclusive_not_a_panic() {
        // One observation per side leaves the variance undefined; the
        // verdict must surface as NaN/not-significant, never a panic.
        let outcome = Comparison::new().iterations(1).run(|| {}, || {});

        assert!(!outcome.significant());
        assert!(outcome.comparison.p_value.is_nan());
        assert!(outcome.comparison.standard_error.is_nan());
        assert_eq!(outcome.first.iterations, 1);
        assert_eq!(outcome.second.iterations, 1);
    }

    #[test]
    #[should_panic(expected = "degree of parallelism must be at least 1")]
    fn zero_parallelism_is_rejected_at_configuration() {
        let _ = Comparison::new().parallelism(0);
    }
}

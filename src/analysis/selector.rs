//! Automatic test selection for a two-sample comparison.

use super::hypothesis::TwoSampleHypothesis;
use super::t_test::TwoSampleTTest;
use super::z_test::TwoSampleZTest;
use super::LARGE_SAMPLE_THRESHOLD;
use crate::result::{ComparisonResult, DescriptiveResult, SampleInfo};

/// Compare two analyzed samples, picking the appropriate test by size.
///
/// A Welch T-test runs when either sample has fewer than 30 observations;
/// otherwise a Z-test. The result shape is the same regardless of which test
/// ran. The hypothesized difference is taken as an absolute value, and the
/// confidence interval is reported at 95%.
pub fn compare_descriptives(
    first_label: &str,
    first: &DescriptiveResult,
    second_label: &str,
    second: &DescriptiveResult,
    hypothesized_difference: f64,
    hypothesis: TwoSampleHypothesis,
    alpha: f64,
) -> ComparisonResult {
    let hypothesized_difference = hypothesized_difference.abs();

    let first_sample = SampleInfo {
        label: first_label.to_string(),
        count: first.count,
        mean: first.mean,
        std_dev: first.std_dev,
    };
    let second_sample = SampleInfo {
        label: second_label.to_string(),
        count: second.count,
        mean: second.mean,
        std_dev: second.std_dev,
    };

    let small = first.count < LARGE_SAMPLE_THRESHOLD || second.count < LARGE_SAMPLE_THRESHOLD;

    if small {
        let mut test =
            TwoSampleTTest::from_descriptives(first, second, false, hypothesized_difference, hypothesis);
        test.set_alpha(alpha);
        ComparisonResult {
            hypothesis,
            hypothesized_difference,
            observed_difference: test.observed_difference(),
            standard_error: test.standard_error(),
            statistic: test.statistic(),
            p_value: test.p_value(),
            alpha,
            significant: test.significant(),
            confidence: test.confidence_interval(0.95),
            first_sample,
            second_sample,
        }
    } else {
        let mut test =
            TwoSampleZTest::from_descriptives(first, second, hypothesized_difference, hypothesis);
        test.set_alpha(alpha);
        ComparisonResult {
            hypothesis,
            hypothesized_difference,
            observed_difference: test.observed_difference(),
            standard_error: test.standard_error(),
            statistic: test.statistic(),
            p_value: test.p_value(),
            alpha,
            significant: test.significant(),
            confidence: test.confidence_interval(0.95),
            first_sample,
            second_sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DEFAULT_ALPHA;
    use crate::statistics;

    fn sample(mean: f64, n: usize) -> Vec<f64> {
        (0..n).map(|i| mean + (i as f64 % 5.0) - 2.0).collect()
    }

    #[test]
    fn small_samples_route_to_t_test() {
        let r1 = statistics::analyze(&sample(10.0, 10), false);
        let r2 = statistics::analyze(&sample(10.0, 10), false);
        let c = compare_descriptives(
            "first",
            &r1,
            "second",
            &r2,
            0.0,
            TwoSampleHypothesis::ValuesAreDifferent,
            DEFAULT_ALPHA,
        );
        assert!(!c.significant);
        assert_eq!(c.first_sample.count, 10);
        assert_eq!(c.first_sample.label, "first");
    }

    #[test]
    fn large_shifted_samples_are_significant() {
        let r1 = statistics::analyze(&sample(10.0, 100), false);
        let r2 = statistics::analyze(&sample(20.0, 100), false);
        let c = compare_descriptives(
            "fast",
            &r1,
            "slow",
            &r2,
            0.0,
            TwoSampleHypothesis::FirstValueIsSmallerThanSecond,
            DEFAULT_ALPHA,
        );
        assert!(c.significant);
        assert!((c.observed_difference + 10.0).abs() < 1e-9);
        assert!(c.confidence.0 < c.observed_difference);
    }

    #[test]
    fn hypothesized_difference_is_taken_absolute() {
        let r1 = statistics::analyze(&sample(10.0, 50), false);
        let r2 = statistics::analyze(&sample(10.0, 50), false);
        let c = compare_descriptives(
            "a",
            &r1,
            "b",
            &r2,
            -3.0,
            TwoSampleHypothesis::ValuesAreDifferent,
            DEFAULT_ALPHA,
        );
        assert_eq!(c.hypothesized_difference, 3.0);
    }

    #[test]
    fn mixed_sizes_route_to_t_test() {
        // One side under the threshold forces the T-test; the verdict shape
        // is identical either way.
        let r1 = statistics::analyze(&sample(10.0, 200), false);
        let r2 = statistics::analyze(&sample(30.0, 12), false);
        let c = compare_descriptives(
            "big",
            &r1,
            "small",
            &r2,
            0.0,
            TwoSampleHypothesis::FirstValueIsSmallerThanSecond,
            DEFAULT_ALPHA,
        );
        assert!(c.significant);
        assert_eq!(c.second_sample.count, 12);
    }
}

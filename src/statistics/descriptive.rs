//! Summary statistics and percentile table computation.
//!
//! Percentiles use linear interpolation between the two bracketing sorted
//! observations at the fractional rank `n = p/100 * (count - 1) + 1`
//! (Aczel's definition). Bracketing values closer than 1e-7 short-circuit to
//! the left value, which guards a degenerate zero-width interpolation. This
//! exact procedure is what percentile-dependent callers are calibrated
//! against; do not swap in a different quantile estimator.

use crate::result::{DescriptiveResult, PERCENTILE_TABLE_LEN};

/// Compute descriptive statistics over a latency sample.
///
/// The input order is trial order and is never mutated; percentile
/// computation sorts a copy. When `retain_raw` is set the original sequence
/// is carried in the result (the concurrent harness uses this to merge
/// per-worker samples).
///
/// Degenerate samples are not errors: an empty sample yields an all-NaN
/// summary and percentile table, a single observation yields NaN variance,
/// and fewer than 3 observations yield NaN skewness.
pub fn analyze(data: &[f64], retain_raw: bool) -> DescriptiveResult {
    let count = data.len();

    if count == 0 {
        let mut result = DescriptiveResult::new(
            0,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            f64::NAN,
            vec![f64::NAN; PERCENTILE_TABLE_LEN],
        );
        if retain_raw {
            result.raw_data = Some(Vec::new());
        }
        return result;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &x in data {
        min = min.min(x);
        max = max.max(x);
        sum += x;
    }
    let mean = sum / count as f64;

    let mut sum_abs_error = 0.0;
    let mut sum_squared_error = 0.0;
    let mut sum_cubed_error = 0.0;
    for &x in data {
        let d = x - mean;
        sum_abs_error += d.abs();
        sum_squared_error += d * d;
        sum_cubed_error += d * d * d;
    }

    // Sample variance, divisor n - 1. NaN for a single observation (0/0).
    let variance = sum_squared_error / (count as f64 - 1.0);
    let std_dev = variance.sqrt();

    let skewness = skew(count, std_dev, sum_cubed_error);

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let percentiles: Vec<f64> = (0..PERCENTILE_TABLE_LEN)
        .map(|p| percentile_from_sorted(&sorted, p))
        .collect();

    let mut result = DescriptiveResult::new(
        count,
        min,
        max,
        mean,
        sum,
        sum_abs_error,
        sum_squared_error,
        variance,
        std_dev,
        skewness,
        percentiles,
    );
    if retain_raw {
        result.raw_data = Some(data.to_vec());
    }
    result
}

/// Adjusted Fisher-Pearson skewness.
///
/// `skew = (n² / ((n-1)(n-2))) * (Σ(x-mean)³ / n) / σ³`
///
/// Undefined (NaN) below 3 observations or for a zero-spread sample.
fn skew(count: usize, std_dev: f64, sum_cubed_error: f64) -> f64 {
    if count < 3 || std_dev == 0.0 {
        return f64::NAN;
    }
    let n = count as f64;
    let adjustment = (n * n) / ((n - 1.0) * (n - 2.0));
    let third_moment = sum_cubed_error / n;
    adjustment * third_moment / (std_dev * std_dev * std_dev)
}

/// Value at integer percentile `p` (0..=100) of an ascending-sorted sample.
///
/// `p >= 100` returns the maximum element. Otherwise the fractional rank is
/// `n = p/100 * (count-1) + 1`; when the raw position `(count+1) * p / 100`
/// is at least 1 the result interpolates `sorted[floor(n)-1]` and
/// `sorted[floor(n)]` by the fractional part of `n`, and for smaller
/// positions (tiny `p` on tiny samples) the bracket falls back to the two
/// smallest elements. Bracketing values within 1e-7 of each other return the
/// left value exactly.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn percentile_from_sorted(sorted: &[f64], p: usize) -> f64 {
    assert!(!sorted.is_empty(), "cannot compute percentile of empty slice");

    let count = sorted.len();
    if p >= 100 {
        return sorted[count - 1];
    }
    if count == 1 {
        return sorted[0];
    }

    let position = (count as f64 + 1.0) * p as f64 / 100.0;
    let n = p as f64 / 100.0 * (count as f64 - 1.0) + 1.0;

    let (left, right) = if position >= 1.0 {
        let idx = n.floor() as usize;
        (sorted[idx - 1], sorted[idx])
    } else {
        (sorted[0], sorted[1])
    };

    if (left - right).abs() < 1e-7 {
        return left;
    }

    let part = n - n.floor();
    left + part * (right - left)
}

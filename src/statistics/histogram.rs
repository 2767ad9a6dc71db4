//! Fixed-width histogram construction.

use crate::result::Bucket;

/// Build a histogram with a caller-chosen origin and bucket width.
///
/// Buckets are contiguous, semi-open on the low side: a value is counted in
/// `[low, low + step)` as `value > low && value <= low + step`. `low` starts
/// at `origin` and advances by `step` while `low <= max`, so the last bucket
/// may extend past the maximum observation.
///
/// Returns `None` for degenerate inputs: an empty sample, or a non-finite or
/// non-positive `step` (which would never terminate).
pub fn histogram(data: &[f64], origin: f64, step: f64) -> Option<Vec<Bucket>> {
    if data.is_empty() || !step.is_finite() || step <= 0.0 || !origin.is_finite() {
        return None;
    }

    let max = data.iter().fold(f64::NEG_INFINITY, |m, &x| m.max(x));

    let mut buckets = Vec::new();
    let mut low = origin;
    while low <= max {
        let high = low + step;
        let count = data.iter().filter(|&&v| v > low && v <= high).count();
        buckets.push(Bucket {
            range_low: low,
            range_high: high,
            count,
        });
        low += step;
    }

    Some(buckets)
}

/// Build a histogram of `buckets` equal-width bins starting at 0.
///
/// The bucket width is `max / buckets`. Returns `None` for an empty sample,
/// `buckets == 0`, or `max <= 0` (where a zero or negative width would
/// degenerate).
pub fn histogram_with_bucket_count(data: &[f64], buckets: usize) -> Option<Vec<Bucket>> {
    if data.is_empty() || buckets == 0 {
        return None;
    }
    let max = data.iter().fold(f64::NEG_INFINITY, |m, &x| m.max(x));
    let step = max / buckets as f64;
    histogram(data, 0.0, step)
}

//! Directional hypotheses and statistic/p-value mappings.

use serde::{Deserialize, Serialize};

use crate::distribution::ContinuousDistribution;

/// The alternative hypothesis of a two-sample mean comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TwoSampleHypothesis {
    /// Two-sided: the means differ (in either direction).
    #[default]
    ValuesAreDifferent,
    /// One-sided: the first mean exceeds the second.
    FirstValueIsGreaterThanSecond,
    /// One-sided: the first mean is below the second.
    FirstValueIsSmallerThanSecond,
}

/// Map a test statistic to its p-value under the given alternative.
///
/// Two-sided alternatives take twice the upper-tail mass at `|t|`; the
/// one-sided alternatives take the corresponding single tail.
pub fn statistic_to_p_value<D: ContinuousDistribution>(
    distribution: &D,
    statistic: f64,
    hypothesis: TwoSampleHypothesis,
) -> f64 {
    match hypothesis {
        TwoSampleHypothesis::ValuesAreDifferent => 2.0 * distribution.survival(statistic.abs()),
        TwoSampleHypothesis::FirstValueIsGreaterThanSecond => distribution.survival(statistic),
        TwoSampleHypothesis::FirstValueIsSmallerThanSecond => distribution.cdf(statistic),
    }
}

/// Map a p-value back to the statistic that would produce it.
///
/// Inverse of [`statistic_to_p_value`] for each alternative. Used to build
/// confidence intervals around an observed difference.
pub fn p_value_to_statistic<D: ContinuousDistribution>(
    distribution: &D,
    p: f64,
    hypothesis: TwoSampleHypothesis,
) -> f64 {
    match hypothesis {
        TwoSampleHypothesis::ValuesAreDifferent => distribution.inverse_cdf(1.0 - p / 2.0),
        TwoSampleHypothesis::FirstValueIsGreaterThanSecond => distribution.inverse_cdf(1.0 - p),
        TwoSampleHypothesis::FirstValueIsSmallerThanSecond => distribution.inverse_cdf(p),
    }
}

/// Confidence interval around an observed difference.
///
/// `observed ± u · standard_error` where `u` is the statistic at p-value
/// `1 - percent` for the given alternative.
pub(crate) fn confidence_interval<D: ContinuousDistribution>(
    distribution: &D,
    observed_difference: f64,
    standard_error: f64,
    percent: f64,
    hypothesis: TwoSampleHypothesis,
) -> (f64, f64) {
    let u = p_value_to_statistic(distribution, 1.0 - percent, hypothesis);
    let a = observed_difference - u * standard_error;
    let b = observed_difference + u * standard_error;
    (a.min(b), a.max(b))
}

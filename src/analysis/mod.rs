//! Two-sample hypothesis testing.
//!
//! This module turns a pair of latency samples into a significance verdict:
//!
//! 1. **Hypothesis kinds** ([`hypothesis`]): directional alternatives and the
//!    statistic <-> p-value mappings shared by every test
//! 2. **Z-test** ([`z_test`]): large-sample test against the standard normal
//! 3. **T-test** ([`t_test`]): small-sample test with pooled or Welch
//!    standard error against Student's T
//! 4. **Selector** ([`selector`]): picks the test by sample size and exposes
//!    one unified result shape

pub mod hypothesis;
pub mod selector;

pub use hypothesis::{p_value_to_statistic, statistic_to_p_value, TwoSampleHypothesis};
pub use selector::compare_descriptives;
pub use t_test::TwoSampleTTest;
pub use z_test::TwoSampleZTest;

/// Default significance level for all tests.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Sample size at and above which the Z-test is appropriate.
pub(crate) const LARGE_SAMPLE_THRESHOLD: usize = 30;

//! Descriptive statistics over latency samples.
//!
//! This module turns a sequence of latency measurements into summary
//! statistics:
//! - Moments (mean, sample variance, standard deviation, skewness)
//! - A 101-entry percentile table computed by linear rank interpolation
//! - Optional fixed-width histograms

mod descriptive;
mod histogram;

pub use descriptive::{analyze, percentile_from_sorted};
pub use histogram::{histogram, histogram_with_bucket_count};

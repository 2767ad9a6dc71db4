//! Timed-trial and reliability harnesses.
//!
//! The harness runs a caller-supplied operation N times, serially or fanned
//! out across a fixed number of concurrent workers, and turns the measured
//! per-iteration latencies into a [`crate::result::PerformanceResult`]. The
//! reliability harness counts pass/fail outcomes instead of timing them.

mod performance;
mod reliability;

pub use performance::{
    run_concurrent_predicate_trial, run_concurrent_trial, run_predicate_trial, run_trial,
    HISTOGRAM_BUCKETS,
};
pub use reliability::{run_concurrent_reliability_trial, run_reliability_trial};

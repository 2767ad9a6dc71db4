//! # perfcmp
//!
//! Measure and statistically compare the execution latency of two operations.
//!
//! This crate provides the machinery to decide - with a quantified confidence
//! level - whether one operation is faster than another, not just "different
//! in one run":
//! - Timed-trial harness (serial and concurrent execution of an operation N times)
//! - Descriptive statistics (percentiles, moments, histograms)
//! - Two-sample hypothesis tests (Z-test, T-test, automatic selection)
//! - Reliability pass/fail harness
//!
//! ## Common Pitfall: Measuring Setup Instead of the Operation
//!
//! The closures you hand to the harness are timed around **every single
//! call**. Allocate inputs and clone state outside the closure - anything
//! inside it is part of the measured latency.
//!
//! ```ignore
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! // WRONG - input generation is timed along with the lookup
//! perfcmp::Comparison::new().run(
//!     || { table.get(&make_random_key()); },
//!     || { dict.get(&make_random_key()); },
//! );
//!
//! // CORRECT - pre-generate inputs, closures only run the operation
//! let keys: Vec<Key> = (0..1000).map(|_| make_random_key()).collect();
//! let i = AtomicUsize::new(0);
//! let j = AtomicUsize::new(0);
//! perfcmp::Comparison::new().run(
//!     || { table.get(&keys[i.fetch_add(1, Ordering::Relaxed) % keys.len()]); },
//!     || { dict.get(&keys[j.fetch_add(1, Ordering::Relaxed) % keys.len()]); },
//! );
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use perfcmp::{Comparison, TwoSampleHypothesis};
//!
//! let outcome = Comparison::new()
//!     .iterations(10_000)
//!     .labels("vec", "linked list")
//!     .hypothesis(TwoSampleHypothesis::FirstValueIsSmallerThanSecond)
//!     .run(|| vec_push(), || list_push());
//!
//! if outcome.significant() {
//!     println!("{}", outcome.render_report(2));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod comparison;
mod error;
mod result;

// Functional modules
pub mod analysis;
pub mod clock;
pub mod distribution;
pub mod harness;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{TwoSampleHypothesis, TwoSampleTTest, TwoSampleZTest, DEFAULT_ALPHA};
pub use comparison::{
    run_concurrent_performance_comparison, run_performance_comparison, Comparison,
    ComparisonOutcome,
};
pub use error::Error;
pub use result::{
    Bucket, ComparisonResult, DescriptiveResult, PerformanceResult, ReliabilityResult, SampleInfo,
};

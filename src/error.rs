//! Error types for distribution construction and interval queries.

use std::fmt;

/// Errors surfaced for invalid arguments.
///
/// These are always returned immediately to the caller, never silently
/// defaulted. Numerically degenerate inputs (tiny samples) are *not* errors;
/// they surface as non-finite values in the results instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A Normal distribution was constructed with a non-positive or
    /// non-finite standard deviation.
    InvalidStandardDeviation(f64),

    /// A Student-T distribution was constructed with non-positive or
    /// non-finite degrees of freedom.
    InvalidDegreesOfFreedom(f64),

    /// An interval probability was requested with `a > b`.
    InvalidInterval {
        /// Start of the requested interval.
        a: f64,
        /// End of the requested interval.
        b: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidStandardDeviation(sd) => {
                write!(f, "standard deviation must be positive and finite, got {}", sd)
            }
            Error::InvalidDegreesOfFreedom(df) => {
                write!(f, "degrees of freedom must be positive and finite, got {}", df)
            }
            Error::InvalidInterval { a, b } => {
                write!(f, "interval start {} must not exceed end {}", a, b)
            }
        }
    }
}

impl std::error::Error for Error {}

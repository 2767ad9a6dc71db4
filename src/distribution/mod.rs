//! Reference distributions backing the hypothesis tests.
//!
//! A single capability trait covers the handful of functions a test needs
//! (CDF, PDF, inverse CDF); everything derivable (survival, hazard,
//! median-from-inverse-CDF) is implemented once as a default method. Two
//! variants exist: [`Normal`] for the Z-test and [`StudentT`] for the T-test.

mod normal;
mod student_t;

pub use normal::Normal;
pub use student_t::StudentT;

use crate::error::Error;

/// Capability set of a univariate continuous probability distribution.
pub trait ContinuousDistribution {
    /// Mean of the distribution.
    fn mean(&self) -> f64;

    /// Variance of the distribution.
    fn variance(&self) -> f64;

    /// Differential entropy of the distribution.
    fn entropy(&self) -> f64;

    /// Cumulative distribution function at `x`.
    fn cdf(&self, x: f64) -> f64;

    /// Probability density function at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Standard deviation, the square root of the variance.
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Median of the distribution. Defaults to the inverse CDF at 0.5.
    fn median(&self) -> f64 {
        self.inverse_cdf(0.5)
    }

    /// Probability mass of the semi-closed interval `(a, b]`.
    ///
    /// Fails with [`Error::InvalidInterval`] when `a > b`.
    fn cdf_between(&self, a: f64, b: f64) -> Result<f64, Error> {
        if a > b {
            return Err(Error::InvalidInterval { a, b });
        }
        if a == b {
            return Ok(0.0);
        }
        Ok(self.cdf(b) - self.cdf(a))
    }

    /// Survival function, `1 - cdf(x)`.
    fn survival(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Natural log of the density at `x`.
    fn ln_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Hazard function, `pdf(x) / survival(x)`.
    fn hazard(&self, x: f64) -> f64 {
        self.pdf(x) / self.survival(x)
    }

    /// Cumulative hazard function, `-ln(survival(x))`.
    fn cumulative_hazard(&self, x: f64) -> f64 {
        -self.survival(x).ln()
    }

    /// Inverse CDF (quantile function) at probability `p`.
    ///
    /// The generic implementation brackets the root by doubling outward from
    /// 0 until the CDF crosses `p`, then bisects. Variants with a closed
    /// form (the Normal) override this for speed and precision.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside `[0, 1]`.
    fn inverse_cdf(&self, p: f64) -> f64 {
        assert!(
            (0.0..=1.0).contains(&p),
            "probability must be in [0, 1], got {}",
            p
        );

        let mut lower = 0.0_f64;
        let mut upper = 0.0_f64;
        let f = self.cdf(0.0);

        if f > p {
            while self.cdf(lower) > p && lower.is_finite() {
                upper = lower;
                lower = 2.0 * lower - 1.0;
            }
        } else {
            while self.cdf(upper) < p && upper.is_finite() {
                lower = upper;
                upper = 2.0 * upper + 1.0;
            }
        }

        // Bisect the bracketed root of cdf(x) = p.
        for _ in 0..200 {
            let mid = 0.5 * (lower + upper);
            if self.cdf(mid) < p {
                lower = mid;
            } else {
                upper = mid;
            }
            if (upper - lower).abs() < 1e-12 {
                break;
            }
        }

        0.5 * (lower + upper)
    }
}

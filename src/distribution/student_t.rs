//! Student's T distribution.

use statrs::function::beta;
use statrs::function::gamma;

use super::ContinuousDistribution;
use crate::error::Error;

/// Student's T distribution with `ν > 0` degrees of freedom.
///
/// Used as the reference distribution of the T-test statistic. The CDF is
/// evaluated through the regularized incomplete beta function
/// `I_{ν/(ν+t²)}(ν/2, ½)`; the inverse CDF uses the generic bracketing root
/// finder from the trait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT {
    degrees_of_freedom: f64,
}

impl StudentT {
    /// Construct a Student-T distribution.
    ///
    /// Fails with [`Error::InvalidDegreesOfFreedom`] when `df` is not
    /// positive and finite.
    pub fn new(degrees_of_freedom: f64) -> Result<Self, Error> {
        if !degrees_of_freedom.is_finite() || degrees_of_freedom <= 0.0 {
            return Err(Error::InvalidDegreesOfFreedom(degrees_of_freedom));
        }
        Ok(Self { degrees_of_freedom })
    }

    /// Degrees of freedom `ν`.
    pub fn degrees_of_freedom(&self) -> f64 {
        self.degrees_of_freedom
    }
}

impl ContinuousDistribution for StudentT {
    fn mean(&self) -> f64 {
        if self.degrees_of_freedom > 1.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    fn variance(&self) -> f64 {
        let df = self.degrees_of_freedom;
        if df > 2.0 {
            df / (df - 2.0)
        } else if df > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }

    fn entropy(&self) -> f64 {
        let df = self.degrees_of_freedom;
        let half = df / 2.0;
        let half_plus = (df + 1.0) / 2.0;
        half_plus * (gamma::digamma(half_plus) - gamma::digamma(half))
            + 0.5 * df.ln()
            + beta::ln_beta(half, 0.5)
    }

    fn median(&self) -> f64 {
        0.0
    }

    fn cdf(&self, x: f64) -> f64 {
        let df = self.degrees_of_freedom;
        // The incomplete beta rejects a NaN argument; propagate it instead.
        if x.is_nan() {
            return f64::NAN;
        }
        if x == 0.0 {
            return 0.5;
        }
        let tail = 0.5 * beta::beta_reg(df / 2.0, 0.5, df / (df + x * x));
        if x > 0.0 {
            1.0 - tail
        } else {
            tail
        }
    }

    fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        let df = self.degrees_of_freedom;
        gamma::ln_gamma((df + 1.0) / 2.0)
            - gamma::ln_gamma(df / 2.0)
            - 0.5 * (df * std::f64::consts::PI).ln()
            - (df + 1.0) / 2.0 * (1.0 + x * x / df).ln()
    }
}

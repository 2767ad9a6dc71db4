//! Normal (Gaussian) distribution.

use std::sync::OnceLock;

use statrs::function::erf;

use super::ContinuousDistribution;
use crate::error::Error;

/// Normal distribution with mean `μ` and standard deviation `σ > 0`.
///
/// The CDF and survival function are computed through the error function on
/// the standardized value `z = (x - μ)/σ`; the inverse CDF uses the closed
/// form `μ + σ·√2·erf⁻¹(2p - 1)` instead of the generic root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
    variance: f64,
    // ln(1 / sqrt(2π σ²)), precomputed for the density.
    ln_constant: f64,
}

impl Normal {
    /// Construct a Normal distribution.
    ///
    /// Fails with [`Error::InvalidStandardDeviation`] when `std_dev` is not
    /// positive and finite, or `mean` is not finite.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, Error> {
        if !std_dev.is_finite() || std_dev <= 0.0 || !mean.is_finite() {
            return Err(Error::InvalidStandardDeviation(std_dev));
        }
        let variance = std_dev * std_dev;
        Ok(Self {
            mean,
            std_dev,
            variance,
            ln_constant: -0.5 * (2.0 * std::f64::consts::PI * variance).ln(),
        })
    }

    /// The standard normal distribution (mean 0, standard deviation 1).
    ///
    /// A single process-wide instance, initialized lazily and never mutated
    /// afterwards.
    pub fn standard() -> &'static Normal {
        static STANDARD: OnceLock<Normal> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Normal::new(0.0, 1.0).expect("standard normal parameters are valid")
        })
    }

    /// Skewness of a Normal distribution: always 0.
    pub fn skewness(&self) -> f64 {
        0.0
    }

    /// Excess kurtosis of a Normal distribution: always 0.
    pub fn kurtosis(&self) -> f64 {
        0.0
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }
}

impl ContinuousDistribution for Normal {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn std_dev(&self) -> f64 {
        self.std_dev
    }

    fn entropy(&self) -> f64 {
        0.5 * ((2.0 * std::f64::consts::PI * self.variance).ln() + 1.0)
    }

    fn median(&self) -> f64 {
        self.mean
    }

    fn cdf(&self, x: f64) -> f64 {
        // Φ(z) = erfc(-z/√2) / 2, numerically stable in the lower tail.
        let z = self.standardize(x);
        0.5 * erf::erfc(-z * std::f64::consts::FRAC_1_SQRT_2)
    }

    fn survival(&self, x: f64) -> f64 {
        // 1 - Φ(z) = erfc(z/√2) / 2, stable in the upper tail where
        // 1.0 - cdf(x) would cancel.
        let z = self.standardize(x);
        0.5 * erf::erfc(z * std::f64::consts::FRAC_1_SQRT_2)
    }

    fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        self.ln_constant - 0.5 * z * z
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        assert!(
            (0.0..=1.0).contains(&p),
            "probability must be in [0, 1], got {}",
            p
        );
        self.mean + self.std_dev * std::f64::consts::SQRT_2 * erf::erf_inv(2.0 * p - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_std_dev() {
        assert!(matches!(
            Normal::new(0.0, 0.0),
            Err(Error::InvalidStandardDeviation(_))
        ));
        assert!(matches!(
            Normal::new(0.0, -1.0),
            Err(Error::InvalidStandardDeviation(_))
        ));
        assert!(matches!(
            Normal::new(0.0, f64::NAN),
            Err(Error::InvalidStandardDeviation(_))
        ));
    }

    #[test]
    fn standard_normal_is_shared_and_standard() {
        let s = Normal::standard();
        assert_eq!(s.mean(), 0.0);
        assert_eq!(s.variance(), 1.0);
        assert!(std::ptr::eq(s, Normal::standard()));
    }

    #[test]
    fn cdf_known_values() {
        let s = Normal::standard();
        assert!((s.cdf(0.0) - 0.5).abs() < 1e-12);
        // Φ(1.959964...) = 0.975
        assert!((s.cdf(1.959963984540054) - 0.975).abs() < 1e-9);
        assert!((s.survival(1.959963984540054) - 0.025).abs() < 1e-9);
    }

    #[test]
    fn pdf_known_values() {
        let s = Normal::standard();
        // 1/sqrt(2π)
        assert!((s.pdf(0.0) - 0.3989422804014327).abs() < 1e-12);
        assert!((s.ln_pdf(0.0) - 0.3989422804014327f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn inverse_cdf_round_trips_over_representative_range() {
        let s = Normal::standard();
        let mut x = -3.0;
        while x <= 3.0 {
            let p = s.cdf(x);
            let back = s.inverse_cdf(p);
            assert!((back - x).abs() < 1e-6, "x = {}, back = {}", x, back);
            x += 0.125;
        }
    }

    #[test]
    fn closed_form_inverse_matches_generic_root_finder() {
        struct Generic(Normal);
        impl ContinuousDistribution for Generic {
            fn mean(&self) -> f64 {
                self.0.mean()
            }
            fn variance(&self) -> f64 {
                self.0.variance()
            }
            fn entropy(&self) -> f64 {
                self.0.entropy()
            }
            fn cdf(&self, x: f64) -> f64 {
                self.0.cdf(x)
            }
            fn pdf(&self, x: f64) -> f64 {
                self.0.pdf(x)
            }
            // inverse_cdf deliberately left at the bracketing default.
        }

        let n = Normal::new(3.0, 2.0).unwrap();
        let g = Generic(n);
        for &p in &[0.05, 0.25, 0.5, 0.9, 0.975] {
            assert!(
                (n.inverse_cdf(p) - g.inverse_cdf(p)).abs() < 1e-7,
                "p = {}",
                p
            );
        }
    }

    #[test]
    fn scaled_normal_statistics() {
        let n = Normal::new(10.0, 2.0).unwrap();
        assert_eq!(n.mean(), 10.0);
        assert_eq!(n.median(), 10.0);
        assert_eq!(n.variance(), 4.0);
        assert_eq!(n.std_dev(), 2.0);
        assert_eq!(n.skewness(), 0.0);
        assert_eq!(n.kurtosis(), 0.0);
        assert!((n.entropy() - 0.5 * ((2.0 * std::f64::consts::PI * 4.0).ln() + 1.0)).abs() < 1e-12);
    }
}

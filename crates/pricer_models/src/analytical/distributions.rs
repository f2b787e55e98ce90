//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is evaluated through the complementary error function from
//! `statrs`, which is accurate to double precision across the whole real
//! line (including the far tails, where `1 - erf` would cancel).

use statrs::function::erf::erfc;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values to 1e-10 absolute accuracy
        assert_abs_diff_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-2.0), 0.022750131948179195, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(3.0), 0.9986501019683699, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-1.959963984540054), 0.025, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-6.0, -3.0, -1.0, -0.25, 0.0, 0.25, 1.0, 3.0, 6.0] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        // Φ(-8) ≈ 6.22e-16: relative accuracy is kept in the lower tail
        assert_relative_eq!(norm_cdf(-8.0), 6.220960574271785e-16, max_relative = 1e-8);
        assert!(norm_cdf(40.0) <= 1.0);
        assert!(norm_cdf(-40.0) >= 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for w in values.windows(2) {
            assert!(norm_cdf(w[1]) > norm_cdf(w[0]), "CDF not monotonic at x = {}", w[0]);
        }
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_abs_diff_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_pdf(1.0), 0.24197072451914337, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_pdf(2.0), 0.05399096651318806, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_pdf(3.0), 0.004431848411938008, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), max_relative = 1e-8);
        }
    }
}

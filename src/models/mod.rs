pub mod bs;
pub mod payoff;

/// Standard normal distribution helpers shared by the pricing formulas
pub mod utils {
    use statrs::consts::SQRT_2PI;
    use statrs::function::erf::erfc;

    /// Standard normal cumulative distribution function, Φ(x).
    ///
    /// Computed as `erfc(-x/√2)/2`, accurate to about 1e-11 absolute.
    /// NaN propagates; ±∞ map to 1 and 0.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Standard normal probability density function, φ(x).
    pub fn normal_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / SQRT_2PI
    }

    /// Calculate log-moneyness: ln(S/K)
    pub fn log_moneyness(spot: f64, strike: f64) -> f64 {
        (spot / strike).ln()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_normal_cdf_reference_values() {
            assert!((normal_cdf(0.0) - 0.5).abs() < 1e-15);
            assert!((normal_cdf(1.959963984540054) - 0.975).abs() < 1e-10);
            assert!((normal_cdf(-1.0) - 0.15865525393145707).abs() < 1e-10);
            assert_eq!(normal_cdf(f64::INFINITY), 1.0);
            assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
            assert!(normal_cdf(f64::NAN).is_nan());
        }

        #[test]
        fn test_normal_cdf_symmetry() {
            for x in [0.1, 0.5, 1.3, 2.7, 4.0] {
                let sum = normal_cdf(x) + normal_cdf(-x);
                assert!((sum - 1.0).abs() < 1e-14, "Φ({x}) + Φ(-{x}) = {sum}");
            }
        }

        #[test]
        fn test_normal_pdf_reference_values() {
            assert!((normal_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
            assert!((normal_pdf(1.0) - 0.24197072451914337).abs() < 1e-15);
            assert_eq!(normal_pdf(2.5), normal_pdf(-2.5));
            assert_eq!(normal_pdf(f64::INFINITY), 0.0);
        }
    }
}

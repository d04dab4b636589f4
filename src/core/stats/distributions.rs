use std::f64::consts::{PI, SQRT_2};

use crate::special::{
    combination, erf, factorial, ln_gamma, regularized_incomplete_beta,
    regularized_incomplete_gamma,
};

// ============================================================================
// Normal
// ============================================================================

pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return f64::NAN;
    }
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// Standard normal CDF, Φ(z) = ½(1 + erf(z/√2)).
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

// ============================================================================
// Student's t
// ============================================================================

pub fn t_pdf(t: f64, df: f64) -> f64 {
    if df <= 0.0 {
        return f64::NAN;
    }
    let ln_coef = ln_gamma(0.5 * (df + 1.0)) - ln_gamma(0.5 * df) - 0.5 * (df * PI).ln();
    ln_coef.exp() * (1.0 + t * t / df).powf(-0.5 * (df + 1.0))
}

/// Student's t CDF through the regularized incomplete beta:
/// with x = df/(df+t²), the tail mass is ½·I_x(df/2, ½).
pub fn t_cdf(t: f64, df: f64) -> f64 {
    if df <= 0.0 || t.is_nan() {
        return f64::NAN;
    }
    if t.is_infinite() {
        return if t > 0.0 { 1.0 } else { 0.0 };
    }

    let x = df / (df + t * t);
    let tail = 0.5 * regularized_incomplete_beta(0.5 * df, 0.5, x);
    let prob = if t >= 0.0 { 1.0 - tail } else { tail };
    prob.clamp(0.0, 1.0)
}

// ============================================================================
// Chi-square
// ============================================================================

pub fn chi_square_pdf(x: f64, df: f64) -> f64 {
    if df <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    let k = 0.5 * df;
    ((k - 1.0) * x.ln() - 0.5 * x - k * 2.0_f64.ln() - ln_gamma(k)).exp()
}

/// Chi-square CDF, P(df/2, x/2).
pub fn chi_square_cdf(x: f64, df: f64) -> f64 {
    if df <= 0.0 || x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    regularized_incomplete_gamma(0.5 * df, 0.5 * x).clamp(0.0, 1.0)
}

// ============================================================================
// F
// ============================================================================

pub fn f_cdf(f: f64, df1: f64, df2: f64) -> f64 {
    if df1 <= 0.0 || df2 <= 0.0 || f.is_nan() {
        return f64::NAN;
    }
    if f <= 0.0 {
        return 0.0;
    }
    let x = df1 * f / (df1 * f + df2);
    regularized_incomplete_beta(0.5 * df1, 0.5 * df2, x).clamp(0.0, 1.0)
}

// ============================================================================
// Discrete
// ============================================================================

pub fn binomial_pmf(k: u32, n: u32, p: f64) -> f64 {
    if k > n || !(0.0..=1.0).contains(&p) {
        return 0.0;
    }
    combination(n, k) * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32)
}

pub fn poisson_pmf(k: u32, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 0.0;
    }
    if k > 170 {
        // k! overflows; stay in log space
        return (k as f64 * lambda.ln() - lambda - ln_gamma(k as f64 + 1.0)).exp();
    }
    lambda.powi(k as i32) * (-lambda).exp() / factorial(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_cdf() {
        assert_eq!(normal_cdf(0.0), 0.5);
        assert!(normal_cdf(2.0) > 0.97);
        assert!(normal_cdf(-2.0) < 0.03);
        assert!((normal_cdf(1.959_964) - 0.975).abs() < 1e-6);
    }

    #[test]
    fn test_normal_cdf_symmetry_and_monotonicity() {
        let mut prev = 0.0;
        for i in -60..=60 {
            let z = i as f64 * 0.1;
            let p = normal_cdf(z);
            assert!((p + normal_cdf(-z) - 1.0).abs() < 1e-6);
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn test_normal_pdf() {
        assert!((normal_pdf(0.0, 0.0, 1.0) - 0.398_942_280_4).abs() < 1e-9);
        assert!((normal_pdf(3.0, 1.0, 2.0) - 0.120_985_362_3).abs() < 1e-9);
        assert!(normal_pdf(0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_t_cdf_known_values() {
        assert!((t_cdf(0.0, 5.0) - 0.5).abs() < 1e-12);
        // Cauchy: F(1) = 0.75
        assert!((t_cdf(1.0, 1.0) - 0.75).abs() < 1e-6);
        assert!((t_cdf(2.0, 5.0) - 0.949_030_260_6).abs() < 1e-6);
        assert!((t_cdf(-2.0, 5.0) - 0.050_969_739_4).abs() < 1e-6);
        assert!(t_cdf(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_t_cdf_converges_to_normal() {
        for i in -40..=40 {
            let t = i as f64 * 0.1;
            assert!((t_cdf(t, 1000.0) - normal_cdf(t)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_t_pdf_integrates_like_cdf() {
        // Midpoint rule over [0, 2] should match F(2) - F(0)
        let df = 4.0;
        let steps = 2000;
        let h = 2.0 / steps as f64;
        let area: f64 = (0..steps)
            .map(|i| t_pdf((i as f64 + 0.5) * h, df) * h)
            .sum();
        assert!((area - (t_cdf(2.0, df) - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_chi_square_cdf() {
        assert_eq!(chi_square_cdf(0.0, 3.0), 0.0);
        assert!((chi_square_cdf(3.841_459, 1.0) - 0.95).abs() < 1e-5);
        assert!((chi_square_cdf(11.070_5, 5.0) - 0.95).abs() < 1e-5);
        // df = 2 is exponential with mean 2
        assert!((chi_square_cdf(2.0, 2.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-10);
    }

    #[test]
    fn test_chi_square_pdf() {
        // df = 2: f(x) = e^{-x/2}/2
        assert!((chi_square_pdf(1.0, 2.0) - 0.5 * (-0.5_f64).exp()).abs() < 1e-10);
        assert_eq!(chi_square_pdf(-1.0, 2.0), 0.0);
    }

    #[test]
    fn test_f_cdf() {
        assert_eq!(f_cdf(0.0, 3.0, 10.0), 0.0);
        // F(1, n) is t² with n df
        let t = 2.0;
        let expected = 2.0 * t_cdf(t, 10.0) - 1.0;
        assert!((f_cdf(t * t, 1.0, 10.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_discrete_pmfs() {
        assert!((binomial_pmf(2, 4, 0.5) - 0.375).abs() < 1e-12);
        assert_eq!(binomial_pmf(5, 4, 0.5), 0.0);
        assert!((poisson_pmf(0, 2.0) - (-2.0_f64).exp()).abs() < 1e-12);
        assert!((poisson_pmf(3, 2.0) - 8.0 * (-2.0_f64).exp() / 6.0).abs() < 1e-12);
        assert_eq!(poisson_pmf(1, 0.0), 0.0);
    }
}

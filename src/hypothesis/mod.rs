//! Classical hypothesis tests.
//!
//! Every test validates its inputs, computes the statistic, converts it to a
//! p-value through the matching CDF, looks up the critical value and returns
//! a [`HypothesisTestResult`]. Nothing is cached between calls.

mod chi_square;
mod normality;
mod result;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stats::{
    chi_square_cdf, chi_square_critical, f_cdf, f_critical, normal_cdf, t_cdf, t_critical,
    z_critical,
};

use crate::error::{Result, StatError};

pub use chi_square::chi_square_goodness_of_fit;
pub use normality::normality_test;
pub use result::{HypothesisTestResult, TestKind, TestSummary};
pub use t_test::{one_sample_t_test, t_test, two_sample_t_test};
pub use z_test::one_sample_z_test;

// ============================================================================
// Alternative and conclusion
// ============================================================================

/// Direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alternative {
    #[default]
    #[serde(rename = "two-sided", alias = "two-tailed")]
    TwoSided,
    #[serde(rename = "less", alias = "left-tailed")]
    Less,
    #[serde(rename = "greater", alias = "right-tailed")]
    Greater,
}

impl Alternative {
    /// Significance level used for the critical value: halved when two-sided.
    pub fn critical_alpha(&self, alpha: f64) -> f64 {
        match self {
            Alternative::TwoSided => alpha / 2.0,
            Alternative::Less | Alternative::Greater => alpha,
        }
    }

    // Relation stated by H0 for a location test.
    fn null_relation(&self) -> &'static str {
        match self {
            Alternative::TwoSided => "=",
            Alternative::Less => "≥",
            Alternative::Greater => "≤",
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alternative::TwoSided => write!(f, "two-sided"),
            Alternative::Less => write!(f, "less"),
            Alternative::Greater => write!(f, "greater"),
        }
    }
}

impl FromStr for Alternative {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-sided" | "two-tailed" => Ok(Alternative::TwoSided),
            "less" | "left-tailed" => Ok(Alternative::Less),
            "greater" | "right-tailed" => Ok(Alternative::Greater),
            other => Err(StatError::InvalidParameter(format!(
                "unknown alternative '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Conclusion {
    RejectNull,
    AcceptNull,
}

impl Conclusion {
    /// H0 is rejected when `p < alpha`.
    pub fn from_p_value(p_value: f64, alpha: f64) -> Self {
        if p_value < alpha {
            Conclusion::RejectNull
        } else {
            Conclusion::AcceptNull
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Conclusion::RejectNull)
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::RejectNull => write!(f, "reject null hypothesis"),
            Conclusion::AcceptNull => write!(f, "accept null hypothesis"),
        }
    }
}

// ============================================================================
// Reference distributions
// ============================================================================

/// Null distribution of a test statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestDistribution {
    Z,
    T(f64),
    ChiSquare(f64),
    F(f64, f64),
}

impl TestDistribution {
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            TestDistribution::Z => normal_cdf(x),
            TestDistribution::T(df) => t_cdf(x, df),
            TestDistribution::ChiSquare(df) => chi_square_cdf(x, df),
            TestDistribution::F(df1, df2) => f_cdf(x, df1, df2),
        }
    }
}

/// Tail probability of `statistic`: `less` is F(s), `greater` is 1 - F(s),
/// `two-sided` is 2·min(F(s), 1 - F(s)).
pub fn p_value(statistic: f64, distribution: TestDistribution, alternative: Alternative) -> f64 {
    let cdf = distribution.cdf(statistic);
    let p = match alternative {
        Alternative::Less => cdf,
        Alternative::Greater => 1.0 - cdf,
        Alternative::TwoSided => 2.0 * cdf.min(1.0 - cdf),
    };
    p.clamp(0.0, 1.0)
}

/// Critical value magnitude at level `alpha`, halving alpha for two-sided tests.
pub fn critical_value(alpha: f64, distribution: TestDistribution, alternative: Alternative) -> f64 {
    let a = alternative.critical_alpha(alpha);
    let c = match distribution {
        TestDistribution::Z => z_critical(a),
        TestDistribution::T(df) => t_critical(a, df),
        TestDistribution::ChiSquare(df) => chi_square_critical(a, df),
        TestDistribution::F(df1, df2) => f_critical(a, df1, df2),
    };
    tracing::trace!(?distribution, alpha = a, critical = c, "critical value");
    c.abs()
}

// Shared text for location tests: "H₀: <lhs> <rel> <rhs>".
fn location_interpretation(
    alpha: f64,
    alternative: Alternative,
    conclusion: Conclusion,
    hypothesis: (&str, &str),
    finding: &str,
) -> String {
    let (lhs, rhs) = hypothesis;
    let verb = match conclusion {
        Conclusion::RejectNull => "reject",
        Conclusion::AcceptNull => "accept",
    };
    format!(
        "At significance level α={}, {} the null hypothesis H₀: {} {} {}. {}",
        alpha,
        verb,
        lhs,
        alternative.null_relation(),
        rhs,
        finding
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternative_vocabularies() {
        assert_eq!("two-tailed".parse::<Alternative>().unwrap(), Alternative::TwoSided);
        assert_eq!("left-tailed".parse::<Alternative>().unwrap(), Alternative::Less);
        assert_eq!("Greater".parse::<Alternative>().unwrap(), Alternative::Greater);
        assert!("sideways".parse::<Alternative>().is_err());
        assert_eq!(Alternative::default(), Alternative::TwoSided);
    }

    #[test]
    fn test_alternative_serde_aliases() {
        let a: Alternative = serde_json::from_str("\"right-tailed\"").unwrap();
        assert_eq!(a, Alternative::Greater);
        assert_eq!(serde_json::to_string(&Alternative::TwoSided).unwrap(), "\"two-sided\"");
    }

    #[test]
    fn test_conclusion_labels() {
        assert_eq!(Conclusion::from_p_value(0.01, 0.05), Conclusion::RejectNull);
        assert_eq!(Conclusion::from_p_value(0.05, 0.05), Conclusion::AcceptNull);
        assert_eq!(Conclusion::AcceptNull.to_string(), "accept null hypothesis");
        assert_eq!(Conclusion::RejectNull.to_string(), "reject null hypothesis");
    }

    #[test]
    fn test_p_value_tails() {
        let z = 1.5;
        let less = p_value(z, TestDistribution::Z, Alternative::Less);
        let greater = p_value(z, TestDistribution::Z, Alternative::Greater);
        let two = p_value(z, TestDistribution::Z, Alternative::TwoSided);
        assert!((less + greater - 1.0).abs() < 1e-12);
        assert!((two - 2.0 * greater).abs() < 1e-12);
        assert!((p_value(0.0, TestDistribution::T(8.0), Alternative::TwoSided) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_critical_value_halves_for_two_sided() {
        assert_eq!(critical_value(0.05, TestDistribution::Z, Alternative::TwoSided), 1.96);
        assert_eq!(critical_value(0.05, TestDistribution::Z, Alternative::Less), 1.645);
        let chi = critical_value(0.05, TestDistribution::ChiSquare(1.0), Alternative::Greater);
        assert!((chi - 3.841).abs() < 1e-3);
    }
}

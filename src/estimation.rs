//! Maximum-likelihood and method-of-moments estimates for the normal,
//! exponential and Poisson families.
//!
//! For these three families the two estimators coincide: the likelihood
//! equations reduce to matching the first (and for the normal, second
//! central) sample moment. That holds for these families only.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stats::{mean, population_std_dev};

use crate::error::{check_sample_size, Result, StatError};
use crate::sample::{finite_axis_values, Axis, DataPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    Normal,
    Exponential,
    Poisson,
}

impl Distribution {
    pub const ALL: [Distribution; 3] = [
        Distribution::Normal,
        Distribution::Exponential,
        Distribution::Poisson,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Normal => "normal",
            Distribution::Exponential => "exponential",
            Distribution::Poisson => "Poisson",
        }
    }

    pub fn mle_formula(&self) -> &'static str {
        match self {
            Distribution::Normal => {
                "For Normal Distribution N(μ, σ²):\nμ̂ = (1/n) Σxᵢ\nσ̂² = (1/n) Σ(xᵢ - μ̂)²"
            }
            Distribution::Exponential => "For Exponential Distribution Exp(λ):\nλ̂ = 1 / [(1/n) Σxᵢ]",
            Distribution::Poisson => "For Poisson Distribution Poisson(λ):\nλ̂ = (1/n) Σxᵢ",
        }
    }

    /// Same text as [`Distribution::mle_formula`]; the estimators coincide.
    pub fn mom_formula(&self) -> &'static str {
        self.mle_formula()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().to_ascii_lowercase())
    }
}

impl FromStr for Distribution {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "gaussian" => Ok(Distribution::Normal),
            "exponential" => Ok(Distribution::Exponential),
            "poisson" => Ok(Distribution::Poisson),
            _ => Err(StatError::UnsupportedDistribution(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub distribution: Distribution,
    pub mle: BTreeMap<String, f64>,
    pub mom: BTreeMap<String, f64>,
    pub comparison: Option<String>,
}

/// Estimates the parameters of `distribution` from one axis of the sample.
pub fn estimate(sample: &[DataPoint], axis: Axis, distribution: Distribution) -> Result<EstimationResult> {
    check_sample_size("parameter estimation", sample.len(), 1)?;
    let values = finite_axis_values(sample, axis)?;
    let m = mean(&values);

    let params: BTreeMap<String, f64> = match distribution {
        Distribution::Normal => BTreeMap::from([
            ("mu".to_string(), m),
            ("sigma".to_string(), population_std_dev(&values)),
        ]),
        Distribution::Exponential => {
            if m <= 0.0 {
                return Err(StatError::InvalidParameter(format!(
                    "exponential rate needs a positive sample mean, got {}",
                    m
                )));
            }
            BTreeMap::from([("lambda".to_string(), 1.0 / m)])
        }
        Distribution::Poisson => {
            if m < 0.0 {
                return Err(StatError::InvalidParameter(format!(
                    "Poisson rate needs a non-negative sample mean, got {}",
                    m
                )));
            }
            BTreeMap::from([("lambda".to_string(), m)])
        }
    };

    tracing::debug!(%distribution, %axis, n = values.len(), ?params, "estimated parameters");

    Ok(EstimationResult {
        distribution,
        mom: params.clone(),
        mle: params,
        comparison: Some(format!(
            "For {} distribution, MLE and MoM estimates are consistent",
            distribution.name()
        )),
    })
}

/// [`estimate`] with the distribution given by name.
pub fn estimate_by_name(sample: &[DataPoint], axis: Axis, distribution: &str) -> Result<EstimationResult> {
    estimate(sample, axis, distribution.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::points_from_values;

    #[test]
    fn test_normal_estimates() {
        let sample = points_from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let est = estimate(&sample, Axis::Y, Distribution::Normal).unwrap();
        assert!((est.mle["mu"] - 5.0).abs() < 1e-12);
        // population sigma
        assert!((est.mle["sigma"] - 2.0).abs() < 1e-12);
        assert_eq!(est.mle, est.mom);
        assert_eq!(
            est.comparison.as_deref(),
            Some("For normal distribution, MLE and MoM estimates are consistent")
        );
    }

    #[test]
    fn test_exponential_and_poisson() {
        let sample = points_from_values(&[1.0, 2.0, 3.0, 6.0]);
        let exp = estimate(&sample, Axis::Y, Distribution::Exponential).unwrap();
        assert!((exp.mle["lambda"] - 0.25).abs() < 1e-12);

        let poisson = estimate(&sample, Axis::Y, Distribution::Poisson).unwrap();
        assert!((poisson.mom["lambda"] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_x_axis_is_used() {
        let sample = points_from_values(&[10.0, 20.0, 30.0]);
        let est = estimate(&sample, Axis::X, Distribution::Poisson).unwrap();
        assert!((est.mle["lambda"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        let negative = points_from_values(&[-1.0, -2.0]);
        assert!(matches!(
            estimate(&negative, Axis::Y, Distribution::Exponential),
            Err(StatError::InvalidParameter(_))
        ));
        assert!(matches!(
            estimate(&negative, Axis::Y, Distribution::Poisson),
            Err(StatError::InvalidParameter(_))
        ));
        assert!(matches!(
            estimate(&[], Axis::Y, Distribution::Normal),
            Err(StatError::SampleTooSmall { .. })
        ));
    }

    #[test]
    fn test_unknown_distribution() {
        let sample = points_from_values(&[1.0, 2.0]);
        let err = estimate_by_name(&sample, Axis::Y, "weibull").unwrap_err();
        assert_eq!(err, StatError::UnsupportedDistribution("weibull".to_string()));
        assert!(estimate_by_name(&sample, Axis::Y, "Normal").is_ok());
    }

    #[test]
    fn test_formulas() {
        assert!(Distribution::Exponential.mle_formula().contains("λ̂ = 1 /"));
        assert_eq!(Distribution::Poisson.mom_formula(), Distribution::Poisson.mle_formula());
    }
}

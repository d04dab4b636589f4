//! Turning a continuous sample into observed and expected bin counts for
//! the chi-square goodness-of-fit test.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stats::{find_min_max, mean, normal_cdf, population_std_dev};

use crate::error::{check_alpha, Result, StatError};
use crate::hypothesis::{chi_square_goodness_of_fit, HypothesisTestResult};
use crate::sample::{finite_axis_values, Axis, DataPoint};

const MAX_BINS: usize = 10;
const VALUES_PER_BIN: usize = 5;

/// Equal-width bins spanning `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<f64>,
}

impl Histogram {
    /// Bins `values` into `min(10, n / 5)` bins. A value equal to the
    /// maximum lands in the last bin.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let bins = (values.len() / VALUES_PER_BIN).min(MAX_BINS);
        if bins < 2 {
            return Err(StatError::InvalidParameter(format!(
                "binning {} values gives {} bins, at least 2 are needed",
                values.len(),
                bins
            )));
        }

        let (min, max) = find_min_max(values);
        if !(max > min) {
            return Err(StatError::InvalidParameter(
                "cannot bin a constant sample".to_string(),
            ));
        }

        let bin_width = (max - min) / bins as f64;
        let mut counts = vec![0.0; bins];
        for &v in values {
            let idx = (((v - min) / bin_width).floor() as usize).min(bins - 1);
            counts[idx] += 1.0;
        }

        Ok(Histogram {
            min,
            max,
            bin_width,
            counts,
        })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Lower and upper edge of bin `i`.
    pub fn edges(&self, i: usize) -> (f64, f64) {
        let lo = self.min + i as f64 * self.bin_width;
        (lo, lo + self.bin_width)
    }
}

/// Reference distribution for expected bin counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedDistribution {
    #[default]
    Uniform,
    Normal,
}

impl fmt::Display for ExpectedDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedDistribution::Uniform => write!(f, "uniform"),
            ExpectedDistribution::Normal => write!(f, "normal"),
        }
    }
}

impl FromStr for ExpectedDistribution {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(ExpectedDistribution::Uniform),
            "normal" => Ok(ExpectedDistribution::Normal),
            _ => Err(StatError::UnsupportedDistribution(s.to_string())),
        }
    }
}

/// Expected count per bin of `histogram` under `reference`.
///
/// Uniform gives `n / bins` everywhere. Normal uses the sample mean and
/// population standard deviation of `values` and gives
/// `n · (Φ(hi) - Φ(lo))` for each bin; mass outside `[min, max]` is not
/// reassigned.
pub fn expected_counts(values: &[f64], histogram: &Histogram, reference: ExpectedDistribution) -> Vec<f64> {
    let n = values.len() as f64;
    let bins = histogram.bins();
    match reference {
        ExpectedDistribution::Uniform => vec![n / bins as f64; bins],
        ExpectedDistribution::Normal => {
            let m = mean(values);
            let sd = population_std_dev(values);
            (0..bins)
                .map(|i| {
                    let (lo, hi) = histogram.edges(i);
                    n * (normal_cdf((hi - m) / sd) - normal_cdf((lo - m) / sd))
                })
                .collect()
        }
    }
}

/// Bins one axis of the sample and tests it against `reference`.
pub fn chi_square_from_sample(
    sample: &[DataPoint],
    axis: Axis,
    reference: ExpectedDistribution,
    alpha: f64,
) -> Result<HypothesisTestResult> {
    check_alpha(alpha)?;
    let values = finite_axis_values(sample, axis)?;
    let histogram = Histogram::from_values(&values)?;
    let expected = expected_counts(&values, &histogram, reference);

    tracing::debug!(bins = histogram.bins(), %reference, %axis, "binned sample for chi-square");

    chi_square_goodness_of_fit(&histogram.counts, &expected, alpha)
}

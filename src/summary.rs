//! Descriptive summary of a paired sample.

use std::fmt;

use serde::{Deserialize, Serialize};
use stats::{
    excess_kurtosis, find_min_max, mean, median, pearson_correlation, sample_std_dev, skewness,
};

use crate::error::{check_sample_size, Result};
use crate::sample::{finite_axis_values, Axis, DataPoint};

/// Location, spread and shape of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSummary {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Absent below three observations or when the axis is constant.
    pub skewness: Option<f64>,
    pub excess_kurtosis: Option<f64>,
}

impl AxisSummary {
    fn from_values(values: &[f64]) -> Self {
        let (min, max) = find_min_max(values);
        let shape = |v: f64| (values.len() >= 3 && v.is_finite()).then_some(v);
        AxisSummary {
            mean: mean(values),
            median: median(values),
            std_dev: sample_std_dev(values),
            min,
            max,
            skewness: shape(skewness(values)),
            excess_kurtosis: shape(excess_kurtosis(values)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub x: AxisSummary,
    pub y: AxisSummary,
    pub correlation: f64,
    pub correlation_strength: CorrelationStrength,
}

impl Summary {
    pub fn axis(&self, axis: Axis) -> &AxisSummary {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Summarizes both axes of a non-empty sample.
pub fn summarize(sample: &[DataPoint]) -> Result<Summary> {
    check_sample_size("descriptive summary", sample.len(), 1)?;

    let xs = finite_axis_values(sample, Axis::X)?;
    let ys = finite_axis_values(sample, Axis::Y)?;
    let correlation = pearson_correlation(&xs, &ys);

    let summary = Summary {
        count: sample.len(),
        x: AxisSummary::from_values(&xs),
        y: AxisSummary::from_values(&ys),
        correlation,
        correlation_strength: CorrelationStrength::from_coefficient(correlation),
    };

    tracing::debug!(
        count = summary.count,
        correlation = summary.correlation,
        "summarized sample"
    );

    Ok(summary)
}

// ============================================================================
// Correlation strength
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorrelationStrength {
    None,
    WeakPositive,
    WeakNegative,
    ModeratePositive,
    ModerateNegative,
    StrongPositive,
    StrongNegative,
}

impl CorrelationStrength {
    /// Buckets |r| at 0.1, 0.3 and 0.7.
    pub fn from_coefficient(r: f64) -> Self {
        let abs = r.abs();
        let positive = r > 0.0;
        if abs < 0.1 || r.is_nan() {
            CorrelationStrength::None
        } else if abs < 0.3 {
            if positive { Self::WeakPositive } else { Self::WeakNegative }
        } else if abs < 0.7 {
            if positive { Self::ModeratePositive } else { Self::ModerateNegative }
        } else if positive {
            Self::StrongPositive
        } else {
            Self::StrongNegative
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "no correlation",
            Self::WeakPositive => "weak positive correlation",
            Self::WeakNegative => "weak negative correlation",
            Self::ModeratePositive => "moderate positive correlation",
            Self::ModerateNegative => "moderate negative correlation",
            Self::StrongPositive => "strong positive correlation",
            Self::StrongNegative => "strong negative correlation",
        };
        write!(f, "{}", label)
    }
}

//! Paired observations and axis selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{check_finite, Result, StatError};

/// One `(x, y)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Which coordinate of each pair a univariate statistic reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

impl FromStr for Axis {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            other => Err(StatError::InvalidParameter(format!(
                "unknown axis '{}', expected 'x' or 'y'",
                other
            ))),
        }
    }
}

/// Copies the selected coordinate out of every pair, in order.
pub fn axis_values(sample: &[DataPoint], axis: Axis) -> Vec<f64> {
    sample.iter().map(|p| p.get(axis)).collect()
}

/// Wraps plain values as pairs `(index, value)`, so they read back on the y axis.
pub fn points_from_values(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &y)| DataPoint::new(i as f64, y))
        .collect()
}

// Axis values with every entry checked for finiteness.
pub(crate) fn finite_axis_values(sample: &[DataPoint], axis: Axis) -> Result<Vec<f64>> {
    let values = axis_values(sample, axis);
    check_finite(&values)?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_values_preserve_order() {
        let sample = vec![DataPoint::new(1.0, 10.0), DataPoint::new(2.0, 20.0)];
        assert_eq!(axis_values(&sample, Axis::X), vec![1.0, 2.0]);
        assert_eq!(axis_values(&sample, Axis::Y), vec![10.0, 20.0]);
    }

    #[test]
    fn test_axis_parsing() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!(" Y ".parse::<Axis>().unwrap(), Axis::Y);
        assert!("z".parse::<Axis>().is_err());
        assert_eq!(Axis::default(), Axis::Y);
    }

    #[test]
    fn test_points_from_values() {
        let points = points_from_values(&[3.0, 4.0]);
        assert_eq!(points, vec![DataPoint::new(0.0, 3.0), DataPoint::new(1.0, 4.0)]);
    }

    #[test]
    fn test_non_finite_rejected() {
        let sample = vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, f64::NAN)];
        assert!(finite_axis_values(&sample, Axis::Y).is_err());
        assert!(finite_axis_values(&sample, Axis::X).is_ok());
    }
}

//! # statkit
//!
//! Statistics engine for paired `(x, y)` samples: descriptive summaries,
//! maximum-likelihood and method-of-moments estimates, and classical
//! hypothesis tests (z, one- and two-sample t, chi-square goodness of fit,
//! a skewness/kurtosis normality check).
//!
//! The numerical core (special functions, CDFs, critical values) lives in
//! the `stats` crate; this crate adds the sample model, validation and the
//! typed result records.
//!
//! ```
//! use statkit::{one_sample_t_test, Alternative, Axis, DataPoint};
//!
//! let sample: Vec<DataPoint> = [5.1, 4.9, 5.2, 5.0, 4.8, 5.3, 5.1, 4.9]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &y)| DataPoint::new(i as f64, y))
//!     .collect();
//!
//! let result = one_sample_t_test(&sample, Axis::Y, 5.0, 0.05, Alternative::TwoSided).unwrap();
//! assert!(!result.is_significant());
//! ```

pub mod binning;
pub mod error;
pub mod estimation;
pub mod hypothesis;
pub mod sample;
pub mod summary;

pub use binning::{chi_square_from_sample, expected_counts, ExpectedDistribution, Histogram};
pub use error::{Result, StatError};
pub use estimation::{estimate, estimate_by_name, Distribution, EstimationResult};
pub use hypothesis::{
    chi_square_goodness_of_fit, critical_value, normality_test, one_sample_t_test,
    one_sample_z_test, p_value, t_test, two_sample_t_test, Alternative, Conclusion,
    HypothesisTestResult, TestDistribution, TestKind, TestSummary,
};
pub use sample::{axis_values, points_from_values, Axis, DataPoint};
pub use summary::{summarize, AxisSummary, CorrelationStrength, Summary};

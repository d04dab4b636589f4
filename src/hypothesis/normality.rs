use stats::{excess_kurtosis, has_zero_spread, mean, sample_std_dev, skewness};

use super::{
    critical_value, p_value, Alternative, Conclusion, HypothesisTestResult, TestDistribution,
    TestSummary,
};
use crate::error::{check_alpha, check_sample_size, Result, StatError};
use crate::sample::{finite_axis_values, Axis, DataPoint};

/// Skewness/kurtosis screen for normality.
///
/// Each moment is turned into a z-score with its asymptotic standard error,
/// `√(6/n)` for skewness and `√(24/n)` for excess kurtosis. The reported
/// p-value is the smaller of the two two-sided p-values and the statistic is
/// `|z_skew| + |z_kurt|`. This is a heuristic, not a joint test such as
/// Jarque-Bera.
pub fn normality_test(sample: &[DataPoint], axis: Axis, alpha: f64) -> Result<HypothesisTestResult> {
    check_alpha(alpha)?;
    check_sample_size("normality test", sample.len(), 3)?;
    let values = finite_axis_values(sample, axis)?;
    if has_zero_spread(&values) {
        return Err(StatError::InvalidParameter(
            "normality test is undefined for a constant sample".to_string(),
        ));
    }

    let n = values.len() as f64;
    let skew = skewness(&values);
    let kurt = excess_kurtosis(&values);
    let skewness_z = skew / (6.0 / n).sqrt();
    let kurtosis_z = kurt / (24.0 / n).sqrt();

    let skewness_p_value = p_value(skewness_z, TestDistribution::Z, Alternative::TwoSided);
    let kurtosis_p_value = p_value(kurtosis_z, TestDistribution::Z, Alternative::TwoSided);
    let p = skewness_p_value.min(kurtosis_p_value);
    let statistic = skewness_z.abs() + kurtosis_z.abs();
    let critical = critical_value(alpha, TestDistribution::Z, Alternative::TwoSided);
    let conclusion = Conclusion::from_p_value(p, alpha);

    tracing::debug!(statistic, p_value = p, skewness_z, kurtosis_z, "normality test");

    let finding = match conclusion {
        Conclusion::RejectNull => "reject the null hypothesis. The data do not follow a normal distribution.",
        Conclusion::AcceptNull => "accept the null hypothesis. The data are consistent with a normal distribution.",
    };

    Ok(HypothesisTestResult::Normality {
        summary: TestSummary {
            statistic,
            p_value: p,
            critical_value: critical,
            degrees_of_freedom: None,
            sample_size: values.len(),
            confidence_interval: None,
            alpha,
            alternative: Alternative::TwoSided,
            conclusion,
            interpretation: format!("At significance level α={}, {}", alpha, finding),
        },
        sample_mean: mean(&values),
        sample_std_dev: sample_std_dev(&values),
        skewness: skew,
        excess_kurtosis: kurt,
        skewness_z,
        kurtosis_z,
        skewness_p_value,
        kurtosis_p_value,
    })
}

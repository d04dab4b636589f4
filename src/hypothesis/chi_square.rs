use super::{
    critical_value, p_value, Alternative, Conclusion, HypothesisTestResult, TestDistribution,
    TestSummary,
};
use crate::error::{check_alpha, Result, StatError};

/// Pearson chi-square goodness-of-fit test of observed against expected
/// counts, df = bins - 1.
///
/// No degree of freedom is subtracted for parameters estimated from the
/// sample when building `expected`.
pub fn chi_square_goodness_of_fit(
    observed: &[f64],
    expected: &[f64],
    alpha: f64,
) -> Result<HypothesisTestResult> {
    check_alpha(alpha)?;
    if observed.len() != expected.len() {
        return Err(StatError::InvalidParameter(format!(
            "observed and expected counts differ in length ({} vs {})",
            observed.len(),
            expected.len()
        )));
    }
    if observed.len() < 2 {
        return Err(StatError::InvalidParameter(format!(
            "chi-square test needs at least 2 bins, got {}",
            observed.len()
        )));
    }
    if let Some(e) = expected.iter().find(|e| !(e.is_finite() && **e > 0.0)) {
        return Err(StatError::InvalidParameter(format!(
            "expected counts must be positive, got {}",
            e
        )));
    }
    if let Some(o) = observed.iter().find(|o| !(o.is_finite() && **o >= 0.0)) {
        return Err(StatError::InvalidParameter(format!(
            "observed counts must be non-negative, got {}",
            o
        )));
    }

    let statistic: f64 = observed
        .iter()
        .zip(expected)
        .map(|(o, e)| (o - e) * (o - e) / e)
        .sum();
    let df = (observed.len() - 1) as f64;

    // Upper tail only: large statistics are evidence against the fit.
    let distribution = TestDistribution::ChiSquare(df);
    let p = p_value(statistic, distribution, Alternative::Greater);
    let critical = critical_value(alpha, distribution, Alternative::Greater);
    let conclusion = Conclusion::from_p_value(p, alpha);

    tracing::debug!(statistic, p_value = p, df, "chi-square goodness of fit");

    let finding = match conclusion {
        Conclusion::RejectNull => "reject the null hypothesis. The data do not follow the expected distribution.",
        Conclusion::AcceptNull => "accept the null hypothesis. The data are consistent with the expected distribution.",
    };

    Ok(HypothesisTestResult::ChiSquare {
        summary: TestSummary {
            statistic,
            p_value: p,
            critical_value: critical,
            degrees_of_freedom: Some(df),
            sample_size: observed.iter().sum::<f64>().round() as usize,
            confidence_interval: None,
            alpha,
            alternative: Alternative::Greater,
            conclusion,
            interpretation: format!("At significance level α={}, {}", alpha, finding),
        },
        observed_counts: observed.to_vec(),
        expected_counts: expected.to_vec(),
    })
}

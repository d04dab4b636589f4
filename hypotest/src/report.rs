use std::fmt::Write;

use anyhow::Result;
use statkit::{EstimationResult, HypothesisTestResult, Summary};

use crate::config::Config;
use crate::runner::Outcome;

pub fn to_json(outcome: &Outcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Plain-text report of a run.
pub fn render_report(outcome: &Outcome, config: &Config) -> Result<String> {
    let mut out = String::new();
    match outcome {
        Outcome::Summary(summary) => write_summary(&mut out, summary)?,
        Outcome::Estimate(estimation) => write_estimation(&mut out, estimation, config)?,
        Outcome::Test(result) => write_test(&mut out, result, config)?,
    }
    Ok(out)
}

/// Writes `report` to `path`, replacing the file unless `append` is set.
pub fn write_report(path: &str, report: &str, append: bool) -> Result<()> {
    if append {
        dataio::append_report(path, report)?;
    } else {
        dataio::write_file(path, report)?;
    }
    tracing::info!("Report written to {}", path);
    Ok(())
}

fn header(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)
}

fn write_summary(out: &mut String, summary: &Summary) -> std::fmt::Result {
    header(out, "Descriptive Statistics")?;
    writeln!(out, "Observations: {}", summary.count)?;
    writeln!(out)?;
    writeln!(out, "  {:<18} {:>14} {:>14}", "", "x", "y")?;
    writeln!(out, "  {}", "-".repeat(48))?;

    let (x, y) = (&summary.x, &summary.y);
    axis_row(out, "Mean", Some(x.mean), Some(y.mean))?;
    axis_row(out, "Median", Some(x.median), Some(y.median))?;
    axis_row(out, "Std. deviation", Some(x.std_dev), Some(y.std_dev))?;
    axis_row(out, "Min", Some(x.min), Some(y.min))?;
    axis_row(out, "Max", Some(x.max), Some(y.max))?;
    axis_row(out, "Skewness", x.skewness, y.skewness)?;
    axis_row(out, "Excess kurtosis", x.excess_kurtosis, y.excess_kurtosis)?;

    writeln!(out)?;
    writeln!(
        out,
        "Correlation: {:.6} ({})",
        summary.correlation, summary.correlation_strength
    )
}

fn axis_row(out: &mut String, label: &str, x: Option<f64>, y: Option<f64>) -> std::fmt::Result {
    let cell = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{:.6}", v));
    writeln!(out, "  {:<18} {:>14} {:>14}", label, cell(x), cell(y))
}

fn write_estimation(out: &mut String, estimation: &EstimationResult, config: &Config) -> std::fmt::Result {
    header(out, "MLE/MoM Parameter Estimation")?;
    writeln!(out, "Distribution: {}", estimation.distribution)?;
    writeln!(out, "Axis: {}", config.axis)?;
    writeln!(out)?;
    writeln!(out, "  {:<10} {:>15} {:>15}", "Parameter", "MLE", "MoM")?;
    writeln!(out, "  {}", "-".repeat(42))?;
    for (name, mle) in &estimation.mle {
        let mom = estimation.mom.get(name).copied().unwrap_or(f64::NAN);
        writeln!(out, "  {:<10} {:>15.6} {:>15.6}", name, mle, mom)?;
    }
    writeln!(out)?;
    writeln!(out, "MLE formula:")?;
    writeln!(out, "{}", estimation.distribution.mle_formula())?;
    writeln!(out)?;
    writeln!(out, "MoM formula:")?;
    writeln!(out, "{}", estimation.distribution.mom_formula())?;
    if let Some(note) = &estimation.comparison {
        writeln!(out)?;
        writeln!(out, "{}", note)?;
    }
    Ok(())
}

fn write_test(out: &mut String, result: &HypothesisTestResult, config: &Config) -> std::fmt::Result {
    let s = result.summary();
    let title = result.kind().to_string();
    header(out, &title)?;

    writeln!(out, "Axis: {}", config.axis)?;
    writeln!(out, "Alternative: {}", s.alternative)?;
    writeln!(out, "Alpha: {:.4}", s.alpha)?;
    writeln!(out, "Sample size: {}", s.sample_size)?;
    writeln!(out)?;
    writeln!(out, "Statistic: {:.6}", s.statistic)?;
    writeln!(out, "p-value: {:.6}", s.p_value)?;
    writeln!(out, "Critical value: {:.6}", s.critical_value)?;
    if let Some(df) = s.degrees_of_freedom {
        writeln!(out, "Degrees of freedom: {}", df)?;
    }
    if let Some((lo, hi)) = s.confidence_interval {
        writeln!(out, "Confidence interval: [{:.6}, {:.6}]", lo, hi)?;
    }

    match result {
        HypothesisTestResult::ZTest { sample_mean, population_std_dev, .. } => {
            writeln!(out, "Sample mean: {:.6}", sample_mean)?;
            writeln!(out, "Known std. deviation: {:.6}", population_std_dev)?;
        }
        HypothesisTestResult::OneSampleT { sample_mean, sample_std_dev, .. } => {
            writeln!(out, "Sample mean: {:.6}", sample_mean)?;
            writeln!(out, "Sample std. deviation: {:.6}", sample_std_dev)?;
        }
        HypothesisTestResult::TwoSampleT { mean_difference, pooled_std_dev, group_means, sample_sizes, .. } => {
            writeln!(out, "Group means: {:.6} (n={}), {:.6} (n={})", group_means.0, sample_sizes.0, group_means.1, sample_sizes.1)?;
            writeln!(out, "Mean difference: {:.6}", mean_difference)?;
            writeln!(out, "Pooled std. deviation: {:.6}", pooled_std_dev)?;
        }
        HypothesisTestResult::ChiSquare { observed_counts, expected_counts, .. } => {
            writeln!(out)?;
            writeln!(out, "  {:>5} {:>12} {:>12}", "Bin", "Observed", "Expected")?;
            for (i, (o, e)) in observed_counts.iter().zip(expected_counts).enumerate() {
                writeln!(out, "  {:>5} {:>12.2} {:>12.4}", i + 1, o, e)?;
            }
        }
        HypothesisTestResult::Normality { skewness, excess_kurtosis, skewness_z, kurtosis_z, .. } => {
            writeln!(out, "Skewness: {:.6} (z = {:.4})", skewness, skewness_z)?;
            writeln!(out, "Excess kurtosis: {:.6} (z = {:.4})", excess_kurtosis, kurtosis_z)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Conclusion: {}", s.conclusion)?;
    writeln!(out, "{}", s.interpretation)
}

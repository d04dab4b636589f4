use anyhow::{Context, Result};
use serde::Serialize;
use statkit::{
    chi_square_from_sample, estimate, normality_test, one_sample_t_test, one_sample_z_test,
    summarize, two_sample_t_test, EstimationResult, HypothesisTestResult, Summary,
};

use crate::config::{Analysis, Config};
use crate::data::load_sample;

/// Whatever a run produced.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Summary(Summary),
    Estimate(EstimationResult),
    Test(HypothesisTestResult),
}

/// Loads the configured sample(s) and runs the selected analysis.
/// Expects a validated config.
pub fn run(config: &Config) -> Result<Outcome> {
    let data_file = config.data_file.as_deref().context("A data file is required")?;
    let sample = load_sample(data_file, config.values)?;

    let outcome = match config.test {
        Analysis::Summary => Outcome::Summary(summarize(&sample)?),
        Analysis::Estimate => Outcome::Estimate(estimate(&sample, config.axis, config.distribution)?),
        Analysis::ZTest => {
            let sd = config.known_sd.context("z-test requires --known-sd")?;
            Outcome::Test(one_sample_z_test(
                &sample,
                config.axis,
                config.null_mean,
                sd,
                config.alpha,
                config.alternative,
            )?)
        }
        Analysis::TTest => Outcome::Test(one_sample_t_test(
            &sample,
            config.axis,
            config.null_mean,
            config.alpha,
            config.alternative,
        )?),
        Analysis::TwoSampleT => {
            let second = config
                .second_file
                .as_deref()
                .context("two-sample-t requires --second-file")?;
            let other = load_sample(second, config.values)?;
            Outcome::Test(two_sample_t_test(
                &sample,
                &other,
                config.axis,
                config.alpha,
                config.alternative,
            )?)
        }
        Analysis::ChiSquare => Outcome::Test(chi_square_from_sample(
            &sample,
            config.axis,
            config.reference,
            config.alpha,
        )?),
        Analysis::Normality => Outcome::Test(normality_test(&sample, config.axis, config.alpha)?),
    };

    if let Outcome::Test(result) = &outcome {
        tracing::info!(
            "{}: statistic {:.4}, p-value {:.4}, {}",
            result.kind(),
            result.statistic(),
            result.p_value(),
            result.conclusion()
        );
    }

    Ok(outcome)
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Alternative, Conclusion};

/// Fields shared by every test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    pub statistic: f64,
    pub p_value: f64,
    pub critical_value: f64,
    pub degrees_of_freedom: Option<f64>,
    pub sample_size: usize,
    /// Absent for chi-square and the normality test.
    pub confidence_interval: Option<(f64, f64)>,
    pub alpha: f64,
    pub alternative: Alternative,
    pub conclusion: Conclusion,
    pub interpretation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestKind {
    ZTest,
    OneSampleT,
    TwoSampleT,
    ChiSquare,
    Normality,
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestKind::ZTest => "one-sample z-test",
            TestKind::OneSampleT => "one-sample t-test",
            TestKind::TwoSampleT => "two-sample t-test",
            TestKind::ChiSquare => "chi-square goodness-of-fit test",
            TestKind::Normality => "normality test",
        };
        write!(f, "{}", name)
    }
}

/// Result of one hypothesis test, one variant per kind of test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "test", rename_all = "kebab-case")]
pub enum HypothesisTestResult {
    ZTest {
        summary: TestSummary,
        sample_mean: f64,
        null_mean: f64,
        population_std_dev: f64,
    },
    OneSampleT {
        summary: TestSummary,
        sample_mean: f64,
        sample_std_dev: f64,
        null_mean: f64,
    },
    TwoSampleT {
        summary: TestSummary,
        mean_difference: f64,
        pooled_std_dev: f64,
        group_means: (f64, f64),
        sample_sizes: (usize, usize),
    },
    ChiSquare {
        summary: TestSummary,
        observed_counts: Vec<f64>,
        expected_counts: Vec<f64>,
    },
    Normality {
        summary: TestSummary,
        sample_mean: f64,
        sample_std_dev: f64,
        skewness: f64,
        excess_kurtosis: f64,
        skewness_z: f64,
        kurtosis_z: f64,
        skewness_p_value: f64,
        kurtosis_p_value: f64,
    },
}

impl HypothesisTestResult {
    pub fn kind(&self) -> TestKind {
        match self {
            HypothesisTestResult::ZTest { .. } => TestKind::ZTest,
            HypothesisTestResult::OneSampleT { .. } => TestKind::OneSampleT,
            HypothesisTestResult::TwoSampleT { .. } => TestKind::TwoSampleT,
            HypothesisTestResult::ChiSquare { .. } => TestKind::ChiSquare,
            HypothesisTestResult::Normality { .. } => TestKind::Normality,
        }
    }

    pub fn summary(&self) -> &TestSummary {
        match self {
            HypothesisTestResult::ZTest { summary, .. }
            | HypothesisTestResult::OneSampleT { summary, .. }
            | HypothesisTestResult::TwoSampleT { summary, .. }
            | HypothesisTestResult::ChiSquare { summary, .. }
            | HypothesisTestResult::Normality { summary, .. } => summary,
        }
    }

    pub fn statistic(&self) -> f64 {
        self.summary().statistic
    }

    pub fn p_value(&self) -> f64 {
        self.summary().p_value
    }

    pub fn conclusion(&self) -> Conclusion {
        self.summary().conclusion
    }

    pub fn is_significant(&self) -> bool {
        self.conclusion().is_rejection()
    }
}

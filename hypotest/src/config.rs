use std::path::Path;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use statkit::{Alternative, Axis, Distribution, ExpectedDistribution};

/// Analysis selected on the command line or in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Analysis {
    #[default]
    Summary,
    Estimate,
    ZTest,
    TTest,
    TwoSampleT,
    ChiSquare,
    Normality,
}

/// Configuration for a hypotest run
#[derive(Debug, Clone, Deserialize, Parser)]
#[command(name = "hypotest")]
#[command(about = "Descriptive statistics, parameter estimation and hypothesis tests on paired samples")]
#[serde(default)]
pub struct Config {
    /// Analysis to run
    #[arg(long, value_enum, default_value_t = Analysis::Summary)]
    pub test: Analysis,

    /// Sample file, one `x y` pair per line
    #[arg(value_name = "DATA_FILE")]
    pub data_file: Option<String>,

    /// Second sample file (two-sample-t only)
    #[arg(long)]
    pub second_file: Option<String>,

    /// Read data files as single-column values placed on the y axis
    #[arg(long)]
    pub values: bool,

    /// Axis tested: x or y
    #[arg(long, default_value = "y")]
    pub axis: Axis,

    /// Significance level in (0, 1)
    #[arg(long, default_value_t = 0.05)]
    pub alpha: f64,

    /// Hypothesized mean for the z- and t-tests
    #[arg(long, default_value_t = 0.0)]
    pub null_mean: f64,

    /// Known population standard deviation (z-test only)
    #[arg(long)]
    pub known_sd: Option<f64>,

    /// two-sided | less | greater (or two-tailed | left-tailed | right-tailed)
    #[arg(long, default_value = "two-sided")]
    pub alternative: Alternative,

    /// Distribution family for estimate: normal, exponential or poisson
    #[arg(long, default_value = "normal")]
    pub distribution: Distribution,

    /// Reference distribution for chi-square: uniform or normal
    #[arg(long, default_value = "uniform")]
    pub reference: ExpectedDistribution,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the report to this file
    #[arg(long)]
    pub output: Option<String>,

    /// Append to the output file instead of replacing it
    #[arg(long)]
    pub append: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    #[serde(skip)]
    pub config: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            test: Analysis::Summary,
            data_file: None,
            second_file: None,
            values: false,
            axis: Axis::Y,
            alpha: 0.05,
            null_mean: 0.0,
            known_sd: None,
            alternative: Alternative::TwoSided,
            distribution: Distribution::Normal,
            reference: ExpectedDistribution::Uniform,
            json: false,
            output: None,
            append: false,
            verbose: false,
            config: None,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            anyhow::bail!("Alpha must be in range (0, 1), got {}", self.alpha);
        }

        match &self.data_file {
            None => anyhow::bail!("A data file is required"),
            Some(path) if !Path::new(path).exists() => {
                anyhow::bail!("Data file not found: {}", path)
            }
            Some(_) => {}
        }

        if self.test == Analysis::ZTest {
            match self.known_sd {
                None => anyhow::bail!("z-test requires --known-sd"),
                Some(sd) if sd <= 0.0 => {
                    anyhow::bail!("Known standard deviation must be positive, got {}", sd)
                }
                Some(_) => {}
            }
        }

        if self.test == Analysis::TwoSampleT {
            match &self.second_file {
                None => anyhow::bail!("two-sample-t requires --second-file"),
                Some(path) if !Path::new(path).exists() => {
                    anyhow::bail!("Second data file not found: {}", path)
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Replaces the parsed flags with the `--config` file, if one was given.
    /// `--json`, `--verbose`, `--output` and `--append` given on the command
    /// line still apply.
    pub fn resolve(self) -> Result<Self> {
        let Some(path) = self.config.clone() else {
            return Ok(self);
        };
        let mut loaded = Self::from_file(&path)
            .map_err(|e| anyhow::anyhow!("Cannot load config {}: {}", path, e))?;
        loaded.json |= self.json;
        loaded.verbose |= self.verbose;
        loaded.append |= self.append;
        if self.output.is_some() {
            loaded.output = self.output;
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(path: &str) -> Config {
        Config {
            data_file: Some(path.to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_config_validation() {
        let data = NamedTempFile::new().unwrap();
        let path = data.path().to_str().unwrap();
        let mut config = config_for(path);

        assert!(config.validate().is_ok());

        config.alpha = 1.0;
        assert!(config.validate().is_err());

        config.alpha = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_inputs() {
        let data = NamedTempFile::new().unwrap();
        let path = data.path().to_str().unwrap();

        assert!(Config::default().validate().is_err());
        assert!(config_for("/nonexistent/sample.txt").validate().is_err());

        let mut z = config_for(path);
        z.test = Analysis::ZTest;
        assert!(z.validate().is_err());
        z.known_sd = Some(2.0);
        assert!(z.validate().is_ok());

        let mut two = config_for(path);
        two.test = Analysis::TwoSampleT;
        assert!(two.validate().is_err());
        two.second_file = Some(path.to_string());
        assert!(two.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "test = \"t-test\"").unwrap();
        writeln!(file, "data_file = \"sample.txt\"").unwrap();
        writeln!(file, "alpha = 0.01").unwrap();
        writeln!(file, "alternative = \"right-tailed\"").unwrap();
        writeln!(file, "axis = \"x\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.test, Analysis::TTest);
        assert_eq!(config.alpha, 0.01);
        assert_eq!(config.alternative, Alternative::Greater);
        assert_eq!(config.axis, Axis::X);
        // unspecified fields fall back to defaults
        assert_eq!(config.distribution, Distribution::Normal);
        assert!(!config.json);
    }

    #[test]
    fn test_resolve_keeps_output_flags() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "test = \"normality\"").unwrap();
        writeln!(file, "output = \"from_file.txt\"").unwrap();

        let flags = Config::try_parse_from([
            "hypotest",
            "--config",
            file.path().to_str().unwrap(),
            "--output",
            "report.txt",
            "--append",
            "--json",
        ])
        .unwrap();
        let config = flags.resolve().unwrap();
        assert_eq!(config.test, Analysis::Normality);
        assert_eq!(config.output.as_deref(), Some("report.txt"));
        assert!(config.append);
        assert!(config.json);

        let flags = Config::try_parse_from(["hypotest", "--config", file.path().to_str().unwrap()])
            .unwrap();
        let config = flags.resolve().unwrap();
        assert_eq!(config.output.as_deref(), Some("from_file.txt"));
        assert!(!config.append);
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "hypotest",
            "--test",
            "z-test",
            "--known-sd",
            "2",
            "--null-mean",
            "5",
            "--alternative",
            "left-tailed",
            "data.txt",
        ])
        .unwrap();
        assert_eq!(config.test, Analysis::ZTest);
        assert_eq!(config.known_sd, Some(2.0));
        assert_eq!(config.alternative, Alternative::Less);
        assert_eq!(config.data_file.as_deref(), Some("data.txt"));
    }
}

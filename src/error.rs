use thiserror::Error;

/// Errors raised by the engine before any computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    #[error("sample too small: {test} needs at least {required} observations, got {actual}")]
    SampleTooSmall {
        test: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unsupported distribution: {0}")]
    UnsupportedDistribution(String),
}

pub type Result<T> = std::result::Result<T, StatError>;

/// Fails unless `alpha` lies strictly inside (0, 1).
pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(StatError::InvalidParameter(format!(
            "significance level must be in (0, 1), got {}",
            alpha
        )))
    }
}

pub(crate) fn check_sample_size(test: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(StatError::SampleTooSmall {
            test,
            required,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(StatError::InvalidParameter(format!(
            "non-finite value {} at position {}",
            values[i], i
        ))),
        None => Ok(()),
    }
}

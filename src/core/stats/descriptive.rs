//! Descriptive statistics over `f64` slices.
//!
//! None of these functions reorder or modify their input; anything that
//! needs sorted data works on a copy.

// ============================================================================
// Location
// ============================================================================

/// Arithmetic mean. Returns 0 for an empty slice.
pub fn mean(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    x.iter().sum::<f64>() / x.len() as f64
}

/// Median of the values; the average of the two middle elements for even n.
pub fn median(x: &[f64]) -> f64 {
    if x.is_empty() {
        return f64::NAN;
    }
    let sorted = sorted_copy(x);
    let n = sorted.len();
    if n % 2 == 0 {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    } else {
        sorted[n / 2]
    }
}

pub fn find_min_max(x: &[f64]) -> (f64, f64) {
    x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}

fn sorted_copy(x: &[f64]) -> Vec<f64> {
    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

// ============================================================================
// Spread
// ============================================================================

fn sum_squared_deviations(x: &[f64]) -> f64 {
    let m = mean(x);
    x.iter().map(|&v| (v - m) * (v - m)).sum()
}

/// Sample variance (n - 1 denominator). Returns 0 for n <= 1.
pub fn sample_variance(x: &[f64]) -> f64 {
    if x.len() <= 1 {
        return 0.0;
    }
    sum_squared_deviations(x) / (x.len() - 1) as f64
}

/// Sample standard deviation (n - 1 denominator). Returns 0 for n <= 1.
pub fn sample_std_dev(x: &[f64]) -> f64 {
    sample_variance(x).sqrt()
}

/// Population variance (n denominator). Returns 0 for an empty slice.
pub fn population_variance(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    sum_squared_deviations(x) / x.len() as f64
}

pub fn population_std_dev(x: &[f64]) -> f64 {
    population_variance(x).sqrt()
}

// Rounding in the mean leaves a constant sample with a residual spread of a
// few ulps of |mean|; anything below this fraction of |mean| counts as none.
const RELATIVE_SPREAD_FLOOR: f64 = 1e-12;

/// True when the values are empty or constant up to rounding.
pub fn has_zero_spread(x: &[f64]) -> bool {
    x.is_empty() || population_std_dev(x) <= RELATIVE_SPREAD_FLOOR * mean(x).abs()
}

// ============================================================================
// Shape (population moments)
// ============================================================================

// Mean of ((x - mean) / sigma_pop)^k; NaN when the sample has no spread.
fn standardized_moment(x: &[f64], k: i32) -> f64 {
    if has_zero_spread(x) {
        return f64::NAN;
    }
    let sd = population_std_dev(x);
    let m = mean(x);
    x.iter().map(|&v| ((v - m) / sd).powi(k)).sum::<f64>() / x.len() as f64
}

/// Skewness, Σ((x - x̄)/σ)³ / n with the population σ.
pub fn skewness(x: &[f64]) -> f64 {
    standardized_moment(x, 3)
}

/// Excess kurtosis, Σ((x - x̄)/σ)⁴ / n - 3 with the population σ.
pub fn excess_kurtosis(x: &[f64]) -> f64 {
    standardized_moment(x, 4) - 3.0
}

// ============================================================================
// Association
// ============================================================================

/// Pearson correlation of paired values. Returns 0 when the slices differ
/// in length, hold fewer than two pairs, or either side has zero spread
/// (see [`has_zero_spread`]).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    if n != y.len() || n < 2 || has_zero_spread(x) || has_zero_spread(y) {
        return 0.0;
    }

    let mx = mean(x);
    let my = mean(y);

    let (sxy, sxx, syy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sxy, sxx, syy), (&a, &b)| {
        let dx = a - mx;
        let dy = b - my;
        (sxy + dx * dy, sxx + dx * dx, syy + dy * dy)
    });

    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

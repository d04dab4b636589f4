//! Critical values: upper-tail quantiles found by bisection over a CDF.
//!
//! Every function returns the value `c` with `CDF(c) = 1 - alpha`, i.e. the
//! point leaving `alpha` in the upper tail. Two-sided callers pass `alpha / 2`.

use crate::distributions::{chi_square_cdf, f_cdf, normal_cdf, t_cdf};

/// Bisection stops once the bracket is narrower than this.
pub const BISECTION_TOLERANCE: f64 = 1e-4;

// Bound on bracket doubling; 2^64 times any starting bound exceeds every
// quantile reachable in f64.
const MAX_EXPANSIONS: usize = 64;

// Bound on halvings. Far-out quantiles sit where adjacent f64 values are
// wider apart than the tolerance, so the width test alone may never pass.
const MAX_BISECTIONS: usize = 200;

// Tabulated upper-tail standard normal quantiles.
const Z_SHORTCUTS: [(f64, f64); 4] = [
    (0.025, 1.96),
    (0.05, 1.645),
    (0.01, 2.326),
    (0.005, 2.576),
];

/// Finds `c` in `[lo, hi]` with `cdf(c) ≈ 1 - alpha`.
///
/// If the upper bound does not reach the target probability the bracket is
/// widened by doubling `hi` (a bounded number of times), so heavy-tailed
/// cases such as t with one degree of freedom still converge.
pub fn upper_quantile_bisect<F>(cdf: F, alpha: f64, mut lo: f64, mut hi: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    if !(alpha > 0.0 && alpha < 1.0) || lo >= hi {
        return f64::NAN;
    }

    let target = 1.0 - alpha;

    let mut expansions = 0;
    while cdf(hi) < target && expansions < MAX_EXPANSIONS {
        let width = hi - lo;
        lo = hi;
        hi += 2.0 * width.max(1.0);
        expansions += 1;
    }

    let mut mid = 0.5 * (lo + hi);
    for _ in 0..MAX_BISECTIONS {
        if hi - lo <= BISECTION_TOLERANCE {
            break;
        }
        mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if cdf(mid) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    mid
}

// ============================================================================
// z
// ============================================================================

pub fn z_critical(alpha: f64) -> f64 {
    if let Some(&(_, z)) = Z_SHORTCUTS.iter().find(|(a, _)| (a - alpha).abs() < 1e-12) {
        return z;
    }
    upper_quantile_bisect(normal_cdf, alpha, -6.0, 6.0)
}

// ============================================================================
// t
// ============================================================================

pub fn t_critical(alpha: f64, df: f64) -> f64 {
    if df <= 0.0 {
        return f64::NAN;
    }
    upper_quantile_bisect(|t| t_cdf(t, df), alpha, -6.0, 6.0)
}

// ============================================================================
// Chi-square
// ============================================================================

pub fn chi_square_critical(alpha: f64, df: f64) -> f64 {
    if df <= 0.0 {
        return f64::NAN;
    }
    upper_quantile_bisect(|x| chi_square_cdf(x, df), alpha, 0.0, 100.0)
}

// ============================================================================
// F
// ============================================================================

pub fn f_critical(alpha: f64, df1: f64, df2: f64) -> f64 {
    if df1 <= 0.0 || df2 <= 0.0 {
        return f64::NAN;
    }
    upper_quantile_bisect(|f| f_cdf(f, df1, df2), alpha, 0.0, 100.0)
}

//! Welch's Two-Sample t-Test
//!
//! Unequal-variance (Welch) t-test for a difference in means, two-sided.
//! Degrees of freedom use the Welch-Satterthwaite approximation; the
//! p-value comes from the Student's t distribution.

use crate::TestError;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Result of a two-sample t-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// The t statistic
    pub statistic: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub df: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

/// Welch's unequal-variance t-test comparing the means of two groups.
///
/// Returns a two-sided p-value. Both groups need at least 2 finite
/// observations. When both groups have zero variance the statistic
/// degenerates; the p-value is then 1 for equal means and 0 otherwise.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<TTestResult, TestError> {
    // Validate inputs
    if a.len() < 2 {
        return Err(TestError::NotEnoughObservations { got: a.len() });
    }
    if b.len() < 2 {
        return Err(TestError::NotEnoughObservations { got: b.len() });
    }
    if a.iter().chain(b.iter()).any(|x| !x.is_finite()) {
        return Err(TestError::NonFiniteObservation);
    }

    let na = a.len() as f64;
    let nb = b.len() as f64;
    let mean_a = mean(a);
    let mean_b = mean(b);
    let var_a = sample_variance(a, mean_a);
    let var_b = sample_variance(b, mean_b);

    let se_a = var_a / na;
    let se_b = var_b / nb;
    let se = (se_a + se_b).sqrt();

    // Both groups constant: the statistic is undefined, take the limit
    if se == 0.0 {
        let p_value = if mean_a == mean_b { 1.0 } else { 0.0 };
        return Ok(TTestResult {
            statistic: if mean_a == mean_b {
                0.0
            } else if mean_a > mean_b {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            },
            df: na + nb - 2.0,
            p_value,
        });
    }

    let statistic = (mean_a - mean_b) / se;

    // Welch-Satterthwaite approximation
    let df = (se_a + se_b).powi(2)
        / (se_a.powi(2) / (na - 1.0) + se_b.powi(2) / (nb - 1.0));

    // StudentsT::new only fails for non-positive df, which the guards above
    // rule out; fall back to the degenerate p-value if it ever does.
    let p_value = match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(statistic.abs()))).clamp(0.0, 1.0),
        Err(_) => 1.0,
    };

    Ok(TTestResult {
        statistic,
        df,
        p_value,
    })
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn sample_variance(xs: &[f64], mean: f64) -> f64 {
    xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (xs.len() - 1) as f64
}

//! Report Data Structures

use chrono::{DateTime, Utc};
use powersim_core::PowerEstimate;
use serde::{Deserialize, Serialize};

/// Complete power-analysis report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerReport {
    /// Run metadata
    pub meta: ReportMeta,
    /// One curve per sweep
    pub curves: Vec<PowerCurve>,
}

/// Report metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Crate version that produced the report
    pub version: String,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
    /// Base seed used for the sweeps
    pub seed: u64,
    /// Significance threshold
    pub alpha: f64,
    /// Replicates per scenario
    pub replicates: usize,
}

impl ReportMeta {
    /// Metadata stamped with the current time and this crate's version
    pub fn new(seed: u64, alpha: f64, replicates: usize) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            seed,
            alpha,
            replicates,
        }
    }
}

/// One power curve: power against the scenario parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCurve {
    /// Human-readable curve label (chart caption)
    pub label: String,
    /// Scenario parameter name (chart x-axis label)
    pub param_name: String,
    /// Points in scenario enumeration order
    pub points: Vec<PowerPoint>,
}

/// One point on a power curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerPoint {
    /// Scenario parameter value
    pub param: f64,
    /// Estimated power, in [0, 1]
    pub power: f64,
    /// Significant trial count
    pub significant: usize,
    /// Total trial count
    pub trials: usize,
}

impl PowerCurve {
    /// Build a curve from the estimator's output, keeping its order
    pub fn from_estimates(
        label: impl Into<String>,
        param_name: impl Into<String>,
        estimates: &[PowerEstimate],
    ) -> Self {
        Self {
            label: label.into(),
            param_name: param_name.into(),
            points: estimates
                .iter()
                .map(|e| PowerPoint {
                    param: e.param,
                    power: e.power,
                    significant: e.significant,
                    trials: e.trials,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_from_estimates() {
        let estimates = vec![
            PowerEstimate {
                param: 0.0,
                power: 0.05,
                significant: 25,
                trials: 500,
            },
            PowerEstimate {
                param: 2.0,
                power: 0.97,
                significant: 485,
                trials: 500,
            },
        ];

        let curve = PowerCurve::from_estimates("t-test power", "effect size d", &estimates);

        assert_eq!(curve.points.len(), 2);
        assert_eq!(curve.points[0].param, 0.0);
        assert_eq!(curve.points[1].significant, 485);
        assert_eq!(curve.label, "t-test power");
    }

    #[test]
    fn test_meta_carries_crate_version() {
        let meta = ReportMeta::new(42, 0.05, 500);
        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(meta.seed, 42);
    }
}

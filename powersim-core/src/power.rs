//! Power Estimator
//!
//! Folds a sweep's trial table into one power estimate per scenario: the
//! fraction of that scenario's trials whose p-value fell below the
//! significance threshold.

use crate::sweep::SweepTable;
use serde::{Deserialize, Serialize};

/// Estimated power for one scenario parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerEstimate {
    /// Scenario parameter value
    pub param: f64,
    /// Fraction of trials with p-value below the threshold, in [0, 1]
    pub power: f64,
    /// Number of significant trials
    pub significant: usize,
    /// Total trials for this scenario
    pub trials: usize,
}

/// Group trials by scenario parameter and compute the significant fraction.
///
/// Scenarios appear in first-appearance order, which for driver-produced
/// tables equals grid order. A scenario only appears if it has trials, so
/// every estimate divides by a non-zero count.
pub fn estimate_power(table: &SweepTable, alpha: f64) -> Vec<PowerEstimate> {
    let mut groups: Vec<(f64, usize, usize)> = Vec::new();

    for record in table.records() {
        let hit = record.p_value < alpha;
        match groups
            .iter_mut()
            .find(|(param, _, _)| param.to_bits() == record.param.to_bits())
        {
            Some((_, significant, trials)) => {
                *significant += hit as usize;
                *trials += 1;
            }
            None => groups.push((record.param, hit as usize, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(param, significant, trials)| PowerEstimate {
            param,
            power: significant as f64 / trials as f64,
            significant,
            trials,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ParamGrid;
    use crate::sweep::{SweepConfig, run_sweep};

    fn table_from_p_values(groups: &[(f64, &[f64])]) -> SweepTable {
        let grid =
            ParamGrid::from_values(groups.iter().map(|(param, _)| *param).collect()).unwrap();
        let config = SweepConfig {
            replicates: groups[0].1.len(),
            ..SweepConfig::default()
        };
        let mut iters: Vec<std::slice::Iter<f64>> =
            groups.iter().map(|(_, ps)| ps.iter()).collect();

        run_sweep(&grid, &config, |param, _| {
            let idx = groups
                .iter()
                .position(|(p, _)| p.to_bits() == param.to_bits())
                .unwrap();
            Ok(*iters[idx].next().unwrap())
        })
        .unwrap()
    }

    #[test]
    fn test_significant_fraction() {
        let table = table_from_p_values(&[
            (0.0, &[0.20, 0.80, 0.04, 0.50]),
            (2.0, &[0.01, 0.02, 0.03, 0.90]),
        ]);

        let estimates = estimate_power(&table, 0.05);

        assert_eq!(estimates.len(), 2);
        assert_eq!(estimates[0].param, 0.0);
        assert_eq!(estimates[0].significant, 1);
        assert_eq!(estimates[0].trials, 4);
        assert!((estimates[0].power - 0.25).abs() < f64::EPSILON);
        assert!((estimates[1].power - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_threshold_is_strict() {
        // p = alpha exactly is not significant
        let table = table_from_p_values(&[(1.0, &[0.05, 0.049])]);
        let estimates = estimate_power(&table, 0.05);

        assert_eq!(estimates[0].significant, 1);
    }

    #[test]
    fn test_grid_order_preserved() {
        let table = table_from_p_values(&[(2.0, &[0.5]), (0.0, &[0.5]), (1.0, &[0.5])]);
        let estimates = estimate_power(&table, 0.05);

        let params: Vec<f64> = estimates.iter().map(|e| e.param).collect();
        assert_eq!(params, vec![2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_power_bounds() {
        let table = table_from_p_values(&[(0.0, &[0.0, 1.0, 0.5, 0.04])]);
        for estimate in estimate_power(&table, 0.05) {
            assert!(estimate.power >= 0.0 && estimate.power <= 1.0);
        }
    }
}

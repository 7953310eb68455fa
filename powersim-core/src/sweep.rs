//! Simulation Driver
//!
//! Enumerates the cross-product of scenario parameters and replicate
//! indices, running generate-then-test for each trial and collecting one
//! p-value per trial.
//!
//! Enumeration order is fixed: outer loop over grid values in grid order,
//! inner loop over replicate indices `0..replicates`. The RNG is seeded
//! once before the sweep and never reseeded, so the trial table is
//! reproducible as a whole but individual trials depend on every draw
//! before them.

use crate::generate::{GenerateError, NormalShiftDesign, TwoProportionDesign};
use crate::grid::ParamGrid;
use crate::{DEFAULT_ALPHA, DEFAULT_REPLICATES, DEFAULT_SEED};
use powersim_stats::{TestError, fisher_exact, welch_t_test};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sweep configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Replicates per scenario
    pub replicates: usize,
    /// RNG seed for the whole sweep
    pub seed: u64,
    /// Significance threshold used downstream by the power estimator
    pub alpha: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            replicates: DEFAULT_REPLICATES,
            seed: DEFAULT_SEED,
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// One row of the trial table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Scenario parameter value
    pub param: f64,
    /// Replicate index within the scenario
    pub replicate: usize,
    /// Two-sided p-value for this trial
    pub p_value: f64,
}

/// Full trial table for one sweep, in enumeration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepTable {
    records: Vec<TrialRecord>,
}

impl SweepTable {
    /// All trial records in enumeration order
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Number of trials
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no trials
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Errors that abort a sweep
#[derive(Debug, Clone, Error)]
pub enum SweepError {
    /// Replicate count of zero
    #[error("replicate count must be at least 1")]
    NoReplicates,

    /// Dataset generation failed
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// Hypothesis test failed
    #[error(transparent)]
    Test(#[from] TestError),

    /// A simulation closure returned a p-value outside [0, 1]
    #[error("trial (param {param}, replicate {replicate}) produced p-value {value} outside [0, 1]")]
    PValueOutOfRange {
        /// Scenario parameter of the offending trial
        param: f64,
        /// Replicate index of the offending trial
        replicate: usize,
        /// The out-of-range value
        value: f64,
    },
}

/// Run a full Monte Carlo sweep.
///
/// `simulate` runs generate-then-test for one trial, drawing from the
/// sweep's shared RNG, and returns the trial's p-value. Any error aborts the
/// sweep immediately; no partial table is returned.
pub fn run_sweep<F>(
    grid: &ParamGrid,
    config: &SweepConfig,
    mut simulate: F,
) -> Result<SweepTable, SweepError>
where
    F: FnMut(f64, &mut StdRng) -> Result<f64, SweepError>,
{
    if config.replicates == 0 {
        return Err(SweepError::NoReplicates);
    }

    // One stream for the whole sweep; never reseeded per trial
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(grid.len() * config.replicates);

    for &param in grid.values() {
        for replicate in 0..config.replicates {
            let p_value = simulate(param, &mut rng)?;
            if !(0.0..=1.0).contains(&p_value) {
                return Err(SweepError::PValueOutOfRange {
                    param,
                    replicate,
                    value: p_value,
                });
            }
            records.push(TrialRecord {
                param,
                replicate,
                p_value,
            });
        }
    }

    Ok(SweepTable { records })
}

/// Sweep the continuous design: normal-shift generation followed by
/// Welch's t-test, with the grid values as effect sizes
pub fn run_mean_shift_sweep(
    grid: &ParamGrid,
    design: &NormalShiftDesign,
    config: &SweepConfig,
) -> Result<SweepTable, SweepError> {
    run_sweep(grid, config, |d, rng| {
        let data = design.generate(d, rng)?;
        let test = welch_t_test(data.group_a(), data.group_b())?;
        Ok(test.p_value)
    })
}

/// Sweep the binary design: two-proportion generation followed by Fisher's
/// exact test, with the grid values as group 2 event probabilities
pub fn run_proportion_sweep(
    grid: &ParamGrid,
    design: &TwoProportionDesign,
    config: &SweepConfig,
) -> Result<SweepTable, SweepError> {
    run_sweep(grid, config, |p2, rng| {
        let table = design.generate(p2, rng)?;
        let test = fisher_exact(&table)?;
        Ok(test.p_value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SweepConfig {
        SweepConfig {
            replicates: 20,
            seed: 7,
            alpha: 0.05,
        }
    }

    #[test]
    fn test_enumeration_order() {
        let grid = ParamGrid::from_values(vec![0.0, 1.0]).unwrap();
        let table = run_sweep(&grid, &small_config(), |_, _| Ok(0.5)).unwrap();

        assert_eq!(table.len(), 40);
        // Grid order outer, replicate index inner
        assert_eq!(table.records()[0].param, 0.0);
        assert_eq!(table.records()[0].replicate, 0);
        assert_eq!(table.records()[19].param, 0.0);
        assert_eq!(table.records()[19].replicate, 19);
        assert_eq!(table.records()[20].param, 1.0);
        assert_eq!(table.records()[20].replicate, 0);
    }

    #[test]
    fn test_deterministic_mean_shift_sweep() {
        let grid = ParamGrid::from_values(vec![0.0, 2.0]).unwrap();
        let design = NormalShiftDesign::default();
        let config = small_config();

        let first = run_mean_shift_sweep(&grid, &design, &config).unwrap();
        let second = run_mean_shift_sweep(&grid, &design, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_changes_table() {
        let grid = ParamGrid::from_values(vec![1.0]).unwrap();
        let design = NormalShiftDesign::default();

        let a = run_mean_shift_sweep(&grid, &design, &small_config()).unwrap();
        let b = run_mean_shift_sweep(
            &grid,
            &design,
            &SweepConfig {
                seed: 8,
                ..small_config()
            },
        )
        .unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_deterministic_proportion_sweep() {
        let grid = ParamGrid::from_values(vec![0.3, 0.95]).unwrap();
        let design = TwoProportionDesign::default();
        let config = small_config();

        let first = run_proportion_sweep(&grid, &design, &config).unwrap();
        let second = run_proportion_sweep(&grid, &design, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_p_values_within_bounds() {
        let grid = ParamGrid::from_values(vec![0.0, 1.0, 2.0]).unwrap();
        let design = NormalShiftDesign::default();
        let table = run_mean_shift_sweep(&grid, &design, &small_config()).unwrap();

        assert!(
            table
                .records()
                .iter()
                .all(|r| (0.0..=1.0).contains(&r.p_value))
        );
    }

    #[test]
    fn test_error_aborts_sweep() {
        let grid = ParamGrid::from_values(vec![0.0, 1.0]).unwrap();
        let mut calls = 0;
        let result = run_sweep(&grid, &small_config(), |param, _| {
            calls += 1;
            if param > 0.5 {
                Err(SweepError::Generate(GenerateError::EmptyGroup))
            } else {
                Ok(0.5)
            }
        });

        assert!(matches!(result, Err(SweepError::Generate(_))));
        // First failing trial stops the sweep
        assert_eq!(calls, 21);
    }

    #[test]
    fn test_out_of_range_p_value_rejected() {
        let grid = ParamGrid::from_values(vec![0.0]).unwrap();
        let result = run_sweep(&grid, &small_config(), |_, _| Ok(1.5));

        assert!(matches!(
            result,
            Err(SweepError::PValueOutOfRange { value, .. }) if value == 1.5
        ));
    }

    #[test]
    fn test_zero_replicates_rejected() {
        let grid = ParamGrid::from_values(vec![0.0]).unwrap();
        let config = SweepConfig {
            replicates: 0,
            ..SweepConfig::default()
        };

        let result = run_sweep(&grid, &config, |_, _| Ok(0.5));
        assert!(matches!(result, Err(SweepError::NoReplicates)));
    }
}

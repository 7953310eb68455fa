#![warn(missing_docs)]
//! PowerSim Core - Simulation Engine
//!
//! Runs Monte Carlo power sweeps: for each scenario parameter in a design
//! grid, repeatedly generate a synthetic dataset, apply a hypothesis test,
//! and record the p-value. The power estimator then turns the trial table
//! into one power estimate per scenario.
//!
//! Reproducibility contract: a sweep seeds a single RNG once and threads it
//! through every trial in enumeration order. The whole trial table is a pure
//! function of (grid, config); no trial can be replayed in isolation.

mod generate;
mod grid;
mod power;
mod sweep;

pub use generate::{GenerateError, NormalShiftDesign, TwoProportionDesign};
pub use grid::{GridError, ParamGrid};
pub use power::{PowerEstimate, estimate_power};
pub use sweep::{
    SweepConfig, SweepError, SweepTable, TrialRecord, run_mean_shift_sweep,
    run_proportion_sweep, run_sweep,
};

/// Default significance threshold
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default number of replicates per scenario
pub const DEFAULT_REPLICATES: usize = 500;

/// Default sweep seed
pub const DEFAULT_SEED: u64 = 42;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!((DEFAULT_ALPHA - 0.05).abs() < f64::EPSILON);
        assert_eq!(DEFAULT_REPLICATES, 500);
        assert_eq!(DEFAULT_SEED, 42);
    }
}

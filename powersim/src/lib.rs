#![warn(missing_docs)]
//! # PowerSim
//!
//! Monte Carlo power analysis for two experimental designs:
//! - **Continuous outcome**: two groups of normal measurements separated by
//!   an effect size `d`, tested with Welch's unequal-variance t-test
//! - **Binary outcome**: two groups of Bernoulli subjects with event
//!   probabilities `p1` and `p2`, tested with Fisher's exact test
//!
//! For each point on a design grid the sweep repeatedly generates a
//! synthetic dataset, applies the hypothesis test, and records the p-value;
//! power is the fraction of replicates significant at the chosen threshold.
//! A fixed seed makes the whole sweep exactly reproducible.
//!
//! ## Quick Start
//!
//! ```no_run
//! use powersim::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = PowerConfig::default();
//!     let report = run_analysis(&config)?;
//!     for curve in &report.curves {
//!         for point in &curve.points {
//!             println!("{} = {:.2}: power {:.3}", curve.param_name, point.param, point.power);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod analysis;
mod config;

pub use analysis::{run_analysis, write_artifacts};
pub use config::{
    DesignSection, GridSection, OutputSection, PowerConfig, RangeSpec, SweepSection,
    VisualsSection,
};

// Re-export engine types
pub use powersim_core::{
    DEFAULT_ALPHA, DEFAULT_REPLICATES, DEFAULT_SEED, GenerateError, GridError, NormalShiftDesign,
    ParamGrid, PowerEstimate, SweepConfig, SweepError, SweepTable, TrialRecord,
    TwoProportionDesign, estimate_power, run_mean_shift_sweep, run_proportion_sweep, run_sweep,
};

// Re-export test primitives
pub use powersim_stats::{
    ContingencyTable, FisherResult, GroupLabel, TTestResult, TestError, TwoSampleData,
    fisher_exact, welch_t_test,
};

// Re-export reporting
pub use powersim_report::{
    ChartError, ChartStyle, PowerCurve, PowerPoint, PowerReport, ReportMeta, generate_csv_report,
    generate_json_report, render_power_curve,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        NormalShiftDesign, ParamGrid, PowerConfig, PowerReport, SweepConfig, TwoProportionDesign,
        estimate_power, run_analysis, run_mean_shift_sweep, run_proportion_sweep,
    };
}

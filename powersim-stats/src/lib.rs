#![warn(missing_docs)]
//! PowerSim Statistical Tests
//!
//! Provides the hypothesis-test primitives used by the simulation sweeps:
//! - Welch's unequal-variance two-sample t-test (continuous outcomes)
//! - Fisher's exact test of independence for 2x2 tables (binary outcomes)
//! - The dataset carriers both tests consume

mod fisher;
mod samples;
mod welch;

pub use fisher::{FisherResult, fisher_exact};
pub use samples::{ContingencyTable, GroupLabel, TwoSampleData};
pub use welch::{TTestResult, welch_t_test};

use thiserror::Error;

/// Relative tolerance when comparing hypergeometric point probabilities
/// in the two-sided Fisher test (the standard convention)
pub const FISHER_RELATIVE_TOLERANCE: f64 = 1e-7;

/// Errors from dataset construction and hypothesis tests
#[derive(Debug, Clone, Error)]
pub enum TestError {
    /// A t-test group had fewer observations than the test can handle
    #[error("need at least 2 observations per group, got {got}")]
    NotEnoughObservations {
        /// Size of the offending group
        got: usize,
    },

    /// A group contained a NaN or infinite observation
    #[error("observations must be finite")]
    NonFiniteObservation,

    /// A contingency table with no counts at all
    #[error("contingency table must contain at least one count")]
    EmptyTable,
}

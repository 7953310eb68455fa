//! Dataset Generators
//!
//! Each design turns one scenario parameter plus an RNG handle into a fresh
//! synthetic dataset. Randomness comes only from the passed handle, so a
//! sweep's single seeded stream fully determines every dataset.

use powersim_stats::{ContingencyTable, TwoSampleData};
use rand::rngs::StdRng;
use rand_distr::{Binomial, Distribution, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from dataset generation
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    /// Group size of zero
    #[error("group size must be at least 1")]
    EmptyGroup,

    /// Effect size was NaN or infinite
    #[error("effect size must be finite, got {0}")]
    NonFiniteEffect(f64),

    /// Event probability outside the unit interval
    #[error("event probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Continuous two-group design: group A is standard normal, group B is
/// shifted by the effect size `d`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalShiftDesign {
    /// Observations per group
    pub group_size: usize,
}

impl Default for NormalShiftDesign {
    fn default() -> Self {
        Self { group_size: 10 }
    }
}

impl NormalShiftDesign {
    /// Draw one dataset for effect size `d`
    pub fn generate(&self, d: f64, rng: &mut StdRng) -> Result<TwoSampleData, GenerateError> {
        if self.group_size == 0 {
            return Err(GenerateError::EmptyGroup);
        }
        if !d.is_finite() {
            return Err(GenerateError::NonFiniteEffect(d));
        }

        // Unit-variance noise; `new` only fails for an invalid std dev
        let noise = Normal::new(0.0, 1.0).expect("unit normal is valid");

        let group_a: Vec<f64> = (0..self.group_size).map(|_| noise.sample(rng)).collect();
        let group_b: Vec<f64> = (0..self.group_size)
            .map(|_| d + noise.sample(rng))
            .collect();

        Ok(TwoSampleData::new(group_a, group_b))
    }
}

/// Binary two-group design: group 1 positives ~ Binomial(n, p1), group 2
/// positives ~ Binomial(n, p2) with `p2` the scenario parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoProportionDesign {
    /// Subjects per group
    pub group_size: u64,
    /// Baseline event probability for group 1
    pub p1: f64,
}

impl Default for TwoProportionDesign {
    fn default() -> Self {
        Self {
            group_size: 25,
            p1: 0.3,
        }
    }
}

impl TwoProportionDesign {
    /// Draw one 2x2 table for event probability `p2`
    pub fn generate(&self, p2: f64, rng: &mut StdRng) -> Result<ContingencyTable, GenerateError> {
        if self.group_size == 0 {
            return Err(GenerateError::EmptyGroup);
        }
        for p in [self.p1, p2] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GenerateError::InvalidProbability(p));
            }
        }

        let pos1 = Binomial::new(self.group_size, self.p1)
            .map_err(|_| GenerateError::InvalidProbability(self.p1))?
            .sample(rng);
        let pos2 = Binomial::new(self.group_size, p2)
            .map_err(|_| GenerateError::InvalidProbability(p2))?
            .sample(rng);

        // Table construction cannot fail: both groups are non-empty
        Ok(ContingencyTable::from_outcomes(
            [pos1, pos2],
            [self.group_size - pos1, self.group_size - pos2],
        )
        .expect("non-empty groups"))
    }
}

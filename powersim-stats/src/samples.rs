//! Dataset Carriers
//!
//! Typed containers for the two dataset shapes the sweeps produce:
//! a two-group sample of continuous measurements, and a 2x2 count table
//! for binary outcomes.

use crate::TestError;
use serde::{Deserialize, Serialize};

/// Group label for continuous two-sample data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupLabel {
    /// Reference group
    A,
    /// Shifted group
    B,
}

impl std::fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupLabel::A => write!(f, "A"),
            GroupLabel::B => write!(f, "B"),
        }
    }
}

/// Continuous measurements for two independent groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSampleData {
    group_a: Vec<f64>,
    group_b: Vec<f64>,
}

impl TwoSampleData {
    /// Build from the two groups' observations
    pub fn new(group_a: Vec<f64>, group_b: Vec<f64>) -> Self {
        Self { group_a, group_b }
    }

    /// Observations in group A
    pub fn group_a(&self) -> &[f64] {
        &self.group_a
    }

    /// Observations in group B
    pub fn group_b(&self) -> &[f64] {
        &self.group_b
    }

    /// Total number of observations across both groups
    pub fn len(&self) -> usize {
        self.group_a.len() + self.group_b.len()
    }

    /// Whether both groups are empty
    pub fn is_empty(&self) -> bool {
        self.group_a.is_empty() && self.group_b.is_empty()
    }

    /// Iterate observations in tabular (label, value) form, group A first
    pub fn iter_labeled(&self) -> impl Iterator<Item = (GroupLabel, f64)> + '_ {
        self.group_a
            .iter()
            .map(|&x| (GroupLabel::A, x))
            .chain(self.group_b.iter().map(|&x| (GroupLabel::B, x)))
    }
}

/// 2x2 contingency table: rows are outcome (positive, negative),
/// columns are group (1, 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    counts: [[u64; 2]; 2],
}

impl ContingencyTable {
    /// Build from a full count matrix. Rejects an all-zero table.
    pub fn new(counts: [[u64; 2]; 2]) -> Result<Self, TestError> {
        let table = Self { counts };
        if table.total() == 0 {
            return Err(TestError::EmptyTable);
        }
        Ok(table)
    }

    /// Build from per-group positive and negative counts
    pub fn from_outcomes(positives: [u64; 2], negatives: [u64; 2]) -> Result<Self, TestError> {
        Self::new([positives, negatives])
    }

    /// The raw count matrix
    pub fn counts(&self) -> &[[u64; 2]; 2] {
        &self.counts
    }

    /// Count for one cell (row = outcome, col = group)
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.counts[row][col]
    }

    /// Row sums: total positives, total negatives
    pub fn row_totals(&self) -> [u64; 2] {
        [
            self.counts[0][0] + self.counts[0][1],
            self.counts[1][0] + self.counts[1][1],
        ]
    }

    /// Column sums: group 1 size, group 2 size
    pub fn col_totals(&self) -> [u64; 2] {
        [
            self.counts[0][0] + self.counts[1][0],
            self.counts[0][1] + self.counts[1][1],
        ]
    }

    /// Grand total
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}

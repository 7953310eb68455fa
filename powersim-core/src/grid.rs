//! Design Grids
//!
//! An ordered list of scenario parameter values. Grid order is the sweep's
//! enumeration order, so it is part of the reproducibility contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered, immutable list of scenario parameter values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamGrid {
    values: Vec<f64>,
}

/// Errors from grid construction
#[derive(Debug, Clone, Error)]
pub enum GridError {
    /// No parameter values supplied
    #[error("parameter grid must contain at least one value")]
    Empty,

    /// A parameter value was NaN or infinite
    #[error("parameter values must be finite, got {0}")]
    NonFinite(f64),

    /// Linspace asked for zero steps
    #[error("linspace needs at least 1 step")]
    ZeroSteps,
}

impl ParamGrid {
    /// Build a grid from explicit parameter values, kept in the given order
    pub fn from_values(values: Vec<f64>) -> Result<Self, GridError> {
        if values.is_empty() {
            return Err(GridError::Empty);
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(GridError::NonFinite(bad));
        }
        Ok(Self { values })
    }

    /// Build an evenly spaced grid with inclusive endpoints.
    ///
    /// `steps = 1` yields just `start`.
    pub fn linspace(start: f64, stop: f64, steps: usize) -> Result<Self, GridError> {
        if steps == 0 {
            return Err(GridError::ZeroSteps);
        }
        if !start.is_finite() {
            return Err(GridError::NonFinite(start));
        }
        if !stop.is_finite() {
            return Err(GridError::NonFinite(stop));
        }

        let values = if steps == 1 {
            vec![start]
        } else {
            let span = stop - start;
            (0..steps)
                .map(|i| start + span * i as f64 / (steps - 1) as f64)
                .collect()
        };
        Ok(Self { values })
    }

    /// The parameter values in enumeration order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of scenarios in the grid
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty grids
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

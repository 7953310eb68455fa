#![warn(missing_docs)]
//! PowerSim Report - Reporting and Visualization
//!
//! Turns power estimates into output artifacts:
//! - JSON (machine-readable)
//! - CSV (spreadsheet-compatible)
//! - PNG power-curve charts with a target-power reference line

mod chart;
mod csv;
mod json;
mod report;

pub use chart::{ChartError, ChartStyle, render_power_curve};
pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use report::{PowerCurve, PowerPoint, PowerReport, ReportMeta};

/// Conventional target power marked on charts
pub const DEFAULT_TARGET_POWER: f64 = 0.8;

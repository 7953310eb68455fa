//! Power-Curve Charts
//!
//! Renders a power curve as a PNG: power against the scenario parameter,
//! with a horizontal reference line at the target power.

use crate::report::PowerCurve;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Chart dimensions and reference line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Target power marked with a reference line
    pub target_power: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            target_power: crate::DEFAULT_TARGET_POWER,
        }
    }
}

/// Errors from chart rendering
#[derive(Debug, Error)]
pub enum ChartError {
    /// Curve with no points
    #[error("cannot render an empty power curve")]
    EmptyCurve,

    /// Backend or drawing failure
    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// Render one power curve to a PNG file.
///
/// Only the (parameter, power) series and the reference line are
/// contractual; styling is cosmetic.
pub fn render_power_curve(
    curve: &PowerCurve,
    style: &ChartStyle,
    path: &Path,
) -> Result<(), ChartError> {
    if curve.points.is_empty() {
        return Err(ChartError::EmptyCurve);
    }

    let params: Vec<f64> = curve.points.iter().map(|p| p.param).collect();
    let x_min = params.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = params.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Pad the x range so endpoint markers stay visible
    let pad = if x_max > x_min {
        (x_max - x_min) * 0.05
    } else {
        0.5
    };
    let x_range = (x_min - pad)..(x_max + pad);

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&curve.label, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range.clone(), 0.0..1.05)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(curve.param_name.as_str())
        .y_desc("power")
        .draw()
        .map_err(render_err)?;

    // Target-power reference line
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![
                (x_range.start, style.target_power),
                (x_range.end, style.target_power),
            ],
            RED.mix(0.6),
        )))
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            curve.points.iter().map(|p| (p.param, p.power)),
            &BLUE,
        ))
        .map_err(render_err)?;

    chart
        .draw_series(
            curve
                .points
                .iter()
                .map(|p| Circle::new((p.param, p.power), 4, BLUE.filled())),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn render_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::PowerPoint;

    fn sample_curve() -> PowerCurve {
        PowerCurve {
            label: "welch power".to_string(),
            param_name: "effect size d".to_string(),
            points: vec![
                PowerPoint {
                    param: 0.0,
                    power: 0.05,
                    significant: 25,
                    trials: 500,
                },
                PowerPoint {
                    param: 1.0,
                    power: 0.56,
                    significant: 280,
                    trials: 500,
                },
                PowerPoint {
                    param: 2.0,
                    power: 0.98,
                    significant: 490,
                    trials: 500,
                },
            ],
        }
    }

    #[test]
    fn test_render_writes_file() {
        let path = std::env::temp_dir().join("powersim_chart_test.png");
        let _ = std::fs::remove_file(&path);

        render_power_curve(&sample_curve(), &ChartStyle::default(), &path).unwrap();

        let len = std::fs::metadata(&path).unwrap().len();
        assert!(len > 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_empty_curve_rejected() {
        let curve = PowerCurve {
            label: "empty".to_string(),
            param_name: "d".to_string(),
            points: vec![],
        };
        let path = std::env::temp_dir().join("powersim_chart_empty.png");

        let result = render_power_curve(&curve, &ChartStyle::default(), &path);
        assert!(matches!(result, Err(ChartError::EmptyCurve)));
    }

    #[test]
    fn test_single_point_curve() {
        let curve = PowerCurve {
            label: "single".to_string(),
            param_name: "p2".to_string(),
            points: vec![PowerPoint {
                param: 0.3,
                power: 0.04,
                significant: 20,
                trials: 500,
            }],
        };
        let path = std::env::temp_dir().join("powersim_chart_single.png");
        let _ = std::fs::remove_file(&path);

        render_power_curve(&curve, &ChartStyle::default(), &path).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}

//! End-to-End Analysis Runner
//!
//! Wires the configured grids through the two standard sweeps, estimates
//! power, and writes the configured artifacts. The continuous and binary
//! sweeps are independent: each gets its own seeded stream (base seed and
//! base seed + 1), so either can be reproduced without running the other.

use crate::config::PowerConfig;
use powersim_core::{
    NormalShiftDesign, ParamGrid, SweepConfig, TwoProportionDesign, estimate_power,
    run_mean_shift_sweep, run_proportion_sweep,
};
use powersim_report::{
    ChartStyle, PowerCurve, PowerReport, ReportMeta, generate_csv_report, generate_json_report,
    render_power_curve,
};
use std::path::PathBuf;

/// Run both standard power sweeps and emit the configured artifacts.
///
/// Returns the assembled report; artifacts land in the configured output
/// directory.
pub fn run_analysis(config: &PowerConfig) -> anyhow::Result<PowerReport> {
    config.validate()?;

    let sweep_config = SweepConfig {
        replicates: config.sweep.replicates,
        seed: config.sweep.seed,
        alpha: config.sweep.alpha,
    };

    // Continuous sweep: effect size d, Welch's t-test
    let effect_grid = ParamGrid::linspace(
        config.grid.effect_size.start,
        config.grid.effect_size.stop,
        config.grid.effect_size.steps,
    )?;
    let continuous_design = NormalShiftDesign {
        group_size: config.design.continuous_group_size,
    };
    let continuous_table = run_mean_shift_sweep(&effect_grid, &continuous_design, &sweep_config)?;
    let continuous_power = estimate_power(&continuous_table, sweep_config.alpha);

    // Binary sweep: event probability p2, Fisher's exact test.
    // Independently seeded so each sweep reproduces on its own.
    let proportion_grid = ParamGrid::linspace(
        config.grid.proportion.start,
        config.grid.proportion.stop,
        config.grid.proportion.steps,
    )?;
    let binary_design = TwoProportionDesign {
        group_size: config.design.binary_group_size,
        p1: config.design.baseline_rate,
    };
    let binary_sweep_config = SweepConfig {
        seed: sweep_config.seed.wrapping_add(1),
        ..sweep_config
    };
    let binary_table = run_proportion_sweep(&proportion_grid, &binary_design, &binary_sweep_config)?;
    let binary_power = estimate_power(&binary_table, sweep_config.alpha);

    let report = PowerReport {
        meta: ReportMeta::new(
            config.sweep.seed,
            config.sweep.alpha,
            config.sweep.replicates,
        ),
        curves: vec![
            PowerCurve::from_estimates("Welch t-test power", "effect size d", &continuous_power),
            PowerCurve::from_estimates(
                "Fisher exact test power",
                "group 2 event probability p2",
                &binary_power,
            ),
        ],
    };

    write_artifacts(&report, config)?;

    Ok(report)
}

/// Write the configured report artifacts, returning the paths written.
pub fn write_artifacts(report: &PowerReport, config: &PowerConfig) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if !(config.output.write_json || config.output.write_csv || config.output.write_charts) {
        return Ok(written);
    }

    let dir = PathBuf::from(&config.output.directory);
    std::fs::create_dir_all(&dir)?;

    if config.output.write_json {
        let path = dir.join("power_report.json");
        std::fs::write(&path, generate_json_report(report)?)?;
        written.push(path);
    }

    if config.output.write_csv {
        let path = dir.join("power_report.csv");
        std::fs::write(&path, generate_csv_report(report))?;
        written.push(path);
    }

    if config.output.write_charts {
        let style = ChartStyle {
            width: config.visuals.width,
            height: config.visuals.height,
            target_power: config.visuals.target_power,
        };
        for curve in &report.curves {
            let path = dir.join(format!("{}.png", slug(&curve.label)));
            render_power_curve(curve, &style, &path)?;
            written.push(path);
        }
    }

    Ok(written)
}

fn slug(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Welch t-test power"), "welch_t_test_power");
        assert_eq!(slug("Fisher exact test power"), "fisher_exact_test_power");
    }
}

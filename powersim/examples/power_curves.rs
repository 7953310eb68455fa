//! End-to-end demo: run both standard power sweeps and print the curves.
//!
//! Run with:
//! ```sh
//! cargo run --example power_curves
//! ```
//!
//! Writes power_report.json, power_report.csv, and one PNG per curve into
//! target/powersim (or whatever `powersim.toml` configures).

use powersim::prelude::*;

fn main() -> anyhow::Result<()> {
    let config = PowerConfig::discover().unwrap_or_default();
    let report = run_analysis(&config)?;

    for curve in &report.curves {
        println!("\n{}", curve.label);
        println!("{:>12}  {:>7}  {:>11}", curve.param_name, "power", "significant");
        for point in &curve.points {
            println!(
                "{:>12.3}  {:>7.3}  {:>6}/{}",
                point.param, point.power, point.significant, point.trials
            );
        }
    }

    println!(
        "\nseed {}, alpha {}, {} replicates per scenario",
        report.meta.seed, report.meta.alpha, report.meta.replicates
    );
    println!("artifacts in {}", config.output.directory);

    Ok(())
}

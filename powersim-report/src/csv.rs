//! CSV Output

use crate::report::PowerReport;
use std::fmt::Write;

/// Generate a CSV report with one row per power-curve point.
pub fn generate_csv_report(report: &PowerReport) -> String {
    let mut out = String::from("curve,param,power,significant,trials\n");

    for curve in &report.curves {
        for point in &curve.points {
            // Labels are plain identifiers; quote defensively anyway
            let _ = writeln!(
                out,
                "\"{}\",{},{},{},{}",
                curve.label.replace('"', "\"\""),
                point.param,
                point.power,
                point.significant,
                point.trials
            );
        }
    }

    out
}

//! JSON Output

use crate::report::PowerReport;

/// Generate a prettified JSON report.
///
/// Serializes the power-analysis report into machine-readable JSON.
pub fn generate_json_report(report: &PowerReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{PowerCurve, ReportMeta};

    #[test]
    fn test_json_round_trip() {
        let report = PowerReport {
            meta: ReportMeta::new(42, 0.05, 500),
            curves: vec![PowerCurve::from_estimates("welch", "d", &[])],
        };

        let json = generate_json_report(&report).unwrap();
        let parsed: PowerReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, report);
    }
}

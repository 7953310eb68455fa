//! Fisher's Exact Test
//!
//! Two-sided exact test of independence for a 2x2 contingency table.
//! With the margins fixed, the top-left cell follows a hypergeometric
//! distribution; the two-sided p-value sums the point probabilities of
//! every table no more probable than the observed one.

use crate::samples::ContingencyTable;
use crate::{FISHER_RELATIVE_TOLERANCE, TestError};
use serde::{Deserialize, Serialize};
use statrs::function::factorial::ln_factorial;

/// Result of Fisher's exact test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FisherResult {
    /// Sample odds ratio (ad / bc); infinite when bc = 0
    pub odds_ratio: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

/// Fisher's exact test of independence on a 2x2 table, two-sided.
///
/// A table with a zero row or column margin admits only one arrangement,
/// so its p-value is 1.
pub fn fisher_exact(table: &ContingencyTable) -> Result<FisherResult, TestError> {
    let a = table.get(0, 0);
    let b = table.get(0, 1);
    let c = table.get(1, 0);
    let d = table.get(1, 1);

    let [row1, _] = table.row_totals();
    let [col1, col2] = table.col_totals();
    let n = table.total();

    let odds_ratio = odds_ratio(a, b, c, d);

    // Degenerate margin: only one table is possible
    if row1 == 0 || row1 == n || col1 == 0 || col2 == 0 {
        return Ok(FisherResult {
            odds_ratio,
            p_value: 1.0,
        });
    }

    // Support of the top-left cell given the margins
    let k_min = row1.saturating_sub(col2);
    let k_max = row1.min(col1);

    let observed_ln_p = ln_hypergeom_pmf(a, row1, col1, n);
    let cutoff = observed_ln_p + FISHER_RELATIVE_TOLERANCE.ln_1p();

    let mut p_value = 0.0;
    for k in k_min..=k_max {
        let ln_p = ln_hypergeom_pmf(k, row1, col1, n);
        if ln_p <= cutoff {
            p_value += ln_p.exp();
        }
    }

    Ok(FisherResult {
        odds_ratio,
        p_value: p_value.clamp(0.0, 1.0),
    })
}

/// Log point probability of drawing `k` positives in group 1, with
/// `row1` total positives, `col1` in group 1, and `n` observations overall
fn ln_hypergeom_pmf(k: u64, row1: u64, col1: u64, n: u64) -> f64 {
    ln_choose(col1, k) + ln_choose(n - col1, row1 - k) - ln_choose(n, row1)
}

fn ln_choose(n: u64, k: u64) -> f64 {
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

fn odds_ratio(a: u64, b: u64, c: u64, d: u64) -> f64 {
    let num = (a * d) as f64;
    let den = (b * c) as f64;
    if den == 0.0 {
        if num == 0.0 { f64::NAN } else { f64::INFINITY }
    } else {
        num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(counts: [[u64; 2]; 2]) -> ContingencyTable {
        ContingencyTable::new(counts).unwrap()
    }

    #[test]
    fn test_tea_tasting() {
        // Fisher's lady-tasting-tea arrangement: two-sided p = 34/70
        let result = fisher_exact(&table([[3, 1], [1, 3]])).unwrap();
        assert!((result.p_value - 34.0 / 70.0).abs() < 1e-10);
        assert!((result.odds_ratio - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_separation() {
        // p = 2 / C(20, 10)
        let result = fisher_exact(&table([[10, 0], [0, 10]])).unwrap();
        assert!((result.p_value - 2.0 / 184_756.0).abs() < 1e-12);
        assert!(result.odds_ratio.is_infinite());
    }

    #[test]
    fn test_independent_table() {
        // Identical group rates carry no evidence against independence
        let result = fisher_exact(&table([[5, 5], [20, 20]])).unwrap();
        assert!((result.p_value - 1.0).abs() < 1e-9);
        assert!((result.odds_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_margin() {
        // No negatives at all: only one arrangement exists
        let result = fisher_exact(&table([[5, 5], [0, 0]])).unwrap();
        assert!((result.p_value - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_p_value_bounds() {
        for counts in [[[1, 7], [9, 2]], [[12, 1], [3, 14]], [[2, 2], [2, 2]]] {
            let result = fisher_exact(&table(counts)).unwrap();
            assert!(
                result.p_value >= 0.0 && result.p_value <= 1.0,
                "p = {} for {:?}",
                result.p_value,
                counts
            );
        }
    }
}

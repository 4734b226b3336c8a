//! Marginal tax rate lookup by province
//!
//! Combined federal + provincial rates for the 2024 tax year, modeled for
//! Ontario, British Columbia, and Alberta. Any other province name resolves
//! to the Ontario table — a deliberate simplification, not a correctness
//! guarantee.

use serde::{Deserialize, Serialize};

/// One step of a progressive rate table.
///
/// `rate` is a whole-number percent (24.15 means 24.15%). Thresholds within a
/// table are strictly increasing and start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub threshold: f64,
    pub rate: f64,
}

const fn bracket(threshold: f64, rate: f64) -> TaxBracket {
    TaxBracket { threshold, rate }
}

const ONTARIO: &[TaxBracket] = &[
    bracket(0.0, 20.05),
    bracket(50_197.0, 24.15),
    bracket(100_392.0, 31.48),
    bracket(155_625.0, 43.41),
    bracket(220_000.0, 46.16),
];

const BRITISH_COLUMBIA: &[TaxBracket] = &[
    bracket(0.0, 20.06),
    bracket(47_937.0, 22.70),
    bracket(50_197.0, 28.20),
    bracket(100_392.0, 35.53),
    bracket(155_625.0, 47.46),
    bracket(220_000.0, 50.21),
];

const ALBERTA: &[TaxBracket] = &[
    bracket(0.0, 25.00),
    bracket(50_197.0, 30.50),
    bracket(100_392.0, 36.83),
    bracket(155_625.0, 44.67),
    bracket(220_000.0, 47.42),
];

/// Resolve a province name to its bracket table.
///
/// Unknown provinces fall back to Ontario.
pub fn bracket_table(province: &str) -> &'static [TaxBracket] {
    match province {
        "Ontario" => ONTARIO,
        "British Columbia" => BRITISH_COLUMBIA,
        "Alberta" => ALBERTA,
        _ => ONTARIO,
    }
}

/// The marginal rate applied to the next dollar of `income` in `province`,
/// as a whole-number percent.
///
/// Scans thresholds from highest to lowest and returns the rate of the first
/// threshold not exceeding the income. Income below every threshold returns
/// the lowest bracket's rate; since the lowest threshold is zero this floor
/// only triggers for negative income, and it never panics.
pub fn marginal_tax_rate(province: &str, income: f64) -> f64 {
    let table = bracket_table(province);

    for bracket in table.iter().rev() {
        if income >= bracket.threshold {
            return bracket.rate;
        }
    }

    table[0].rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ontario_brackets() {
        assert_eq!(marginal_tax_rate("Ontario", 30_000.0), 20.05);
        assert_eq!(marginal_tax_rate("Ontario", 60_000.0), 24.15);
        assert_eq!(marginal_tax_rate("Ontario", 120_000.0), 31.48);
        assert_eq!(marginal_tax_rate("Ontario", 200_000.0), 43.41);
        assert_eq!(marginal_tax_rate("Ontario", 500_000.0), 46.16);
    }

    #[test]
    fn test_bc_and_alberta() {
        assert_eq!(marginal_tax_rate("British Columbia", 49_000.0), 22.70);
        assert_eq!(marginal_tax_rate("Alberta", 60_000.0), 30.50);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(marginal_tax_rate("Ontario", 50_197.0), 24.15);
        assert_eq!(marginal_tax_rate("Ontario", 50_196.99), 20.05);
    }

    #[test]
    fn test_unknown_province_falls_back_to_ontario() {
        assert_eq!(
            marginal_tax_rate("Nonexistent", 60_000.0),
            marginal_tax_rate("Ontario", 60_000.0)
        );
        assert_eq!(
            marginal_tax_rate("Quebec", 120_000.0),
            marginal_tax_rate("Ontario", 120_000.0)
        );
    }

    #[test]
    fn test_negative_income_floor() {
        // Below every threshold: the lowest bracket's rate, no panic
        assert_eq!(marginal_tax_rate("Ontario", -1.0), 20.05);
    }

    #[test]
    fn test_tables_strictly_increasing() {
        for province in ["Ontario", "British Columbia", "Alberta"] {
            let table = bracket_table(province);
            assert_eq!(table[0].threshold, 0.0);
            for pair in table.windows(2) {
                assert!(
                    pair[0].threshold < pair[1].threshold,
                    "{province} thresholds out of order"
                );
            }
        }
    }
}

//! CRA contribution-limit figures per user
//!
//! The derived rooms (`available_contribution_room`, `available_room`) are
//! recomputed from their addends whenever any addend changes — they are never
//! allowed to go stale in a stored record.

use serde::{Deserialize, Serialize};

/// 2024 RRSP dollar limit.
pub const RRSP_DOLLAR_LIMIT: f64 = 31_560.0;
/// 2024 TFSA annual contribution limit.
pub const TFSA_ANNUAL_LIMIT: f64 = 7_000.0;
/// 2024 cumulative TFSA room for someone eligible since 2009.
pub const TFSA_CUMULATIVE_ROOM: f64 = 95_000.0;
/// FHSA annual contribution limit.
pub const FHSA_ANNUAL_LIMIT: f64 = 8_000.0;
/// FHSA lifetime contribution limit.
pub const FHSA_LIFETIME_LIMIT: f64 = 40_000.0;

/// RRSP room figures for a tax year.
///
/// Contributions are tracked in two periods: March through December of the
/// tax year, and the first sixty days (to March 1) of the following year,
/// which the CRA attributes back to the prior tax year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RrspLimits {
    /// Deduction limit reported for the tax year.
    pub tax_year_contribution_room: f64,
    pub first_period_contributions: f64,
    pub second_period_contributions: f64,
    pub total_tax_year_contributions: f64,
    /// Unused room carried forward from prior years.
    pub unused_contributions: f64,
    /// Reduction from employer pension/DPSP participation.
    pub pension_adjustment: f64,
    /// Derived: `tax_year_contribution_room + unused_contributions - pension_adjustment`.
    pub available_contribution_room: f64,
}

impl RrspLimits {
    /// Recompute the derived room from its addends.
    pub fn recompute_available(&mut self) {
        self.available_contribution_room = self.tax_year_contribution_room
            + self.unused_contributions
            - self.pension_adjustment;
    }

    /// Record a contribution against the correct period bucket.
    ///
    /// `in_first_period` refers to the first sixty days of the calendar year,
    /// attributed to the prior tax year.
    pub fn record_contribution(&mut self, amount: f64, in_first_period: bool) {
        if in_first_period {
            self.first_period_contributions += amount;
        } else {
            self.second_period_contributions += amount;
        }
        self.total_tax_year_contributions =
            self.first_period_contributions + self.second_period_contributions;
    }
}

impl Default for RrspLimits {
    fn default() -> Self {
        RrspLimits {
            tax_year_contribution_room: RRSP_DOLLAR_LIMIT,
            first_period_contributions: 0.0,
            second_period_contributions: 0.0,
            total_tax_year_contributions: 0.0,
            unused_contributions: 0.0,
            pension_adjustment: 0.0,
            available_contribution_room: RRSP_DOLLAR_LIMIT,
        }
    }
}

/// TFSA room figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TfsaLimits {
    pub max_annual: f64,
    pub cumulative_room: f64,
    /// Room restored by withdrawals, available the following January.
    pub withdrawal_room: f64,
}

impl Default for TfsaLimits {
    fn default() -> Self {
        TfsaLimits {
            max_annual: TFSA_ANNUAL_LIMIT,
            cumulative_room: TFSA_CUMULATIVE_ROOM,
            withdrawal_room: 0.0,
        }
    }
}

/// FHSA room figures. Only present for users who opened an FHSA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FhsaLimits {
    pub annual_limit: f64,
    pub lifetime_limit: f64,
    pub total_contributed: f64,
    /// Derived: `min(annual_limit, lifetime_limit - total_contributed)`, floored at zero.
    pub available_room: f64,
}

impl FhsaLimits {
    /// Recompute the derived room from its addends.
    pub fn recompute_available(&mut self) {
        self.available_room = self
            .annual_limit
            .min(self.lifetime_limit - self.total_contributed)
            .max(0.0);
    }
}

impl Default for FhsaLimits {
    fn default() -> Self {
        FhsaLimits {
            annual_limit: FHSA_ANNUAL_LIMIT,
            lifetime_limit: FHSA_LIFETIME_LIMIT,
            total_contributed: 0.0,
            available_room: FHSA_ANNUAL_LIMIT,
        }
    }
}

/// The full set of CRA figures carried on a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContributionLimits {
    pub rrsp: RrspLimits,
    pub tfsa: TfsaLimits,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fhsa: Option<FhsaLimits>,
}

impl ContributionLimits {
    /// Recompute every derived room. Call after mutating any addend.
    pub fn recompute(&mut self) {
        self.rrsp.recompute_available();
        if let Some(fhsa) = &mut self.fhsa {
            fhsa.recompute_available();
        }
    }
}

//! Months-to-payoff solver for an amortizing loan
//!
//! Solves `payment = P * i / (1 - (1 + i)^-n)` for `n` with monthly periods.
//! Degenerate inputs come back as sentinel results rather than errors:
//! - no principal or no payment: [`PayoffResult::Immediate`]
//! - payment at or below the interest-only level: [`PayoffResult::Never`]

use crate::error::{require_amount, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Payment periods per year (monthly repayments)
pub const PERIODS_PER_YEAR: u32 = 12;

/// Point-in-time state of a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanState {
    /// Outstanding balance
    pub principal: f64,

    /// Annual interest rate as a percentage (6.5 = 6.5%)
    #[serde(alias = "rate")]
    pub annual_rate_percent: f64,

    /// Fixed repayment per month
    #[serde(alias = "payment")]
    pub periodic_payment: f64,
}

impl LoanState {
    pub fn new(principal: f64, annual_rate_percent: f64, periodic_payment: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            periodic_payment,
        }
    }

    /// Monthly periodic rate as a decimal
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / PERIODS_PER_YEAR as f64
    }

    /// Interest accruing in the first period
    pub fn interest_only_payment(&self) -> f64 {
        self.principal * self.periodic_rate()
    }

    pub fn validate(&self) -> Result<()> {
        require_amount("principal", self.principal)?;
        require_amount("annual rate", self.annual_rate_percent)?;
        require_amount("periodic payment", self.periodic_payment)
    }

    /// Number of periods until the balance reaches zero
    pub fn payoff(&self) -> PayoffResult {
        solve_payoff(self.principal, self.annual_rate_percent, self.periodic_payment)
    }
}

/// Outcome of the payoff solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "title", rename_all = "lowercase")]
pub enum PayoffResult {
    /// Nothing to amortize (zero principal or zero payment)
    Immediate,
    /// Paid off after this many whole periods
    Finite { periods: u64 },
    /// Payment never covers the accruing interest
    Never,
}

impl PayoffResult {
    /// Whole periods to payoff, if finite
    pub fn periods(&self) -> Option<u64> {
        match self {
            PayoffResult::Finite { periods } => Some(*periods),
            _ => None,
        }
    }

    /// Years to payoff (periods / 12), if finite
    pub fn years(&self) -> Option<f64> {
        self.periods().map(|p| p as f64 / PERIODS_PER_YEAR as f64)
    }

    pub fn title(&self) -> &'static str {
        match self {
            PayoffResult::Immediate => "immediate",
            PayoffResult::Finite { .. } => "finite",
            PayoffResult::Never => "never",
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, PayoffResult::Never)
    }
}

/// Solve for the number of monthly periods needed to repay `principal`
///
/// # Arguments
/// * `principal` - Outstanding balance
/// * `annual_rate_percent` - Annual interest rate as a percentage
/// * `periodic_payment` - Fixed monthly repayment
pub fn solve_payoff(principal: f64, annual_rate_percent: f64, periodic_payment: f64) -> PayoffResult {
    debug!(
        "solving payoff: principal={principal} rate={annual_rate_percent}% payment={periodic_payment}"
    );

    if principal <= 0.0 || periodic_payment <= 0.0 {
        return PayoffResult::Immediate;
    }

    let i = annual_rate_percent / 100.0 / PERIODS_PER_YEAR as f64;

    if i == 0.0 {
        return whole_periods((principal / periodic_payment).ceil());
    }

    if periodic_payment <= principal * i {
        return PayoffResult::Never;
    }

    let n = -(1.0 - i * principal / periodic_payment).ln() / (1.0 + i).ln();
    whole_periods(n.ceil())
}

/// Convert an already-rounded period count, treating non-finite values as `Never`
fn whole_periods(n: f64) -> PayoffResult {
    if n.is_finite() {
        // Saturates for astronomically long schedules
        PayoffResult::Finite { periods: n.max(0.0) as u64 }
    } else {
        PayoffResult::Never
    }
}

//! Retirement income shortfall and the lump sum needed to fund it
//!
//! The annual gap between target spending and recurring income is
//! capitalized two ways: a rule-of-thumb perpetuity (`gap / rate`) and the
//! present value of a finite annuity over the horizon.

use crate::error::{require_amount, require_finite, Result};
use crate::timevalue::{capitalize, pv_annuity};
use log::debug;
use serde::{Deserialize, Serialize};

/// Inputs for the shortfall calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShortfallInputs {
    /// Target spending per year
    pub annual_spend: f64,

    /// Pension income per year
    pub pension_income: f64,

    /// Part-time income per year while working part time
    pub part_time_income: f64,

    /// Years of part-time work (fractional years allowed)
    pub part_time_years: f64,

    /// Retirement horizon in whole years
    pub horizon_years: u32,

    /// Real (after-inflation) discount rate as a percentage
    pub real_rate_percent: f64,
}

impl Default for ShortfallInputs {
    fn default() -> Self {
        Self {
            annual_spend: 0.0,
            pension_income: 0.0,
            part_time_income: 0.0,
            part_time_years: 0.0,
            horizon_years: 25,
            real_rate_percent: 3.0,
        }
    }
}

impl ShortfallInputs {
    /// Copy of these inputs with a different annual spend, e.g. a budget average
    pub fn with_annual_spend(&self, annual_spend: f64) -> Self {
        Self {
            annual_spend,
            ..self.clone()
        }
    }

    /// Part-time income spread evenly across the whole horizon
    pub fn average_part_time_income(&self) -> f64 {
        if self.horizon_years == 0 {
            return 0.0;
        }
        let horizon = self.horizon_years as f64;
        let years_worked = self.part_time_years.max(0.0).min(horizon);
        self.part_time_income * years_worked / horizon
    }

    pub fn validate(&self) -> Result<()> {
        require_amount("annual spend", self.annual_spend)?;
        require_amount("pension income", self.pension_income)?;
        require_amount("part-time income", self.part_time_income)?;
        require_amount("part-time years", self.part_time_years)?;
        require_finite("real rate", self.real_rate_percent)
    }
}

/// Annual gap and the lump sums that would fund it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortfallResult {
    pub annual_shortfall: f64,
    pub lump_sum_simple: f64,
    pub lump_sum_annuity: f64,
}

/// Compute the annual shortfall and the capital required to cover it
pub fn compute_shortfall(inputs: &ShortfallInputs) -> ShortfallResult {
    let part_time = inputs.average_part_time_income();
    let annual_shortfall =
        (inputs.annual_spend - inputs.pension_income - part_time).max(0.0);
    let real_rate = inputs.real_rate_percent / 100.0;

    debug!(
        "shortfall: spend={} pension={} part_time_avg={part_time} gap={annual_shortfall} rate={real_rate} horizon={}",
        inputs.annual_spend, inputs.pension_income, inputs.horizon_years
    );

    ShortfallResult {
        annual_shortfall,
        lump_sum_simple: capitalize(annual_shortfall, real_rate, inputs.horizon_years),
        lump_sum_annuity: pv_annuity(annual_shortfall, inputs.horizon_years, real_rate),
    }
}

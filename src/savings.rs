//! Future value of a savings balance with regular monthly deposits

use crate::error::{require_amount, require_finite, Result};
use serde::{Deserialize, Serialize};

/// Unit of a savings period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    #[default]
    Years,
    Months,
}

/// A starting balance grown with monthly deposits and monthly compounding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsPlan {
    pub start: f64,
    pub monthly: f64,
    /// Annual rate as a percentage, compounded monthly
    pub rate_percent: f64,
    pub period: f64,
    pub unit: PeriodUnit,
}

impl Default for SavingsPlan {
    fn default() -> Self {
        Self {
            start: 0.0,
            monthly: 0.0,
            rate_percent: 12.0,
            period: 2.0,
            unit: PeriodUnit::Years,
        }
    }
}

impl SavingsPlan {
    /// Number of monthly compounding periods
    pub fn months(&self) -> f64 {
        match self.unit {
            PeriodUnit::Months => self.period,
            PeriodUnit::Years => self.period * 12.0,
        }
    }

    pub fn future_value(&self) -> f64 {
        future_value(self.start, self.monthly, self.rate_percent, self.months())
    }

    pub fn validate(&self) -> Result<()> {
        require_amount("starting balance", self.start)?;
        require_amount("monthly deposit", self.monthly)?;
        require_finite("rate", self.rate_percent)?;
        require_amount("period", self.period)
    }
}

/// Balance after `months` of deposits at the end of each month
///
/// A non-positive or non-finite horizon leaves the starting balance untouched.
pub fn future_value(start: f64, monthly: f64, annual_rate_percent: f64, months: f64) -> f64 {
    if !months.is_finite() || months <= 0.0 {
        return start;
    }
    let i = annual_rate_percent / 100.0 / 12.0;
    if i == 0.0 {
        return start + monthly * months;
    }
    let growth = (1.0 + i).powf(months);
    start * growth + monthly * (growth - 1.0) / i
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_compound_growth() {
        let plan = SavingsPlan {
            start: 1000.0,
            monthly: 100.0,
            ..Default::default()
        };
        assert_eq!(plan.months(), 24.0);
        // 1000 * 1.01^24 + 100 * (1.01^24 - 1) / 0.01
        assert_abs_diff_eq!(plan.future_value(), 3967.08, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        assert_abs_diff_eq!(future_value(500.0, 50.0, 0.0, 10.0), 1000.0);
    }

    #[test]
    fn test_empty_horizon_returns_start() {
        assert_eq!(future_value(750.0, 100.0, 5.0, 0.0), 750.0);
        assert_eq!(future_value(750.0, 100.0, 5.0, f64::NAN), 750.0);

        let months = SavingsPlan {
            start: 10.0,
            period: 6.0,
            unit: PeriodUnit::Months,
            ..Default::default()
        };
        assert_eq!(months.months(), 6.0);
    }

    #[test]
    fn test_unit_deserializes_lowercase() {
        let plan: SavingsPlan =
            serde_json::from_str(r#"{"start": 1, "period": 3, "unit": "months"}"#).unwrap();
        assert_eq!(plan.unit, PeriodUnit::Months);
        assert_abs_diff_eq!(plan.rate_percent, 12.0);
    }
}

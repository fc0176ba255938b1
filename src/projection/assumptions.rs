//! Inputs for the year-by-year account projection

use crate::error::{require_amount, require_finite, require_percent, PlannerError, Result};
use serde::{Deserialize, Serialize};

/// Longest horizon accepted by [`ProjectionAssumptions::validate`]
pub const MAX_PROJECTION_YEARS: u32 = 150;

/// Assumptions driving an account projection
///
/// Field names serialize in camelCase; the short names used by earlier saved
/// records (`netReturnPct`, `grossContrib`, ...) are accepted on input. A saved
/// `years` value is ignored because the horizon is always derived from ages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionAssumptions {
    /// Age in the first projected year
    pub start_age: u32,

    /// Contributions stop and drawdowns start at this age
    pub retire_age: u32,

    /// Age in the last projected year (inclusive)
    pub end_age: u32,

    /// Opening balance in the first year
    pub opening: f64,

    /// Net annual return as a percentage, earned on the opening balance
    #[serde(alias = "netReturnPct")]
    pub net_return_percent: f64,

    /// Annual contribution before contributions tax
    #[serde(alias = "grossContrib")]
    pub gross_contribution: f64,

    /// Contributions tax as a percentage in [0, 100]
    #[serde(alias = "contribTaxPct")]
    pub contribution_tax_percent: f64,

    /// Annual withdrawal from retirement age onwards
    pub drawdown: f64,

    /// Annual inflation as a percentage
    #[serde(alias = "inflationPct")]
    pub inflation_percent: f64,
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            start_age: 50,
            retire_age: 60,
            end_age: 90,
            opening: 200_000.0,
            net_return_percent: 5.5,
            gross_contribution: 15_000.0,
            contribution_tax_percent: 15.0,
            drawdown: 45_000.0,
            inflation_percent: 2.5,
        }
    }
}

impl ProjectionAssumptions {
    /// Number of projected years, never less than one
    pub fn years(&self) -> u32 {
        self.end_age.saturating_sub(self.start_age).saturating_add(1)
    }

    /// Copy of these assumptions with a different net return
    pub fn with_net_return(&self, net_return_percent: f64) -> Self {
        Self {
            net_return_percent,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.end_age < self.start_age {
            return Err(PlannerError::InvalidInput {
                field: "end age",
                reason: format!(
                    "{} is before start age {}",
                    self.end_age, self.start_age
                ),
            });
        }
        if self.years() > MAX_PROJECTION_YEARS {
            return Err(PlannerError::InvalidInput {
                field: "end age",
                reason: format!(
                    "{} years from age {} exceeds the {MAX_PROJECTION_YEARS}-year limit",
                    self.years(),
                    self.start_age
                ),
            });
        }
        require_amount("opening balance", self.opening)?;
        require_finite("net return", self.net_return_percent)?;
        require_amount("gross contribution", self.gross_contribution)?;
        require_percent("contribution tax", self.contribution_tax_percent)?;
        require_amount("drawdown", self.drawdown)?;
        require_finite("inflation", self.inflation_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_derived_from_ages() {
        let a = ProjectionAssumptions::default();
        assert_eq!(a.years(), 41);

        let inverted = ProjectionAssumptions {
            start_age: 70,
            end_age: 65,
            ..Default::default()
        };
        assert_eq!(inverted.years(), 1);
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_years_at_age_limits() {
        let widest = ProjectionAssumptions {
            start_age: 0,
            end_age: u32::MAX,
            ..Default::default()
        };
        assert_eq!(widest.years(), u32::MAX);
        assert!(widest.validate().is_err());

        let oldest = ProjectionAssumptions {
            start_age: u32::MAX,
            retire_age: u32::MAX,
            end_age: u32::MAX,
            ..Default::default()
        };
        assert_eq!(oldest.years(), 1);
        assert!(oldest.validate().is_ok());
    }

    #[test]
    fn test_accepts_saved_field_names() {
        let json = r#"{
            "startAge": 55, "retireAge": 65, "endAge": 85, "years": 99,
            "opening": 300000, "netReturnPct": 6, "grossContrib": 20000,
            "contribTaxPct": 15, "drawdown": 50000, "inflationPct": 3
        }"#;
        let a: ProjectionAssumptions = serde_json::from_str(json).unwrap();
        assert_eq!(a.years(), 31);
        assert!((a.net_return_percent - 6.0).abs() < 1e-12);
        assert!((a.gross_contribution - 20_000.0).abs() < 1e-12);
        assert!((a.inflation_percent - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let a: ProjectionAssumptions = serde_json::from_str(r#"{"opening": 1000}"#).unwrap();
        assert_eq!(a.start_age, 50);
        assert!((a.opening - 1000.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_keeps_assumptions() {
        let a = ProjectionAssumptions::default().with_net_return(7.25);
        let json = serde_json::to_string(&a).unwrap();
        let back: ProjectionAssumptions = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn test_validate_tax_range() {
        let a = ProjectionAssumptions {
            contribution_tax_percent: 120.0,
            ..Default::default()
        };
        assert!(a.validate().is_err());
        assert!(ProjectionAssumptions::default().validate().is_ok());
    }
}

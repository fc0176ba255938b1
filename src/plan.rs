//! Plan file: one JSON document holding the inputs for every calculator
//!
//! Sections may be omitted; missing sections take the calculator defaults.

use crate::budget::{FutureBudget, SpendingAllocation};
use crate::dashboard::{summarize_assets, summarize_liabilities, AssetItem, DashboardInputs, LiabilityItem};
use crate::debt::Debt;
use crate::error::{PlannerError, Result};
use crate::projection::ProjectionAssumptions;
use crate::savings::SavingsPlan;
use crate::shortfall::ShortfallInputs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default location of the plan file
pub const DEFAULT_PLAN_PATH: &str = "data/plan.json";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanFile {
    pub debts: Vec<Debt>,
    pub projection: ProjectionAssumptions,
    pub shortfall: ShortfallInputs,
    pub savings: SavingsPlan,
    pub future_budget: FutureBudget,
    pub spending: Vec<SpendingAllocation>,
    pub assets: Vec<AssetItem>,
    pub liabilities: Vec<LiabilityItem>,
    pub dashboard: DashboardInputs,
}

impl PlanFile {
    /// Load the plan from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_PLAN_PATH))
    }

    /// Load a plan from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let plan: PlanFile = serde_json::from_str(&text).map_err(|source| PlannerError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "loaded plan from {}: {} debts, {} budget phases",
            path.display(),
            plan.debts.len(),
            plan.future_budget.phases.len()
        );
        Ok(plan)
    }

    /// Dashboard inputs, with balances from the asset and liability rows when present
    pub fn dashboard_inputs(&self) -> DashboardInputs {
        if self.assets.is_empty() && self.liabilities.is_empty() {
            self.dashboard.clone()
        } else {
            self.dashboard.with_item_totals(
                &summarize_assets(&self.assets),
                &summarize_liabilities(&self.liabilities),
            )
        }
    }

    /// Shortfall inputs, taking annual spend from the future budget if asked
    pub fn shortfall_inputs(&self, spend_from_budget: bool) -> ShortfallInputs {
        if spend_from_budget {
            self.shortfall.with_annual_spend(self.future_budget.average_annual())
        } else {
            self.shortfall.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_partial_plan() {
        let path = std::env::temp_dir().join("household_planner_plan_partial.json");
        fs::write(
            &path,
            r#"{
                "debts": [{"name": "car", "principal": 1200, "rate": 0, "payment": 100}],
                "shortfall": {"annualSpend": 50000, "pensionIncome": 20000, "horizonYears": 20},
                "futureBudget": [
                    {"phase": "Epic retirement", "years_in_phase": 10, "baseline_cost": 70000},
                    {"phase": "Frailty", "years_in_phase": 10, "baseline_cost": 50000}
                ]
            }"#,
        )
        .unwrap();

        let plan = PlanFile::load_from(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(plan.debts.len(), 1);
        assert_eq!(plan.projection, ProjectionAssumptions::default());
        assert_eq!(plan.shortfall.horizon_years, 20);
        assert!((plan.shortfall.real_rate_percent - 3.0).abs() < 1e-12);

        let from_budget = plan.shortfall_inputs(true);
        assert!((from_budget.annual_spend - 60_000.0).abs() < 1e-9);
        let manual = plan.shortfall_inputs(false);
        assert!((manual.annual_spend - 50_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_bundled_plan_loads() {
        let plan = PlanFile::load().unwrap();
        assert_eq!(plan.debts.len(), 2);
        assert_eq!(plan.future_budget.phases.len(), 3);
        assert!(plan.projection.validate().is_ok());
        assert!(plan.shortfall.validate().is_ok());

        let inputs = plan.dashboard_inputs();
        assert!((inputs.assets_total - 1_050_000.0).abs() < 1e-9);
        assert!((inputs.liabilities_total - 22_700.0).abs() < 1e-9);
    }

    #[test]
    fn test_dashboard_balances_without_rows() {
        let plan = PlanFile {
            dashboard: DashboardInputs {
                assets_total: 90_000.0,
                liabilities_total: 10_000.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(plan.dashboard_inputs(), plan.dashboard);
    }

    #[test]
    fn test_missing_plan_is_io_error() {
        let err = PlanFile::load_from(Path::new("/nonexistent/plan.json")).unwrap_err();
        assert!(matches!(err, PlannerError::Io { .. }));
    }

    #[test]
    fn test_malformed_plan_is_json_error() {
        let path = std::env::temp_dir().join("household_planner_plan_bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = PlanFile::load_from(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, PlannerError::Json { .. }));
    }
}

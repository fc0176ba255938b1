//! Life expectancy lookup by cohort and percentile

use crate::error::{PlannerError, Result};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who the estimate is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cohort {
    Male,
    Female,
    /// Longer-lived member of a couple
    Couple,
}

/// Percentile of the lifespan distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Percentile {
    P25,
    P50,
    P75,
    P90,
}

impl FromStr for Cohort {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Cohort::Male),
            "female" => Ok(Cohort::Female),
            "couple" => Ok(Cohort::Couple),
            _ => Err(PlannerError::UnknownLabel {
                kind: "cohort",
                label: s.to_string(),
            }),
        }
    }
}

impl FromStr for Percentile {
    type Err = PlannerError;

    /// Accepts `"50th percentile"`, `"50th"`, `"p50"` or `"50"`
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim().to_lowercase();
        let number = label
            .trim_end_matches("percentile")
            .trim()
            .trim_start_matches('p')
            .trim_end_matches("th");
        match number {
            "25" => Ok(Percentile::P25),
            "50" => Ok(Percentile::P50),
            "75" => Ok(Percentile::P75),
            "90" => Ok(Percentile::P90),
            _ => Err(PlannerError::UnknownLabel {
                kind: "percentile",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self {
            Percentile::P25 => 25,
            Percentile::P50 => 50,
            Percentile::P75 => 75,
            Percentile::P90 => 90,
        };
        write!(f, "{n}th percentile")
    }
}

/// Estimated lifespan and what it implies from today
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeEstimate {
    pub expected_lifespan: u32,
    pub years_remaining: u32,
    pub estimated_year: i32,
}

/// Expected lifespan table (years)
#[derive(Debug, Clone, Copy, Default)]
pub struct LifeTable;

impl LifeTable {
    pub fn expected_lifespan(&self, cohort: Cohort, percentile: Percentile) -> u32 {
        use Percentile::*;
        match (cohort, percentile) {
            (Cohort::Male, P25) => 85,
            (Cohort::Male, P50) => 89,
            (Cohort::Male, P75) => 95,
            (Cohort::Male, P90) => 98,
            (Cohort::Female, P25) => 87,
            (Cohort::Female, P50) => 91,
            (Cohort::Female, P75) => 97,
            (Cohort::Female, P90) => 100,
            (Cohort::Couple, P25) => 92,
            (Cohort::Couple, P50) => 95,
            (Cohort::Couple, P75) => 98,
            (Cohort::Couple, P90) => 101,
        }
    }

    /// Estimate remaining years for someone `current_age` in `current_year`
    ///
    /// Returns `None` when the age is not a finite number.
    pub fn estimate(
        &self,
        cohort: Cohort,
        percentile: Percentile,
        current_age: f64,
        current_year: i32,
    ) -> Option<LifeEstimate> {
        if !current_age.is_finite() {
            return None;
        }
        let expected_lifespan = self.expected_lifespan(cohort, percentile);
        let years_remaining = (expected_lifespan as f64 - current_age).max(0.0).round() as u32;

        Some(LifeEstimate {
            expected_lifespan,
            years_remaining,
            estimated_year: current_year + years_remaining as i32,
        })
    }

    /// Same as [`LifeTable::estimate`] using the local calendar year
    pub fn estimate_now(
        &self,
        cohort: Cohort,
        percentile: Percentile,
        current_age: f64,
    ) -> Option<LifeEstimate> {
        self.estimate(cohort, percentile, current_age, Local::now().year())
    }
}

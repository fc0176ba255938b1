//! Life-phase budgets and spending allocations checked against them

use serde::{Deserialize, Serialize};

/// Typical age range for the standard life phases
pub fn phase_age_hint(phase: &str) -> Option<&'static str> {
    match phase.trim() {
        "Set-up" => Some("25–35"),
        "Lifestyling" => Some("35–50"),
        "Part-timing" => Some("50–60"),
        "Epic retirement" => Some("60–70"),
        "Passive retirement/ageing" => Some("70–80"),
        "Frailty" => Some("80+"),
        _ => None,
    }
}

fn normalize_phase(phase: &str) -> String {
    phase.trim().to_lowercase()
}

/// Planned annual spending for one life phase
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseBudget {
    pub phase: String,
    pub age_range: String,
    pub years_in_phase: f64,
    pub baseline_cost: f64,
    pub oneoff_costs: f64,
    pub epic_experiences: f64,
}

impl PhaseBudget {
    /// Total annual budget for the phase
    pub fn annual(&self) -> f64 {
        self.baseline_cost + self.oneoff_costs + self.epic_experiences
    }
}

/// Budgets for every remaining life phase
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FutureBudget {
    pub phases: Vec<PhaseBudget>,
}

impl FutureBudget {
    pub fn new(phases: Vec<PhaseBudget>) -> Self {
        Self { phases }
    }

    pub fn total_years(&self) -> f64 {
        self.phases.iter().map(|p| p.years_in_phase).sum()
    }

    pub fn lifetime_total(&self) -> f64 {
        self.phases.iter().map(|p| p.annual() * p.years_in_phase).sum()
    }

    /// Lifetime total spread over all budgeted years, 0 if none
    pub fn average_annual(&self) -> f64 {
        let years = self.total_years();
        if years > 0.0 {
            self.lifetime_total() / years
        } else {
            0.0
        }
    }

    /// Annual budget for a phase, matched on trimmed, case-insensitive name
    pub fn annual_for(&self, phase: &str) -> Option<f64> {
        let key = normalize_phase(phase);
        self.phases
            .iter()
            .find(|p| normalize_phase(&p.phase) == key)
            .map(PhaseBudget::annual)
    }
}

/// How a phase's spending splits across categories
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendingAllocation {
    pub phase: String,
    pub cost_base: f64,
    pub cost_life: f64,
    pub cost_save: f64,
    pub cost_health: f64,
    pub cost_other: f64,
}

/// Allocation total compared with the phase budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationCheck {
    pub total: f64,
    pub budget: f64,
    /// Negative when the allocation overspends the budget
    pub surplus: f64,
}

impl SpendingAllocation {
    pub fn total(&self) -> f64 {
        self.cost_base + self.cost_life + self.cost_save + self.cost_health + self.cost_other
    }

    pub fn check_against(&self, budget: &FutureBudget) -> AllocationCheck {
        let total = self.total();
        let budget = budget.annual_for(&self.phase).unwrap_or(0.0);
        AllocationCheck {
            total,
            budget,
            surplus: budget - total,
        }
    }
}

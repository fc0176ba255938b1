//! Household Planner - deterministic financial projection engine
//!
//! This library provides:
//! - Months-to-payoff for amortizing debts
//! - Year-by-year account projections (nominal and inflation-adjusted)
//! - Retirement income shortfall and the lump sum needed to fund it
//! - Savings growth, life expectancy and life-phase budget helpers
//! - Dashboard figures: net worth, monthly savings, savings and drawdown paths
//!
//! Every calculator is a pure function of its inputs; degenerate inputs
//! produce sentinel results instead of errors.

pub mod error;
pub mod debt;
pub mod projection;
pub mod shortfall;
pub mod timevalue;
pub mod savings;
pub mod lifespan;
pub mod budget;
pub mod dashboard;
pub mod scenario;
pub mod plan;

// Re-export commonly used types
pub use error::{PlannerError, Result};
pub use debt::{solve_payoff, Debt, LoanState, PayoffResult};
pub use projection::{project, ProjectionAssumptions, ProjectionEngine, ProjectionResult, ProjectionRow};
pub use shortfall::{compute_shortfall, ShortfallInputs, ShortfallResult};
pub use savings::SavingsPlan;
pub use lifespan::{Cohort, LifeTable, Percentile};
pub use budget::{FutureBudget, SpendingAllocation};
pub use dashboard::{compute_dashboard, Dashboard, DashboardInputs};
pub use scenario::ScenarioRunner;
pub use plan::PlanFile;

//! Core engine for year-by-year account projections

use super::assumptions::{ProjectionAssumptions, MAX_PROJECTION_YEARS};
use super::rows::{ProjectionResult, ProjectionRow};
use super::state::ProjectionState;
use log::{debug, trace};

/// Projection engine for a single account
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: ProjectionAssumptions,
}

impl ProjectionEngine {
    pub fn new(assumptions: ProjectionAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &ProjectionAssumptions {
        &self.assumptions
    }

    /// Run the projection; one row per year from start age to end age
    pub fn project(&self) -> ProjectionResult {
        let years = self.assumptions.years();
        debug!(
            "projecting {} years from age {} (retire at {}), opening {}",
            years, self.assumptions.start_age, self.assumptions.retire_age, self.assumptions.opening
        );

        let mut result = ProjectionResult::with_capacity(years.min(MAX_PROJECTION_YEARS) as usize);
        let mut state = ProjectionState::from_assumptions(&self.assumptions);

        for _year in 1..=years {
            state.advance_year();

            let row = self.calculate_year(&mut state);
            result.add_row(row);
        }

        result
    }

    /// Roll the balance forward one year
    fn calculate_year(&self, state: &mut ProjectionState) -> ProjectionRow {
        let a = &self.assumptions;
        let mut row = ProjectionRow::new(state.year, state.age);
        row.opening = state.opening;

        // Contributions stop at retirement
        if state.is_contributing(a.retire_age) {
            row.gross_contribution = a.gross_contribution;
        }
        row.contribution_tax = row.gross_contribution * (a.contribution_tax_percent / 100.0);
        row.net_contribution = row.gross_contribution - row.contribution_tax;

        // Return is earned on the opening balance only, not on this year's flows
        row.net_return = row.opening * (a.net_return_percent / 100.0);

        if state.is_drawing_down(a.retire_age) {
            row.drawdown = a.drawdown;
        }

        // Floored at zero: a depleted account cannot go negative
        row.closing = (row.opening + row.net_contribution + row.net_return - row.drawdown).max(0.0);

        let deflator = (1.0 + a.inflation_percent / 100.0).powf(state.year as f64);
        row.real_closing = row.closing / deflator;

        trace!(
            "year {} age {}: opening={:.2} closing={:.2} real={:.2}",
            row.year, row.age, row.opening, row.closing, row.real_closing
        );

        state.closing = row.closing;
        row
    }
}

/// Project an account from the given assumptions
pub fn project(assumptions: &ProjectionAssumptions) -> Vec<ProjectionRow> {
    ProjectionEngine::new(assumptions.clone()).project().into_rows()
}

//! Scenario runner for batch account projections
//!
//! Holds a set of base assumptions and projects variants of them in
//! parallel. Each variant is independent, so results match running
//! [`crate::projection::project`] on the same assumptions one at a time.

use crate::projection::{ProjectionAssumptions, ProjectionEngine, ProjectionResult};
use rayon::prelude::*;

/// Batch projection runner around a base set of assumptions
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionAssumptions::default());
///
/// // Compare outcomes across return assumptions
/// let results = runner.run_return_sweep(&[4.0, 5.5, 7.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_assumptions: ProjectionAssumptions,
}

impl ScenarioRunner {
    pub fn new(base_assumptions: ProjectionAssumptions) -> Self {
        Self { base_assumptions }
    }

    /// Project the base assumptions
    pub fn run(&self) -> ProjectionResult {
        ProjectionEngine::new(self.base_assumptions.clone()).project()
    }

    /// Project each set of assumptions; output order matches input order
    pub fn run_scenarios(&self, scenarios: &[ProjectionAssumptions]) -> Vec<ProjectionResult> {
        scenarios
            .par_iter()
            .map(|assumptions| ProjectionEngine::new(assumptions.clone()).project())
            .collect()
    }

    /// Project the base assumptions once per net return percentage
    pub fn run_return_sweep(&self, net_returns: &[f64]) -> Vec<ProjectionResult> {
        let scenarios: Vec<_> = net_returns
            .iter()
            .map(|&rate| self.base_assumptions.with_net_return(rate))
            .collect();
        self.run_scenarios(&scenarios)
    }

    pub fn assumptions(&self) -> &ProjectionAssumptions {
        &self.base_assumptions
    }

    /// Base assumptions, editable before the next run
    pub fn assumptions_mut(&mut self) -> &mut ProjectionAssumptions {
        &mut self.base_assumptions
    }
}

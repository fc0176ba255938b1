//! Year-by-year account projection (nominal and inflation-adjusted)

mod assumptions;
mod state;
mod engine;
mod rows;

pub use assumptions::{ProjectionAssumptions, MAX_PROJECTION_YEARS};
pub use state::ProjectionState;
pub use engine::{project, ProjectionEngine};
pub use rows::{ProjectionResult, ProjectionRow, ProjectionSummary};

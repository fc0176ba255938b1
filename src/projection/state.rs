//! Running state carried from one projected year to the next

use super::assumptions::ProjectionAssumptions;

/// State of the account at a point in the projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection year (1-indexed, 0 before the first advance)
    pub year: u32,

    /// Age during the current year
    pub age: u32,

    /// Balance at the start of the current year
    pub opening: f64,

    /// Balance at the end of the current year
    pub closing: f64,

    start_age: u32,
}

impl ProjectionState {
    /// Initialize state before the first projected year
    pub fn from_assumptions(assumptions: &ProjectionAssumptions) -> Self {
        Self {
            year: 0,
            age: assumptions.start_age,
            opening: assumptions.opening,
            closing: assumptions.opening,
            start_age: assumptions.start_age,
        }
    }

    /// Advance to next year; the prior closing becomes the new opening
    pub fn advance_year(&mut self) {
        self.year += 1;
        self.age = self.start_age.saturating_add(self.year - 1);
        self.opening = self.closing;
    }

    /// Whether contributions are still being made
    pub fn is_contributing(&self, retire_age: u32) -> bool {
        self.age < retire_age
    }

    /// Whether drawdowns have started
    pub fn is_drawing_down(&self, retire_age: u32) -> bool {
        self.age >= retire_age
    }
}

//! Output rows of an account projection

use serde::{Deserialize, Serialize};

/// One projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    // Timing
    pub year: u32,
    pub age: u32,

    // Balance roll-forward
    pub opening: f64,
    pub gross_contribution: f64,
    pub contribution_tax: f64,
    pub net_contribution: f64,
    pub net_return: f64,
    pub drawdown: f64,
    pub closing: f64,

    /// Closing balance in first-year purchasing power
    pub real_closing: f64,
}

impl ProjectionRow {
    /// Create a row with zeroed amounts
    pub fn new(year: u32, age: u32) -> Self {
        Self {
            year,
            age,
            opening: 0.0,
            gross_contribution: 0.0,
            contribution_tax: 0.0,
            net_contribution: 0.0,
            net_return: 0.0,
            drawdown: 0.0,
            closing: 0.0,
            real_closing: 0.0,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn with_capacity(years: usize) -> Self {
        Self {
            rows: Vec::with_capacity(years),
        }
    }

    pub fn add_row(&mut self, row: ProjectionRow) {
        self.rows.push(row);
    }

    pub fn into_rows(self) -> Vec<ProjectionRow> {
        self.rows
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_net_contribution: f64 = self.rows.iter().map(|r| r.net_contribution).sum();
        let total_net_return: f64 = self.rows.iter().map(|r| r.net_return).sum();
        let total_drawdown: f64 = self.rows.iter().map(|r| r.drawdown).sum();

        let final_nominal = self.rows.last().map(|r| r.closing).unwrap_or(0.0);
        let final_real = self.rows.last().map(|r| r.real_closing).unwrap_or(0.0);

        // First year a scheduled drawdown empties the account
        let depleted_at_age = self
            .rows
            .iter()
            .find(|r| r.drawdown > 0.0 && r.closing <= 0.0)
            .map(|r| r.age);

        ProjectionSummary {
            years: self.rows.len() as u32,
            final_nominal,
            final_real,
            total_net_contribution,
            total_net_return,
            total_drawdown,
            depleted_at_age,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_nominal: f64,
    pub final_real: f64,
    pub total_net_contribution: f64,
    pub total_net_return: f64,
    pub total_drawdown: f64,
    pub depleted_at_age: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionResult::default().summary();
        assert_eq!(summary.years, 0);
        assert_eq!(summary.final_nominal, 0.0);
        assert_eq!(summary.final_real, 0.0);
        assert_eq!(summary.depleted_at_age, None);
    }

    #[test]
    fn test_summary_totals() {
        let mut result = ProjectionResult::with_capacity(2);

        let mut first = ProjectionRow::new(1, 64);
        first.net_contribution = 850.0;
        first.net_return = 50.0;
        first.closing = 1900.0;
        first.real_closing = 1850.0;
        result.add_row(first);

        let mut second = ProjectionRow::new(2, 65);
        second.drawdown = 2500.0;
        second.net_return = 95.0;
        result.add_row(second);

        let summary = result.summary();
        assert_eq!(summary.years, 2);
        assert!((summary.total_net_contribution - 850.0).abs() < 1e-12);
        assert!((summary.total_net_return - 145.0).abs() < 1e-12);
        assert!((summary.total_drawdown - 2500.0).abs() < 1e-12);
        assert_eq!(summary.final_nominal, 0.0);
        assert_eq!(summary.depleted_at_age, Some(65));
    }
}

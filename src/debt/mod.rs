//! Debt paydown: months-to-payoff for each outstanding loan

mod payoff;
pub mod loader;

pub use payoff::{solve_payoff, LoanState, PayoffResult, PERIODS_PER_YEAR};
pub use loader::{load_debts, DEFAULT_DEBTS_PATH};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A named debt as entered on the paydown screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    #[serde(default)]
    pub name: String,
    pub principal: f64,
    /// Annual interest rate as a percentage
    pub rate: f64,
    /// Monthly repayment
    pub payment: f64,
}

impl Debt {
    pub fn loan(&self) -> LoanState {
        LoanState::new(self.principal, self.rate, self.payment)
    }
}

/// Payoff outcome for one debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub name: String,
    pub principal: f64,
    pub payment: f64,
    pub result: PayoffResult,
}

/// Solve every debt independently; output order matches input order
pub fn payoff_all(debts: &[Debt]) -> Vec<DebtPayoff> {
    debts
        .par_iter()
        .map(|debt| DebtPayoff {
            name: debt.name.clone(),
            principal: debt.principal,
            payment: debt.payment,
            result: debt.loan().payoff(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debt(name: &str, principal: f64, rate: f64, payment: f64) -> Debt {
        Debt {
            name: name.to_string(),
            principal,
            rate,
            payment,
        }
    }

    #[test]
    fn test_payoff_all_keeps_order() {
        let debts = vec![
            debt("car", 1200.0, 0.0, 100.0),
            debt("card", 1000.0, 12.0, 5.0),
            debt("empty", 0.0, 5.0, 50.0),
        ];

        let results = payoff_all(&debts);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "car");
        assert_eq!(results[0].result.periods(), Some(12));
        assert!(results[1].result.is_never());
        assert_eq!(results[2].result, PayoffResult::Immediate);
    }

    #[test]
    fn test_debt_deserializes_persisted_row() {
        let row: Debt =
            serde_json::from_str(r#"{"name":"loan","principal":5000,"rate":6.5,"payment":150}"#)
                .unwrap();
        assert_eq!(row.loan(), LoanState::new(5000.0, 6.5, 150.0));
    }
}

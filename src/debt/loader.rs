//! Load debts from a CSV file with `name,principal,rate,payment` columns

use super::Debt;
use crate::error::Result;
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::path::Path;

/// Default path to the debt list
pub const DEFAULT_DEBTS_PATH: &str = "data/debts.csv";

/// Load all debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path.as_ref())?;
    let mut debts = Vec::new();

    for result in reader.deserialize() {
        let debt: Debt = result?;
        debts.push(debt);
    }

    debug!("loaded {} debts from {}", debts.len(), path.as_ref().display());
    Ok(debts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_debts() {
        let path = std::env::temp_dir().join("household_planner_debts_ok.csv");
        fs::write(
            &path,
            "name,principal,rate,payment\nCar loan, 12000, 7.5, 350\nCredit card,4000,19.99,120\n",
        )
        .unwrap();

        let debts = load_debts(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].name, "Car loan");
        assert!((debts[0].principal - 12000.0).abs() < 1e-10);
        assert!((debts[1].rate - 19.99).abs() < 1e-10);
    }

    #[test]
    fn test_load_debts_rejects_bad_number() {
        let path = std::env::temp_dir().join("household_planner_debts_bad.csv");
        fs::write(&path, "name,principal,rate,payment\nCar,lots,7.5,350\n").unwrap();

        let result = load_debts(&path);
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_debts("/nonexistent/debts.csv").is_err());
    }
}

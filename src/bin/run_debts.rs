//! Solve payoff for every debt in a CSV file
//!
//! Usage: run_debts [path]   (defaults to data/debts.csv)
//! Columns: name,principal,rate,payment

use anyhow::{Context, Result};
use household_planner::debt::{load_debts, payoff_all, PayoffResult, DEFAULT_DEBTS_PATH};
use std::env;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_DEBTS_PATH.to_string());
    let start = Instant::now();

    let debts = load_debts(&path).with_context(|| format!("loading debts from {path}"))?;
    println!("Loaded {} debts in {:?}", debts.len(), start.elapsed());

    let results = payoff_all(&debts);

    let mut total_principal = 0.0;
    let mut total_payment = 0.0;
    let mut longest: Option<u64> = None;
    let mut never = 0usize;

    println!("\n{:<24} {:>14} {:>8} {:>10} {:>8}", "Debt", "Principal", "Rate%", "Payment", "Months");
    println!("{}", "-".repeat(68));
    for (debt, payoff) in debts.iter().zip(&results) {
        total_principal += debt.principal;
        total_payment += debt.payment;
        let months = match payoff.result {
            PayoffResult::Immediate => "-".to_string(),
            PayoffResult::Never => {
                never += 1;
                "never".to_string()
            }
            PayoffResult::Finite { periods } => {
                longest = longest.max(Some(periods));
                periods.to_string()
            }
        };
        println!(
            "{:<24} {:>14.2} {:>8.2} {:>10.2} {:>8}",
            debt.name, debt.principal, debt.rate, debt.payment, months
        );
    }

    println!("\nSummary:");
    println!("  Total principal:       ${total_principal:.2}");
    println!("  Total monthly payment: ${total_payment:.2}");
    if let Some(months) = longest {
        println!("  Debt free in:          {months} months ({:.2} years)", months as f64 / 12.0);
    }
    if never > 0 {
        println!("  {never} debt(s) will never be repaid at the current payment");
    }

    Ok(())
}

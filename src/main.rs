//! Household Planner CLI
//!
//! Command-line interface for running the planning calculators

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use household_planner::{
    budget::{AllocationCheck, SpendingAllocation},
    dashboard::{compute_dashboard, summarize_assets, summarize_liabilities},
    debt::{load_debts, payoff_all, DebtPayoff, LoanState, PayoffResult},
    lifespan::{Cohort, LifeTable, Percentile},
    plan::{PlanFile, DEFAULT_PLAN_PATH},
    projection::{ProjectionAssumptions, ProjectionResult},
    savings::PeriodUnit,
    shortfall::compute_shortfall,
    ScenarioRunner,
};
use chrono::{Datelike, Local};
use log::warn;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct BudgetReport<'a> {
    total_years: f64,
    lifetime_total: f64,
    average_annual: f64,
    allocations: &'a [(String, AllocationCheck)],
}

#[derive(Parser)]
#[command(version, about = "Household financial planning calculators")]
struct Cli {
    /// Plan file (defaults to data/plan.json when present)
    #[arg(short, long, global = true)]
    plan: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Months to repay a single loan
    Payoff {
        #[arg(long)]
        principal: f64,
        /// Annual interest rate (%)
        #[arg(long)]
        rate: f64,
        /// Monthly repayment
        #[arg(long)]
        payment: f64,
    },
    /// Months to repay every debt in a CSV file or the plan
    Debts {
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Year-by-year account projection
    Project {
        #[arg(long)]
        start_age: Option<u32>,
        #[arg(long)]
        retire_age: Option<u32>,
        #[arg(long)]
        end_age: Option<u32>,
        #[arg(long)]
        opening: Option<f64>,
        /// Net annual return (%)
        #[arg(long)]
        net_return: Option<f64>,
        #[arg(long)]
        contribution: Option<f64>,
        /// Contributions tax (%)
        #[arg(long)]
        contribution_tax: Option<f64>,
        #[arg(long)]
        drawdown: Option<f64>,
        /// Annual inflation (%)
        #[arg(long)]
        inflation: Option<f64>,
        /// Compare final balances across these net returns (%)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        sweep: Vec<f64>,
    },
    /// Annual income gap and the lump sum needed to fund it
    Shortfall {
        #[arg(long)]
        spend: Option<f64>,
        /// Use the future budget's average annual spend
        #[arg(long, conflicts_with = "spend")]
        from_budget: bool,
        #[arg(long)]
        pension: Option<f64>,
        #[arg(long)]
        part_time_income: Option<f64>,
        #[arg(long)]
        part_time_years: Option<f64>,
        #[arg(long)]
        years: Option<u32>,
        /// Real discount rate (%)
        #[arg(long)]
        real_rate: Option<f64>,
    },
    /// Future value of savings with monthly deposits
    Savings {
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        monthly: Option<f64>,
        /// Annual rate (%), compounded monthly
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long)]
        period: Option<f64>,
        /// Treat the period as months rather than years
        #[arg(long)]
        months: bool,
    },
    /// Life expectancy estimate
    Life {
        /// male, female or couple
        #[arg(long)]
        cohort: String,
        /// e.g. "50th percentile"
        #[arg(long, default_value = "50th percentile")]
        percentile: String,
        #[arg(long)]
        age: f64,
    },
    /// Future budget totals and spending allocation checks
    Budget,
    /// Net worth, monthly savings and ten-year savings and drawdown paths
    Dashboard,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let plan = load_plan(cli.plan.as_deref())?;

    match cli.command {
        Command::Payoff {
            principal,
            rate,
            payment,
        } => {
            let loan = LoanState::new(principal, rate, payment);
            loan.validate()?;
            let result = loan.payoff();
            emit(cli.json, &result, || {
                println!("Loan: principal ${principal:.2}, rate {rate}%, payment ${payment:.2}");
                println!("  {}", describe_payoff(&result));
            })
        }

        Command::Debts { csv } => {
            let debts = match csv {
                Some(path) => load_debts(&path)
                    .with_context(|| format!("loading debts from {}", path.display()))?,
                None => plan.debts.clone(),
            };
            if debts.is_empty() {
                warn!("no debts to solve");
            }
            let results = payoff_all(&debts);
            emit(cli.json, &results, || print_debts(&results))
        }

        Command::Project {
            start_age,
            retire_age,
            end_age,
            opening,
            net_return,
            contribution,
            contribution_tax,
            drawdown,
            inflation,
            sweep,
        } => {
            let base = &plan.projection;
            let assumptions = ProjectionAssumptions {
                start_age: start_age.unwrap_or(base.start_age),
                retire_age: retire_age.unwrap_or(base.retire_age),
                end_age: end_age.unwrap_or(base.end_age),
                opening: opening.unwrap_or(base.opening),
                net_return_percent: net_return.unwrap_or(base.net_return_percent),
                gross_contribution: contribution.unwrap_or(base.gross_contribution),
                contribution_tax_percent: contribution_tax
                    .unwrap_or(base.contribution_tax_percent),
                drawdown: drawdown.unwrap_or(base.drawdown),
                inflation_percent: inflation.unwrap_or(base.inflation_percent),
            };
            assumptions.validate()?;

            let runner = ScenarioRunner::new(assumptions);
            if sweep.is_empty() {
                let result = runner.run();
                emit(cli.json, &result, || print_projection(&result))
            } else {
                let results = runner.run_return_sweep(&sweep);
                let summaries: Vec<_> = results.iter().map(ProjectionResult::summary).collect();
                emit(cli.json, &summaries, || {
                    println!("{:>10} {:>16} {:>16} {:>10}", "Return%", "Final", "Final (real)", "Depleted");
                    println!("{}", "-".repeat(56));
                    for (rate, s) in sweep.iter().zip(&summaries) {
                        let depleted = s
                            .depleted_at_age
                            .map(|age| age.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        println!(
                            "{:>10.2} {:>16.2} {:>16.2} {:>10}",
                            rate, s.final_nominal, s.final_real, depleted
                        );
                    }
                })
            }
        }

        Command::Shortfall {
            spend,
            from_budget,
            pension,
            part_time_income,
            part_time_years,
            years,
            real_rate,
        } => {
            if from_budget && plan.future_budget.phases.is_empty() {
                bail!("--from-budget needs a future budget in the plan file");
            }
            let mut inputs = plan.shortfall_inputs(from_budget);
            if let Some(v) = spend {
                inputs.annual_spend = v;
            }
            if let Some(v) = pension {
                inputs.pension_income = v;
            }
            if let Some(v) = part_time_income {
                inputs.part_time_income = v;
            }
            if let Some(v) = part_time_years {
                inputs.part_time_years = v;
            }
            if let Some(v) = years {
                inputs.horizon_years = v;
            }
            if let Some(v) = real_rate {
                inputs.real_rate_percent = v;
            }
            inputs.validate()?;

            let result = compute_shortfall(&inputs);
            emit(cli.json, &result, || {
                println!("Annual shortfall:        ${:.0}", result.annual_shortfall);
                println!("Lump sum (rule of thumb): ${:.0}", result.lump_sum_simple);
                println!("Lump sum (annuity):      ${:.0}", result.lump_sum_annuity);
            })
        }

        Command::Savings {
            start,
            monthly,
            rate,
            period,
            months,
        } => {
            let mut savings = plan.savings.clone();
            if let Some(v) = start {
                savings.start = v;
            }
            if let Some(v) = monthly {
                savings.monthly = v;
            }
            if let Some(v) = rate {
                savings.rate_percent = v;
            }
            if let Some(v) = period {
                savings.period = v;
            }
            if months {
                savings.unit = PeriodUnit::Months;
            }
            savings.validate()?;

            let value = savings.future_value();
            emit(cli.json, &value, || {
                println!("Future value after {} months: ${value:.2}", savings.months());
            })
        }

        Command::Life {
            cohort,
            percentile,
            age,
        } => {
            let cohort: Cohort = cohort.parse()?;
            let percentile: Percentile = percentile.parse()?;
            let Some(estimate) = LifeTable.estimate_now(cohort, percentile, age) else {
                bail!("age must be a finite number");
            };
            emit(cli.json, &estimate, || {
                println!("Expected lifespan ({percentile}): {}", estimate.expected_lifespan);
                println!("  Years remaining: {}", estimate.years_remaining);
                println!("  Estimated year:  {}", estimate.estimated_year);
            })
        }

        Command::Budget => {
            let budget = &plan.future_budget;
            let checks: Vec<_> = plan
                .spending
                .iter()
                .map(|a: &SpendingAllocation| (a.phase.clone(), a.check_against(budget)))
                .collect();
            let report = BudgetReport {
                total_years: budget.total_years(),
                lifetime_total: budget.lifetime_total(),
                average_annual: budget.average_annual(),
                allocations: &checks,
            };
            emit(cli.json, &report, || {
                println!("{:<28} {:>6} {:>14}", "Phase", "Years", "Annual");
                println!("{}", "-".repeat(50));
                for p in &budget.phases {
                    println!("{:<28} {:>6} {:>14.0}", p.phase, p.years_in_phase, p.annual());
                }
                println!("\nTotal years:    {}", report.total_years);
                println!("Lifetime total: ${:.0}", report.lifetime_total);
                println!("Average annual: ${:.0}", report.average_annual);

                if !checks.is_empty() {
                    println!("\n{:<28} {:>12} {:>12} {:>12}", "Allocation", "Total", "Budget", "Surplus");
                    for (phase, c) in &checks {
                        println!("{:<28} {:>12.0} {:>12.0} {:>12.0}", phase, c.total, c.budget, c.surplus);
                    }
                }
            })
        }

        Command::Dashboard => {
            let assets = summarize_assets(&plan.assets);
            let liabilities = summarize_liabilities(&plan.liabilities);
            let dash = compute_dashboard(&plan.dashboard_inputs(), Local::now().year());
            emit(cli.json, &dash, || {
                println!("Net worth:        ${:.0}", dash.net_worth);
                println!("  Assets (excl. home and super): ${:.0}", assets.excluding_home_and_super);
                println!("  Annual loan outgoings:         ${:.0}", liabilities.annual_outgoings);
                println!("Monthly income:   ${:.0}", dash.monthly_income);
                println!("Monthly expenses: ${:.0}", dash.monthly_expenses);
                println!("Monthly savings:  ${:.0}", dash.monthly_savings);

                println!("\n{:>6} {:>14} {:>14}", "Month", "Savings", "Drawdown");
                println!("{}", "-".repeat(36));
                for m in (0..dash.savings_over_time.len()).step_by(12) {
                    println!(
                        "{:>6} {:>14.2} {:>14.2}",
                        dash.savings_over_time.months[m],
                        dash.savings_over_time.values[m],
                        dash.drawdown_over_time.values[m]
                    );
                }
                if let Some(month) = dash.drawdown_over_time.first_zero_month() {
                    println!("\nRetirement balance runs out in month {month}");
                }
            })
        }
    }
}

/// Load the plan file, falling back to defaults when no file is present
fn load_plan(path: Option<&Path>) -> Result<PlanFile> {
    match path {
        Some(path) => {
            PlanFile::load_from(path).with_context(|| format!("loading plan {}", path.display()))
        }
        None if Path::new(DEFAULT_PLAN_PATH).exists() => Ok(PlanFile::load()?),
        None => Ok(PlanFile::default()),
    }
}

fn emit<T: Serialize>(json: bool, value: &T, render: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        render();
    }
    Ok(())
}

fn describe_payoff(result: &PayoffResult) -> String {
    match result {
        PayoffResult::Immediate => "Nothing to repay".to_string(),
        PayoffResult::Never => "Payment too small to ever repay".to_string(),
        PayoffResult::Finite { periods } => {
            format!("{periods} months ({:.2} years)", *periods as f64 / 12.0)
        }
    }
}

fn print_debts(results: &[DebtPayoff]) {
    println!("{:<24} {:>14} {:>10} {:>10}", "Debt", "Principal", "Payment", "Years");
    println!("{}", "-".repeat(61));
    for d in results {
        let years = match d.result {
            PayoffResult::Immediate => "-".to_string(),
            PayoffResult::Never => "never".to_string(),
            PayoffResult::Finite { .. } => format!("{:.2}", d.result.years().unwrap_or_default()),
        };
        println!("{:<24} {:>14.2} {:>10.2} {:>10}", d.name, d.principal, d.payment, years);
    }
}

fn print_projection(result: &ProjectionResult) {
    println!(
        "{:>4} {:>4} {:>14} {:>12} {:>10} {:>12} {:>12} {:>12} {:>14} {:>14}",
        "Year", "Age", "Opening", "GrossContr", "ContrTax", "NetContr", "NetReturn", "Drawdown", "Closing", "Real"
    );
    println!("{}", "-".repeat(118));
    for r in &result.rows {
        println!(
            "{:>4} {:>4} {:>14.2} {:>12.2} {:>10.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2} {:>14.2}",
            r.year,
            r.age,
            r.opening,
            r.gross_contribution,
            r.contribution_tax,
            r.net_contribution,
            r.net_return,
            r.drawdown,
            r.closing,
            r.real_closing,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Final balance:        ${:.2}", summary.final_nominal);
    println!("  Final balance (real): ${:.2}", summary.final_real);
    if let Some(age) = summary.depleted_at_age {
        println!("  Balance exhausted at age {age}");
    }
}

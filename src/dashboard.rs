//! Dashboard figures: net worth, monthly savings and ten-year balance paths
//!
//! All amounts are monthly except the asset and liability balances. The
//! savings and drawdown paths use fixed assumptions (3% a year compounded
//! monthly, $3000 monthly withdrawal) so dashboards stay comparable.

use serde::{Deserialize, Serialize};

/// Months covered by each path (months 0..=120)
pub const SERIES_MONTHS: u32 = 120;

/// Annual growth used for both paths
pub const SERIES_ANNUAL_RATE: f64 = 0.03;

/// Monthly withdrawal in the drawdown path
pub const DRAWDOWN_WITHDRAWAL: f64 = 3000.0;

/// Income assumed when none is recorded
pub const FALLBACK_MONTHLY_INCOME: f64 = 5000.0;

/// Drawdown starting balance when the super series is empty
pub const FALLBACK_RETIREMENT_BALANCE: f64 = 200_000.0;

/// Liability types counted towards total liabilities
pub const LIABILITY_TYPES: [&str; 7] = [
    "Mortgage",
    "Credit Card",
    "Personal Loan",
    "Car Loan",
    "Student Loan",
    "Tax Payable",
    "Other",
];

/// An asset row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetItem {
    pub category: String,
    pub amount: f64,
    pub include: bool,
}

impl Default for AssetItem {
    fn default() -> Self {
        Self {
            category: String::new(),
            amount: 0.0,
            include: true,
        }
    }
}

/// A liability row with its balance and monthly repayment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiabilityItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub monthly: f64,
    pub include: bool,
}

impl Default for LiabilityItem {
    fn default() -> Self {
        Self {
            kind: String::new(),
            amount: 0.0,
            monthly: 0.0,
            include: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetTotals {
    pub total: f64,
    pub home: f64,
    pub superannuation: f64,
    /// Floored at zero
    pub excluding_home_and_super: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiabilityTotals {
    /// Balances of recognized liability types
    pub total: f64,
    /// Monthly repayments of every included row, times twelve
    pub annual_outgoings: f64,
}

/// Totals over included assets; categories match case-insensitively
pub fn summarize_assets(items: &[AssetItem]) -> AssetTotals {
    let mut total = 0.0;
    let mut home = 0.0;
    let mut superannuation = 0.0;

    for item in items.iter().filter(|i| i.include) {
        total += item.amount;
        match item.category.trim().to_lowercase().as_str() {
            "home" => home += item.amount,
            "superannuation" => superannuation += item.amount,
            _ => {}
        }
    }

    AssetTotals {
        total,
        home,
        superannuation,
        excluding_home_and_super: (total - home - superannuation).max(0.0),
    }
}

/// Totals over included liabilities
pub fn summarize_liabilities(items: &[LiabilityItem]) -> LiabilityTotals {
    let mut total = 0.0;
    let mut annual_outgoings = 0.0;

    for item in items.iter().filter(|i| i.include) {
        annual_outgoings += item.monthly * 12.0;
        if LIABILITY_TYPES.contains(&item.kind.trim()) {
            total += item.amount;
        }
    }

    LiabilityTotals {
        total,
        annual_outgoings,
    }
}

/// Yearly super balances; without recorded values a 5% path from $10,000
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperGrowth {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

impl SuperGrowth {
    pub fn fallback(first_year: i32) -> Self {
        let years: Vec<i32> = (first_year..first_year + 10).collect();
        let values = (0..years.len()).map(|i| 10_000.0 * 1.05_f64.powi(i as i32)).collect();
        Self { years, values }
    }

    /// Last recorded balance, the drawdown path's starting point
    pub fn retirement_balance(&self) -> f64 {
        self.values.last().copied().unwrap_or(FALLBACK_RETIREMENT_BALANCE)
    }
}

/// Monthly totals feeding the dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardInputs {
    pub assets_total: f64,
    pub liabilities_total: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Merged into expenses
    pub monthly_subscriptions: f64,
    pub super_growth: Option<SuperGrowth>,
}

impl DashboardInputs {
    /// Copy with balances taken from asset and liability rows
    pub fn with_item_totals(&self, assets: &AssetTotals, liabilities: &LiabilityTotals) -> Self {
        Self {
            assets_total: assets.total,
            liabilities_total: liabilities.total,
            ..self.clone()
        }
    }
}

/// A value per month, starting at month 0
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    pub months: Vec<u32>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    fn with_capacity(points: usize) -> Self {
        Self {
            months: Vec::with_capacity(points),
            values: Vec::with_capacity(points),
        }
    }

    fn push(&mut self, month: u32, value: f64) {
        self.months.push(month);
        self.values.push(value);
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First month the value reaches zero
    pub fn first_zero_month(&self) -> Option<u32> {
        self.months
            .iter()
            .zip(&self.values)
            .find(|(_, v)| **v <= 0.0)
            .map(|(m, _)| *m)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub net_worth: f64,
    /// Income after the fallback is applied
    pub monthly_income: f64,
    /// Expenses including subscriptions
    pub monthly_expenses: f64,
    pub monthly_savings: f64,
    pub super_growth: SuperGrowth,
    pub savings_over_time: TimeSeries,
    pub drawdown_over_time: TimeSeries,
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Savings accumulated monthly, nothing in month 0
pub fn savings_path(monthly_savings: f64) -> TimeSeries {
    let rate = SERIES_ANNUAL_RATE / 12.0;
    let mut series = TimeSeries::with_capacity(SERIES_MONTHS as usize + 1);
    let mut balance = 0.0;

    for month in 0..=SERIES_MONTHS {
        if month > 0 {
            balance = balance * (1.0 + rate) + monthly_savings;
        }
        series.push(month, round_cents(balance));
    }
    series
}

/// Balance after growth and a withdrawal every month, month 0 included
///
/// The running balance may go negative; reported values are floored at zero.
pub fn drawdown_path(starting_balance: f64) -> TimeSeries {
    let rate = SERIES_ANNUAL_RATE / 12.0;
    let mut series = TimeSeries::with_capacity(SERIES_MONTHS as usize + 1);
    let mut balance = starting_balance;

    for month in 0..=SERIES_MONTHS {
        balance = balance * (1.0 + rate) - DRAWDOWN_WITHDRAWAL;
        series.push(month, round_cents(balance).max(0.0));
    }
    series
}

/// Build the dashboard; `first_year` labels the fallback super path
pub fn compute_dashboard(inputs: &DashboardInputs, first_year: i32) -> Dashboard {
    let monthly_income = if inputs.monthly_income == 0.0 {
        FALLBACK_MONTHLY_INCOME
    } else {
        inputs.monthly_income
    };
    let monthly_expenses = inputs.monthly_expenses + inputs.monthly_subscriptions;
    let monthly_savings = (monthly_income - monthly_expenses).max(0.0);

    let super_growth = inputs
        .super_growth
        .clone()
        .unwrap_or_else(|| SuperGrowth::fallback(first_year));

    Dashboard {
        net_worth: inputs.assets_total - inputs.liabilities_total,
        monthly_income,
        monthly_expenses,
        monthly_savings,
        savings_over_time: savings_path(monthly_savings),
        drawdown_over_time: drawdown_path(super_growth.retirement_balance()),
        super_growth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn asset(category: &str, amount: f64, include: bool) -> AssetItem {
        AssetItem {
            category: category.to_string(),
            amount,
            include,
        }
    }

    fn liability(kind: &str, amount: f64, monthly: f64) -> LiabilityItem {
        LiabilityItem {
            kind: kind.to_string(),
            amount,
            monthly,
            include: true,
        }
    }

    #[test]
    fn test_asset_totals() {
        let totals = summarize_assets(&[
            asset("Home", 650_000.0, true),
            asset("superannuation", 310_000.0, true),
            asset("Shares", 40_000.0, true),
            asset("Boat", 25_000.0, false),
        ]);
        assert_abs_diff_eq!(totals.total, 1_000_000.0);
        assert_abs_diff_eq!(totals.home, 650_000.0);
        assert_abs_diff_eq!(totals.superannuation, 310_000.0);
        assert_abs_diff_eq!(totals.excluding_home_and_super, 40_000.0);
    }

    #[test]
    fn test_liability_totals() {
        let mut excluded = liability("Car Loan", 9_000.0, 300.0);
        excluded.include = false;
        let totals = summarize_liabilities(&[
            liability("Mortgage", 400_000.0, 2_500.0),
            liability("Gym", 0.0, 50.0),
            liability("Layby", 800.0, 100.0),
            excluded,
        ]);
        // Unrecognized types still add outgoings but no balance
        assert_abs_diff_eq!(totals.total, 400_000.0);
        assert_abs_diff_eq!(totals.annual_outgoings, 31_800.0);
    }

    #[test]
    fn test_net_worth_and_savings() {
        let inputs = DashboardInputs {
            assets_total: 500_000.0,
            liabilities_total: 320_000.0,
            monthly_income: 7_000.0,
            monthly_expenses: 5_500.0,
            monthly_subscriptions: 500.0,
            super_growth: None,
        };
        let dash = compute_dashboard(&inputs, 2025);
        assert_abs_diff_eq!(dash.net_worth, 180_000.0);
        assert_abs_diff_eq!(dash.monthly_expenses, 6_000.0);
        assert_abs_diff_eq!(dash.monthly_savings, 1_000.0);
    }

    #[test]
    fn test_missing_income_uses_fallback() {
        let inputs = DashboardInputs {
            monthly_expenses: 6_000.0,
            ..Default::default()
        };
        let dash = compute_dashboard(&inputs, 2025);
        assert_abs_diff_eq!(dash.monthly_income, FALLBACK_MONTHLY_INCOME);
        // Overspending saves nothing rather than a negative amount
        assert_eq!(dash.monthly_savings, 0.0);
        assert!(dash.savings_over_time.values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_savings_path() {
        let series = savings_path(1_000.0);
        assert_eq!(series.len(), 121);
        assert_eq!(series.months[0], 0);
        assert_eq!(series.values[0], 0.0);
        assert_abs_diff_eq!(series.values[1], 1_000.0);
        assert_abs_diff_eq!(series.values[2], 2_002.5);
        assert_abs_diff_eq!(series.last().unwrap(), 139_741.42, epsilon = 0.01);
    }

    #[test]
    fn test_drawdown_path_floors_at_zero() {
        let series = drawdown_path(200_000.0);
        assert_eq!(series.len(), 121);
        // The first withdrawal lands in month 0
        assert_abs_diff_eq!(series.values[0], 197_500.0);
        assert_abs_diff_eq!(series.values[1], 194_993.75);
        assert_eq!(series.first_zero_month(), Some(73));
        assert!(series.values.iter().all(|v| *v >= 0.0));
        assert_eq!(series.last(), Some(0.0));
    }

    #[test]
    fn test_super_fallback_feeds_drawdown() {
        let dash = compute_dashboard(&DashboardInputs::default(), 2025);
        assert_eq!(dash.super_growth.years.first(), Some(&2025));
        assert_eq!(dash.super_growth.years.last(), Some(&2034));
        assert_relative_eq!(dash.super_growth.retirement_balance(), 15_513.28, epsilon = 0.01);
        assert_abs_diff_eq!(dash.drawdown_over_time.values[0], 12_552.07, epsilon = 0.01);
        assert_eq!(dash.drawdown_over_time.first_zero_month(), Some(5));
    }

    #[test]
    fn test_empty_super_series_uses_fallback_balance() {
        let empty = SuperGrowth {
            years: vec![],
            values: vec![],
        };
        assert_abs_diff_eq!(empty.retirement_balance(), FALLBACK_RETIREMENT_BALANCE);
    }

    #[test]
    fn test_item_totals_override_balances() {
        let assets = summarize_assets(&[asset("Cash", 20_000.0, true)]);
        let liabilities = summarize_liabilities(&[liability("Credit Card", 5_000.0, 150.0)]);
        let inputs = DashboardInputs::default().with_item_totals(&assets, &liabilities);
        let dash = compute_dashboard(&inputs, 2025);
        assert_abs_diff_eq!(dash.net_worth, 15_000.0);
    }

    #[test]
    fn test_repeatable() {
        let inputs = DashboardInputs {
            monthly_income: 6_250.0,
            monthly_expenses: 4_100.0,
            ..Default::default()
        };
        assert_eq!(compute_dashboard(&inputs, 2025), compute_dashboard(&inputs, 2025));
    }
}

//! Totals and dashboard rendering
//!
//! The spent total is bold and an over-allocation warning is red. Styling is
//! skipped when `NO_COLOR` is set.

use crossterm::style::Stylize;

use super::category::{format_fixed_table, format_monthly_table};
use super::format::{color_enabled, format_currency, format_money, format_percent, paint};
use super::transaction::format_transaction_table;
use crate::reports::Dashboard;
use crate::services::{PeriodProgress, TotalsSummary};

/// Period totals as a short block of text
pub fn format_totals(totals: &TotalsSummary, progress: &PeriodProgress, symbol: &str) -> String {
    let color = color_enabled();
    let mut output = String::new();

    output.push_str(&format!(
        "Total Spent: {} ({})\n",
        paint(format_money(totals.total_spent, symbol), color, |s| s.bold()),
        format_percent(totals.percent_spent)
    ));
    output.push_str(&format!(
        "Days Passed: {} of {} ({:.1}%) over {:.1} months\n",
        progress.passed_days, totals.total_days, totals.percent_passed, totals.num_months
    ));
    output.push_str(&format!(
        "Daily Gain:  {}\n",
        format_percent(totals.daily_gain)
    ));
    output.push_str(&format!(
        "Salary:      {} for the period\n",
        format_currency(totals.period_salary, symbol)
    ));
    output.push_str(&format!(
        "Allocated:   {} ({} monthly, {} fixed)\n",
        format_currency(totals.allocated_per_period, symbol),
        format_currency(totals.monthly_allocated_per_period, symbol),
        format_currency(totals.fixed_allocated_per_period, symbol)
    ));

    let unallocated = format_currency(totals.unallocated, symbol);
    if totals.is_over_allocated() {
        output.push_str(&format!(
            "Unallocated: {} (over-allocated)\n",
            paint(unallocated, color, |s| s.red())
        ));
    } else {
        output.push_str(&format!("Unallocated: {}\n", unallocated));
    }

    output
}

/// The full dashboard: totals, recent transactions, then both category tables
pub fn format_dashboard(dashboard: &Dashboard, symbol: &str) -> String {
    let progress = &dashboard.snapshot.progress;

    let mut output = format_totals(&dashboard.totals, progress, symbol);
    output.push('\n');
    output.push_str(&format_transaction_table(&dashboard.transactions, symbol));
    output.push('\n');
    output.push_str(&format_monthly_table(&dashboard.monthly, symbol));
    output.push('\n');
    output.push_str(&format_fixed_table(&dashboard.fixed, symbol));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn summary(unallocated: f64) -> (TotalsSummary, PeriodProgress) {
        let totals = TotalsSummary {
            total_days: 364,
            num_months: 364.0 / 30.0,
            period_salary: 3_640_000.0,
            monthly_allocated_per_period: 242_666.67,
            fixed_allocated_per_period: 200_000.0,
            allocated_per_period: 442_666.67,
            unallocated,
            total_spent: Money::from_units(1820),
            percent_spent: 5.0,
            percent_passed: 50.0,
            daily_gain: 0.27,
        };
        let progress = PeriodProgress {
            total_days: 364,
            passed_days: 182,
            daily_gain: 0.27,
            percent_passed: 50.0,
        };
        (totals, progress)
    }

    #[test]
    fn test_format_totals() {
        let (totals, progress) = summary(3_197_333.33);
        let output = format_totals(&totals, &progress, "$");

        assert!(output.contains("$1,820"));
        assert!(output.contains("(5.00%)"));
        assert!(output.contains("Days Passed: 182 of 364 (50.0%) over 12.1 months"));
        assert!(output.contains("$36,400"));
        assert!(output.contains("Unallocated: $31,973"));
        assert!(!output.contains("over-allocated"));
    }

    #[test]
    fn test_over_allocation_is_flagged() {
        let (totals, progress) = summary(-50_000.0);
        let output = format_totals(&totals, &progress, "$");

        assert!(output.contains("-$500"));
        assert!(output.contains("over-allocated"));
    }
}

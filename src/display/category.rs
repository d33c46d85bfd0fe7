//! Monthly and fixed category tables

use crossterm::style::Stylize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{
    color_enabled, format_currency, format_money, format_percent, format_relative_days, paint,
};
use crate::reports::{FixedCategoryRow, MonthlyCategoryRow};
use crate::services::{PaceStatus, Pacing};

const NOT_APPLICABLE: &str = "n/a";

#[derive(Tabled)]
struct MonthlyLine {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "AvgCost/Item")]
    cost_per_item: String,
    #[tabled(rename = "Num/Mo")]
    num_items: i64,
    #[tabled(rename = "Ttl/Mo")]
    monthly: String,
    #[tabled(rename = "Ttl/Yr")]
    yearly: String,
    #[tabled(rename = "Ttl/Period")]
    per_period: String,
    #[tabled(rename = "%Income")]
    percent_income: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "%Spent")]
    percent_spent: String,
    #[tabled(rename = "Cut")]
    cut: String,
}

#[derive(Tabled)]
struct FixedLine {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "%Spent")]
    percent_spent: String,
    #[tabled(rename = "Cut")]
    cut: String,
}

/// Signed distance from even pacing, e.g. `-2 weeks` when behind
pub fn format_cut(pacing: &Pacing) -> String {
    format!(
        "{}{}",
        pacing.status.glyph(),
        format_relative_days(pacing.magnitude_days())
    )
}

/// The cut cell: green when ahead, red when behind
fn cut_cell(pacing: &Pacing, color: bool) -> String {
    let cut = format_cut(pacing);
    match pacing.status {
        PaceStatus::Ahead => paint(cut, color, |s| s.green()),
        PaceStatus::Behind => paint(cut, color, |s| s.red()),
        PaceStatus::OnPace => cut,
    }
}

fn pacing_cells(pacing: Option<&Pacing>, color: bool) -> (String, String) {
    match pacing {
        Some(p) => (format_percent(p.percent_spent), cut_cell(p, color)),
        None => (NOT_APPLICABLE.to_string(), NOT_APPLICABLE.to_string()),
    }
}

/// Render monthly categories with spend and pacing
pub fn format_monthly_table(rows: &[MonthlyCategoryRow], symbol: &str) -> String {
    if rows.is_empty() {
        return "No monthly categories.\n".to_string();
    }

    let color = color_enabled();
    let lines = rows.iter().map(|row| {
        let (percent_spent, cut) = pacing_cells(row.pacing.as_ref(), color);
        MonthlyLine {
            name: row.name.clone(),
            cost_per_item: format_money(row.cost_per_item, symbol),
            num_items: row.num_items_per_month,
            monthly: format_money(row.monthly_total, symbol),
            yearly: format_money(row.yearly_total, symbol),
            per_period: format_currency(row.total_per_period, symbol),
            percent_income: row
                .percent_income
                .map(format_percent)
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            spent: format_money(row.spent, symbol),
            percent_spent,
            cut,
        }
    });

    let mut table = Table::new(lines);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Render fixed categories with spend and pacing
pub fn format_fixed_table(rows: &[FixedCategoryRow], symbol: &str) -> String {
    if rows.is_empty() {
        return "No fixed categories.\n".to_string();
    }

    let color = color_enabled();
    let lines = rows.iter().map(|row| {
        let (percent_spent, cut) = pacing_cells(row.pacing.as_ref(), color);
        FixedLine {
            name: row.name.clone(),
            cost: format_money(row.cost, symbol),
            spent: format_money(row.spent, symbol),
            percent_spent,
            cut,
        }
    });

    let mut table = Table::new(lines);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FixedCategoryId, Money, MonthlyCategoryId};
    use crate::services::PacingProjector;

    fn behind() -> Pacing {
        PacingProjector::with_rates(50.0, 0.2747)
            .project(240_000.0, Money::from_units(1300))
            .unwrap()
    }

    #[test]
    fn test_format_cut() {
        assert_eq!(format_cut(&behind()), "-2 weeks");

        let ahead = Pacing {
            percent_spent: 10.0,
            drift: -40.0,
            cut_days: -5,
            status: PaceStatus::Ahead,
        };
        assert_eq!(format_cut(&ahead), "+5 days");
    }

    #[test]
    fn test_cut_cell_colours() {
        let ahead = Pacing {
            percent_spent: 10.0,
            drift: -40.0,
            cut_days: -5,
            status: PaceStatus::Ahead,
        };
        let on_pace = Pacing {
            percent_spent: 50.0,
            drift: 0.0,
            cut_days: 0,
            status: PaceStatus::OnPace,
        };

        assert_eq!(cut_cell(&behind(), false), "-2 weeks");
        assert_eq!(cut_cell(&behind(), true), "-2 weeks".red().to_string());
        assert_eq!(cut_cell(&ahead, true), "+5 days".green().to_string());
        assert_eq!(cut_cell(&on_pace, true), format_cut(&on_pace));
    }

    #[test]
    fn test_monthly_table() {
        let rows = vec![MonthlyCategoryRow {
            id: MonthlyCategoryId::new(1),
            name: "Groceries".into(),
            cost_per_item: Money::from_units(50),
            num_items_per_month: 4,
            monthly_total: Money::from_units(200),
            yearly_total: Money::from_units(2400),
            total_per_period: 242_666.67,
            percent_income: Some(6.593),
            spent: Money::from_units(1300),
            pacing: Some(behind()),
        }];

        let output = format_monthly_table(&rows, "$");
        assert!(output.contains("Groceries"));
        assert!(output.contains("$2,400"));
        assert!(output.contains("$2,427"));
        assert!(output.contains("6.59%"));
        assert!(output.contains("54.17%"));
        assert!(output.contains("-2 weeks"));
    }

    #[test]
    fn test_fixed_table_flags_missing_allocation() {
        let rows = vec![FixedCategoryRow {
            id: FixedCategoryId::new(1),
            name: "Freebies".into(),
            cost: Money::zero(),
            spent: Money::from_units(10),
            pacing: None,
        }];

        let output = format_fixed_table(&rows, "$");
        assert!(output.contains("Freebies"));
        assert!(output.contains("n/a"));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_monthly_table(&[], "$"), "No monthly categories.\n");
        assert_eq!(format_fixed_table(&[], "$"), "No fixed categories.\n");
    }
}

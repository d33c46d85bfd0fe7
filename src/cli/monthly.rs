//! Monthly category CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::require_settings;
use super::transaction::symbol;
use crate::config::Settings;
use crate::display::{format_monthly_table, format_money};
use crate::error::BudgetResult;
use crate::reports::{monthly_rows, BudgetSnapshot};
use crate::services::{parse_cost, CategoryService};
use crate::storage::Storage;

/// Monthly category subcommands
#[derive(Subcommand, Debug)]
pub enum MonthlyCommands {
    /// Add a monthly category
    #[command(alias = "a")]
    Add {
        /// Category name
        name: String,
        /// Average cost of one item
        cost_per_item: String,
        /// Items expected each month
        num_items_per_month: i64,
    },
    /// List monthly categories with spend and pacing (the default)
    #[command(alias = "l")]
    List,
}

/// Handle `budget monthly`
pub fn handle_monthly_command(
    storage: &Storage,
    settings: Option<&Settings>,
    cmd: Option<MonthlyCommands>,
    today: NaiveDate,
) -> BudgetResult<()> {
    match cmd.unwrap_or(MonthlyCommands::List) {
        MonthlyCommands::Add {
            name,
            cost_per_item,
            num_items_per_month,
        } => {
            let cost = parse_cost(&cost_per_item)?;
            let category =
                CategoryService::new(storage).create_monthly(&name, cost, num_items_per_month)?;
            println!(
                "Created monthly category #{}: {} ({} x {} = {}/month)",
                category.id,
                category.name,
                format_money(category.cost_per_item, symbol(settings)),
                category.num_items_per_month,
                format_money(category.monthly_total(), symbol(settings))
            );
        }

        MonthlyCommands::List => {
            let settings = require_settings(settings)?;
            let snapshot = BudgetSnapshot::new(settings, today)?;
            println!(
                "Daily gain: {:.2} / Percent passed: {:.2}",
                snapshot.progress.daily_gain, snapshot.progress.percent_passed
            );
            let rows = monthly_rows(storage, &snapshot)?;
            print!("{}", format_monthly_table(&rows, &settings.currency_symbol));
        }
    }

    Ok(())
}

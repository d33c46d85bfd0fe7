//! Fixed category CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::require_settings;
use super::transaction::symbol;
use crate::config::Settings;
use crate::display::{format_fixed_table, format_money};
use crate::error::BudgetResult;
use crate::reports::{fixed_rows, BudgetSnapshot};
use crate::services::{parse_cost, CategoryService};
use crate::storage::Storage;

/// Fixed category subcommands
#[derive(Subcommand, Debug)]
pub enum FixedCommands {
    /// Add a fixed category
    #[command(alias = "a")]
    Add {
        /// Category name
        name: String,
        /// Flat allocation for the whole period
        cost: String,
    },
    /// List fixed categories with spend (the default)
    #[command(alias = "l")]
    List,
}

/// Handle `budget fixed`
pub fn handle_fixed_command(
    storage: &Storage,
    settings: Option<&Settings>,
    cmd: Option<FixedCommands>,
    today: NaiveDate,
) -> BudgetResult<()> {
    match cmd.unwrap_or(FixedCommands::List) {
        FixedCommands::Add { name, cost } => {
            let category = CategoryService::new(storage).create_fixed(&name, parse_cost(&cost)?)?;
            println!(
                "Created fixed category #{}: {} ({})",
                category.id,
                category.name,
                format_money(category.cost, symbol(settings))
            );
        }

        FixedCommands::List => {
            let settings = require_settings(settings)?;
            let snapshot = BudgetSnapshot::new(settings, today)?;
            let rows = fixed_rows(storage, &snapshot)?;
            print!("{}", format_fixed_table(&rows, &settings.currency_symbol));
        }
    }

    Ok(())
}

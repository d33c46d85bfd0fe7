//! Totals, dashboard and audit log commands

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_dashboard, format_totals};
use crate::error::BudgetResult;
use crate::reports::{BudgetSnapshot, Dashboard};
use crate::storage::Storage;

/// Handle `budget totals`
pub fn handle_totals(storage: &Storage, settings: &Settings, today: NaiveDate) -> BudgetResult<()> {
    let snapshot = BudgetSnapshot::new(settings, today)?;
    let totals = snapshot.totals(storage)?;
    print!(
        "{}",
        format_totals(&totals, &snapshot.progress, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle a bare `budget` invocation
pub fn handle_dashboard(storage: &Storage, settings: &Settings, today: NaiveDate) -> BudgetResult<()> {
    let dashboard = Dashboard::generate(storage, settings, today)?;
    print!("{}", format_dashboard(&dashboard, &settings.currency_symbol));
    Ok(())
}

/// Handle `budget log`
pub fn handle_log(storage: &Storage, count: usize) -> BudgetResult<()> {
    let entries = storage.audit().read_recent(count)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod fixed;
pub mod monthly;
pub mod report;
pub mod transaction;

pub use fixed::{handle_fixed_command, FixedCommands};
pub use monthly::{handle_monthly_command, MonthlyCommands};
pub use report::{handle_dashboard, handle_log, handle_totals};
pub use transaction::{handle_add, handle_list, handle_update, AddArgs, ListArgs, UpdateArgs};

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};

/// Settings for commands that need the salary and period
pub(crate) fn require_settings(settings: Option<&Settings>) -> BudgetResult<&Settings> {
    settings.ok_or_else(|| BudgetError::Config("Not initialized. Run 'budget init' first.".into()))
}

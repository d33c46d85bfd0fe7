//! User settings for cdbudget
//!
//! Holds the annual salary and the budget period dates. Settings are loaded
//! once at startup and passed explicitly to whatever needs them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{BudgetPeriod, Money, Salary};

/// User settings for cdbudget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Annual take-home salary
    pub annual_salary: Money,

    /// First day of the budget period
    pub start_date: NaiveDate,

    /// Last day of the budget period
    pub end_date: NaiveDate,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Settings {
    /// Create settings for a salary and period
    pub fn new(annual_salary: Money, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            schema_version: default_schema_version(),
            annual_salary,
            start_date,
            end_date,
            currency_symbol: default_currency(),
        }
    }

    /// Check that the settings describe a usable budget period
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.start_date >= self.end_date {
            return Err(BudgetError::Config(format!(
                "start_date ({}) must be before end_date ({})",
                self.start_date, self.end_date
            )));
        }

        if self.annual_salary.is_negative() {
            return Err(BudgetError::Config("salary cannot be negative".into()));
        }

        Ok(())
    }

    /// The configured budget period
    pub fn period(&self) -> Result<BudgetPeriod, BudgetError> {
        BudgetPeriod::new(self.start_date, self.end_date)
            .map_err(|e| BudgetError::Config(e.to_string()))
    }

    /// The configured salary
    pub fn salary(&self) -> Salary {
        Salary::new(self.annual_salary)
    }

    /// Load settings from disk
    ///
    /// Unlike most stores, a missing settings file is an error: the budget
    /// period cannot be guessed.
    pub fn load(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Err(BudgetError::Config(format!(
                "No settings found at {}. Run 'budget init' first.",
                settings_path.display()
            )));
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

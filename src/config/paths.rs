//! Path management for cdbudget
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory (`--data-dir` / `CDBUDGET_DATA_DIR`)
//! 2. Unix: `$XDG_CONFIG_HOME/cdbudget` or `~/.config/cdbudget`
//! 3. Otherwise the platform config directory reported by `directories`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::BudgetError;

/// Manages all paths used by cdbudget
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all cdbudget data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the base directory, honouring an explicit override first
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new(override_dir: Option<PathBuf>) -> Result<Self, BudgetError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to budget.json (monthly and fixed categories)
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if cdbudget has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    if cfg!(not(windows)) {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg).join("cdbudget"));
        }
    }

    let dirs = BaseDirs::new()
        .ok_or_else(|| BudgetError::Config("Could not determine home directory".into()))?;

    if cfg!(windows) {
        Ok(dirs.config_dir().join("cdbudget"))
    } else {
        Ok(dirs.home_dir().join(".config").join("cdbudget"))
    }
}

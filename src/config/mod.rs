//! Configuration module for cdbudget
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Salary and budget period settings

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;

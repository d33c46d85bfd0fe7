//! cdbudget - terminal budget tracker
//!
//! Records transactions against monthly and fixed expense categories and
//! paces the spending against a salary over one configured budget period.
//!
//! # Architecture
//!
//! - `config`: Paths and user settings (salary, period dates)
//! - `error`: Custom error types
//! - `models`: Money, categories, transactions, the budget period
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging of every write
//! - `services`: Period clock, totals, pacing and the write services
//! - `reports`: Typed report rows and the dashboard
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cdbudget::config::{BudgetPaths, Settings};
//! use cdbudget::reports::Dashboard;
//! use cdbudget::storage::Storage;
//!
//! let paths = BudgetPaths::new(None)?;
//! let settings = Settings::load(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let dashboard = Dashboard::generate(&storage, &settings, chrono::Local::now().date_naive())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};

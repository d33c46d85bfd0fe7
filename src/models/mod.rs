//! Core data models for cdbudget
//!
//! This module contains the data structures of the budgeting domain:
//! categories, transactions, money, and the budget period.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{CategoryKind, CategoryRef, FixedCategory, MonthlyCategory};
pub use ids::{FixedCategoryId, MonthlyCategoryId, TransactionId};
pub use money::Money;
pub use period::{BudgetPeriod, Salary};
pub use transaction::{Transaction, TransactionPatch};

/// An entity that can be found by numeric id or by name
pub trait Lookup {
    fn lookup_id(&self) -> u64;
    fn lookup_name(&self) -> &str;
}

//! Reports for cdbudget
//!
//! Typed result records assembled from storage and the budget arithmetic.
//! Rendering lives in `display`.

pub mod dashboard;

pub use dashboard::{
    fixed_rows, monthly_rows, transaction_rows, BudgetSnapshot, Dashboard, FixedCategoryRow,
    MonthlyCategoryRow, TransactionRow,
};

//! Transaction model
//!
//! A transaction is a single spend (or refund, when the cost is negative),
//! optionally filed under one monthly or one fixed category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryRef;
use super::ids::TransactionId;
use super::money::Money;
use super::Lookup;

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Display name
    pub name: String,

    /// Amount spent; negative for refunds
    pub cost: Money,

    /// The category this transaction counts against, if any
    #[serde(default)]
    pub category: Option<CategoryRef>,

    /// When the transaction happened
    pub time: DateTime<Utc>,

    /// Flagged for follow-up
    #[serde(default)]
    pub marked: bool,
}

impl Transaction {
    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.name.trim().is_empty() {
            return Err(TransactionValidationError::EmptyName);
        }
        Ok(())
    }
}

impl Lookup for Transaction {
    fn lookup_id(&self) -> u64 {
        self.id.value()
    }

    fn lookup_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.cost)
    }
}

/// The set of fields an update touches
///
/// Absent fields are left alone. Because `category` is a single
/// [`CategoryRef`], assigning a monthly category drops any fixed one and
/// vice versa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub name: Option<String>,
    pub cost: Option<Money>,
    pub category: Option<CategoryRef>,
    pub marked: Option<bool>,
}

impl TransactionPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the transaction
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Change the cost
    pub fn cost(mut self, cost: Money) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Refile under a different category
    pub fn category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    /// Set or clear the follow-up flag
    pub fn marked(mut self, marked: bool) -> Self {
        self.marked = Some(marked);
        self
    }

    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.cost.is_none() && self.category.is_none() && self.marked.is_none()
    }

    /// Apply the present fields to a transaction
    pub fn apply_to(&self, txn: &mut Transaction) {
        if let Some(name) = &self.name {
            txn.name = name.trim().to_string();
        }
        if let Some(cost) = self.cost {
            txn.cost = cost;
        }
        if let Some(category) = self.category {
            txn.category = Some(category);
        }
        if let Some(marked) = self.marked {
            txn.marked = marked;
        }
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyName,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Transaction name cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

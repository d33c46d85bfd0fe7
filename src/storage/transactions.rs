//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::models::{CategoryKind, CategoryRef, Money, Transaction, TransactionId, TransactionPatch};

use super::file_io::{read_json, write_json_atomic};

/// How many transactions a listing shows unless all are requested
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Serializable transaction data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

fn first_id() -> u64 {
    1
}

impl Default for TransactionData {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            transactions: Vec::new(),
        }
    }
}

/// Fields for a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub name: String,
    pub cost: Money,
    pub category: Option<CategoryRef>,
    pub time: DateTime<Utc>,
    pub marked: bool,
}

/// Options for listing transactions
#[derive(Debug, Clone)]
pub struct TransactionFilter {
    /// Only include marked transactions
    pub marked_only: bool,
    /// Only include transactions filed under this category
    pub category: Option<CategoryRef>,
    /// Maximum number of transactions to return; `None` returns everything
    pub limit: Option<usize>,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            marked_only: false,
            category: None,
            limit: Some(DEFAULT_PAGE_SIZE),
        }
    }
}

impl TransactionFilter {
    /// One page of the most recent transactions
    pub fn new() -> Self {
        Self::default()
    }

    /// Only marked transactions
    pub fn marked(mut self) -> Self {
        self.marked_only = true;
        self
    }

    /// Only transactions in one category
    pub fn category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    /// Drop the page size cap
    pub fn all(mut self) -> Self {
        self.limit = None;
        self
    }
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<TransactionData>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(TransactionData::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TransactionData>, BudgetError> {
        self.data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TransactionData>, BudgetError> {
        self.data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        let mut file_data: TransactionData = read_json(&self.path)?;

        let max_id = file_data
            .transactions
            .iter()
            .map(|t| t.id.value())
            .max()
            .unwrap_or(0);
        file_data.next_id = file_data.next_id.max(max_id + 1);

        *self.write()? = file_data;
        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self.read()?;

        let mut file_data = data.clone();
        sort_newest_first(&mut file_data.transactions);
        write_json_atomic(&self.path, &file_data)
    }

    /// Store a new transaction with the next free id
    pub fn insert(&self, new: NewTransaction) -> Result<Transaction, BudgetError> {
        let mut data = self.write()?;

        let txn = Transaction {
            id: TransactionId::new(data.next_id),
            name: new.name,
            cost: new.cost,
            category: new.category,
            time: new.time,
            marked: new.marked,
        };
        txn.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        data.next_id += 1;
        data.transactions.push(txn.clone());
        Ok(txn)
    }

    /// Apply a patch, returning the transaction before and after
    pub fn update(
        &self,
        id: TransactionId,
        patch: &TransactionPatch,
    ) -> Result<(Transaction, Transaction), BudgetError> {
        let mut data = self.write()?;

        let txn = data
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;

        let before = txn.clone();
        let mut after = before.clone();
        patch.apply_to(&mut after);
        after
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        *txn = after.clone();
        Ok((before, after))
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, BudgetError> {
        Ok(self.read()?.transactions.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, BudgetError> {
        let mut transactions = self.read()?.transactions.clone();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// List transactions matching a filter, newest first
    pub fn list(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, BudgetError> {
        let mut transactions: Vec<_> = self
            .read()?
            .transactions
            .iter()
            .filter(|t| !filter.marked_only || t.marked)
            .filter(|t| filter.category.map_or(true, |c| t.category == Some(c)))
            .cloned()
            .collect();

        sort_newest_first(&mut transactions);

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Total cost of every transaction, categorized or not
    pub fn sum_cost(&self) -> Result<Money, BudgetError> {
        Ok(self.read()?.transactions.iter().map(|t| t.cost).sum())
    }

    /// Total cost per category of one kind, keyed by raw category id
    ///
    /// Categories without transactions are absent from the map.
    pub fn sum_cost_grouped(&self, kind: CategoryKind) -> Result<HashMap<u64, Money>, BudgetError> {
        let data = self.read()?;

        let mut sums: HashMap<u64, Money> = HashMap::new();
        for txn in &data.transactions {
            if let Some(category) = txn.category.filter(|c| c.kind() == kind) {
                *sums.entry(category.raw_id()).or_default() += txn.cost;
            }
        }

        Ok(sums)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, BudgetError> {
        Ok(self.read()?.transactions.len())
    }
}

fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.time.cmp(&a.time).then(b.id.cmp(&a.id)));
}

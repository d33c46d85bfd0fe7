//! Transaction service
//!
//! Adding, updating and listing transactions, with name derivation and
//! audit logging.

use chrono::{NaiveDate, Utc};

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryRef, Money, Transaction, TransactionPatch};
use crate::storage::{NewTransaction, Storage, TransactionFilter};

use super::ledger::CategoryLedger;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for adding a transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    /// Explicit name; derived from the category when absent
    pub name: Option<String>,
    pub cost: Money,
    pub category: Option<CategoryRef>,
    pub marked: bool,
}

/// Parse a user-entered cost
pub fn parse_cost(input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|e| BudgetError::Validation(format!("Invalid cost '{}': {}", input, e)))
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction
    ///
    /// Without a name, the transaction is named `<category>-<today>`. With
    /// neither a name nor a category this is a validation error.
    pub fn add(&self, draft: TransactionDraft, today: NaiveDate) -> BudgetResult<Transaction> {
        let ledger = CategoryLedger::new(self.storage);

        let category_name = match draft.category {
            Some(category) => Some(ledger.category_name(category)?.ok_or_else(|| {
                match category {
                    CategoryRef::Monthly(id) => BudgetError::monthly_not_found(id.to_string()),
                    CategoryRef::Fixed(id) => BudgetError::fixed_not_found(id.to_string()),
                }
            })?),
            None => None,
        };

        let explicit = draft
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());

        let name = match (explicit, category_name) {
            (Some(name), _) => name.to_string(),
            (None, Some(category)) => format!("{}-{}", category, today.format("%Y-%m-%d")),
            (None, None) => {
                return Err(BudgetError::Validation(
                    "A transaction needs a name or a category to derive one from".into(),
                ))
            }
        };

        let txn = self.storage.transactions.insert(NewTransaction {
            name,
            cost: draft.cost,
            category: draft.category,
            time: Utc::now(),
            marked: draft.marked,
        })?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.name.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    /// Resolve `query` to one transaction and apply `patch` to it
    pub fn update(&self, query: &str, patch: &TransactionPatch) -> BudgetResult<Transaction> {
        if patch.is_empty() {
            return Err(BudgetError::Validation("Nothing to update".into()));
        }

        let target = CategoryLedger::new(self.storage).resolve_transaction(query)?;
        let (before, after) = self.storage.transactions.update(target.id, patch)?;
        self.storage.transactions.save()?;

        self.storage.log_update(
            EntityType::Transaction,
            after.id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// List transactions, newest first
    pub fn list(&self, filter: &TransactionFilter) -> BudgetResult<Vec<Transaction>> {
        self.storage.transactions.list(filter)
    }
}

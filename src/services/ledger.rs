//! Category ledger
//!
//! Spend aggregation per category and the shared id-or-name resolution used
//! for monthly categories, fixed categories and transactions.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryRef, FixedCategory, Lookup, Money, MonthlyCategory, Transaction};
use crate::storage::Storage;

/// Resolve `query` against `items`
///
/// An integer query is tried as an id first. Otherwise, or when no item has
/// that id, the query is matched as a case-insensitive substring of the
/// names and must match exactly one item.
pub fn resolve_query<T>(items: &[T], query: &str, entity_type: &'static str) -> BudgetResult<T>
where
    T: Lookup + Clone,
{
    let query = query.trim();

    if let Ok(id) = query.parse::<u64>() {
        if let Some(item) = items.iter().find(|i| i.lookup_id() == id) {
            return Ok(item.clone());
        }
    }

    let needle = query.to_lowercase();
    let matches: Vec<&T> = items
        .iter()
        .filter(|i| i.lookup_name().to_lowercase().contains(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(BudgetError::NotFound {
            entity_type,
            identifier: query.to_string(),
        }),
        [only] => Ok((*only).clone()),
        many => Err(BudgetError::AmbiguousMatch {
            entity_type,
            query: query.to_string(),
            candidates: many
                .iter()
                .map(|i| format!("#{} {}", i.lookup_id(), i.lookup_name()))
                .collect(),
        }),
    }
}

/// Read-side view over categories and their transactions
pub struct CategoryLedger<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryLedger<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Total cost of the transactions filed under `category`; zero if none
    pub fn aggregate_spend(&self, category: CategoryRef) -> BudgetResult<Money> {
        let sums = self.storage.transactions.sum_cost_grouped(category.kind())?;
        Ok(sums.get(&category.raw_id()).copied().unwrap_or_default())
    }

    pub fn resolve_monthly(&self, query: &str) -> BudgetResult<MonthlyCategory> {
        let all = self.storage.categories.get_all_monthly()?;
        resolve_query(&all, query, "Monthly category")
    }

    pub fn resolve_fixed(&self, query: &str) -> BudgetResult<FixedCategory> {
        let all = self.storage.categories.get_all_fixed()?;
        resolve_query(&all, query, "Fixed category")
    }

    pub fn resolve_transaction(&self, query: &str) -> BudgetResult<Transaction> {
        let all = self.storage.transactions.get_all()?;
        resolve_query(&all, query, "Transaction")
    }

    /// Display name of a referenced category, if it still exists
    pub fn category_name(&self, category: CategoryRef) -> BudgetResult<Option<String>> {
        Ok(match category {
            CategoryRef::Monthly(id) => self.storage.categories.get_monthly(id)?.map(|c| c.name),
            CategoryRef::Fixed(id) => self.storage.categories.get_fixed(id)?.map(|c| c.name),
        })
    }
}

//! Category repository for JSON storage
//!
//! Monthly and fixed categories share budget.json, together with the
//! counters used to hand out sequential ids.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::models::{FixedCategory, FixedCategoryId, Money, MonthlyCategory, MonthlyCategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(default = "first_id")]
    pub next_monthly_id: u64,
    #[serde(default = "first_id")]
    pub next_fixed_id: u64,
    #[serde(default)]
    pub monthly: Vec<MonthlyCategory>,
    #[serde(default)]
    pub fixed: Vec<FixedCategory>,
}

fn first_id() -> u64 {
    1
}

impl Default for CategoryData {
    fn default() -> Self {
        Self {
            next_monthly_id: first_id(),
            next_fixed_id: first_id(),
            monthly: Vec::new(),
            fixed: Vec::new(),
        }
    }
}

/// Repository for monthly and fixed category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<CategoryData>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(CategoryData::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CategoryData>, BudgetError> {
        self.data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CategoryData>, BudgetError> {
        self.data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        let mut file_data: CategoryData = read_json(&self.path)?;

        // Never hand out an id that is already taken, even if the counter was edited by hand
        let max_monthly = file_data.monthly.iter().map(|c| c.id.value()).max().unwrap_or(0);
        let max_fixed = file_data.fixed.iter().map(|c| c.id.value()).max().unwrap_or(0);
        file_data.next_monthly_id = file_data.next_monthly_id.max(max_monthly + 1);
        file_data.next_fixed_id = file_data.next_fixed_id.max(max_fixed + 1);

        *self.write()? = file_data;
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self.read()?;
        write_json_atomic(&self.path, &*data)
    }

    // Monthly operations

    /// Create and store a monthly category with the next free id
    pub fn insert_monthly(
        &self,
        name: &str,
        cost_per_item: Money,
        num_items_per_month: i64,
    ) -> Result<MonthlyCategory, BudgetError> {
        let mut data = self.write()?;

        let id = MonthlyCategoryId::new(data.next_monthly_id);
        let category = MonthlyCategory::new(id, name, cost_per_item, num_items_per_month);
        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        data.next_monthly_id += 1;
        data.monthly.push(category.clone());
        Ok(category)
    }

    /// Get a monthly category by ID
    pub fn get_monthly(&self, id: MonthlyCategoryId) -> Result<Option<MonthlyCategory>, BudgetError> {
        Ok(self.read()?.monthly.iter().find(|c| c.id == id).cloned())
    }

    /// Get all monthly categories in id order
    pub fn get_all_monthly(&self) -> Result<Vec<MonthlyCategory>, BudgetError> {
        let mut list = self.read()?.monthly.clone();
        list.sort_by_key(|c| c.id);
        Ok(list)
    }

    // Fixed operations

    /// Create and store a fixed category with the next free id
    pub fn insert_fixed(&self, name: &str, cost: Money) -> Result<FixedCategory, BudgetError> {
        let mut data = self.write()?;

        let id = FixedCategoryId::new(data.next_fixed_id);
        let category = FixedCategory::new(id, name, cost);
        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        data.next_fixed_id += 1;
        data.fixed.push(category.clone());
        Ok(category)
    }

    /// Get a fixed category by ID
    pub fn get_fixed(&self, id: FixedCategoryId) -> Result<Option<FixedCategory>, BudgetError> {
        Ok(self.read()?.fixed.iter().find(|c| c.id == id).cloned())
    }

    /// Get all fixed categories in id order
    pub fn get_all_fixed(&self) -> Result<Vec<FixedCategory>, BudgetError> {
        let mut list = self.read()?.fixed.clone();
        list.sort_by_key(|c| c.id);
        Ok(list)
    }

    /// Count monthly and fixed categories
    pub fn counts(&self) -> Result<(usize, usize), BudgetError> {
        let data = self.read()?;
        Ok((data.monthly.len(), data.fixed.len()))
    }
}

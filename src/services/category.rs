//! Category service
//!
//! Creation and listing of monthly and fixed categories.

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{FixedCategory, Money, MonthlyCategory};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a monthly category
    pub fn create_monthly(
        &self,
        name: &str,
        cost_per_item: Money,
        num_items_per_month: i64,
    ) -> BudgetResult<MonthlyCategory> {
        let name = require_name(name)?;

        let category = self
            .storage
            .categories
            .insert_monthly(name, cost_per_item, num_items_per_month)?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::MonthlyCategory,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    /// Create a fixed category
    pub fn create_fixed(&self, name: &str, cost: Money) -> BudgetResult<FixedCategory> {
        let name = require_name(name)?;

        let category = self.storage.categories.insert_fixed(name, cost)?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::FixedCategory,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    pub fn list_monthly(&self) -> BudgetResult<Vec<MonthlyCategory>> {
        self.storage.categories.get_all_monthly()
    }

    pub fn list_fixed(&self) -> BudgetResult<Vec<FixedCategory>> {
        self.storage.categories.get_all_fixed()
    }
}

fn require_name(name: &str) -> BudgetResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BudgetError::Validation("Category name cannot be empty".into()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::BudgetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_monthly() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let category = service
            .create_monthly("  Groceries ", Money::from_units(50), 4)
            .unwrap();

        assert_eq!(category.name, "Groceries");
        assert_eq!(category.monthly_total(), Money::from_units(200));
        assert_eq!(category.yearly_total(), Money::from_units(2400));
        assert!(storage.paths().budget_file().exists());
    }

    #[test]
    fn test_create_is_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service.create_fixed("Vacation", Money::from_units(2000)).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::FixedCategory);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Vacation"));
    }

    #[test]
    fn test_rejects_blank_name_and_negative_values() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        assert!(service
            .create_fixed("   ", Money::from_units(1))
            .unwrap_err()
            .is_validation());
        assert!(service
            .create_monthly("Gas", Money::from_units(40), -1)
            .unwrap_err()
            .is_validation());
        assert!(service.list_monthly().unwrap().is_empty());
        assert!(storage.audit().read_all().unwrap().is_empty());
    }
}

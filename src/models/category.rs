//! Monthly and fixed expense categories
//!
//! A monthly category is a recurring expense defined by a per-item cost and
//! how many items are bought each month. A fixed category is a single flat
//! allocation for the whole budget period.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{FixedCategoryId, MonthlyCategoryId};
use super::money::Money;
use super::Lookup;

/// A recurring monthly expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCategory {
    /// Unique identifier
    pub id: MonthlyCategoryId,

    /// Category name
    pub name: String,

    /// Average cost of one item
    pub cost_per_item: Money,

    /// How many items are expected each month
    pub num_items_per_month: i64,

    /// When the category was last modified
    pub last_updated: DateTime<Utc>,
}

impl MonthlyCategory {
    /// Create a new monthly category
    pub fn new(
        id: MonthlyCategoryId,
        name: impl Into<String>,
        cost_per_item: Money,
        num_items_per_month: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cost_per_item,
            num_items_per_month,
            last_updated: Utc::now(),
        }
    }

    /// Expected spend for one month
    pub fn monthly_total(&self) -> Money {
        self.cost_per_item.times(self.num_items_per_month)
    }

    /// Expected spend for a year (twelve months)
    pub fn yearly_total(&self) -> Money {
        self.monthly_total().times(12)
    }

    fn checked_yearly_total(&self) -> Option<Money> {
        self.cost_per_item
            .checked_times(self.num_items_per_month)?
            .checked_times(12)
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_name(&self.name)?;

        if self.cost_per_item.is_negative() {
            return Err(CategoryValidationError::NegativeCost(self.cost_per_item));
        }

        if self.num_items_per_month < 0 {
            return Err(CategoryValidationError::NegativeItemCount(
                self.num_items_per_month,
            ));
        }

        if self.checked_yearly_total().is_none() {
            return Err(CategoryValidationError::TotalTooLarge);
        }

        Ok(())
    }
}

impl Lookup for MonthlyCategory {
    fn lookup_id(&self) -> u64 {
        self.id.value()
    }

    fn lookup_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for MonthlyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A flat, once-per-period expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCategory {
    /// Unique identifier
    pub id: FixedCategoryId,

    /// Category name
    pub name: String,

    /// Allocation for the whole period
    pub cost: Money,

    /// When the category was last modified
    pub last_updated: DateTime<Utc>,
}

impl FixedCategory {
    /// Create a new fixed category
    pub fn new(id: FixedCategoryId, name: impl Into<String>, cost: Money) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            last_updated: Utc::now(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_name(&self.name)?;

        if self.cost.is_negative() {
            return Err(CategoryValidationError::NegativeCost(self.cost));
        }

        Ok(())
    }
}

impl Lookup for FixedCategory {
    fn lookup_id(&self) -> u64 {
        self.id.value()
    }

    fn lookup_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FixedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Which collection a category lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Monthly,
    Fixed,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Fixed => write!(f, "Fixed"),
        }
    }
}

/// Reference from a transaction to exactly one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum CategoryRef {
    Monthly(MonthlyCategoryId),
    Fixed(FixedCategoryId),
}

impl CategoryRef {
    /// The collection this reference points into
    pub fn kind(&self) -> CategoryKind {
        match self {
            Self::Monthly(_) => CategoryKind::Monthly,
            Self::Fixed(_) => CategoryKind::Fixed,
        }
    }

    /// The raw identifier within its collection
    pub fn raw_id(&self) -> u64 {
        match self {
            Self::Monthly(id) => id.value(),
            Self::Fixed(id) => id.value(),
        }
    }
}

impl fmt::Display for CategoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind(), self.raw_id())
    }
}

fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if name.len() > 50 {
        return Err(CategoryValidationError::NameTooLong(name.len()));
    }

    Ok(())
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeCost(Money),
    NegativeItemCount(i64),
    TotalTooLarge,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::NegativeCost(cost) => write!(f, "Cost cannot be negative: {}", cost),
            Self::NegativeItemCount(n) => {
                write!(f, "Items per month cannot be negative: {}", n)
            }
            Self::TotalTooLarge => write!(f, "Yearly total is too large to store"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_totals() {
        let cat = MonthlyCategory::new(MonthlyCategoryId::new(1), "Coffee", Money::from_units(50), 4);
        assert_eq!(cat.monthly_total(), Money::from_units(200));
        assert_eq!(cat.yearly_total(), Money::from_units(2400));
    }

    #[test]
    fn test_monthly_validation() {
        let mut cat = MonthlyCategory::new(MonthlyCategoryId::new(1), "Coffee", Money::from_units(5), 4);
        assert!(cat.validate().is_ok());

        cat.num_items_per_month = -1;
        assert_eq!(
            cat.validate(),
            Err(CategoryValidationError::NegativeItemCount(-1))
        );

        cat.num_items_per_month = 1;
        cat.name = "   ".into();
        assert_eq!(cat.validate(), Err(CategoryValidationError::EmptyName));
    }

    #[test]
    fn test_oversized_monthly_rejected() {
        let cat = MonthlyCategory::new(
            MonthlyCategoryId::new(1),
            "Yacht",
            Money::from_units(1_000_000_000),
            1_000_000_000,
        );
        assert_eq!(cat.validate(), Err(CategoryValidationError::TotalTooLarge));

        // Fits per month, overflows once scaled to a year
        let cat = MonthlyCategory::new(
            MonthlyCategoryId::new(2),
            "Yacht",
            Money::from_cents(i64::MAX / 10),
            1,
        );
        assert_eq!(cat.validate(), Err(CategoryValidationError::TotalTooLarge));
    }

    #[test]
    fn test_fixed_validation() {
        let cat = FixedCategory::new(FixedCategoryId::new(1), "Vacation", Money::from_units(-10));
        assert!(matches!(
            cat.validate(),
            Err(CategoryValidationError::NegativeCost(_))
        ));
    }

    #[test]
    fn test_category_ref_kind() {
        let monthly = CategoryRef::Monthly(MonthlyCategoryId::new(4));
        let fixed = CategoryRef::Fixed(FixedCategoryId::new(4));

        assert_eq!(monthly.kind(), CategoryKind::Monthly);
        assert_eq!(fixed.kind(), CategoryKind::Fixed);
        assert_ne!(monthly, fixed);
        assert_eq!(monthly.to_string(), "Monthly #4");
    }

    #[test]
    fn test_category_ref_serialization() {
        let r = CategoryRef::Fixed(FixedCategoryId::new(2));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"kind":"fixed","id":2}"#);
    }
}

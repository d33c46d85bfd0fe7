//! Dashboard report
//!
//! Totals, recent transactions and per-category pacing for one "as of"
//! date. Categories with no allocation get no pacing rather than an error.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::models::{CategoryKind, CategoryRef, FixedCategoryId, Money, MonthlyCategoryId};
use crate::services::{
    CategoryLedger, Pacing, PacingProjector, PeriodClock, PeriodProgress, TotalsEngine,
    TotalsSummary,
};
use crate::storage::{Storage, TransactionFilter};

/// Settings-derived figures shared by every report section
#[derive(Debug, Clone, Copy)]
pub struct BudgetSnapshot {
    pub as_of: NaiveDate,
    pub progress: PeriodProgress,
    pub engine: TotalsEngine,
}

impl BudgetSnapshot {
    pub fn new(settings: &Settings, as_of: NaiveDate) -> BudgetResult<Self> {
        let period = settings.period()?;
        let progress = PeriodClock::new(period).progress(as_of)?;

        Ok(Self {
            as_of,
            progress,
            engine: TotalsEngine::new(period, settings.salary()),
        })
    }

    /// Period totals over everything in storage
    pub fn totals(&self, storage: &Storage) -> BudgetResult<TotalsSummary> {
        self.engine.compute(
            &storage.categories.get_all_monthly()?,
            &storage.categories.get_all_fixed()?,
            storage.transactions.sum_cost()?,
            &self.progress,
        )
    }

    fn project(&self, allocation: Money, spent: Money) -> BudgetResult<Option<Pacing>> {
        if allocation.is_zero() {
            return Ok(None);
        }
        PacingProjector::new(&self.progress)
            .project(allocation.as_f64(), spent)
            .map(Some)
    }
}

/// One monthly category with spend and pacing
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCategoryRow {
    pub id: MonthlyCategoryId,
    pub name: String,
    pub cost_per_item: Money,
    pub num_items_per_month: i64,
    pub monthly_total: Money,
    pub yearly_total: Money,
    /// `monthly_total` scaled to the period length, in cents
    pub total_per_period: f64,
    /// `yearly_total` as a percent of period salary; `None` with no salary
    pub percent_income: Option<f64>,
    pub spent: Money,
    /// `None` when the category has no allocation
    pub pacing: Option<Pacing>,
}

/// One fixed category with spend and pacing
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCategoryRow {
    pub id: FixedCategoryId,
    pub name: String,
    pub cost: Money,
    pub spent: Money,
    pub pacing: Option<Pacing>,
}

/// One transaction with its category resolved to a label
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: u64,
    pub name: String,
    pub cost: Money,
    pub category: String,
    pub time: DateTime<Utc>,
    pub marked: bool,
}

/// Monthly categories, largest yearly total first
pub fn monthly_rows(
    storage: &Storage,
    snapshot: &BudgetSnapshot,
) -> BudgetResult<Vec<MonthlyCategoryRow>> {
    let spent_by_id = storage.transactions.sum_cost_grouped(CategoryKind::Monthly)?;
    let num_months = snapshot.engine.num_months();
    let period_salary = snapshot.engine.period_salary();

    let mut rows = storage
        .categories
        .get_all_monthly()?
        .into_iter()
        .map(|category| -> BudgetResult<MonthlyCategoryRow> {
            let spent = spent_by_id.get(&category.id.value()).copied().unwrap_or_default();
            let yearly_total = category.yearly_total();

            Ok(MonthlyCategoryRow {
                id: category.id,
                monthly_total: category.monthly_total(),
                yearly_total,
                total_per_period: category.monthly_total().as_f64() * num_months,
                percent_income: (period_salary != 0.0)
                    .then(|| yearly_total.as_f64() / period_salary * 100.0),
                spent,
                pacing: snapshot.project(yearly_total, spent)?,
                name: category.name,
                cost_per_item: category.cost_per_item,
                num_items_per_month: category.num_items_per_month,
            })
        })
        .collect::<BudgetResult<Vec<_>>>()?;

    rows.sort_by(|a, b| b.yearly_total.cmp(&a.yearly_total).then(a.id.cmp(&b.id)));
    Ok(rows)
}

/// Fixed categories, largest cost first
pub fn fixed_rows(
    storage: &Storage,
    snapshot: &BudgetSnapshot,
) -> BudgetResult<Vec<FixedCategoryRow>> {
    let spent_by_id = storage.transactions.sum_cost_grouped(CategoryKind::Fixed)?;

    let mut rows = storage
        .categories
        .get_all_fixed()?
        .into_iter()
        .map(|category| -> BudgetResult<FixedCategoryRow> {
            let spent = spent_by_id.get(&category.id.value()).copied().unwrap_or_default();
            Ok(FixedCategoryRow {
                id: category.id,
                pacing: snapshot.project(category.cost, spent)?,
                name: category.name,
                cost: category.cost,
                spent,
            })
        })
        .collect::<BudgetResult<Vec<_>>>()?;

    rows.sort_by(|a, b| b.cost.cmp(&a.cost).then(a.id.cmp(&b.id)));
    Ok(rows)
}

/// Transactions matching `filter`, newest first
pub fn transaction_rows(
    storage: &Storage,
    filter: &TransactionFilter,
) -> BudgetResult<Vec<TransactionRow>> {
    let ledger = CategoryLedger::new(storage);

    storage
        .transactions
        .list(filter)?
        .into_iter()
        .map(|txn| -> BudgetResult<TransactionRow> {
            Ok(TransactionRow {
                id: txn.id.value(),
                category: category_label(&ledger, txn.category)?,
                name: txn.name,
                cost: txn.cost,
                time: txn.time,
                marked: txn.marked,
            })
        })
        .collect()
}

fn category_label(ledger: &CategoryLedger<'_>, category: Option<CategoryRef>) -> BudgetResult<String> {
    let Some(category) = category else {
        return Ok("[None]".to_string());
    };

    Ok(match ledger.category_name(category)? {
        Some(name) => format!("{} ({})", name, category.kind()),
        None => format!("{} (deleted)", category),
    })
}

/// Everything shown by a bare `budget` invocation
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub snapshot: BudgetSnapshot,
    pub totals: TotalsSummary,
    pub transactions: Vec<TransactionRow>,
    pub monthly: Vec<MonthlyCategoryRow>,
    pub fixed: Vec<FixedCategoryRow>,
}

impl Dashboard {
    pub fn generate(storage: &Storage, settings: &Settings, as_of: NaiveDate) -> BudgetResult<Self> {
        let snapshot = BudgetSnapshot::new(settings, as_of)?;

        Ok(Self {
            totals: snapshot.totals(storage)?,
            transactions: transaction_rows(storage, &TransactionFilter::new())?,
            monthly: monthly_rows(storage, &snapshot)?,
            fixed: fixed_rows(storage, &snapshot)?,
            snapshot,
        })
    }
}

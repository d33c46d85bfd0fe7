//! Budget totals engine
//!
//! Period-wide allocation and spend figures. Everything is recomputed from
//! the inputs on each call; nothing is cached.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetPeriod, FixedCategory, Money, MonthlyCategory, Salary};

use super::clock::{round2, PeriodProgress};

/// Days treated as one month when scaling monthly budgets to the period
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Period-wide totals; amounts are in cents
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsSummary {
    pub total_days: i64,
    /// Period length in 30-day months, fractional
    pub num_months: f64,
    pub period_salary: f64,
    pub monthly_allocated_per_period: f64,
    pub fixed_allocated_per_period: f64,
    pub allocated_per_period: f64,
    /// Negative when more is allocated than earned
    pub unallocated: f64,
    pub total_spent: Money,
    /// Spend as a percent of period salary, rounded to 2 places
    pub percent_spent: f64,
    pub percent_passed: f64,
    pub daily_gain: f64,
}

impl TotalsSummary {
    pub fn is_over_allocated(&self) -> bool {
        self.unallocated < 0.0
    }
}

/// Combines salary, period and categories into a [`TotalsSummary`]
#[derive(Debug, Clone, Copy)]
pub struct TotalsEngine {
    period: BudgetPeriod,
    salary: Salary,
}

impl TotalsEngine {
    pub fn new(period: BudgetPeriod, salary: Salary) -> Self {
        Self { period, salary }
    }

    /// The period length in 30-day months
    pub fn num_months(&self) -> f64 {
        self.period.total_days() as f64 / DAYS_PER_MONTH
    }

    /// Annual salary prorated to the period, in cents
    pub fn period_salary(&self) -> f64 {
        self.salary.for_period(&self.period)
    }

    pub fn compute(
        &self,
        monthly: &[MonthlyCategory],
        fixed: &[FixedCategory],
        total_spent: Money,
        progress: &PeriodProgress,
    ) -> BudgetResult<TotalsSummary> {
        let period_salary = self.period_salary();
        if period_salary == 0.0 {
            return Err(BudgetError::DivisionByZero(
                "period salary is zero, cannot compute percent spent".into(),
            ));
        }

        let num_months = self.num_months();
        let monthly_sum: Money = monthly.iter().map(MonthlyCategory::monthly_total).sum();
        let fixed_sum: Money = fixed.iter().map(|c| c.cost).sum();

        let monthly_allocated_per_period = monthly_sum.as_f64() * num_months;
        let fixed_allocated_per_period = fixed_sum.as_f64();
        let allocated_per_period = monthly_allocated_per_period + fixed_allocated_per_period;

        Ok(TotalsSummary {
            total_days: self.period.total_days(),
            num_months,
            period_salary,
            monthly_allocated_per_period,
            fixed_allocated_per_period,
            allocated_per_period,
            unallocated: period_salary - allocated_per_period,
            total_spent,
            percent_spent: round2(total_spent.as_f64() / period_salary * 100.0),
            percent_passed: progress.percent_passed,
            daily_gain: progress.daily_gain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FixedCategoryId, MonthlyCategoryId};
    use crate::services::clock::PeriodClock;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period_2023() -> BudgetPeriod {
        BudgetPeriod::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap()
    }

    fn progress_2023() -> PeriodProgress {
        PeriodClock::new(period_2023())
            .progress(date(2023, 7, 2))
            .unwrap()
    }

    fn groceries() -> MonthlyCategory {
        MonthlyCategory::new(MonthlyCategoryId::new(1), "Groceries", Money::from_units(50), 4)
    }

    fn vacation() -> FixedCategory {
        FixedCategory::new(FixedCategoryId::new(1), "Vacation", Money::from_units(2000))
    }

    #[test]
    fn test_period_salary_is_prorated() {
        let engine = TotalsEngine::new(period_2023(), Salary::new(Money::from_units(36500)));
        assert!((engine.period_salary() - 3_640_000.0).abs() < 1e-6);
        assert!((engine.num_months() - 364.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_compute_totals() {
        let engine = TotalsEngine::new(period_2023(), Salary::new(Money::from_units(36500)));
        let summary = engine
            .compute(
                &[groceries()],
                &[vacation()],
                Money::from_units(1820),
                &progress_2023(),
            )
            .unwrap();

        let monthly = 20_000.0 * 364.0 / 30.0;
        assert!((summary.monthly_allocated_per_period - monthly).abs() < 1e-6);
        assert_eq!(summary.fixed_allocated_per_period, 200_000.0);
        assert!((summary.allocated_per_period - (monthly + 200_000.0)).abs() < 1e-6);
        assert!((summary.unallocated - (3_640_000.0 - monthly - 200_000.0)).abs() < 1e-6);
        assert_eq!(summary.percent_spent, 5.0);
        assert_eq!(summary.percent_passed, 50.0);
        assert!(!summary.is_over_allocated());
    }

    #[test]
    fn test_over_allocation_is_reported_not_rejected() {
        let engine = TotalsEngine::new(period_2023(), Salary::new(Money::from_units(1000)));
        let summary = engine
            .compute(&[], &[vacation()], Money::zero(), &progress_2023())
            .unwrap();

        assert!(summary.unallocated < 0.0);
        assert!(summary.is_over_allocated());
    }

    #[test]
    fn test_zero_salary_is_division_by_zero() {
        let engine = TotalsEngine::new(period_2023(), Salary::new(Money::zero()));
        let err = engine
            .compute(&[groceries()], &[], Money::from_units(10), &progress_2023())
            .unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_compute_is_repeatable() {
        let engine = TotalsEngine::new(period_2023(), Salary::new(Money::from_units(36500)));
        let monthly = [groceries()];
        let fixed = [vacation()];
        let progress = progress_2023();

        let first = engine
            .compute(&monthly, &fixed, Money::from_units(99), &progress)
            .unwrap();
        let second = engine
            .compute(&monthly, &fixed, Money::from_units(99), &progress)
            .unwrap();
        assert_eq!(first, second);
    }
}

//! Budget period and salary
//!
//! The budget period is a single configured date range. Salary is configured
//! as an annual figure and prorated over the period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Days used to prorate an annual salary
pub const DAYS_PER_YEAR: f64 = 365.0;

/// The date range salary and spend are tracked over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl BudgetPeriod {
    /// Create a period; `start` must be strictly before `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if start >= end {
            return Err(PeriodError::NotIncreasing { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the period
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Whole days between start and end
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whole days from the start to `today`; negative before the period opens
    pub fn days_since_start(&self, today: NaiveDate) -> i64 {
        (today - self.start).num_days()
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Annual take-home salary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salary {
    annual: Money,
}

impl Salary {
    /// Wrap an annual salary
    pub fn new(annual: Money) -> Self {
        Self { annual }
    }

    /// The configured annual amount
    pub fn annual(&self) -> Money {
        self.annual
    }

    /// Salary prorated to the period, in cents: `(total_days / 365) * annual`
    pub fn for_period(&self, period: &BudgetPeriod) -> f64 {
        (period.total_days() as f64 / DAYS_PER_YEAR) * self.annual.as_f64()
    }
}

/// Errors constructing a budget period
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    NotIncreasing { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotIncreasing { start, end } => write!(
                f,
                "Budget period start ({}) must be before its end ({})",
                start, end
            ),
        }
    }
}

impl std::error::Error for PeriodError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_total_days() {
        let period = BudgetPeriod::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap();
        assert_eq!(period.total_days(), 364);
        assert_eq!(period.days_since_start(date(2022, 12, 30)), -2);
    }

    #[test]
    fn test_rejects_empty_or_reversed() {
        assert!(BudgetPeriod::new(date(2023, 1, 1), date(2023, 1, 1)).is_err());
        assert!(BudgetPeriod::new(date(2023, 2, 1), date(2023, 1, 1)).is_err());
    }

    #[test]
    fn test_salary_for_period() {
        let period = BudgetPeriod::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap();
        let salary = Salary::new(Money::from_units(36500));

        let prorated = salary.for_period(&period);
        // 364 / 365 of the annual amount
        assert!((prorated - 3_640_000.0).abs() < 1e-6);
        assert!((prorated / salary.annual().as_f64() - 0.9973).abs() < 1e-4);
    }
}

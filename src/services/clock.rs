//! Period clock
//!
//! Converts the configured budget period and a calendar date into how much
//! of the period has elapsed.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetPeriod;

/// Round to two decimal places, ties to even
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Elapsed-time figures for one date within a period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodProgress {
    /// Whole days in the period
    pub total_days: i64,
    /// Whole days since the start; negative before, above `total_days` after
    pub passed_days: i64,
    /// Percent of the period one day represents, rounded to 2 places
    pub daily_gain: f64,
    /// Percent of the period elapsed, rounded to 2 places
    pub percent_passed: f64,
}

/// Computes [`PeriodProgress`] for a fixed budget period
#[derive(Debug, Clone, Copy)]
pub struct PeriodClock {
    period: BudgetPeriod,
}

impl PeriodClock {
    pub fn new(period: BudgetPeriod) -> Self {
        Self { period }
    }

    pub fn period(&self) -> &BudgetPeriod {
        &self.period
    }

    /// Progress through the period as of `today`
    pub fn progress(&self, today: NaiveDate) -> BudgetResult<PeriodProgress> {
        let total_days = self.period.total_days();
        if total_days == 0 {
            return Err(BudgetError::DivisionByZero(format!(
                "budget period {} has no days",
                self.period
            )));
        }

        let passed_days = self.period.days_since_start(today);
        let total = total_days as f64;

        Ok(PeriodProgress {
            total_days,
            passed_days,
            daily_gain: round2(1.0 / total * 100.0),
            percent_passed: round2(passed_days as f64 / total * 100.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clock_2023() -> PeriodClock {
        PeriodClock::new(BudgetPeriod::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap())
    }

    #[test]
    fn test_progress_mid_year() {
        let progress = clock_2023().progress(date(2023, 7, 2)).unwrap();

        assert_eq!(progress.total_days, 364);
        assert_eq!(progress.passed_days, 182);
        assert_eq!(progress.daily_gain, 0.27);
        assert_eq!(progress.percent_passed, 50.0);
    }

    #[test]
    fn test_outside_the_period() {
        let clock = clock_2023();

        let before = clock.progress(date(2022, 12, 22)).unwrap();
        assert_eq!(before.passed_days, -10);
        assert!(before.percent_passed < 0.0);

        let after = clock.progress(date(2024, 6, 30)).unwrap();
        assert!(after.passed_days > after.total_days);
        assert!(after.percent_passed > 100.0);
    }

    #[test]
    fn test_daily_gain_covers_whole_period() {
        for (start, end) in [
            (date(2023, 1, 1), date(2023, 12, 31)),
            (date(2024, 3, 1), date(2024, 3, 31)),
            (date(2024, 1, 1), date(2024, 1, 8)),
            (date(2020, 1, 1), date(2021, 1, 1)),
        ] {
            let clock = PeriodClock::new(BudgetPeriod::new(start, end).unwrap());
            let p = clock.progress(start).unwrap();

            // Each day's gain is off by at most half a hundredth
            let tolerance = 0.005 * p.total_days as f64 + 1e-9;
            assert!(
                (p.daily_gain * p.total_days as f64 - 100.0).abs() <= tolerance,
                "{} days: gain {}",
                p.total_days,
                p.daily_gain
            );
        }
    }

    #[test]
    fn test_percent_passed_never_decreases() {
        let clock = clock_2023();
        let mut day = date(2022, 12, 1);
        let mut last = f64::NEG_INFINITY;

        while day <= date(2024, 1, 31) {
            let p = clock.progress(day).unwrap();
            assert!(p.percent_passed >= last, "dropped on {}", day);
            last = p.percent_passed;
            day += Duration::days(1);
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.274725), 0.27);
        assert_eq!(round2(54.16666), 54.17);
        assert_eq!(round2(-2.746), -2.75);
    }
}

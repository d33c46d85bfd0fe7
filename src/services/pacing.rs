//! Pacing projector
//!
//! Projects how many days a category's spend runs ahead of or behind an
//! even spread across the period.

use std::fmt;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

use super::clock::PeriodProgress;

/// Direction of a category's drift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceStatus {
    /// Spent less than the elapsed share of the period
    Ahead,
    /// Spent more than the elapsed share of the period
    Behind,
    OnPace,
}

impl PaceStatus {
    /// Direction glyph shown next to the duration
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Ahead => "+",
            Self::Behind => "-",
            Self::OnPace => "",
        }
    }
}

impl fmt::Display for PaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ahead => write!(f, "ahead"),
            Self::Behind => write!(f, "behind"),
            Self::OnPace => write!(f, "on pace"),
        }
    }
}

/// Projection for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    /// Spend as a percent of the allocation, unrounded
    pub percent_spent: f64,
    /// `percent_spent - percent_passed`
    pub drift: f64,
    /// Signed days off pace; negative is ahead
    pub cut_days: i64,
    pub status: PaceStatus,
}

impl Pacing {
    /// Days off pace without the sign
    pub fn magnitude_days(&self) -> i64 {
        self.cut_days.abs()
    }
}

/// Projects [`Pacing`] against one point in the period
#[derive(Debug, Clone, Copy)]
pub struct PacingProjector {
    percent_passed: f64,
    daily_gain: f64,
}

impl PacingProjector {
    pub fn new(progress: &PeriodProgress) -> Self {
        Self::with_rates(progress.percent_passed, progress.daily_gain)
    }

    pub fn with_rates(percent_passed: f64, daily_gain: f64) -> Self {
        Self {
            percent_passed,
            daily_gain,
        }
    }

    /// Project a category that has `spent` against `total_allocation` cents
    pub fn project(&self, total_allocation: f64, spent: Money) -> BudgetResult<Pacing> {
        if total_allocation == 0.0 {
            return Err(BudgetError::DivisionByZero(
                "category has no allocation to pace against".into(),
            ));
        }
        if self.daily_gain == 0.0 {
            return Err(BudgetError::DivisionByZero("daily gain is zero".into()));
        }

        let percent_spent = spent.as_f64() / total_allocation * 100.0;
        let drift = percent_spent - self.percent_passed;
        let cut_days = (drift / self.daily_gain).ceil() as i64;

        let status = match cut_days.signum() {
            -1 => PaceStatus::Ahead,
            1 => PaceStatus::Behind,
            _ => PaceStatus::OnPace,
        };

        Ok(Pacing {
            percent_spent,
            drift,
            cut_days,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behind_by_sixteen_days() {
        let projector = PacingProjector::with_rates(50.0, 0.2747);
        let pacing = projector
            .project(Money::from_units(2400).as_f64(), Money::from_units(1300))
            .unwrap();

        assert!((pacing.percent_spent - 54.1667).abs() < 1e-3);
        assert!((pacing.drift - 4.1667).abs() < 1e-3);
        assert_eq!(pacing.cut_days, 16);
        assert_eq!(pacing.status, PaceStatus::Behind);
        assert_eq!(pacing.magnitude_days(), 16);
    }

    #[test]
    fn test_ahead() {
        let projector = PacingProjector::with_rates(50.0, 0.27);
        let pacing = projector
            .project(Money::from_units(2400).as_f64(), Money::from_units(600))
            .unwrap();

        // 25% spent at the halfway point: ceil(-25 / 0.27) = -92
        assert_eq!(pacing.cut_days, -92);
        assert_eq!(pacing.status, PaceStatus::Ahead);
        assert_eq!(pacing.magnitude_days(), 92);
    }

    #[test]
    fn test_exactly_on_pace() {
        let projector = PacingProjector::with_rates(50.0, 0.27);
        let pacing = projector
            .project(Money::from_units(2400).as_f64(), Money::from_units(1200))
            .unwrap();

        assert_eq!(pacing.cut_days, 0);
        assert_eq!(pacing.status, PaceStatus::OnPace);
    }

    #[test]
    fn test_ceiling_rounds_toward_behind() {
        // Slightly under pace rounds up to zero rather than down to -1
        let projector = PacingProjector::with_rates(50.0, 1.0);
        let pacing = projector
            .project(10_000.0, Money::from_cents(4_950))
            .unwrap();
        assert_eq!(pacing.cut_days, 0);
    }

    #[test]
    fn test_zero_allocation_is_division_by_zero() {
        let projector = PacingProjector::with_rates(50.0, 0.27);
        let err = projector.project(0.0, Money::from_units(10)).unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_zero_daily_gain_is_division_by_zero() {
        let projector = PacingProjector::with_rates(50.0, 0.0);
        let err = projector
            .project(1000.0, Money::from_units(10))
            .unwrap_err();
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(PaceStatus::Ahead.glyph(), "+");
        assert_eq!(PaceStatus::Behind.glyph(), "-");
        assert_eq!(PaceStatus::OnPace.to_string(), "on pace");
    }
}

//! Currency, percent and duration formatting
//!
//! Currency is shown in whole units with thousands separators. Durations
//! pick the largest unit that is at least two of itself.

use crossterm::style::StyledContent;

use crate::models::Money;

/// Format an amount in cents as whole units, e.g. `$1,235` or `-$40`
///
/// Half units round to the nearest even unit.
pub fn format_currency(cents: f64, symbol: &str) -> String {
    let units = (cents / 100.0).round_ties_even();
    let sign = if units < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(units.abs() as u64))
}

/// [`format_currency`] for a stored amount
pub fn format_money(amount: Money, symbol: &str) -> String {
    format_currency(amount.as_f64(), symbol)
}

/// Exact amount with cents, e.g. `$1,200.50` or `-$4.05`
pub fn format_amount(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let cents = amount.cents().unsigned_abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Two-decimal percent, e.g. `54.17%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Whether styled output is wanted; a non-empty `NO_COLOR` turns it off
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}

/// Apply a crossterm style to `text` when `color` is set
pub(crate) fn paint<F>(text: String, color: bool, style: F) -> String
where
    F: FnOnce(String) -> StyledContent<String>,
{
    if color {
        style(text).to_string()
    } else {
        text
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Unit name and length in seconds, largest first
const DURATION_UNITS: [(&str, f64); 6] = [
    ("year", 365.0 * SECONDS_PER_DAY),
    ("month", 30.0 * SECONDS_PER_DAY),
    ("week", 7.0 * SECONDS_PER_DAY),
    ("day", SECONDS_PER_DAY),
    ("hour", 3_600.0),
    ("minute", 60.0),
];

/// Used when no coarser unit reaches the threshold
const FINEST_UNIT: (&str, f64) = ("second", 1.0);

/// Minimum count of a unit before it is used
const UNIT_THRESHOLD: f64 = 2.0;

/// Describe a day count as a rounded duration, e.g. `2 weeks` or `24 hours`
///
/// The sign is dropped; callers show direction separately.
pub fn format_relative_days(days: i64) -> String {
    let seconds = days.unsigned_abs() as f64 * SECONDS_PER_DAY;
    let (unit, value) = DURATION_UNITS
        .iter()
        .map(|(unit, length)| (*unit, seconds / length))
        .find(|(_, value)| *value >= UNIT_THRESHOLD)
        .unwrap_or_else(|| {
            let (unit, length) = FINEST_UNIT;
            let value = seconds / length;
            (unit, if value > 0.0 { value.max(1.0) } else { value })
        });

    let count = value.round_ties_even() as u64;
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

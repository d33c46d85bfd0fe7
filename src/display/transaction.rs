//! Transaction table

use chrono::Local;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::format_amount;
use crate::reports::TransactionRow;

#[derive(Tabled)]
struct TransactionLine {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Marked")]
    marked: &'static str,
}

/// Render transactions as a table, one row each
pub fn format_transaction_table(rows: &[TransactionRow], symbol: &str) -> String {
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let lines = rows.iter().map(|row| TransactionLine {
        name: format!("{} ({})", row.name, row.id),
        cost: format_amount(row.cost, symbol),
        category: row.category.clone(),
        time: row
            .time
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        marked: if row.marked { "*" } else { "" },
    });

    let mut table = Table::new(lines);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::Utc;

    fn row(id: u64, name: &str, cents: i64, marked: bool) -> TransactionRow {
        TransactionRow {
            id,
            name: name.into(),
            cost: Money::from_cents(cents),
            category: "[None]".into(),
            time: Utc::now(),
            marked,
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[], "$"), "No transactions found.\n");
    }

    #[test]
    fn test_table_contents() {
        let output = format_transaction_table(
            &[row(2, "lunch", 1250, true), row(1, "rent", 120_000, false)],
            "$",
        );

        assert!(output.contains("Name"));
        assert!(output.contains("lunch (2)"));
        assert!(output.contains("$12.50"));
        assert!(output.contains("$1,200.00"));
        assert!(output.contains("[None]"));
        assert!(output.contains('*'));
    }
}

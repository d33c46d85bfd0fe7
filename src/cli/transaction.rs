//! Transaction CLI commands
//!
//! `add`, `list` and `update` sit at the top level of the command line.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::display::format::format_amount;
use crate::error::BudgetResult;
use crate::models::{CategoryRef, TransactionPatch};
use crate::reports::transaction_rows;
use crate::services::{parse_cost, CategoryLedger, TransactionDraft, TransactionService};
use crate::storage::{Storage, TransactionFilter};

/// Category options shared by `add` and `update`
#[derive(Args, Debug)]
pub struct CategoryArgs {
    /// Monthly category name or ID
    #[arg(short, long, conflicts_with = "fixed")]
    pub monthly: Option<String>,
    /// Fixed category name or ID
    #[arg(short, long)]
    pub fixed: Option<String>,
}

impl CategoryArgs {
    /// Resolve whichever category was given
    pub fn resolve(&self, storage: &Storage) -> BudgetResult<Option<CategoryRef>> {
        let ledger = CategoryLedger::new(storage);

        if let Some(query) = &self.monthly {
            return Ok(Some(CategoryRef::Monthly(ledger.resolve_monthly(query)?.id)));
        }
        if let Some(query) = &self.fixed {
            return Ok(Some(CategoryRef::Fixed(ledger.resolve_fixed(query)?.id)));
        }
        Ok(None)
    }
}

/// Arguments for `budget add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Cost of the transaction (e.g. "12", "12.50", "-5" for a refund)
    #[arg(allow_negative_numbers = true)]
    pub cost: String,
    /// Name of the transaction; derived from the category when omitted
    #[arg(short, long)]
    pub name: Option<String>,
    #[command(flatten)]
    pub category: CategoryArgs,
    /// Flag the transaction for follow-up
    #[arg(short = 'x', long)]
    pub mark: bool,
}

/// Arguments for `budget list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show marked transactions
    #[arg(short = 'x', long)]
    pub marked: bool,
    /// Show every transaction instead of the most recent page
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for `budget update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Transaction name or ID
    pub transaction: String,
    /// New name
    #[arg(short = 'n', long = "newname")]
    pub new_name: Option<String>,
    /// New cost
    #[arg(short, long, allow_negative_numbers = true)]
    pub cost: Option<String>,
    #[command(flatten)]
    pub category: CategoryArgs,
    /// Flag for follow-up
    #[arg(short = 'x', long, conflicts_with = "unmark")]
    pub mark: bool,
    /// Clear the follow-up flag
    #[arg(long)]
    pub unmark: bool,
}

/// Handle `budget add`
pub fn handle_add(
    storage: &Storage,
    settings: Option<&Settings>,
    args: AddArgs,
    today: NaiveDate,
) -> BudgetResult<()> {
    let draft = TransactionDraft {
        name: args.name,
        cost: parse_cost(&args.cost)?,
        category: args.category.resolve(storage)?,
        marked: args.mark,
    };

    let txn = TransactionService::new(storage).add(draft, today)?;
    println!(
        "Added transaction #{}: {} {}",
        txn.id,
        txn.name,
        format_amount(txn.cost, symbol(settings))
    );
    Ok(())
}

/// Handle `budget list`
pub fn handle_list(
    storage: &Storage,
    settings: Option<&Settings>,
    args: ListArgs,
) -> BudgetResult<()> {
    let mut filter = TransactionFilter::new();
    if args.marked {
        filter = filter.marked();
    }
    if args.all {
        filter = filter.all();
    }

    let rows = transaction_rows(storage, &filter)?;
    print!("{}", format_transaction_table(&rows, symbol(settings)));
    Ok(())
}

/// Handle `budget update`
pub fn handle_update(
    storage: &Storage,
    settings: Option<&Settings>,
    args: UpdateArgs,
) -> BudgetResult<()> {
    let mut patch = TransactionPatch::new();

    if let Some(name) = args.new_name {
        patch = patch.name(name);
    }
    if let Some(cost) = &args.cost {
        patch = patch.cost(parse_cost(cost)?);
    }
    if let Some(category) = args.category.resolve(storage)? {
        patch = patch.category(category);
    }
    if args.mark {
        patch = patch.marked(true);
    } else if args.unmark {
        patch = patch.marked(false);
    }

    let txn = TransactionService::new(storage).update(&args.transaction, &patch)?;
    println!(
        "Updated transaction #{}: {} {}",
        txn.id,
        txn.name,
        format_amount(txn.cost, symbol(settings))
    );
    Ok(())
}

/// Currency symbol to print with, before `init` has run too
pub(crate) fn symbol(settings: Option<&Settings>) -> &str {
    settings.map_or("$", |s| s.currency_symbol.as_str())
}

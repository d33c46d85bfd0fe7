//! Service layer for cdbudget
//!
//! The budget-period arithmetic (clock, totals, pacing) plus the services
//! that write categories and transactions through storage.

pub mod category;
pub mod clock;
pub mod ledger;
pub mod pacing;
pub mod totals;
pub mod transaction;

pub use category::CategoryService;
pub use clock::{PeriodClock, PeriodProgress};
pub use ledger::{resolve_query, CategoryLedger};
pub use pacing::{PaceStatus, Pacing, PacingProjector};
pub use totals::{TotalsEngine, TotalsSummary};
pub use transaction::{parse_cost, TransactionDraft, TransactionService};

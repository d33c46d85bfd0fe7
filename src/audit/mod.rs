//! Audit trail for cdbudget
//!
//! Every category and transaction write is appended to `audit.log` as one
//! JSON object per line. Updates carry the before/after values and a short
//! field-level summary of what changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

//! Ledger domain models and aggregation helpers.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::{BalanceSummary, Ledger, ListingRow, SpendingGroup};
pub use transaction::{Transaction, TransactionKind};

//! Business logic helpers for recording and listing transactions.

use tracing::{info, warn};

use crate::ledger::{Ledger, ListingRow, Transaction, TransactionKind};

/// Append-only helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Appends an income record and returns it.
    pub fn record_income<'a>(
        ledger: &'a mut Ledger,
        amount: f64,
        category: &str,
        date: &str,
    ) -> &'a Transaction {
        Self::record(ledger, TransactionKind::Income, amount, category, date)
    }

    /// Appends an expense record and returns it.
    pub fn record_expense<'a>(
        ledger: &'a mut Ledger,
        amount: f64,
        category: &str,
        date: &str,
    ) -> &'a Transaction {
        Self::record(ledger, TransactionKind::Expense, amount, category, date)
    }

    pub fn record<'a>(
        ledger: &'a mut Ledger,
        kind: TransactionKind,
        amount: f64,
        category: &str,
        date: &str,
    ) -> &'a Transaction {
        if amount < 0.0 {
            warn!(%kind, amount, "recording negative amount");
        }
        info!(%kind, amount, category, date, "transaction recorded");
        ledger.add_transaction(Transaction::new(kind, amount, category, date))
    }

    /// Returns the 1-indexed listing in insertion order.
    pub fn list(ledger: &Ledger) -> Vec<ListingRow<'_>> {
        ledger.listing()
    }
}

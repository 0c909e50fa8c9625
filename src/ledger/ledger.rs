use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};

const UNKNOWN_MONTH: &str = "unknown";

/// Ordered, append-only sequence of transactions for the current run.
///
/// Serializes as a bare JSON array so files written by earlier versions of the
/// tracker load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

/// Totals produced by [`Ledger::balance`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// One line of the 1-indexed transaction listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow<'a> {
    pub index: usize,
    pub transaction: &'a Transaction,
}

/// Aggregated expense total for a grouping key (category or month).
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingGroup {
    pub label: String,
    pub total: f64,
    /// Share of all expenses, in percent.
    pub share: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> &Transaction {
        let index = self.transactions.len();
        self.transactions.push(transaction);
        &self.transactions[index]
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn listing(&self) -> Vec<ListingRow<'_>> {
        self.transactions
            .iter()
            .enumerate()
            .map(|(idx, transaction)| ListingRow {
                index: idx + 1,
                transaction,
            })
            .collect()
    }

    pub fn total_for(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn balance(&self) -> BalanceSummary {
        let total_income = self.total_for(TransactionKind::Income);
        let total_expense = self.total_for(TransactionKind::Expense);
        BalanceSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Expense totals per category in first-seen order.
    pub fn spending_by_category(&self) -> Vec<SpendingGroup> {
        self.group_expenses(|txn| txn.category.clone())
    }

    /// Expense totals per `YYYY-MM` month in first-seen order.
    pub fn spending_by_month(&self) -> Vec<SpendingGroup> {
        self.group_expenses(|txn| month_key(&txn.date))
    }

    fn group_expenses<F>(&self, key: F) -> Vec<SpendingGroup>
    where
        F: Fn(&Transaction) -> String,
    {
        let mut groups: Vec<SpendingGroup> = Vec::new();
        for txn in self.transactions.iter().filter(|txn| txn.is_expense()) {
            let label = key(txn);
            match groups.iter_mut().find(|group| group.label == label) {
                Some(group) => group.total += txn.amount,
                None => groups.push(SpendingGroup {
                    label,
                    total: txn.amount,
                    share: 0.0,
                }),
            }
        }

        let total_expense: f64 = groups.iter().map(|group| group.total).sum();
        if total_expense != 0.0 {
            for group in &mut groups {
                group.share = group.total / total_expense * 100.0;
            }
        }
        groups
    }
}

fn month_key(date: &str) -> String {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|parsed| parsed.format("%Y-%m").to_string())
        .unwrap_or_else(|_| UNKNOWN_MONTH.to_string())
}

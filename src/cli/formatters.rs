use crate::config::Config;
use crate::ledger::{BalanceSummary, ListingRow, SpendingGroup};

pub fn listing_row(row: &ListingRow<'_>, config: &Config) -> String {
    let txn = row.transaction;
    format!(
        "{}. {} - {} - {}: {}",
        row.index,
        txn.date,
        txn.category,
        txn.kind,
        config.format_amount(txn.amount)
    )
}

pub fn balance_lines(summary: &BalanceSummary, config: &Config) -> Vec<String> {
    vec![
        format!("Total Income: {}", config.format_amount(summary.total_income)),
        format!("Total Expense: {}", config.format_amount(summary.total_expense)),
        format!("Remaining Budget: {}", config.format_amount(summary.balance)),
    ]
}

pub fn category_line(group: &SpendingGroup, config: &Config) -> String {
    format!(
        "Category: {} - Total Spent: {} ({:.1}%)",
        group.label,
        config.format_amount(group.total),
        group.share
    )
}

pub fn month_line(group: &SpendingGroup, config: &Config) -> String {
    format!(
        "{} - Total Spent: {}",
        group.label,
        config.format_amount(group.total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Ledger, Transaction};

    #[test]
    fn listing_row_matches_menu_layout() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::income(100.0, "Salary", "2024-01-01"));
        ledger.add_transaction(Transaction::expense(30.0, "Food", "2024-01-02"));
        let config = Config::default();

        let lines: Vec<_> = ledger
            .listing()
            .iter()
            .map(|row| listing_row(row, &config))
            .collect();
        assert_eq!(
            lines,
            vec![
                "1. 2024-01-01 - Salary - Income: $100.00",
                "2. 2024-01-02 - Food - Expense: $30.00",
            ]
        );
    }

    #[test]
    fn balance_lines_report_all_three_totals() {
        let summary = BalanceSummary {
            total_income: 100.0,
            total_expense: 150.0,
            balance: -50.0,
        };
        let lines = balance_lines(&summary, &Config::default());
        assert_eq!(lines[0], "Total Income: $100.00");
        assert_eq!(lines[1], "Total Expense: $150.00");
        assert_eq!(lines[2], "Remaining Budget: -$50.00");
    }

    #[test]
    fn category_line_includes_share() {
        let group = SpendingGroup {
            label: "Food".into(),
            total: 50.0,
            share: 100.0,
        };
        assert_eq!(
            category_line(&group, &Config::default()),
            "Category: Food - Total Spent: $50.00 (100.0%)"
        );
    }
}

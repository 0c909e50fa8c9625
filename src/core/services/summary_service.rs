use crate::ledger::{BalanceSummary, Ledger, SpendingGroup};

/// Read-only reporting over a ledger.
pub struct SummaryService;

impl SummaryService {
    pub fn compute_balance(ledger: &Ledger) -> BalanceSummary {
        ledger.balance()
    }

    pub fn summarize_by_category(ledger: &Ledger) -> Vec<SpendingGroup> {
        ledger.spending_by_category()
    }

    pub fn summarize_by_month(ledger: &Ledger) -> Vec<SpendingGroup> {
        ledger.spending_by_month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Transaction;

    fn ledger_with(incomes: &[f64], expenses: &[(f64, &str)]) -> Ledger {
        let mut ledger = Ledger::new();
        for amount in incomes {
            ledger.add_transaction(Transaction::income(*amount, "Pay", "2024-05-01"));
        }
        for (amount, category) in expenses {
            ledger.add_transaction(Transaction::expense(*amount, *category, "2024-05-02"));
        }
        ledger
    }

    #[test]
    fn balance_sums_each_kind() {
        let ledger = ledger_with(&[1000.0, 250.5], &[(300.0, "Rent"), (49.5, "Food")]);
        let summary = SummaryService::compute_balance(&ledger);
        assert_eq!(summary.total_income, 1250.5);
        assert_eq!(summary.total_expense, 349.5);
        assert_eq!(summary.balance, 901.0);
    }

    #[test]
    fn category_summary_omits_income() {
        let ledger = ledger_with(&[500.0], &[(20.0, "Food"), (5.0, "Transit"), (10.0, "Food")]);
        let groups = SummaryService::summarize_by_category(&ledger);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Food");
        assert_eq!(groups[0].total, 30.0);
        assert_eq!(groups[1].label, "Transit");
        assert_eq!(groups[1].total, 5.0);
        assert!(groups.iter().all(|group| group.label != "Pay"));
    }

    #[test]
    fn income_only_ledger_has_no_spending() {
        let ledger = ledger_with(&[500.0], &[]);
        assert!(SummaryService::summarize_by_category(&ledger).is_empty());
        assert!(SummaryService::summarize_by_month(&ledger).is_empty());
    }
}

use crate::cli::{formatters, input::LineSource, output, shell_context::ShellContext};
use crate::core::services::{SummaryService, TransactionService};

use super::{CommandResult, LoopControl};

pub fn view_transactions(context: &mut ShellContext, _input: &mut dyn LineSource) -> CommandResult {
    output::section("Transactions");
    let rows = TransactionService::list(&context.ledger);
    if rows.is_empty() {
        output::info("No transactions recorded yet.");
    }
    for row in &rows {
        output::line(formatters::listing_row(row, &context.config));
    }
    Ok(LoopControl::Continue)
}

pub fn calculate_budget(context: &mut ShellContext, _input: &mut dyn LineSource) -> CommandResult {
    output::section("Budget Calculation");
    let summary = SummaryService::compute_balance(&context.ledger);
    for line in formatters::balance_lines(&summary, &context.config) {
        output::line(line);
    }
    Ok(LoopControl::Continue)
}

pub fn expense_analysis(context: &mut ShellContext, _input: &mut dyn LineSource) -> CommandResult {
    output::section("Expense Analysis");
    let by_category = SummaryService::summarize_by_category(&context.ledger);
    if by_category.is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(LoopControl::Continue);
    }
    for group in &by_category {
        output::line(formatters::category_line(group, &context.config));
    }

    output::section("Spending Trend");
    for group in SummaryService::summarize_by_month(&context.ledger) {
        output::line(formatters::month_line(&group, &context.config));
    }
    Ok(LoopControl::Continue)
}

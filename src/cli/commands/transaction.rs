use crate::cli::{input::LineSource, output, prompts, shell_context::ShellContext};
use crate::core::services::TransactionService;
use crate::ledger::TransactionKind;

use super::{CommandResult, LoopControl};

pub fn add_income(context: &mut ShellContext, input: &mut dyn LineSource) -> CommandResult {
    add_transaction(context, input, TransactionKind::Income)
}

pub fn add_expense(context: &mut ShellContext, input: &mut dyn LineSource) -> CommandResult {
    add_transaction(context, input, TransactionKind::Expense)
}

/// Collects amount, category, and date in that order. Running out of input
/// part-way leaves the ledger untouched and ends the shell.
fn add_transaction(
    context: &mut ShellContext,
    input: &mut dyn LineSource,
    kind: TransactionKind,
) -> CommandResult {
    let noun = kind.noun();
    let Some(amount) = prompts::prompt_amount(input, &format!("Enter {noun} amount: "))? else {
        return Ok(LoopControl::Exit);
    };
    let Some(category) = prompts::prompt_text(input, &format!("Enter {noun} category: "))? else {
        return Ok(LoopControl::Exit);
    };
    let Some(date) = prompts::prompt_date(input, "Enter date (YYYY-MM-DD): ")? else {
        return Ok(LoopControl::Exit);
    };

    let ledger = &mut context.ledger;
    match kind {
        TransactionKind::Income => {
            TransactionService::record_income(ledger, amount, &category, &date);
        }
        TransactionKind::Expense => {
            TransactionService::record_expense(ledger, amount, &category, &date);
        }
    }
    output::success(format!("{kind} added successfully!"));
    Ok(LoopControl::Continue)
}

pub mod report;
pub mod system;
pub mod transaction;

use crate::cli::{input::LineSource, shell_context::ShellContext};
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<LoopControl, CliError>;

pub type CommandHandler = fn(&mut ShellContext, &mut dyn LineSource) -> CommandResult;

/// One numbered entry of the main menu.
#[derive(Clone, Copy)]
pub struct CommandDefinition {
    pub key: &'static str,
    pub alias: &'static str,
    pub label: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        key: &'static str,
        alias: &'static str,
        label: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            key,
            alias,
            label,
            handler,
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        input == self.key || input.eq_ignore_ascii_case(self.alias)
    }
}

pub(crate) static MENU_COMMANDS: [CommandDefinition; 6] = [
    CommandDefinition::new("1", "income", "Add Income", transaction::add_income),
    CommandDefinition::new("2", "expense", "Add Expense", transaction::add_expense),
    CommandDefinition::new("3", "view", "View Transactions", report::view_transactions),
    CommandDefinition::new("4", "calculate", "Calculate Budget", report::calculate_budget),
    CommandDefinition::new("5", "analyze", "Expense Analysis", report::expense_analysis),
    CommandDefinition::new("6", "exit", "Exit", system::exit),
];

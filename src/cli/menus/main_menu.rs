use strsim::levenshtein;

use crate::cli::commands::{CommandDefinition, MENU_COMMANDS};
use crate::cli::output;

pub const MENU_TITLE: &str = "Budget Tracker Application";
pub const MENU_PROMPT: &str = "Choose an option: ";
const SUGGESTION_DISTANCE: usize = 2;

pub fn show() {
    output::section(MENU_TITLE);
    for command in &MENU_COMMANDS {
        output::line(format!("{}. {}", command.key, command.label));
    }
}

pub fn resolve(input: &str) -> Option<&'static CommandDefinition> {
    let trimmed = input.trim();
    MENU_COMMANDS.iter().find(|command| command.matches(trimmed))
}

/// Closest alias to a mistyped selection, if any is near enough to be useful.
pub fn suggest(input: &str) -> Option<&'static CommandDefinition> {
    let needle = input.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }
    MENU_COMMANDS
        .iter()
        .map(|command| (levenshtein(&needle, command.alias), command))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, command)| command)
}

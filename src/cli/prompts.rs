use chrono::NaiveDate;

use crate::cli::{input::LineSource, output};
use crate::errors::{BudgetError, CliError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a user-entered amount. Signs are accepted; non-numeric and
/// non-finite values are not.
pub fn parse_amount(raw: &str) -> Result<f64, BudgetError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(BudgetError::InvalidAmount(trimmed.to_string())),
    }
}

/// Asks for an amount until a number is entered. Returns `None` at end of input.
pub fn prompt_amount(input: &mut dyn LineSource, label: &str) -> Result<Option<f64>, CliError> {
    loop {
        let Some(raw) = input.read_line(label)? else {
            return Ok(None);
        };
        match parse_amount(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => output::warning(format!("{err}. Please try again.")),
        }
    }
}

/// Reads a line as entered, surrounding whitespace included.
pub fn prompt_text(input: &mut dyn LineSource, label: &str) -> Result<Option<String>, CliError> {
    input.read_line(label)
}

/// Reads a date as free text. Values outside `YYYY-MM-DD` are kept but flagged.
pub fn prompt_date(input: &mut dyn LineSource, label: &str) -> Result<Option<String>, CliError> {
    let value = prompt_text(input, label)?;
    if let Some(date) = value.as_deref() {
        if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            output::warning(format!(
                "`{date}` is not a YYYY-MM-DD date; it will be stored as entered."
            ));
        }
    }
    Ok(value)
}

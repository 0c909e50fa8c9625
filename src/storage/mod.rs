pub mod json_backend;

use crate::{errors::Result, ledger::Ledger};

/// Abstraction over the place a ledger is loaded from at startup and written to on exit.
pub trait TransactionStore {
    /// Returns the persisted ledger, or an empty one when nothing was saved yet.
    fn load(&self) -> Result<Ledger>;
    /// Replaces the persisted state with `ledger`.
    fn save(&self, ledger: &Ledger) -> Result<()>;
    /// Human-readable location, used in status messages.
    fn describe(&self) -> String;
}

pub use json_backend::{JsonStore, DEFAULT_DATA_FILE};

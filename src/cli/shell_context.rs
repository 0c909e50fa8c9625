//! Shared runtime state for the menu shell.

use tracing::info;

use crate::{
    cli::output::{self, OutputPreferences},
    config::{Config, ConfigManager},
    errors::CliError,
    ledger::Ledger,
    storage::{JsonStore, TransactionStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Owns the in-memory ledger for the whole run together with the store it
/// came from.
pub struct ShellContext {
    pub config: Config,
    pub ledger: Ledger,
    store: Box<dyn TransactionStore>,
}

impl ShellContext {
    /// Loads the config and the ledger from their fixed locations in the working directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        let store = JsonStore::new_default().with_backup(config.keep_backup);
        Self::with_store(mode, config, Box::new(store))
    }

    pub fn with_store(
        mode: CliMode,
        config: Config,
        store: Box<dyn TransactionStore>,
    ) -> Result<Self, CliError> {
        output::set_preferences(OutputPreferences {
            plain_output: config.plain_output,
        });
        let ledger = store.load()?;
        info!(
            ?mode,
            location = %store.describe(),
            transactions = ledger.len(),
            "shell context ready"
        );
        Ok(Self {
            config,
            ledger,
            store,
        })
    }

    pub fn store_location(&self) -> String {
        self.store.describe()
    }

    /// Writes the whole ledger back, replacing whatever was stored before.
    pub fn save(&self) -> Result<(), CliError> {
        self.store.save(&self.ledger)?;
        output::success(format!(
            "Saved {} transaction(s) to {}.",
            self.ledger.len(),
            self.store_location()
        ));
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use crate::errors::BudgetError;

pub const DEFAULT_CONFIG_FILE: &str = "budget_tracker.config.json";

/// Presentation preferences for the shell. Never affects where transactions are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub plain_output: bool,
    pub keep_backup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            plain_output: false,
            keep_backup: true,
        }
    }
}

impl Config {
    pub fn format_amount(&self, amount: f64) -> String {
        let magnitude = format!("{:.2}", amount.abs());
        // Values that round to zero print unsigned.
        if amount < 0.0 && magnitude != "0.00" {
            format!("-{}{}", self.currency_symbol, magnitude)
        } else {
            format!("{}{}", self.currency_symbol, magnitude)
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CONFIG_FILE)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Config, BudgetError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data).map_err(|err| {
                BudgetError::ConfigError(format!("{}: {}", self.path.display(), err))
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join(DEFAULT_CONFIG_FILE));
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{ "currency_symbol": "€" }"#).unwrap();

        let config = ConfigManager::with_path(&path).load().unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert!(config.keep_backup);
        assert!(!config.plain_output);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "plain_output = true").unwrap();

        let err = ConfigManager::with_path(&path).load().unwrap_err();
        assert!(matches!(err, BudgetError::ConfigError(_)), "{err:?}");
    }

    #[test]
    fn amounts_render_with_symbol_and_two_decimals() {
        let config = Config::default();
        assert_eq!(config.format_amount(100.0), "$100.00");
        assert_eq!(config.format_amount(4.5), "$4.50");
        assert_eq!(config.format_amount(-12.5), "-$12.50");
    }

    #[test]
    fn negative_zero_renders_unsigned() {
        let config = Config::default();
        assert_eq!(config.format_amount(-0.0), "$0.00");
        assert_eq!(config.format_amount(-0.001), "$0.00");
    }
}

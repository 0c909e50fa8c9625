use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info};

use crate::{
    errors::{BudgetError, Result},
    ledger::Ledger,
};

use super::TransactionStore;

/// Fixed location of the ledger file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "transactions.json";
const TMP_SUFFIX: &str = "tmp";
const BACKUP_SUFFIX: &str = "bak";
const INDENT: &[u8] = b"    ";

/// Flat JSON file holding the full transaction list.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    keep_backup: bool,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            keep_backup: true,
        }
    }

    pub fn new_default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }

    pub fn with_backup(mut self, keep_backup: bool) -> Self {
        self.keep_backup = keep_backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, BACKUP_SUFFIX)
    }

    fn backup_existing_file(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let backup = self.backup_path();
        fs::copy(&self.path, &backup)?;
        debug!(path = %backup.display(), "previous ledger copied to backup");
        Ok(())
    }
}

impl TransactionStore for JsonStore {
    fn load(&self) -> Result<Ledger> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no ledger file yet, starting empty");
                return Ok(Ledger::new());
            }
            Err(err) => return Err(err.into()),
        };
        let ledger: Ledger =
            serde_json::from_str(&data).map_err(|err| BudgetError::Corrupt {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;
        info!(path = %self.path.display(), count = ledger.len(), "ledger loaded");
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if self.keep_backup {
            self.backup_existing_file()?;
        }
        let tmp = sibling_with_suffix(&self.path, TMP_SUFFIX);
        write_atomic(&tmp, &serialize_ledger(ledger)?)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), count = ledger.len(), "ledger saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn serialize_ledger(ledger: &Ledger) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    ledger.serialize(&mut serializer)?;
    Ok(buffer)
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut sibling = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, suffix),
        None => suffix.to_string(),
    };
    sibling.set_extension(ext);
    sibling
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Transaction;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty_ledger() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("transactions.json"));
        let ledger = store.load().expect("missing file is not an error");
        assert!(ledger.is_empty());
    }

    #[test]
    fn malformed_file_is_reported_as_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonStore::new(&path).load().expect_err("corrupt file must fail");
        assert!(
            matches!(err, BudgetError::Corrupt { ref path, .. } if path.ends_with("transactions.json")),
            "unexpected error: {err:?}"
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn save_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("transactions.json"));
        let ledger = Ledger::from_transactions(vec![Transaction::income(1.5, "Tip", "2024-01-01")]);
        store.save(&ledger).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("[\n    {\n        \"type\": \"income\""), "{text}");
    }

    #[test]
    fn save_keeps_previous_file_as_backup() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("transactions.json"));
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::expense(3.0, "Snacks", "2024-01-01"));
        store.save(&ledger).unwrap();
        let first = fs::read_to_string(store.path()).unwrap();

        ledger.add_transaction(Transaction::expense(4.0, "Snacks", "2024-01-02"));
        store.save(&ledger).unwrap();

        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), first);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn backup_can_be_disabled() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("transactions.json")).with_backup(false);
        store.save(&Ledger::new()).unwrap();
        store.save(&Ledger::new()).unwrap();
        assert!(!store.backup_path().exists());
    }

    #[test]
    fn sibling_paths_append_suffix() {
        let path = Path::new("data/transactions.json");
        assert_eq!(
            sibling_with_suffix(path, "tmp"),
            PathBuf::from("data/transactions.json.tmp")
        );
        assert_eq!(
            sibling_with_suffix(Path::new("ledger"), "bak"),
            PathBuf::from("ledger.bak")
        );
    }
}

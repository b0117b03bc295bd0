use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const DEFAULT_DIR_NAME: &str = ".expense_core";
const LEDGER_FILE: &str = "transactions.json";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the persisted ledger inside a data directory.
pub fn ledger_file_in(base: &Path) -> PathBuf {
    base.join(LEDGER_FILE)
}

/// Path of the configuration file inside a data directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), LedgerError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

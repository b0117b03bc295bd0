use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::utils::{app_data_dir, ensure_dir, ledger_file_in};
use crate::ledger::Ledger;

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores the whole ledger as one pretty-printed JSON file.
#[derive(Clone)]
pub struct JsonStore {
    root: PathBuf,
    ledger_file: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let ledger_file = ledger_file_in(&root);
        Ok(Self { root, ledger_file })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_file
    }
}

impl StorageBackend for JsonStore {
    fn load(&self) -> Ledger {
        match self.load_strict() {
            Ok(ledger) => ledger,
            Err(err) => {
                tracing::warn!(
                    path = %self.ledger_file.display(),
                    error = %err,
                    "Persisted ledger unreadable; starting empty."
                );
                Ledger::new()
            }
        }
    }

    fn load_strict(&self) -> Result<Ledger> {
        if !self.ledger_file.exists() {
            return Ok(Ledger::new());
        }
        let data = fs::read_to_string(&self.ledger_file)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.ledger_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.ledger_file)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

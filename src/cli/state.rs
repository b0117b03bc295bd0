use crate::cli::forms::EntryForm;
use crate::cli::CliError;
use crate::config::{Config, ConfigManager};
use crate::core::ledger_manager::LedgerManager;
use crate::storage::JsonStore;

/// Whether the shell drives a terminal or replays scripted stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Shared CLI runtime state.
///
/// One controller owns the mutable pieces: the ledger manager, the entry
/// form, and the display configuration.
pub struct CliState {
    mode: CliMode,
    manager: LedgerManager,
    form: EntryForm,
    config: Config,
}

impl CliState {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let storage = JsonStore::new_default()?;
        let manager = LedgerManager::open(Box::new(storage));
        let config = ConfigManager::new()?.load()?;
        Ok(Self {
            mode,
            manager,
            form: EntryForm::new(),
            config,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn manager(&self) -> &LedgerManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut LedgerManager {
        &mut self.manager
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn with_parts(mode: CliMode, manager: LedgerManager, config: Config) -> Self {
        Self {
            mode,
            manager,
            form: EntryForm::new(),
            config,
        }
    }
}

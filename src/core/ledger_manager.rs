use crate::core::services::{LedgerTotals, SummaryService};
use crate::errors::LedgerError;
use crate::ledger::{Ledger, TransactionRecord};
use crate::storage::StorageBackend;

/// Facade that coordinates the in-memory ledger with its persistence.
///
/// Every successful append rewrites the persisted ledger in full. The
/// in-memory copy is replaced only after the write succeeds, so a
/// persistence failure never leaves memory ahead of disk.
pub struct LedgerManager {
    current: Ledger,
    storage: Box<dyn StorageBackend>,
}

impl LedgerManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            current: Ledger::new(),
            storage,
        }
    }

    /// Creates a manager seeded from persisted state. Absent or corrupt
    /// data degrades to an empty ledger.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let current = storage.load();
        tracing::debug!(records = current.len(), "Loaded persisted ledger.");
        Self { current, storage }
    }

    /// Validates and appends one record, persisting the updated ledger.
    pub fn append(&mut self, record: TransactionRecord) -> Result<(), LedgerError> {
        let mut next = self.current.clone();
        next.append(record)?;
        self.storage.save(&next)?;
        self.current = next;
        tracing::debug!(records = self.current.len(), "Appended ledger record.");
        Ok(())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.current
    }

    pub fn records(&self) -> &[TransactionRecord] {
        self.current.records()
    }

    pub fn totals(&self) -> LedgerTotals {
        SummaryService::recompute(&self.current)
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }
}

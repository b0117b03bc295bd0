use serde::{Deserialize, Serialize};

use super::record::TransactionRecord;
use crate::errors::LedgerError;

/// Ordered, append-only sequence of transaction records.
///
/// Insertion order is display order. Serializes transparently as a plain
/// JSON array of records, matching the persisted wire format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record after validating it. Invalid records leave the
    /// ledger untouched.
    pub fn append(&mut self, record: TransactionRecord) -> Result<(), LedgerError> {
        record.validate()?;
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

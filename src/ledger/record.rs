use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        }
    }

    /// Parses the user-facing lowercase spelling, ignoring case and padding.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("income") {
            Some(RecordKind::Income)
        } else if trimmed.eq_ignore_ascii_case("expense") {
            Some(RecordKind::Expense)
        } else {
            None
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense entry.
///
/// Records carry no identifier: the ledger is append-only and entries are
/// addressed by position. The serialized field is named `type` to stay
/// compatible with previously persisted data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub description: String,
    pub date: NaiveDate,
    pub amount: f64,
}

impl TransactionRecord {
    pub fn new(
        kind: RecordKind,
        description: impl Into<String>,
        date: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            date,
            amount,
        }
    }

    /// Checks the append invariant: every field present and usable.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "description must not be empty".into(),
            ));
        }
        if !self.amount.is_finite() {
            return Err(LedgerError::Validation("amount must be a number".into()));
        }
        if self.amount < 0.0 {
            return Err(LedgerError::Validation(
                "amount must not be negative".into(),
            ));
        }
        Ok(())
    }
}

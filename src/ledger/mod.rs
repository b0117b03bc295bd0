//! Ledger domain models and helpers.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;

pub use ledger::Ledger;
pub use record::{RecordKind, TransactionRecord};

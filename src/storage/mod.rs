pub mod json_backend;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing the ledger.
pub trait StorageBackend: Send + Sync {
    /// Fail-soft read used at startup: absent or unparseable state yields
    /// an empty ledger rather than an error.
    fn load(&self) -> Ledger;

    /// Strict read that surfaces the underlying failure.
    fn load_strict(&self) -> Result<Ledger>;

    /// Rewrites the persisted ledger in full.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

pub use json_backend::JsonStore;

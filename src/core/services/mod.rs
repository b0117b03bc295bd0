pub mod summary_service;

pub use summary_service::{LedgerTotals, SummaryService};

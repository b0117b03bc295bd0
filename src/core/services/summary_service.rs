//! Derived income/expense totals over a ledger.

use crate::ledger::{Ledger, RecordKind};

/// Summary accumulators derived from a ledger snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LedgerTotals {
    pub total_income: f64,
    pub total_expense: f64,
}

impl LedgerTotals {
    pub fn balance(&self) -> f64 {
        self.total_income - self.total_expense
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Recomputes both totals in a single pass over the ledger.
    ///
    /// Pure and idempotent: totals are always derived from scratch rather
    /// than maintained incrementally. Amounts accumulate in insertion order.
    pub fn recompute(ledger: &Ledger) -> LedgerTotals {
        let mut totals = LedgerTotals::default();
        for record in ledger.records() {
            match record.kind {
                RecordKind::Income => totals.total_income += record.amount,
                RecordKind::Expense => totals.total_expense += record.amount,
            }
        }
        totals
    }
}

#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the ledger, aggregation, and persistence primitives
//! that power a small income/expense tracking CLI.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

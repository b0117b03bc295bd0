//! Interactive and script-mode CLI over the expense ledger.

pub mod commands;
pub mod forms;
pub mod io;
pub mod output;
pub mod shell;
pub mod state;

use thiserror::Error;

use crate::errors::LedgerError;

pub use shell::run_cli;
pub use state::{CliMode, CliState};

/// Failures that abort the whole CLI session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures scoped to a single command; reported, then the loop continues.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),
}

pub type CommandResult = Result<(), CommandError>;

//! Shell loop, line dispatch, and script-mode execution.

use std::io::{self, BufRead};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::cli::output;
use crate::cli::state::{CliMode, CliState};
use crate::cli::{commands, CliError, CommandError};

const COMMANDS: &[&str] = &["add", "list", "summary", "help", "exit", "quit"];
const PROMPT: &str = "expense> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("EXPENSE_CORE_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut state = CliState::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut state),
        CliMode::Script => run_script(&mut state),
    }
}

fn run_interactive(state: &mut CliState) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = editor.readline(PROMPT);
        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                match handle_line(state, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => output::error(err),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(state: &mut CliState) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match handle_line(state, trimmed) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => output::error(err),
        }
    }
    Ok(())
}

fn handle_line(state: &mut CliState, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = shell_words::split(line)
        .map_err(|err| CommandError::InvalidArguments(format!("unbalanced quoting: {err}")))?;
    let Some((name, args)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };

    match name.as_str() {
        "add" => commands::add(state, args)?,
        "list" => commands::list(state),
        "summary" => commands::summary(state),
        "help" => commands::help(),
        "exit" | "quit" => return Ok(LoopControl::Exit),
        other => {
            let mut message = format!("Unknown command `{other}`.");
            if let Some(suggestion) = suggest_command(other) {
                message.push_str(&format!(" Did you mean `{suggestion}`?"));
            }
            output::error(message);
        }
    }
    Ok(LoopControl::Continue)
}

/// Closest known command within a small edit distance, if any.
fn suggest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|candidate| (strsim::levenshtein(input, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_near_misses() {
        assert_eq!(suggest_command("lst"), Some("list"));
        assert_eq!(suggest_command("summry"), Some("summary"));
        assert_eq!(suggest_command("ad"), Some("add"));
    }

    #[test]
    fn stays_silent_for_distant_input() {
        assert_eq!(suggest_command("frobnicate"), None);
    }
}

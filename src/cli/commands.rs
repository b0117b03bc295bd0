//! Command handlers dispatched by the shell loop.

use chrono::Local;

use crate::cli::forms::{run_entry_wizard, EntryDraft, FieldId, FormResult};
use crate::cli::io::DialoguerInteraction;
use crate::cli::output;
use crate::cli::state::{CliMode, CliState};
use crate::cli::{CommandError, CommandResult};

const ADD_USAGE: &str = "usage: add [<type> <description> <date> <amount>]";

/// `add` — interactive entry wizard, or a one-shot append when the four
/// field values are passed as arguments.
pub fn add(state: &mut CliState, args: &[String]) -> CommandResult {
    if args.is_empty() {
        if state.mode() == CliMode::Script {
            return Err(CommandError::InvalidArguments(ADD_USAGE.into()));
        }
        return add_interactive(state);
    }
    add_from_args(state, args)
}

fn add_interactive(state: &mut CliState) -> CommandResult {
    let today = Local::now().date_naive();
    state.form_mut().open(today);
    let mut interaction = DialoguerInteraction::new();
    match run_entry_wizard(state.form_mut(), &mut interaction)? {
        FormResult::Completed(record) => {
            state.manager_mut().append(record)?;
            output::success("Transaction recorded.");
        }
        FormResult::Cancelled => {
            output::info("Entry cancelled.");
        }
    }
    Ok(())
}

fn add_from_args(state: &mut CliState, args: &[String]) -> CommandResult {
    if args.len() != 4 {
        return Err(CommandError::InvalidArguments(ADD_USAGE.into()));
    }
    let today = Local::now().date_naive();
    let mut draft = EntryDraft::with_defaults(today);
    for (field, value) in FieldId::ALL.iter().zip(args) {
        draft.set_field(*field, value.clone());
    }
    let record = draft
        .to_record()
        .map_err(|err| CommandError::InvalidArguments(err.message))?;
    state.manager_mut().append(record)?;
    output::success("Transaction recorded.");
    Ok(())
}

/// `list` — prints every record in insertion order.
pub fn list(state: &CliState) {
    let records = state.manager().records();
    if records.is_empty() {
        output::info("No transactions yet.");
        return;
    }
    let currency = &state.config().currency;
    output::section("All Transactions");
    for (index, record) in records.iter().enumerate() {
        output::line(format!(
            "{:>3}.  {:<8}  {}  {} {}  {}",
            index + 1,
            record.kind,
            record.date,
            currency,
            record.amount,
            record.description,
        ));
    }
}

/// `summary` — recomputes and prints the derived totals.
pub fn summary(state: &CliState) {
    let totals = state.manager().totals();
    let currency = &state.config().currency;
    output::section("Summary");
    output::line(format!("Total income:  {} {}", currency, totals.total_income));
    output::line(format!(
        "Total expense: {} {}",
        currency, totals.total_expense
    ));
    output::line(format!("Balance:       {} {}", currency, totals.balance()));
}

pub fn help() {
    output::section("Commands");
    output::line("add [<type> <description> <date> <amount>]  record a transaction");
    output::line("list                                         show all transactions");
    output::line("summary                                      show totals and balance");
    output::line("help                                         show this help");
    output::line("exit | quit                                  leave the shell");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::ledger_manager::LedgerManager;
    use crate::storage::JsonStore;
    use tempfile::TempDir;

    fn test_state() -> (CliState, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
        let manager = LedgerManager::open(Box::new(store));
        let state = CliState::with_parts(CliMode::Script, manager, Config::default());
        (state, temp)
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn add_from_args_appends_and_persists() {
        let (mut state, temp) = test_state();
        add(
            &mut state,
            &args(&["income", "Salary", "2024-01-01", "5000"]),
        )
        .unwrap();
        add(
            &mut state,
            &args(&["expense", "Rent", "2024-01-02", "1500"]),
        )
        .unwrap();

        assert_eq!(state.manager().records().len(), 2);
        let totals = state.manager().totals();
        assert_eq!(totals.balance(), 3500.0);

        let reopened = LedgerManager::open(Box::new(
            JsonStore::new(Some(temp.path().to_path_buf())).unwrap(),
        ));
        assert_eq!(reopened.records().len(), 2);
    }

    #[test]
    fn add_rejects_empty_description() {
        let (mut state, _temp) = test_state();
        let err = add(&mut state, &args(&["income", "", "2024-01-01", "100"]))
            .expect_err("empty description must fail");
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert_eq!(state.manager().records().len(), 0);
    }

    #[test]
    fn add_rejects_wrong_arity_in_script_mode() {
        let (mut state, _temp) = test_state();
        assert!(add(&mut state, &[]).is_err());
        assert!(add(&mut state, &args(&["income", "Salary"])).is_err());
    }

    #[test]
    fn add_rejects_malformed_date_and_amount() {
        let (mut state, _temp) = test_state();
        assert!(add(&mut state, &args(&["income", "Salary", "01/01/2024", "100"])).is_err());
        assert!(add(&mut state, &args(&["income", "Salary", "2024-01-01", "lots"])).is_err());
        assert!(add(&mut state, &args(&["income", "Salary", "2024-01-01", "-5"])).is_err());
        assert_eq!(state.manager().records().len(), 0);
    }
}

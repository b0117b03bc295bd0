use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn script_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("expense_core_cli").unwrap();
    cmd.env("EXPENSE_CORE_CLI_SCRIPT", "1")
        .env("EXPENSE_CORE_HOME", home);
    cmd
}

#[test]
fn script_mode_records_and_summarizes() {
    let home = tempdir().unwrap();
    let input = "add income Salary 2024-01-01 5000\n\
                 add expense Rent 2024-01-02 1500\n\
                 summary\n\
                 list\n\
                 exit\n";

    script_cmd(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Transaction recorded."))
        .stdout(contains("Total income:  Rs 5000"))
        .stdout(contains("Total expense: Rs 1500"))
        .stdout(contains("Balance:       Rs 3500"))
        .stdout(contains("Salary"))
        .stdout(contains("Rent"));

    let json = std::fs::read_to_string(home.path().join("transactions.json")).unwrap();
    assert!(json.contains("\"Salary\""));
    assert!(json.contains("\"expense\""));
}

#[test]
fn ledger_reloads_across_invocations() {
    let home = tempdir().unwrap();

    script_cmd(home.path())
        .write_stdin("add income Salary 2024-01-01 5000\nexit\n")
        .assert()
        .success();

    script_cmd(home.path())
        .write_stdin("summary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Total income:  Rs 5000"));
}

#[test]
fn invalid_record_is_reported_and_not_persisted() {
    let home = tempdir().unwrap();
    let input = "add income \"\" 2024-01-01 100\nlist\nexit\n";

    script_cmd(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("ERROR"))
        .stdout(contains("No transactions yet."));

    assert!(!home.path().join("transactions.json").exists());
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = tempdir().unwrap();

    script_cmd(home.path())
        .write_stdin("summry\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `summry`."))
        .stdout(contains("Did you mean `summary`?"));
}

#[test]
fn corrupt_store_starts_empty_without_failing() {
    let home = tempdir().unwrap();
    std::fs::create_dir_all(home.path()).unwrap();
    std::fs::write(home.path().join("transactions.json"), "not json").unwrap();

    script_cmd(home.path())
        .write_stdin("summary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Total income:  Rs 0"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn financeflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("financeflow").unwrap();
    cmd.env("FINANCEFLOW_DATA_DIR", dir.path())
        .env_remove("FINANCEFLOW_PERIOD")
        .args(["--period", "2026-01"]);
    cmd
}

fn add_expense(dir: &TempDir, merchant: &str, amount: &str, category: &str) -> String {
    let output = financeflow(dir)
        .args(["txn", "add", merchant, amount, "-c", category, "-d", "2026-01-15"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Added transaction: "))
        .unwrap()
        .trim()
        .to_string()
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("financeflow")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("income"))
        .stdout(predicate::str::contains("budget"))
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn test_income_set_and_show() {
    let dir = TempDir::new().unwrap();

    financeflow(&dir)
        .args(["income", "set", "50000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹50,000"));

    financeflow(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Income: ₹50,000"));
}

#[test]
fn test_invalid_income_is_rejected() {
    let dir = TempDir::new().unwrap();

    financeflow(&dir)
        .args(["income", "set", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid monthly income"));
}

#[test]
fn test_budget_over_allocation_is_rejected() {
    let dir = TempDir::new().unwrap();

    financeflow(&dir).args(["income", "set", "50000"]).assert().success();
    financeflow(&dir)
        .args(["budget", "set", "food", "20000"])
        .assert()
        .success();
    financeflow(&dir)
        .args(["budget", "set", "transport", "35000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot exceed monthly income"));

    financeflow(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹20,000"))
        .stdout(predicate::str::contains("₹35,000").not());
}

#[test]
fn test_unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    financeflow(&dir)
        .args(["txn", "add", "Shop", "100", "-c", "groceries"])
        .assert()
        .failure();
}

#[test]
fn test_summary_reflects_spending() {
    let dir = TempDir::new().unwrap();

    financeflow(&dir).args(["income", "set", "1000"]).assert().success();
    add_expense(&dir, "Café X", "250", "food");

    financeflow(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2026"))
        .stdout(predicate::str::contains("₹250"))
        .stdout(predicate::str::contains("75%"));
}

#[test]
fn test_other_period_is_excluded() {
    let dir = TempDir::new().unwrap();

    add_expense(&dir, "Café X", "250", "food");

    Command::cargo_bin("financeflow")
        .unwrap()
        .env("FINANCEFLOW_DATA_DIR", dir.path())
        .args(["--period", "2026-02", "charts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Spending"));
}

#[test]
fn test_search_and_list() {
    let dir = TempDir::new().unwrap();

    add_expense(&dir, "Grocer", "120", "food");
    add_expense(&dir, "Metro", "40", "transport");

    financeflow(&dir)
        .args(["txn", "search", "metro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metro"))
        .stdout(predicate::str::contains("Grocer").not());

    financeflow(&dir)
        .args(["txn", "search", "cinema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions match"));

    financeflow(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 of 2)"));
}

#[test]
fn test_delete_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    let id = add_expense(&dir, "Grocer", "120", "food");

    financeflow(&dir)
        .args(["txn", "delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    financeflow(&dir)
        .args(["txn", "delete", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    // a second delete is a harmless no-op
    financeflow(&dir)
        .args(["txn", "delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to delete"));
}

#[test]
fn test_income_reset_clears_everything() {
    let dir = TempDir::new().unwrap();

    financeflow(&dir).args(["income", "set", "50000"]).assert().success();
    financeflow(&dir)
        .args(["budget", "set", "food", "20000"])
        .assert()
        .success();
    add_expense(&dir, "Grocer", "120", "food");

    financeflow(&dir)
        .args(["income", "reset", "--yes"])
        .assert()
        .success();

    financeflow(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly income not set."));
    financeflow(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet!"));
}

#[test]
fn test_audit_records_mutations() {
    let dir = TempDir::new().unwrap();

    financeflow(&dir).args(["income", "set", "50000"]).assert().success();

    financeflow(&dir)
        .args(["audit", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income"));
}

#[test]
fn test_unwritable_audit_log_warns_but_keeps_the_change() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("audit.log")).unwrap();

    financeflow(&dir)
        .args(["txn", "add", "Grocer", "120", "-c", "food", "-d", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"))
        .stderr(predicate::str::contains("audit log"));

    financeflow(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 of 1)"));
}

#[test]
fn test_config_writes_default_settings_once() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    financeflow(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(config.exists());

    financeflow(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not())
        .stdout(predicate::str::contains("Date format:    %Y-%m-%d"));
}

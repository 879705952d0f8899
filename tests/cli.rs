//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via
//! MY_POCKET_DATA_DIR. Assistant commands are not exercised here; they need
//! a live API key.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pocket(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocket").unwrap();
    cmd.env("MY_POCKET_DATA_DIR", dir.path());
    cmd.env_remove("MY_POCKET_API_KEY");
    cmd
}

#[test]
fn records_income_and_expense_and_derives_balance() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["transaction", "add", "5000", "--type", "income", "--category", "Salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Income: 5000.00"));

    pocket(&dir)
        .args(["transaction", "add", "1200", "--category", "Food"])
        .assert()
        .success();

    pocket(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash"))
        .stdout(predicate::str::contains("3800.00"));
}

#[test]
fn rejects_zero_amount() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["transaction", "add", "0", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn rejects_multibyte_amount_without_crashing() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["transaction", "add", "10.€", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn budget_progress_shows_spending() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["budget", "set", "Food", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set for Food"));

    pocket(&dir)
        .args(["transaction", "add", "1200", "--category", "Food"])
        .assert()
        .success();

    pocket(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("80.0%"));
}

#[test]
fn goal_completion_announced_once() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["goal", "add", "iPhone", "2000"])
        .assert()
        .success();

    pocket(&dir)
        .args(["transaction", "add", "1500", "--type", "saving", "--category", "Savings", "--goal", "iPhone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal reached").not());

    pocket(&dir)
        .args(["transaction", "add", "600", "--type", "saving", "--category", "Savings", "--goal", "iPhone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal reached: iPhone"));

    pocket(&dir)
        .args(["transaction", "add", "100", "--type", "saving", "--category", "Savings", "--goal", "iPhone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal reached").not());

    pocket(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2200.00"));
}

#[test]
fn free_plan_caps_accounts_at_two() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["account", "add", "Bank", "--kind", "bank"])
        .assert()
        .success();

    pocket(&dir)
        .args(["account", "add", "Wallet", "--kind", "wallet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Upgrade required"));

    pocket(&dir)
        .args(["config", "set-premium", "on"])
        .assert()
        .success();

    pocket(&dir)
        .args(["account", "add", "Wallet", "--kind", "wallet"])
        .assert()
        .success();
}

#[test]
fn deleting_account_moves_balance_to_default() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["account", "add", "Bank", "--kind", "bank"])
        .assert()
        .success();
    pocket(&dir)
        .args(["transaction", "add", "300", "--type", "income", "--category", "Salary", "--account", "Bank"])
        .assert()
        .success();

    pocket(&dir)
        .args(["account", "delete", "Bank"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted account: Bank"));

    pocket(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("300.00"));
}

#[test]
fn default_account_cannot_be_deleted() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["account", "delete", "Cash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("default account"));
}

#[test]
fn remind_reports_due_debts() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["transaction", "add", "500", "--type", "debt-out", "--category", "Loan", "--remind-on", "2020-01-01"])
        .assert()
        .success();

    pocket(&dir)
        .args(["config", "set-language", "en"])
        .assert()
        .success();

    pocket(&dir)
        .args(["remind"])
        .assert()
        .success()
        .stdout(predicate::str::contains("payment-reminder"))
        .stdout(predicate::str::contains("1 debt due"));
}

#[test]
fn remind_quiet_when_nothing_due() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["remind"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No payments due"));
}

#[test]
fn export_requires_premium_and_import_round_trips() {
    let dir = TempDir::new().unwrap();
    let bundle = dir.path().join("bundle.json");
    let bundle_str = bundle.to_str().unwrap().to_string();

    pocket(&dir)
        .args(["transaction", "add", "100", "--type", "income", "--category", "Salary"])
        .assert()
        .success();

    pocket(&dir)
        .args(["export", &bundle_str])
        .assert()
        .failure()
        .stderr(predicate::str::contains("premium"));

    pocket(&dir)
        .args(["config", "set-premium", "on"])
        .assert()
        .success();
    pocket(&dir)
        .args(["export", &bundle_str])
        .assert()
        .success();

    // Restore into a fresh store
    let fresh = TempDir::new().unwrap();
    pocket(&fresh)
        .args(["import", &bundle_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("transactions"));

    pocket(&fresh)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00"));
}

#[test]
fn import_rejects_malformed_bundle() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{not json").unwrap();

    pocket(&dir)
        .args(["transaction", "add", "100", "--type", "income", "--category", "Salary"])
        .assert()
        .success();

    pocket(&dir)
        .args(["import", broken.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));

    // Store untouched
    pocket(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00"));
}

#[test]
fn say_without_api_key_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["say", "spent 50 on transport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn audit_show_lists_recorded_operations() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["audit", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit log is empty"));

    pocket(&dir)
        .args(["transaction", "add", "45", "--category", "Food"])
        .assert()
        .success();

    pocket(&dir)
        .args(["audit", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Transaction"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn config_show_lists_paths() {
    let dir = TempDir::new().unwrap();

    pocket(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("not set"));
}

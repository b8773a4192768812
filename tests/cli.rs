use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sheet(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance-sheet").unwrap();
    cmd.env("FINANCE_SHEET_DATA_DIR", dir.path())
        .env_remove("RUST_LOG")
        .current_dir(dir.path());
    cmd
}

fn state_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path()
        .join("data")
        .join("personal-finance-sheet-v1.json")
}

#[test]
fn shows_template_on_first_run() {
    let dir = TempDir::new().unwrap();

    sheet(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Housing & Rent"))
        .stdout(predicate::str::contains("Amounts in USD"));

    assert!(!state_file(&dir).exists());
}

#[test]
fn edits_persist_between_runs() {
    let dir = TempDir::new().unwrap();

    sheet(&dir)
        .args(["set", "Salary", "jan", "6000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary Jan: $6,000.00"));

    let saved = std::fs::read_to_string(state_file(&dir)).unwrap();
    assert!(saved.contains("\"Jan\":6000.0"));

    sheet(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("6,000"));
}

#[test]
fn negative_and_invalid_input_store_zero() {
    let dir = TempDir::new().unwrap();

    sheet(&dir)
        .args(["set", "Groceries", "feb", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries Feb: $0.00"));

    sheet(&dir)
        .args(["set", "Groceries", "mar", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries Mar: $0.00"));
}

#[test]
fn add_with_empty_label_adds_nothing() {
    let dir = TempDir::new().unwrap();

    sheet(&dir)
        .args(["add", "expense", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("no row added"));

    assert!(!state_file(&dir).exists());
}

#[test]
fn add_and_remove_row() {
    let dir = TempDir::new().unwrap();

    sheet(&dir)
        .args(["add", "savings", "Vacation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added savings row: Vacation"));

    sheet(&dir)
        .args(["remove", "vacation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed row: Vacation"));

    sheet(&dir)
        .args(["remove", "vacation"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row not found: vacation"));
}

#[test]
fn reset_needs_confirmation_and_clears_storage() {
    let dir = TempDir::new().unwrap();

    sheet(&dir).args(["currency", "eur"]).assert().success();
    assert!(state_file(&dir).exists());

    sheet(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    assert!(state_file(&dir).exists());

    sheet(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 rows, USD"));
    assert!(!state_file(&dir).exists());
}

#[test]
fn unknown_currency_is_rejected() {
    let dir = TempDir::new().unwrap();

    sheet(&dir)
        .args(["currency", "JPY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported currency"));
}

#[test]
fn corrupt_saved_sheet_falls_back_to_template() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(state_file(&dir), "{\"rows\": [").unwrap();

    sheet(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Largest expense: Housing & Rent"))
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn export_csv_uses_default_file_name() {
    let dir = TempDir::new().unwrap();

    sheet(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 8 rows"));

    let csv = std::fs::read_to_string(dir.path().join("personal-finance-sheet.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Category,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec,Annual Total")
    );
    assert_eq!(lines.count(), 8);
}

#[test]
fn summary_reports_savings_rate() {
    let dir = TempDir::new().unwrap();

    sheet(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings rate:"))
        .stdout(predicate::str::contains("Annual Summary (USD)"));
}

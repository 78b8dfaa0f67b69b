use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finsight(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finsight").unwrap();
    cmd.env("FINSIGHT_DATA_DIR", dir.path())
        .env("FINSIGHT_TODAY", "2024-03-15")
        .env_remove("FINSIGHT_CURRENCY")
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, args: &[&str]) {
    finsight(dir)
        .args(["transaction", "add"])
        .args(args)
        .assert()
        .success();
}

fn seed(dir: &TempDir) {
    add(dir, &["100", "Food", "Groceries", "--date", "2024-03-05"]);
    add(dir, &["50", "Food", "Takeaway", "--date", "2024-03-10"]);
    add(dir, &["1200", "Rent", "March rent", "--date", "2024-03-01"]);
    add(dir, &["2000", "Salary", "Payday", "--type", "income", "--date", "2024-03-01"]);
    add(dir, &["80", "Transport", "Train pass", "--date", "2024-02-20"]);
}

#[test]
fn add_and_list_transactions() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    finsight(&dir)
        .args(["transaction", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("-$1,200.00"))
        .stdout(predicate::str::contains("Showing 5 transactions"));

    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn add_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    finsight(&dir)
        .args(["transaction", "add", "0", "Food", "Nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than 0"));
}

#[test]
fn add_defaults_to_injected_today() {
    let dir = TempDir::new().unwrap();

    finsight(&dir)
        .args(["transaction", "add", "12.50", "Food", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-15"));
}

#[test]
fn category_report_for_current_month() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    finsight(&dir)
        .args(["report", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("This Month"))
        .stdout(predicate::str::contains("$1,200.00"))
        .stdout(predicate::str::contains("$150.00"))
        .stdout(predicate::str::contains("Transport").not())
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn category_report_all_time_includes_older_months() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    finsight(&dir)
        .args(["report", "categories", "--period", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All Time"))
        .stdout(predicate::str::contains("Transport"));
}

#[test]
fn category_report_csv_export() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    let out = dir.path().join("categories.csv");

    finsight(&dir)
        .args(["report", "categories", "--period", "2024-03", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        csv,
        "category,total,count\nRent,1200.00,1\nFood,150.00,2\n"
    );
}

#[test]
fn monthly_report_in_rupees() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    finsight(&dir)
        .args(["--currency", "inr", "report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("March 2024"))
        .stdout(predicate::str::contains("₹2,000.00"));
}

#[test]
fn periods_lists_eight_windows() {
    let dir = TempDir::new().unwrap();

    finsight(&dir)
        .args(["report", "periods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("This Month"))
        .stdout(predicate::str::contains("September 2023"))
        .stdout(predicate::str::contains("All Time"));
}

#[test]
fn periods_near_last_supported_year() {
    let dir = TempDir::new().unwrap();

    finsight(&dir)
        .env("FINSIGHT_TODAY", "9999-12-31")
        .args(["report", "periods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("November 9999"))
        .stdout(predicate::str::contains("Invalid Date").not());
}

#[test]
fn today_outside_supported_years_is_rejected() {
    let dir = TempDir::new().unwrap();

    finsight(&dir)
        .env("FINSIGHT_TODAY", "0000-06-15")
        .args(["report", "periods"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Years must be between 0001 and 9999"));
}

#[test]
fn duplicate_budget_is_rejected() {
    let dir = TempDir::new().unwrap();

    finsight(&dir)
        .args(["budget", "add", "Food", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2024"));

    finsight(&dir)
        .args(["budget", "add", "Food", "200", "--month", "2024-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget already exists: Food for 2024-03"));
}

#[test]
fn budget_report_flags_overspending() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    finsight(&dir)
        .args(["budget", "add", "Food", "120"])
        .assert()
        .success();

    finsight(&dir)
        .args(["report", "budget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("125%"))
        .stdout(predicate::str::contains("OVER"));
}

#[test]
fn dashboard_shows_month_totals() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    finsight(&dir)
        .args(["report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard for March 2024"))
        .stdout(predicate::str::contains("$2,000.00"))
        .stdout(predicate::str::contains("$1,350.00"))
        .stdout(predicate::str::contains("$650.00"))
        .stdout(predicate::str::contains("Rent ($1,200.00)"));
}

#[test]
fn clear_requires_force() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    finsight(&dir)
        .args(["transaction", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    finsight(&dir)
        .args(["transaction", "clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 5 transactions."));

    finsight(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn config_saves_currency() {
    let dir = TempDir::new().unwrap();

    finsight(&dir)
        .args(["config", "--set-currency", "inr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inr (en-IN)"));

    seed(&dir);
    finsight(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹"));
}

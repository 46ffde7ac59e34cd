use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir.path())
        .env_remove("FINTRACK_LOG");
    cmd
}

#[test]
fn test_register_add_and_reopen() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir)
        .write_stdin("alice\np1\n1\nSalary\n50000\nMay pay\n2\nFood\n1200\nLunch\n7\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created successfully!"))
        .stdout(predicate::str::contains("Current Balance: Rs.48800.00"))
        .stdout(predicate::str::contains("Logged out."));

    // Unsalted SHA-256 of "p1"
    let users = std::fs::read_to_string(data_dir.path().join("users.txt")).unwrap();
    assert_eq!(
        users,
        "alice,f64551fcd6f07823cb87971cfb91446425da18286b3ab1ef935e0cbd7a69f68a\n"
    );

    fintrack(&data_dir)
        .write_stdin("alice\np1\n6\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"))
        .stdout(predicate::str::contains("Total Transactions Recorded: 2"));
}

#[test]
fn test_wrong_password_exits_without_menu() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir).write_stdin("bob\nright\n8\n").assert().success();

    fintrack(&data_dir)
        .write_stdin("bob\nwrong\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect password!"))
        .stdout(predicate::str::contains("PERSONAL FINANCE TRACKER").not());
}

#[test]
fn test_reads_legacy_ledger() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("users.txt"),
        "carol,f64551fcd6f07823cb87971cfb91446425da18286b3ab1ef935e0cbd7a69f68a\n",
    )
    .unwrap();
    std::fs::write(
        data_dir.path().join("transactions_carol.csv"),
        "Income,Salary,50000.0,2025-05-10 09:00:00,May pay\n\
         Expense,Food,oops,2025-05-10 12:00:00,Lunch\n\
         Expense,Food,1200.0,2025-05-10 12:00:00,Lunch\n",
    )
    .unwrap();

    fintrack(&data_dir)
        .write_stdin("carol\np1\n4\n5\n2025\n6\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"))
        .stdout(predicate::str::contains("Warning: skipped line 2 of your ledger"))
        .stdout(predicate::str::contains("Net Savings:   Rs.48800.00"))
        .stdout(predicate::str::contains("Total Transactions Recorded: 2"));

    // The logout save drops the malformed line
    let ledger = std::fs::read_to_string(data_dir.path().join("transactions_carol.csv")).unwrap();
    assert_eq!(ledger.lines().count(), 2);
}

#[test]
fn test_config_subcommand() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password scheme:    Sha256"));
}

#[test]
fn test_init_writes_settings() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir).arg("init").assert().success();
    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn test_invalid_date_format_aborts_at_startup() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"display_date_format": "%Q"}"#,
    )
    .unwrap();

    fintrack(&data_dir)
        .write_stdin("alice\np1\n3\n8\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("display_date_format"))
        .stdout(predicate::str::contains("PERSONAL FINANCE TRACKER").not());
}

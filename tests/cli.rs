use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::{NamedTempFile, TempDir};

const BIN_NAME: &str = "bank-analyzer";

const SAMPLE: &str = "Date,Category,Amount
2023-01-05,Food,200
2023-01-20,Food,300
2023-02-01,Transport,150
not-a-date,Food,999
";

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");
    file
}

fn analyzer(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BANK_ANALYZER_DIR", config_dir)
        .env_remove("BANK_ANALYZER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_data_file_fails() {
    let config = TempDir::new().unwrap();

    analyzer(config.path())
        .args(["--file", "/no/such/bank_data.csv", "summary"])
        .assert()
        .failure()
        .stderr(contains("No transaction data found"));
}

#[test]
fn summary_reports_total_and_average() {
    let config = TempDir::new().unwrap();
    let data = sample_file();

    analyzer(config.path())
        .arg("--file")
        .arg(data.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("650.00 EGP").and(contains("216.66 EGP")))
        .stderr(contains("1 malformed rows skipped"));
}

#[test]
fn monthly_is_chronological() {
    let config = TempDir::new().unwrap();
    let data = sample_file();

    let output = analyzer(config.path())
        .arg("--file")
        .arg(data.path())
        .arg("monthly")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let january = stdout.find("January 2023").unwrap();
    let february = stdout.find("February 2023").unwrap();
    assert!(january < february);
}

#[test]
fn top_respects_count() {
    let config = TempDir::new().unwrap();
    let data = sample_file();

    analyzer(config.path())
        .arg("--file")
        .arg(data.path())
        .args(["top", "-n", "1"])
        .assert()
        .success()
        .stdout(contains("Top 1 Expenses").and(contains("300.00 EGP")));
}

#[test]
fn budget_status_shows_alerts() {
    let config = TempDir::new().unwrap();
    let data = sample_file();

    analyzer(config.path())
        .arg("--file")
        .arg(data.path())
        .args(["budget", "--set", "Food=500", "--set", "Transport=100"])
        .assert()
        .success()
        .stdout(
            contains("APPROACHING")
                .and(contains("OVER_BUDGET"))
                .and(contains("Transport is over budget by 50.00 EGP")),
        );
}

#[test]
fn non_positive_budget_fails() {
    let config = TempDir::new().unwrap();
    let data = sample_file();

    analyzer(config.path())
        .arg("--file")
        .arg(data.path())
        .args(["budget", "--set", "Food=0"])
        .assert()
        .failure()
        .stderr(contains("limit must be greater than zero"));
}

#[test]
fn export_writes_csv_report() {
    let config = TempDir::new().unwrap();
    let data = sample_file();
    let output = config.path().join("report.csv");

    analyzer(config.path())
        .arg("--file")
        .arg(data.path())
        .arg("export")
        .arg(&output)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "Category,Amount\nFood,500.00\nTransport,150.00\n");
}

#[test]
fn menu_runs_from_stdin() {
    let config = TempDir::new().unwrap();
    let data = sample_file();

    analyzer(config.path())
        .arg("--file")
        .arg(data.path())
        .write_stdin("4\n8\n")
        .assert()
        .success()
        .stdout(contains("Highest spending: Food").and(contains("Goodbye")));
}

#[test]
fn config_uses_settings_file() {
    let config = TempDir::new().unwrap();
    std::fs::write(
        config.path().join("config.json"),
        r#"{"currency_symbol": "USD", "top_count": 3}"#,
    )
    .unwrap();

    analyzer(config.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol: USD").and(contains("Top count:       3")));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn tdist() -> Command {
    let mut cmd = Command::cargo_bin("tdist").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_full_record_as_json() {
    let output = tdist()
        .args(["2023-02-16", "2024-08-05"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["days"], 536);
    assert_eq!(json["weeks"], 76);
    assert_eq!(json["months"], 17);
    assert_eq!(json["years"], 1);
}

#[test]
fn test_single_unit() {
    tdist()
        .args(["2020-01-15", "2024-01-15", "--unit", "months"])
        .assert()
        .success()
        .stdout("48\n");
}

#[test]
fn test_week_threshold() {
    tdist()
        .args(["2024-07-08", "2024-08-05", "-u", "weeks"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_month_overflow_flag() {
    tdist()
        .args(["2024-01-31", "2024-02-29", "--unit", "months"])
        .assert()
        .success()
        .stdout("1\n");
    tdist()
        .args([
            "2024-01-31",
            "2024-02-29",
            "--unit",
            "months",
            "--month-overflow",
            "rollover",
        ])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_month_boundary_flag() {
    let args = ["2024-01-15T12:00:00Z", "2024-02-15T00:00:00Z", "--unit", "months"];
    tdist().args(args).assert().success().stdout("1\n");
    tdist()
        .args(args)
        .args(["--month-boundary", "exact-anchor"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_config_file_and_flag_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"month_overflow": "rollover"}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    tdist()
        .args(["2024-01-31", "2024-02-29", "-u", "months", "--config", &path])
        .assert()
        .success()
        .stdout("0\n");
    tdist()
        .args([
            "2024-01-31",
            "2024-02-29",
            "-u",
            "months",
            "--config",
            &path,
            "--month-overflow",
            "clamp",
        ])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"month_overflow": "sideways"}}"#).unwrap();
    tdist()
        .args(["2024-01-01", "2024-02-01", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn test_timezone_reads_local_midnight() {
    // 47 hours across the New York spring-forward transition.
    tdist()
        .args(["2024-03-09", "2024-03-11", "-u", "days", "-z", "America/New_York"])
        .assert()
        .success()
        .stdout("1\n");
    tdist()
        .args(["2024-03-09", "2024-03-11", "-u", "days"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_to_defaults_to_now() {
    tdist()
        .args(["2000-01-01", "--unit", "years"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{2,}\n$").unwrap());
}

#[test]
fn test_reversed_dates_rejected() {
    tdist()
        .args(["2024-08-05", "2023-02-16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be after"));
}

#[test]
fn test_invalid_date_rejected() {
    tdist()
        .args(["2024-02-30", "2024-08-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid FROM date"));
}

#[test]
fn test_invalid_timezone_rejected() {
    tdist()
        .args(["2024-01-01", "2024-02-01", "--timezone", "Nowhere/Special"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn test_invalid_unit_rejected() {
    tdist()
        .args(["2024-01-01", "2024-02-01", "--unit", "fortnights"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fortnights"));
}

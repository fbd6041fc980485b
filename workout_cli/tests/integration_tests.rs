//! Integration tests for the workout binary.
//!
//! These tests verify end-to-end behavior including:
//! - Demo packages and their golden output
//! - Single and batch package input
//! - Error exits on bad packages
//! - Configuration handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SWIM_LINE: &str = "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                         Mean speed: 1.000 km/h; Calories spent: 336.000.";
const RUN_LINE: &str = "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
                        Mean speed: 9.750 km/h; Calories spent: 699.750.";
const WALK_LINE: &str = "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
                         Mean speed: 5.850 km/h; Calories spent: 157.500.";

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI with an empty config, isolated from the user's
fn cli(dir: &TempDir) -> Command {
    let config_path = dir.path().join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "").expect("Failed to write config");
    }

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("workout"));
    cmd.arg("--config").arg(config_path).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let dir = setup_test_dir();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout statistics"));
}

#[test]
fn test_default_runs_demo_packages() {
    let dir = setup_test_dir();
    cli(&dir)
        .assert()
        .success()
        .stdout(format!("{SWIM_LINE}\n{RUN_LINE}\n{WALK_LINE}\n"));
}

#[test]
fn test_demo_is_repeatable() {
    let dir = setup_test_dir();
    let first = cli(&dir).arg("demo").output().unwrap();
    let second = cli(&dir).arg("demo").output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_russian_locale() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["--locale", "ru", "report", "RUN", "15000", "1", "75"])
        .assert()
        .success()
        .stdout(
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.\n",
        );
}

#[test]
fn test_single_report() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["report", "WLK", "9000", "1", "75", "180"])
        .assert()
        .success()
        .stdout(format!("{WALK_LINE}\n"));
}

#[test]
fn test_unknown_code_fails_without_output() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["report", "XYZ", "1", "1", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("UnknownActivityType"));
}

#[test]
fn test_wrong_field_count_fails() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["report", "SWM", "720", "1", "80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ArgumentArityMismatch"));
}

#[test]
fn test_zero_duration_fails() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["report", "RUN", "15000", "0", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidDuration"));
}

#[test]
fn test_batch_keeps_input_order() {
    let dir = setup_test_dir();
    let csv_path = dir.path().join("packages.csv");
    fs::write(&csv_path, "WLK,9000,1,75,180\nSWM,720,1,80,25,40\n").unwrap();

    cli(&dir)
        .args(["batch", "--package", "RUN:15000,1,75", "--input"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(format!("{RUN_LINE}\n{WALK_LINE}\n{SWIM_LINE}\n"));
}

#[test]
fn test_batch_with_bad_package_prints_nothing() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["batch", "-p", "RUN:15000,1,75", "-p", "XYZ:1,1,1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_batch_requires_packages() {
    let dir = setup_test_dir();
    cli(&dir)
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no packages given"));
}

#[test]
fn test_json_output() {
    let dir = setup_test_dir();
    let json_path = dir.path().join("packages.json");
    fs::write(
        &json_path,
        r#"[{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}]"#,
    )
    .unwrap();

    let output = cli(&dir)
        .args(["--format", "json", "batch", "--input"])
        .arg(&json_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["training_type"], "Swimming");
    let calories = report["calories"].as_f64().unwrap();
    assert!((calories - 336.0).abs() < 1e-9);
}

#[test]
fn test_config_packages_replace_demo() {
    let dir = setup_test_dir();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[report]
locale = "en"

[[packages]]
workout_type = "RUN"
data = [15000, 1, 75]
"#,
    )
    .unwrap();

    cli(&dir)
        .assert()
        .success()
        .stdout(format!("{RUN_LINE}\n"));
}

#[test]
fn test_config_command_prints_toml() {
    let dir = setup_test_dir();
    fs::write(
        dir.path().join("config.toml"),
        "[report]\nlocale = \"ru\"\n",
    )
    .unwrap();

    cli(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("locale = \"ru\""))
        .stdout(predicate::str::contains("level = \"warn\""));
}

#[test]
fn test_invalid_config_fails() {
    let dir = setup_test_dir();
    fs::write(dir.path().join("config.toml"), "[report\nlocale = ").unwrap();

    cli(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}

#[test]
fn test_locale_flag_uses_config_spelling() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["--locale", "RU", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown locale"));
}

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_options() {
    Command::cargo_bin("gridplot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--rows"))
        .stdout(predicate::str::contains("--log"));
}

#[test]
fn missing_file_exits_with_error() {
    Command::cargo_bin("gridplot")
        .unwrap()
        .arg("definitely-not-here.nc")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn rejects_non_numeric_rows() {
    Command::cargo_bin("gridplot")
        .unwrap()
        .args(["--rows", "many"])
        .assert()
        .failure();
}

#[test]
fn rejects_oversized_rows() {
    Command::cargo_bin("gridplot")
        .unwrap()
        .args(["--rows", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid row count"));
}

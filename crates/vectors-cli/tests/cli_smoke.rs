//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `vectors-cli` binary to verify that
//! argument parsing, output formatting, and error reporting work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("vectors-cli").unwrap();
    cmd.env_remove("VECTORS_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_operations() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cross"))
        .stdout(predicate::str::contains("gram-schmidt"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn demo_prints_sample_vectors() {
    cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout("[ 1 2 3 ]\n[ 1 3 4 ]\n[ 0 9 0 ]\n");
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[test]
fn add_two_vectors() {
    cmd()
        .args(["add", "1,2,3", "4,5,6"])
        .assert()
        .success()
        .stdout("[ 5 7 9 ]\n");
}

#[test]
fn cross_accepts_display_form() {
    cmd()
        .args(["cross", "[ 1 0 0 ]", "[ 0 1 0 ]"])
        .assert()
        .success()
        .stdout("[ 0 0 1 ]\n");
}

#[test]
fn negative_components_are_not_flags() {
    cmd()
        .args(["sub", "-1,2", "1,-2"])
        .assert()
        .success()
        .stdout("[ -2 4 ]\n");
}

#[test]
fn length_prints_scalar() {
    cmd()
        .args(["length", "3,4"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn scale_by_negative_scalar() {
    cmd()
        .args(["scale", "1,2", "-2"])
        .assert()
        .success()
        .stdout("[ -2 -4 ]\n");
}

#[test]
fn equals_with_tolerance() {
    cmd()
        .args(["equals", "1,2", "1.0001,2"])
        .assert()
        .success()
        .stdout("false\n");
    cmd()
        .args(["equals", "1,2", "1.0001,2", "--tolerance", "0.001"])
        .assert()
        .success()
        .stdout("true\n");
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn divide_by_zero_fails() {
    cmd()
        .args(["div", "1,1,1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("divide by zero"));
}

#[test]
fn size_mismatch_fails() {
    cmd()
        .args(["add", "1,2", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("size mismatch"));
}

#[test]
fn cross_of_2d_vectors_fails() {
    cmd()
        .args(["cross", "1,0", "0,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dimension"));
}

#[test]
fn malformed_vector_fails() {
    cmd()
        .args(["length", "1,x,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number 'x'"));
}

#[test]
fn missing_operand_fails() {
    cmd()
        .args(["dot", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn equals_rejects_invalid_tolerance() {
    for tolerance in ["-1", "NaN", "inf"] {
        cmd()
            .args(["equals", "1,2", "1,2", "--tolerance", tolerance])
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("Tolerance must be"));
    }
    cmd()
        .args(["equals", "1,2", "1,2", "--tolerance=-0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tolerance must be"));
}

//! CLI integration tests for blockworks.
//!
//! These tests drive the binary end to end, feeding the interactive session
//! through stdin.

use assert_cmd::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

/// Get the blockworks binary command.
fn blockworks() -> Command {
    Command::cargo_bin("blockworks").unwrap()
}

// ============================================================================
// blockworks run (interactive)
// ============================================================================

#[test]
fn test_round_block_from_prompt() {
    blockworks()
        .write_stdin("1\n5.0\n")
        .assert()
        .success()
        .stdout("Round block: radius=5\n")
        .stderr(predicate::str::contains("1 - Round block"))
        .stderr(predicate::str::contains("Enter radius: "));
}

#[test]
fn test_square_block_from_prompt() {
    blockworks()
        .arg("run")
        .write_stdin("2\n3.0\n")
        .assert()
        .success()
        .stdout("Square block: sideLength=3\n");
}

#[test]
fn test_triangle_block_from_prompt() {
    blockworks()
        .write_stdin("3\n4.0\n6.0\n")
        .assert()
        .success()
        .stdout("Triangle block: base=4, height=6\n");
}

#[test]
fn test_negative_radius_is_reprompted() {
    blockworks()
        .write_stdin("1\n-1.0\n2.5\n")
        .assert()
        .success()
        .stdout("Round block: radius=2.5\n")
        .stderr(predicate::str::contains(
            "error: `radius` must be greater than zero, got -1",
        ));
}

#[test]
fn test_negative_radius_strict_fails() {
    blockworks()
        .args(["run", "--strict"])
        .write_stdin("1\n-1.0\n")
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("`radius` must be greater than zero"));
}

#[test]
fn test_max_attempts_exhausted() {
    blockworks()
        .args(["run", "--max-attempts", "2"])
        .write_stdin("2\nzero\n0\n")
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains(
            "gave up on `sideLength` after 2 invalid attempts",
        ));
}

#[test]
fn test_unknown_kind_fails_without_prompting() {
    blockworks()
        .write_stdin("9\n5\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("unknown block kind `9`"))
        .stderr(predicate::str::contains("Enter").not());
}

#[test]
fn test_empty_input_fails() {
    blockworks()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input ended"));
}

#[test]
fn test_strict_conflicts_with_max_attempts() {
    blockworks()
        .args(["run", "--strict", "--max-attempts", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// blockworks make
// ============================================================================

#[test]
fn test_make_triangle() {
    blockworks()
        .args(["make", "triangle", "--base", "4", "--height", "6"])
        .assert()
        .success()
        .stdout("Triangle block: base=4, height=6\n");
}

#[test]
fn test_make_negative_value_is_validation_error() {
    blockworks()
        .args(["make", "1", "--radius", "-1.0"])
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("field: radius"));
}

#[test]
fn test_make_missing_dimension() {
    blockworks()
        .args(["make", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing value for `sideLength`"));
}

#[test]
fn test_make_unknown_kind() {
    blockworks()
        .args(["make", "hexagon", "--radius", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown block kind `hexagon`"));
}

#[test]
fn test_make_warns_about_unused_flag() {
    blockworks()
        .args(["make", "square", "--side-length", "2", "--radius", "1"])
        .assert()
        .success()
        .stdout("Square block: sideLength=2\n")
        .stderr(predicate::str::contains("ignoring `--radius` for square blocks"));
}

#[test]
fn test_make_quiet_hides_warnings() {
    blockworks()
        .args(["--quiet", "make", "square", "--side-length", "2", "--radius", "1"])
        .assert()
        .success()
        .stderr("");
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_make_json_output() {
    let output = blockworks()
        .args(["--message-format", "json", "make", "round", "--radius", "5"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let event: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(event["reason"], "shape-created");
    assert_eq!(event["kind"], "round");
    assert_eq!(event["description"], "Round block: radius=5");
    assert_eq!(event["dimensions"]["radius"], 5.0);
}

#[test]
fn test_json_error_event() {
    let output = blockworks()
        .args(["--message-format", "json", "make", "9"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let event: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(event["reason"], "error");
    assert_eq!(event["message"], "unknown block kind `9`");
}

// ============================================================================
// blockworks kinds / completions
// ============================================================================

#[test]
fn test_kinds_lists_every_kind() {
    blockworks()
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("1  round"))
        .stdout(predicate::str::contains("2  square    sideLength"))
        .stdout(predicate::str::contains("3  triangle  base, height"));
}

#[test]
fn test_completions_bash() {
    blockworks()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blockworks"));
}

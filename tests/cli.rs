//! End-to-end checks of the qtuidocmake binary's exit codes and output streams

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const PROG_NAME: &str = "qtuidocmake";

fn run_cli_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qtuidocmake"))
        .args(args)
        .output()
        .expect("failed to run qtuidocmake")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_version() {
    let result = run_cli_command(&["--version"]);
    assert_eq!(result.status.code(), Some(0));
    assert_eq!(
        stdout(&result),
        format!("{} {}\n", PROG_NAME, env!("CARGO_PKG_VERSION"))
    );
    assert_eq!(stderr(&result), "", "Stderr should be empty for version command");
}

#[test]
fn test_cli_short_version() {
    let result = run_cli_command(&["-V"]);
    assert_eq!(result.status.code(), Some(0));
    assert!(stdout(&result).starts_with(PROG_NAME));
}

#[test]
fn test_cli_help() {
    let result = run_cli_command(&["--help"]);
    assert_eq!(result.status.code(), Some(0));
    let out = stdout(&result);
    assert!(out.contains(&format!("usage: {}", PROG_NAME)));
    assert!(out.contains("show this help message and exit"));
    assert!(out.contains("path to .ui file"));
    assert_eq!(stderr(&result), "", "Stderr should be empty for help command");
}

#[test]
fn test_cli_no_args() {
    let result = run_cli_command(&[]);
    assert_eq!(result.status.code(), Some(2));
    let err = stderr(&result);
    assert!(err.contains(&format!("usage: {}", PROG_NAME)));
    assert!(err.contains("the following arguments are required: path"));
    assert_eq!(stdout(&result), "", "Stdout should be empty on a usage error");
}

#[test]
fn test_cli_invalid_option() {
    let result = run_cli_command(&["--nonexistent-option"]);
    assert_eq!(result.status.code(), Some(2));
    assert!(stderr(&result).contains("unrecognized arguments: --nonexistent-option"));
    assert_eq!(stdout(&result), "", "Stdout should be empty for unrecognized arguments");
}

#[test]
fn test_cli_invalid_indent() {
    let result = run_cli_command(&["form.ui", "-i", "four"]);
    assert_eq!(result.status.code(), Some(2));
    assert!(stderr(&result).contains("invalid int value: 'four'"));
    assert_eq!(stdout(&result), "");
}

#[test]
fn test_cli_missing_ui_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.ui");
    let output = temp_dir.path().join("ui_missing.py");

    let result = run_cli_command(&[
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("UI file not found"));
    assert_eq!(stdout(&result), "");
    assert!(!output.exists());
}

#[test]
fn test_cli_missing_ui_file_debug_trace() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.ui");

    let result = run_cli_command(&[input.to_str().unwrap(), "--debug"]);
    assert_eq!(result.status.code(), Some(1));
    let err = stderr(&result);
    assert!(err.contains("FileNotFound"));
    assert!(err.contains("Running with options"));
}

#[test]
fn test_cli_input_is_checked_before_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("ui_form.py");
    fs::write(&output, "previous contents").unwrap();

    let result = run_cli_command(&[
        temp_dir.path().join("missing.ui").to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    assert_ne!(result.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous contents");
}

#[test]
fn test_cli_log_line_format() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.ui");

    let result = run_cli_command(&[input.to_str().unwrap(), "-vvv"]);
    let err = stderr(&result);
    let line = err
        .lines()
        .find(|line| line.contains("Running with options"))
        .expect("debug line missing");
    let shape =
        regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} DEBUG: Running with options: ")
            .unwrap();
    assert!(shape.is_match(line), "Unexpected log line: '{}'", line);
}

// tests/cli.rs
// =============================================================================
// End-to-end checks of the command-line contract, run against the built binary:
// usage text and exit codes, and that a bad URL leaves nothing on disk.
// =============================================================================

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn md_harvest(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_md-harvest"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run md-harvest")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn is_empty_dir(dir: &Path) -> bool {
    fs::read_dir(dir).unwrap().next().is_none()
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = md_harvest(&[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Usage: md-harvest <REPO_URL>"), "stderr: {err}");
    assert!(
        err.contains("Example: md-harvest https://github.com/microsoft/markitdown"),
        "stderr: {err}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_url_exits_1_without_side_effects() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().to_str().unwrap();

    let output = md_harvest(&["--base-dir", base, "https://github.com/only-owner"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(
        err.starts_with("Error: Invalid repository URL format"),
        "stderr: {err}"
    );
    assert!(is_empty_dir(temp.path()));
}

#[test]
fn test_fetch_failure_exits_1_and_cleans_up() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().to_str().unwrap();

    let output = md_harvest(&[
        "--base-dir",
        base,
        "--git",
        "md-harvest-no-such-git-binary",
        "https://github.com/owner/repo",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(
        err.starts_with("Error: Failed to clone repository https://github.com/owner/repo"),
        "stderr: {err}"
    );
    assert!(is_empty_dir(temp.path()));
}

#[test]
fn test_unknown_flag_exits_1() {
    let output = md_harvest(&["--bogus", "https://github.com/owner/repo"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--bogus"));
}

#[test]
fn test_help_exits_0() {
    let output = md_harvest(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    let out = String::from_utf8_lossy(&output.stdout);
    assert!(out.contains("REPO_URL"), "stdout: {out}");
}

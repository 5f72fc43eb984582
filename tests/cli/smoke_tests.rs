use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{fields_for, listed_lines, sample_workspace};

fn ls() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ls"));
    cmd.env_remove("DIRLIST_LOG");
    cmd
}

#[test]
fn shows_help() {
    ls().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--long").and(predicate::str::contains("--readable")));
}

#[test]
fn shows_version() {
    ls().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn lists_directory_short_format() {
    let ws = sample_workspace();
    let output = ls().arg(ws.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut names = listed_lines(&stdout);
    names.sort_unstable();
    assert_eq!(names, ["a.txt", "sub"]);
}

#[test]
fn defaults_to_current_directory() {
    let ws = sample_workspace();
    ls().current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt").and(predicate::str::contains(".hidden").not()));
}

#[test]
fn long_all_flags_combined() {
    let ws = sample_workspace();
    let output = ls().arg("-la").arg(ws.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(listed_lines(&stdout).len(), 3);
    assert_eq!(fields_for(&stdout, ".hidden")[5], "10");
    assert_eq!(fields_for(&stdout, "sub")[2], "2");
}

#[test]
fn readable_sizes() {
    let ws = sample_workspace();
    let output = ls().args(["-l", "-r"]).arg(ws.path()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(fields_for(&stdout, "a.txt")[5], "500.0B");
}

#[test]
fn only_first_path_is_listed() {
    let ws = sample_workspace();
    ls().arg(ws.path().join("sub"))
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("one").and(predicate::str::contains("a.txt").not()));
}

#[test]
fn never_colors_when_piped() {
    let ws = sample_workspace();
    ls().arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());

    ls().args(["--color", "always"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[34msub\x1b[0m"));
}

#[test]
fn json_format() {
    let ws = sample_workspace();
    let output = ls().args(["--format", "json"]).arg(ws.path()).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(2));
}

#[test]
fn missing_directory_fails_with_diagnostic() {
    let ws = sample_workspace();
    ls().arg(ws.path().join("missing"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn rejects_unknown_flag() {
    ls().arg("--bogus").assert().failure();
}

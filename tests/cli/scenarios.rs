use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn count_stream() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_count_stream"));
    cmd.env_remove("COUNT_STREAM_FORMAT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn counts_hello_world_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "Hello, World!\n").unwrap();

    let expected = format!("bytes: 14\nlines: 1\nwords: 2\nsource: {}\n", path.display());
    count_stream().arg(&path).assert().success().code(0).stdout(expected);
}

#[test]
fn empty_stdin_reports_zeros() {
    count_stream()
        .write_stdin("")
        .assert()
        .success()
        .stdout("bytes: 0\nlines: 0\nwords: 0\nsource: <stdin>\n");
}

#[test]
fn dash_reads_stdin_without_trailing_newline() {
    let output = count_stream()
        .args(["-", "--format", "json"])
        .write_stdin("a b\tc\nd")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["bytes"], 7);
    assert_eq!(json["lines"], 1);
    assert_eq!(json["words"], 4);
    assert_eq!(json["source"], "<stdin>");
}

#[test]
fn carriage_returns_are_word_bytes() {
    count_stream()
        .write_stdin("one\r\n\r\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bytes: 7\nlines: 2\nwords: 2\n"));
}

#[test]
fn missing_source_fails_without_report() {
    let dir = tempfile::tempdir().unwrap();
    count_stream()
        .arg(dir.path().join("does-not-exist.txt"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot open"))
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn repeated_runs_print_identical_reports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("same.txt");
    fs::write(&path, "the same\tbytes\nevery time\n").unwrap();

    let first = count_stream().arg(&path).output().unwrap();
    let second = count_stream().arg(&path).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn format_defaults_from_environment() {
    count_stream()
        .env("COUNT_STREAM_FORMAT", "yaml")
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bytes: 2"))
        .stdout(predicate::str::contains("source: <stdin>"));
}

#[test]
fn table_format_prints_header() {
    count_stream()
        .args(["--format", "table"])
        .write_stdin("a b\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BYTES"))
        .stdout(predicate::str::contains("<stdin>"));
}

#[test]
fn logs_stay_on_stderr() {
    count_stream()
        .args(["-vv"])
        .write_stdin("logged\n")
        .assert()
        .success()
        .stdout("bytes: 7\nlines: 1\nwords: 1\nsource: <stdin>\n")
        .stderr(predicate::str::contains("[INFO] analyzed <stdin>"));
}

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_count_stream"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_stream"))
        .stdout(predicate::str::contains("--copy-to"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_count_stream"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn conflicting_copy_flags_are_usage_errors() {
    Command::new(env!("CARGO_BIN_EXE_count_stream"))
        .args(["a.md", "--to-txt", "--copy-to", "b.txt"])
        .assert()
        .failure()
        .code(2);
}

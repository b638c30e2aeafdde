use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn count_stream() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_count_stream"));
    cmd.env_remove("COUNT_STREAM_FORMAT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn copy_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("source.txt");
    let dst = dir.path().join("copy.txt");
    let content: Vec<u8> = b"binary\0bytes\xff\xfe\r\nand text\n".to_vec();
    fs::write(&src, &content).unwrap();

    count_stream()
        .arg(&src)
        .arg("--copy-to")
        .arg(&dst)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("copied to: {}", dst.display())));

    assert_eq!(fs::read(&dst).unwrap(), content);
}

#[test]
fn to_txt_writes_next_to_markdown_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("c_stdio_h_note.md");
    fs::write(&src, "# stdio.h\n\n- fopen\n- fclose\n").unwrap();

    count_stream()
        .arg("--to-txt")
        .arg(&src)
        .assert()
        .success()
        .stdout(predicate::str::contains("lines: 4"));

    let derived = dir.path().join("c_stdio_h_note.txt");
    assert_eq!(fs::read(&derived).unwrap(), fs::read(&src).unwrap());
}

#[test]
fn to_txt_refuses_to_overwrite_its_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("notes.txt");
    fs::write(&src, "precious\n").unwrap();

    count_stream()
        .arg("--to-txt")
        .arg(&src)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is the source itself"));
    assert_eq!(fs::read_to_string(&src).unwrap(), "precious\n");
}

#[test]
fn copy_to_stdout_precedes_report() {
    count_stream()
        .args(["--copy-to", "-"])
        .write_stdin("echo me\n")
        .assert()
        .success()
        .stdout("echo me\nbytes: 8\nlines: 1\nwords: 2\nsource: <stdin>\ncopied to: <stdout>\n");
}

#[test]
fn unwritable_sink_fails_with_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("in.txt");
    fs::write(&src, "data\n").unwrap();
    let dst = dir.path().join("no-such-dir").join("out.txt");

    count_stream()
        .arg(&src)
        .arg("-o")
        .arg(&dst)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn missing_source_leaves_no_destination() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("out.txt");

    count_stream()
        .arg(dir.path().join("absent.md"))
        .arg("-o")
        .arg(&dst)
        .assert()
        .failure()
        .code(1);
    assert!(!dst.exists());
}

#[test]
fn copy_logs_confirmation_when_verbose() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("a.md");
    fs::write(&src, "x\n").unwrap();

    count_stream()
        .arg("-v")
        .arg("--to-txt")
        .arg(&src)
        .assert()
        .success()
        .stderr(predicate::str::contains("(2 bytes)"));
}

#[cfg(unix)]
#[test]
fn hard_linked_destination_keeps_source_intact() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("a.txt");
    let link = dir.path().join("b.txt");
    fs::write(&src, "precious data\n").unwrap();
    fs::hard_link(&src, &link).unwrap();

    count_stream()
        .arg("--copy-to")
        .arg(&link)
        .arg(&src)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is the source itself"));
    assert_eq!(fs::read_to_string(&src).unwrap(), "precious data\n");
}

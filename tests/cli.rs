//! End-to-end tests for the `word_count` binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn word_count() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("word_count").unwrap()
}

#[test]
fn test_text_json() {
    let output = word_count()
        .args(["--text", "Hello world. How are you?", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("Failed to parse JSON output");
    assert_eq!(json[0]["characters"], 25);
    assert_eq!(json[0]["words"], 5);
    assert_eq!(json[0]["sentences"], 2);
    assert_eq!(json[0]["syllables"], 6);
    assert_eq!(json[0]["source"], "<text>");
}

#[test]
fn test_stdin_is_default_input() {
    word_count()
        .args(["--format", "csv"])
        .write_stdin("One two three")
        .assert()
        .success()
        .stdout(predicate::str::contains("14,3,3,1,<stdin>"));
}

#[test]
fn test_empty_input_is_all_zero() {
    word_count()
        .args(["--format", "tsv", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("0\t0\t0\t0\t<stdin>"));
}

#[test]
fn test_files_get_total_row() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "Short one.").unwrap();
    fs::write(&b, "Another line here").unwrap();

    word_count()
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL (2 inputs)"))
        .stdout(predicate::str::contains("a.txt"));
}

#[test]
fn test_missing_file_reports_and_fails() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.txt");
    fs::write(&good, "Fine.").unwrap();

    word_count()
        .arg(&good)
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error processing"))
        .stdout(predicate::str::contains("good.txt"));
}

#[test]
fn test_strict_aborts() {
    let dir = tempdir().unwrap();
    word_count()
        .arg("--strict")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("analysis failed"));
}

#[test]
fn test_resources() {
    word_count()
        .arg("--list-resources")
        .assert()
        .success()
        .stdout("pangrams\nsample\n");

    word_count()
        .args(["--resource", "pangrams", "--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\":\"resource:pangrams\""))
        .stdout(predicate::str::contains("\"type\":\"total\""));

    word_count()
        .args(["--resource", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown embedded resource: nope"));
}

#[test]
fn test_save_as_writes_text() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let out = dir.path().join("out.txt");
    fs::write(&input, "First line\r\nSecond line").unwrap();

    word_count()
        .arg(&input)
        .arg("--save-as")
        .arg(&out)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).unwrap(), "First line\nSecond line\n");

    word_count()
        .args(["--text", "more"])
        .arg("--save-as")
        .arg(&out)
        .arg("--append")
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "First line\nSecond line\nmore"
    );
}

#[test]
fn test_save_as_rejects_multiple_inputs() {
    word_count()
        .args(["a.txt", "b.txt", "--save-as", "out.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one input"));
}

#[test]
fn test_legacy_sentences_flag() {
    let count = |extra: &[&str]| -> Value {
        let mut cmd = word_count();
        cmd.args(["--text", "end one. end", "--format", "json"]);
        cmd.args(extra);
        let out = cmd.assert().success().get_output().stdout.clone();
        serde_json::from_slice(&out).unwrap()
    };
    assert_eq!(count(&[])[0]["sentences"], 2);
    assert_eq!(count(&["--legacy-sentences"])[0]["sentences"], 3);
}

#[test]
fn test_readability_output() {
    word_count()
        .args(["--text", "The cat sat on the mat.", "--readability"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EASE"))
        .stdout(predicate::str::contains("GRADE"));
}

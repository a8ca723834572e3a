use std::io::Write;

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

fn word_list(words: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{words}").unwrap();
    file
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("longword")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Find the longest words"));
}

#[test]
fn missing_argument_prints_usage() {
    cargo_bin_cmd!("longword")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage: longword"));
}

#[test]
fn unreadable_file_prints_error_and_usage() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.txt");
    cargo_bin_cmd!("longword")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: unable to open"))
        .stderr(predicate::str::contains("absent.txt"))
        .stderr(predicate::str::contains("Usage: longword"));
}

#[test]
fn prints_report() {
    let file = word_list("cat\ncats\ndog\ncatsdog\n");
    cargo_bin_cmd!("longword")
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(
            "Longest concatenated word is : catsdog\n\
             2nd longest concatenated word is : NULL\n\
             There are 1 concatenated words in the file.\n",
        );
}

#[test]
fn empty_file_reports_null() {
    let file = word_list("");
    cargo_bin_cmd!("longword")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Longest concatenated word is : NULL",
        ))
        .stdout(predicate::str::contains("There are 0 concatenated words"));
}

#[test]
fn list_flag_prints_matches() {
    let file = word_list("a\naa\naaa\n");
    cargo_bin_cmd!("longword")
        .arg(file.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("in the file.\naa\t2\naaa\t3\n"));
}

#[test]
fn json_format() {
    let file = word_list("a\naa\naaa\n");
    let output = cargo_bin_cmd!("longword")
        .arg(file.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["longest"]["word"], "aaa");
    assert_eq!(value["second_longest"]["word"], "aa");
    assert_eq!(value["total"], 2);
}

#[test]
fn bad_settings_file_fails() {
    let file = word_list("cat\n");
    let settings = word_list("[input]\nmin_word_len = 0\n");
    cargo_bin_cmd!("longword")
        .arg(file.path())
        .arg("--settings")
        .arg(settings.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error in"));
}

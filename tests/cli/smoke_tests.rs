use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::Workspace;

fn wordlist_lines() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wordlist_lines"));
    cmd.env_remove("WORDLIST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn shows_help() {
    wordlist_lines()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordlist_lines"));
}

#[test]
fn valid_directory_succeeds_with_table() {
    let ws = Workspace::new();
    ws.write_file("a.txt", b"www\nmail\n");
    ws.write_file("nested/b.txt", b"ftp\r\nvpn-01.corp");
    ws.write_file("ignored.md", b"not a wordlist\n\n");

    wordlist_lines()
        .args(["-j", "1"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("parallel=1"))
        .stdout(predicate::str::contains("TOTAL (2 files)"))
        .stdout(predicate::str::contains("files processed: 2 errors: 0"));
}

#[test]
fn invalid_file_fails_and_reports_position() {
    let ws = Workspace::new();
    ws.write_file("good.txt", b"www\n");
    ws.write_file("bad.txt", b"ok\nnot_ok\n");

    wordlist_lines()
        .arg(ws.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid character '_' found at row 2 col 4"))
        .stdout(predicate::str::contains("files processed: 2 errors: 1"));
}

#[test]
fn json_output_has_files_and_summary() {
    let ws = Workspace::new();
    ws.write_file("a.txt", b"one\ntwo\nthree");
    ws.write_file("b.txt", b"x\n\ny\n");

    let value = json_stdout(wordlist_lines().args(["--format", "json"]).arg(ws.path()));

    let files = value["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["status"], "valid");
    assert_eq!(files[0]["lines"], 3);
    assert_eq!(files[1]["kind"], "blank_line");
    assert_eq!(files[1]["line"], 2);
    assert_eq!(files[1]["column"], 1);
    assert_eq!(value["summary"]["total_lines"], 3);
}

#[test]
fn stdin_is_validated_as_one_wordlist() {
    wordlist_lines()
        .args(["--format", "jsonl", "-"])
        .write_stdin("www\r\nmail\r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"summary\""))
        .stdout(predicate::str::contains("\"total_lines\":2"));
}

#[test]
fn stdin_bare_carriage_return_fails() {
    wordlist_lines()
        .args(["--format", "csv", "-"])
        .write_stdin("abc\rxyz")
        .assert()
        .failure()
        .stdout(predicate::str::contains("path,status,lines,line,column,literal"))
        .stdout(predicate::str::contains("-,invalid,,1,4,\\r"));
}

#[test]
fn output_flag_writes_report_file() {
    let ws = Workspace::new();
    ws.write_file("lists/a.txt", b"www\n");
    let report = ws.path().join("report.json");

    wordlist_lines()
        .args(["--format", "json", "--output"])
        .arg(&report)
        .arg(ws.path().join("lists"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["summary"]["valid"], 1);
}

#[test]
fn listed_files_skip_the_extension_filter() {
    let ws = Workspace::new();
    let listed = ws.write_file("hosts.lst", b"www\n");
    ws.write_file("other.txt", b"mail\n");
    let list = ws.write_file("inputs", format!("{}\n", listed.display()).as_bytes());

    let value = json_stdout(wordlist_lines().args(["--format", "json", "--files-from"]).arg(&list));

    assert_eq!(value["files"].as_array().unwrap().len(), 1);
    assert_eq!(value["summary"]["files"], 1);
}

#[test]
fn ext_flag_selects_walked_files() {
    let ws = Workspace::new();
    ws.write_file("hosts.lst", b"www\n");
    ws.write_file("nested/more.LST", b"mail\nftp\n");
    ws.write_file("skipped.txt", b"not ok\n");

    let value = json_stdout(wordlist_lines().args(["--format", "json", "--ext", "lst"]).arg(ws.path()));

    let files = value["files"].as_array().unwrap();
    let paths: Vec<&str> = files.iter().map(|f| f["path"].as_str().unwrap()).collect();
    assert_eq!(files.len(), 2, "{paths:?}");
    assert!(paths.iter().all(|p| !p.ends_with("skipped.txt")), "{paths:?}");
    assert_eq!(value["summary"]["total_lines"], 3);
    assert_eq!(value["summary"]["invalid"], 0);
}

#[test]
fn zero_jobs_is_rejected() {
    wordlist_lines()
        .args(["--jobs", "0", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--jobs"));
}

#[test]
fn missing_path_is_an_error() {
    let ws = Workspace::new();

    wordlist_lines()
        .arg(ws.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("stat"));
}

#[test]
fn progress_goes_to_stderr() {
    let ws = Workspace::new();
    ws.write_file("a.txt", b"www\n");

    wordlist_lines()
        .args(["--progress", "--format", "json"])
        .arg(ws.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/1] Validating..."));
}

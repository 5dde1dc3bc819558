use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const HORN_KB: &str = "TELL\np2=> p3; p3 => p1; c => e; b&e => f; f&g => h; p1=>d; p1&p3 => c; a; b; p2;\nASK\nd\n";

fn kb_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iengine"))
        .args(args)
        .output()
        .expect("failed to run CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn cli_answers_with_each_method() {
    let file = kb_file(HORN_KB);
    let path = file.path().to_str().expect("utf-8 path");

    let tt = run(&["TT", path]);
    assert!(tt.status.success());
    assert_eq!(stdout(&tt), "YES: 3");

    let fc = run(&["FC", path]);
    assert!(fc.status.success());
    assert_eq!(stdout(&fc), "YES: a, b, p2, p3, p1, d");

    let bc = run(&["bc", path]);
    assert!(bc.status.success());
    assert_eq!(stdout(&bc), "YES: p2, p3, p1, d");
}

#[test]
fn cli_prints_no_when_not_entailed() {
    let file = kb_file("TELL\na;\nASK\nb\n");
    let output = run(&["FC", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "NO");
}

#[test]
fn cli_accepts_query_on_ask_line() {
    let file = kb_file("TELL\na; a => b;\nASK b\n");
    let output = run(&["FC", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "YES: a, b");
}

#[test]
fn cli_json_output() {
    let file = kb_file("TELL\na; a => b;\nASK\nb\n");
    let output = run(&["BC", file.path().to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["method"], "backward_chaining");
    assert_eq!(value["entailed"], true);
    assert_eq!(value["evidence"]["value"], serde_json::json!(["a", "b"]));
}

#[test]
fn cli_rejects_unknown_method() {
    let file = kb_file(HORN_KB);
    let output = run(&["DFS", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no inference output expected");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn cli_rejects_missing_file() {
    let output = run(&["TT", "/nonexistent/kb.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn cli_rejects_wrong_argument_count() {
    let output = run(&["TT"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_reports_parse_errors_with_location() {
    let file = kb_file("TELL\na;\nb => => c;\nASK\na\n");
    let output = run(&["TT", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("3:"));
}

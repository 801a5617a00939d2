//! Integration tests for the `arrify` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the render and
//! parse subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, error handling, and pipe round-trips.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn arrify() -> Command {
    Command::cargo_bin("arrify").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Render subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn render_stdin_to_stdout() {
    arrify()
        .arg("render")
        .write_stdin(r#"{"foo":["42","52"]}"#)
        .assert()
        .success()
        .stdout("array(\"foo\"=>array(\"42\",\"52\"));");
}

#[test]
fn render_prettified_with_options() {
    arrify()
        .args([
            "render",
            "--prettify",
            "--indent",
            "4",
            "--space",
            "--quote",
            "single",
        ])
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .success()
        .stdout("array(\n    'a' => 1\n);");
}

#[test]
fn render_trailing_comma() {
    arrify()
        .args(["render", "--prettify", "--trailing-comma"])
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .success()
        .stdout("array(\n\t\"a\" => 1,\n);");
}

#[test]
fn render_invalid_json_degrades_to_blank_array() {
    // The renderer never fails: malformed input becomes array();
    arrify()
        .arg("render")
        .write_stdin("not json at all")
        .assert()
        .success()
        .stdout("array();");
}

#[test]
fn render_file_to_file() {
    let input_path = "/tmp/arrify-test-render-input.json";
    let output_path = "/tmp/arrify-test-render-output.php";
    std::fs::write(input_path, r#"{"name":"Alice"}"#).unwrap();
    let _ = std::fs::remove_file(output_path);

    arrify()
        .args(["render", "-i", input_path, "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert_eq!(content, "array(\"name\"=>\"Alice\");");

    let _ = std::fs::remove_file(input_path);
    let _ = std::fs::remove_file(output_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// Parse subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_stdin_to_compact_json() {
    arrify()
        .args(["parse", "--compact"])
        .write_stdin("array(\"foo\"=>array(\"42\",\"52\"));")
        .assert()
        .success()
        .stdout(r#"{"foo":["42","52"]}"#);
}

#[test]
fn parse_pretty_prints_by_default() {
    arrify()
        .arg("parse")
        .write_stdin("array(\"a\"=>1);")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 1"));
}

#[test]
fn parse_with_empty_rules() {
    arrify()
        .args(["parse", "--compact", "--rules", r#"{"opts":{}}"#])
        .write_stdin("array(\"opts\"=>array(),\"tags\"=>array());")
        .assert()
        .success()
        .stdout(r#"{"opts":{},"tags":[]}"#);
}

#[test]
fn parse_invalid_php_fails() {
    arrify()
        .arg("parse")
        .write_stdin("array(\"a\"=>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn parse_invalid_rules_fails() {
    arrify()
        .args(["parse", "--rules", "{not json"])
        .write_stdin("array();")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rules"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Pipe round-trip
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn render_then_parse_roundtrips() {
    let input = r#"{"greetings":"Hello","answers":42,"list":[1,2,3]}"#;

    let rendered = arrify()
        .arg("render")
        .write_stdin(input)
        .output()
        .expect("render should succeed");
    assert!(rendered.status.success());

    let php = String::from_utf8(rendered.stdout).unwrap();
    let parsed = arrify()
        .args(["parse", "--compact"])
        .write_stdin(php)
        .output()
        .expect("parse should succeed");
    assert!(parsed.status.success());

    let original: serde_json::Value = serde_json::from_str(input).unwrap();
    let roundtripped: serde_json::Value =
        serde_json::from_slice(&parsed.stdout).unwrap();
    assert_eq!(original, roundtripped);
}

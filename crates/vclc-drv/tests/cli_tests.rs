//! End-to-end tests for the `parse_vcl` CLI, driven through the built
//! binary rather than calling the front-end crates directly.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn parse_vcl() -> Command {
    Command::cargo_bin("parse_vcl").expect("binary builds")
}

fn vcl_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".vcl")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[test]
fn prints_pretty_tree_by_default() {
    let file = vcl_file("vcl 4.0;\nbackend default { .host = \"127.0.0.1\"; }\n");

    parse_vcl()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("vcl 4.0;"))
        .stdout(predicate::str::contains("backend default {"));
}

#[test]
fn emits_json_with_type_tags() {
    let file = vcl_file("sub vcl_recv { return (hash); }\n");

    parse_vcl()
        .arg(file.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"Program\""))
        .stdout(predicate::str::contains("\"type\": \"SubDecl\""));
}

#[test]
fn missing_file_is_an_io_error() {
    parse_vcl()
        .arg("/nonexistent/path/does-not-exist.vcl")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn parse_error_reports_position_and_snippet() {
    let file = vcl_file("vcl 4.2;\n");

    parse_vcl()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unsupported-vcl-version"))
        .stderr(predicate::str::contains("-->"));
}

#[test]
fn help_flag_describes_usage() {
    parse_vcl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse_vcl"));
}

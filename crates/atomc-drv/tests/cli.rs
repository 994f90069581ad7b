//! CLI-level end-to-end scenarios (§8): run the built `atomc` binary
//! against temp source files and assert on its stdout/stderr/exit code.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp source file");
    write!(file, "{contents}").expect("write temp source file");
    file
}

#[test]
fn accepts_a_minimal_program() {
    let file = source_file("int main() { return 0; }");
    Command::cargo_bin("atomc")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Input is syntactically and semantically correct",
        ));
}

#[test]
fn reports_a_lex_error_with_its_line_number() {
    let file = source_file("int main() {\n  int a & b;\n}");
    Command::cargo_bin("atomc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error in line 2: Invalid &"));
}

#[test]
fn reports_a_redefinition_error() {
    let file = source_file("int a;\nint a;\n");
    Command::cargo_bin("atomc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("symbol redefinition: a"));
}

#[test]
fn missing_argument_prints_usage_and_fails() {
    Command::cargo_bin("atomc")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: atomc"));
}

#[test]
fn nonexistent_file_is_reported_as_an_io_error() {
    Command::cargo_bin("atomc")
        .unwrap()
        .arg("/no/such/file.atc")
        .assert()
        .failure();
}

#[test]
fn dump_domain_prints_the_global_symbol_table_on_success() {
    let file = source_file("int total;\nint main() { return 0; }");
    Command::cargo_bin("atomc")
        .unwrap()
        .arg("--dump-domain")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("total"))
        .stdout(predicate::str::contains("main"));
}

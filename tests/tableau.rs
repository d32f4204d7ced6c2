//! End-to-end scenarios driving the `tableau-checker` binary over `.tab`
//! fixture files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn tab_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".tab").tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn checker() -> Command {
    Command::cargo_bin("tableau-checker").unwrap()
}

#[test]
fn modus_ponens_is_valid() {
    let file = tab_file("2\n(a->b)\na\nb\n");
    checker()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequente V\u{e1}lido"));
}

#[test]
fn or_does_not_entail_and() {
    let file = tab_file("1\n(a|b)\n(a&b)\n");
    let output = checker().arg(file.path()).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let stdout = stdout.trim();
    assert!(
        stdout.ends_with("Ta Fb") || stdout.ends_with("Fa Tb"),
        "unexpected countermodel line: {stdout}"
    );
}

#[test]
fn double_negation_elimination_is_valid() {
    let file = tab_file("1\na\n\u{ac}\u{ac}a\n");
    checker()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequente V\u{e1}lido"));
}

#[test]
fn excluded_middle_with_no_premises_is_valid() {
    let file = tab_file("0\n(a|\u{ac}a)\n");
    checker()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequente V\u{e1}lido"));
}

#[test]
fn transitive_implication_chain_is_valid() {
    let file = tab_file("2\n(a->b)\n(b->c)\n(a->c)\n");
    checker()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequente V\u{e1}lido"));
}

#[test]
fn conjunction_entails_disjunction_with_shared_atom() {
    let file = tab_file("1\n(a&b)\n(a|c)\n");
    checker()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequente V\u{e1}lido"));
}

#[test]
fn non_tab_extension_is_a_fatal_input_error() {
    let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    checker().arg(file.path()).assert().failure();
}

#[test]
fn malformed_formula_is_a_fatal_parse_error() {
    let file = tab_file("1\nNOT-A-FORMULA\nb\n");
    checker().arg(file.path()).assert().failure();
}

//! Integration tests for the CLI surface (help, version, completions).

use assert_cmd::Command;
use predicates::prelude::*;

fn folio() -> Command {
    Command::cargo_bin("folio").expect("folio binary")
}

#[test]
fn help_exits_0_and_shows_subcommands() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio"))
        .stdout(predicate::str::contains("print"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_contains_crate_version() {
    folio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    folio().arg("frobnicate").assert().failure();
}

#[test]
fn completions_bash_emits_a_completion_script() {
    folio()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn config_help_lists_actions() {
    folio()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("path"));
}

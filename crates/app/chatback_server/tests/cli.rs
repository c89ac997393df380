//! CLI smoke tests for the server binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_options() {
    Command::cargo_bin("chatback_server")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--allowed-origins"));
}

#[test]
fn version_prints_package_version() {
    Command::cargo_bin("chatback_server")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

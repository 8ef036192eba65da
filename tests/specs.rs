//! Behavioral specifications for the portico CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/list.rs"]
mod list;
#[path = "specs/run.rs"]
mod run;

use prelude::*;

/// > Exit code 0 when invoked with --help
#[test]
fn help_exits_successfully() {
    portico_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("portico"));
}

/// > Exit code 0 when invoked with --version
#[test]
fn version_exits_successfully() {
    portico_cmd().arg("--version").assert().success();
}

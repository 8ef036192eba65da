//! Behavioral specs for `portico list`.

use crate::prelude::*;

/// > Lists cases in execution order without running them.
#[cfg(unix)]
#[test]
fn lists_cases_in_sorted_order_without_running() {
    let suite = Suite::empty();
    // A case that would fail loudly if executed.
    suite.case("TC002_boom", "echo EXECUTED; exit 9");
    suite.case("TC001_ok", "echo EXECUTED; exit 0");

    portico_cmd()
        .arg("list")
        .arg(suite.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("TC001_ok\nTC002_boom\n"))
        .stdout(predicates::str::contains("EXECUTED").not());
}

/// > Non-matching files are not listed.
#[cfg(unix)]
#[test]
fn list_ignores_non_matching_files() {
    let suite = Suite::empty();
    suite.case("TC001_ok", "exit 0");
    suite.file("notes.txt", "scratch");

    portico_cmd()
        .arg("list")
        .arg(suite.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("notes").not());
}

/// > Empty directory exits non-zero, same as run.
#[test]
fn list_empty_directory_fails() {
    let suite = Suite::empty();

    portico_cmd()
        .arg("list")
        .arg(suite.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("no test files found"));
}

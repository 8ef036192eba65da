//! Behavioral specs for `portico run`.

use crate::prelude::*;

// =============================================================================
// Exit codes and summary counts
// =============================================================================

/// > Directory with one passing and one failing case reports 1 passed,
/// > 1 failed, and exits 1.
#[cfg(unix)]
#[test]
fn mixed_results_exit_nonzero_with_counts() {
    let suite = Suite::empty();
    suite.case("TC001_a", "exit 0");
    suite.case("TC002_b", "exit 1");

    portico_cmd()
        .arg("run")
        .arg(suite.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Total: 2 | Passed: 1 | Failed: 1"))
        .stdout(predicates::str::contains("PASSED: TC001_a"))
        .stdout(predicates::str::contains("FAILED: TC002_b"));
}

/// > Exit code 0 if and only if every test passed.
#[cfg(unix)]
#[test]
fn all_passing_exits_zero() {
    let suite = Suite::empty();
    suite.case("TC001_a", "exit 0");
    suite.case("TC002_b", "exit 0");

    portico_cmd()
        .arg("run")
        .arg(suite.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Total: 2 | Passed: 2 | Failed: 0"));
}

/// > A failing case never aborts the run; later cases still execute.
#[cfg(unix)]
#[test]
fn failure_does_not_stop_the_run() {
    let suite = Suite::empty();
    suite.case("TC001_bad", "exit 7");
    suite.case("TC002_good", "exit 0");

    portico_cmd()
        .arg("run")
        .arg(suite.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Running: TC002_good"))
        .stdout(predicates::str::contains("PASSED: TC002_good"));
}

// =============================================================================
// Ordering
// =============================================================================

/// > Cases execute in lexicographic file-name order.
#[cfg(unix)]
#[test]
fn cases_run_in_sorted_order() {
    let suite = Suite::empty();
    suite.case("TC010_last", "exit 0");
    suite.case("TC001_first", "exit 0");
    suite.case("TC002_middle", "exit 0");

    let output = portico_cmd()
        .arg("run")
        .arg(suite.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let first = stdout.find("Running: TC001_first").unwrap();
    let middle = stdout.find("Running: TC002_middle").unwrap();
    let last = stdout.find("Running: TC010_last").unwrap();
    assert!(first < middle && middle < last);
}

// =============================================================================
// Timeout and launch failure containment
// =============================================================================

/// > A case exceeding the timeout is killed, reported with a timeout
/// > notice, and fails the run.
#[cfg(unix)]
#[test]
fn timeout_kills_case_and_fails_run() {
    let suite = Suite::empty();
    suite.case("TC001_sleeper", "sleep 30");
    suite.case("TC002_quick", "exit 0");

    portico_cmd()
        .arg("run")
        .arg(suite.path())
        .args(["--timeout", "1"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("timed out after 1 seconds"))
        .stdout(predicates::str::contains("TIMEOUT: TC001_sleeper"))
        .stdout(predicates::str::contains("PASSED: TC002_quick"));
}

/// > A case that cannot be launched is reported failed and the run
/// > continues.
#[cfg(unix)]
#[test]
fn launch_failure_is_contained() {
    let suite = Suite::empty();
    suite.file("TC001_noexec", "not a program");
    suite.case("TC002_good", "exit 0");

    portico_cmd()
        .arg("run")
        .arg(suite.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Error running TC001_noexec"))
        .stdout(predicates::str::contains("PASSED: TC002_good"));
}

// =============================================================================
// Empty suite
// =============================================================================

/// > Zero matching files: exit non-zero, execute nothing.
#[test]
fn empty_directory_fails() {
    let suite = Suite::empty();
    suite.file("readme.md", "nothing to see");

    portico_cmd()
        .arg("run")
        .arg(suite.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("no test files found"));
}

// =============================================================================
// Default invocation and JSON output
// =============================================================================

/// > Bare `portico` scans the current directory.
#[cfg(unix)]
#[test]
fn bare_invocation_runs_current_directory() {
    let suite = Suite::empty();
    suite.case("TC001_a", "exit 0");

    portico_cmd()
        .current_dir(suite.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Total: 1 | Passed: 1 | Failed: 0"));
}

/// > --output json emits a machine-readable summary whose counts agree
/// > with the per-test records.
#[cfg(unix)]
#[test]
fn json_summary_matches_records() {
    let suite = Suite::empty();
    suite.case("TC001_a", "exit 0");
    suite.case("TC002_b", "exit 1");

    let output = portico_cmd()
        .arg("run")
        .arg(suite.path())
        .args(["--output", "json"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let json_start = stdout.find('{').unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    assert_eq!(doc["total"], 2);
    assert_eq!(doc["passed"], 1);
    assert_eq!(doc["failed"], 1);
    let tests = doc["tests"].as_array().unwrap();
    assert_eq!(tests[0]["name"], "TC001_a");
    assert_eq!(tests[0]["passed"], true);
    assert_eq!(tests[1]["name"], "TC002_b");
    assert_eq!(tests[1]["passed"], false);
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use super::*;

fn record(name: &str, outcome: Outcome) -> TestRecord {
    TestRecord {
        name: name.to_string(),
        outcome,
        duration: Duration::from_millis(10),
    }
}

#[test]
fn summary_counts() {
    let summary = Summary::new(vec![
        record("TC001_a", Outcome::Passed),
        record("TC002_b", Outcome::Failed(Some(1))),
        record("TC003_c", Outcome::TimedOut),
    ]);
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.passed(), 1);
    assert_eq!(summary.failed(), 2);
    assert!(!summary.all_passed());
}

#[test]
fn empty_summary_counts_as_all_passed() {
    // Discovery rejects empty suites before a summary is ever built; this
    // pins the degenerate arithmetic anyway.
    let summary = Summary::new(vec![]);
    assert_eq!(summary.total(), 0);
    assert!(summary.all_passed());
}

#[test]
fn launch_failure_counts_as_failed() {
    let summary = Summary::new(vec![record(
        "TC001_a",
        Outcome::LaunchFailed("no such file".to_string()),
    )]);
    assert_eq!(summary.failed(), 1);
}

#[test]
fn json_summary_shape() {
    let summary = Summary::new(vec![
        record("TC001_a", Outcome::Passed),
        record("TC002_b", Outcome::Failed(Some(2))),
        record("TC003_c", Outcome::TimedOut),
        record("TC004_d", Outcome::LaunchFailed("denied".to_string())),
    ]);
    let doc = serde_json::to_value(JsonSummary::from(&summary)).unwrap();

    assert_eq!(doc["total"], 4);
    assert_eq!(doc["passed"], 1);
    assert_eq!(doc["failed"], 3);
    assert!(doc["finished"].is_string());

    let tests = doc["tests"].as_array().unwrap();
    assert_eq!(tests.len(), 4);
    assert_eq!(tests[0]["name"], "TC001_a");
    assert_eq!(tests[0]["passed"], true);
    assert_eq!(tests[0]["exit_code"], 0);
    assert_eq!(tests[1]["exit_code"], 2);
    assert_eq!(tests[2]["timed_out"], true);
    assert!(tests[2].get("exit_code").is_none());
    assert_eq!(tests[3]["error"], "denied");
}

#[test]
fn json_preserves_record_order() {
    let summary = Summary::new(vec![
        record("TC002_b", Outcome::Passed),
        record("TC001_a", Outcome::Passed),
    ]);
    let doc = serde_json::to_value(JsonSummary::from(&summary)).unwrap();
    let names: Vec<_> = doc["tests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    // Summary reports in execution order, not sorted order.
    assert_eq!(names, vec!["TC002_b", "TC001_a"]);
}

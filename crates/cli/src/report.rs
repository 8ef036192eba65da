// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Run summary output in text and JSON formats.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::color::ColorMode;
use crate::runner::{Outcome, TestRecord};

const SEPARATOR: &str =
    "============================================================";

/// Ordered test records plus aggregate counts.
pub struct Summary {
    records: Vec<TestRecord>,
    finished: DateTime<Utc>,
}

impl Summary {
    pub fn new(records: Vec<TestRecord>) -> Self {
        Self {
            records,
            finished: Utc::now(),
        }
    }

    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Print the banner emitted before each test case starts.
pub fn print_banner(name: &str) {
    println!();
    println!("{SEPARATOR}");
    println!("Running: {name}");
    println!("{SEPARATOR}");
}

/// Print the per-test table and aggregate counts.
pub fn print_text(summary: &Summary, color: ColorMode) -> anyhow::Result<()> {
    let mut out = StandardStream::stdout(color.stdout_choice());

    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "TEST SUMMARY")?;
    writeln!(out, "{SEPARATOR}")?;

    for record in summary.records() {
        let (label, color) = match &record.outcome {
            Outcome::Passed => ("PASSED", Color::Green),
            Outcome::TimedOut => ("TIMEOUT", Color::Red),
            Outcome::Failed(_) | Outcome::LaunchFailed(_) => ("FAILED", Color::Red),
        };
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{label:>7}")?;
        out.reset()?;
        writeln!(out, ": {}", record.name)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Total: {} | Passed: {} | Failed: {}",
        summary.total(),
        summary.passed(),
        summary.failed()
    )?;
    Ok(())
}

/// Print the machine-readable summary for CI consumers.
pub fn print_json(summary: &Summary) -> anyhow::Result<()> {
    let doc = JsonSummary::from(summary);
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &doc)?;
    println!();
    Ok(())
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    total: usize,
    passed: usize,
    failed: usize,
    finished: String,
    tests: Vec<JsonRecord<'a>>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    name: &'a str,
    passed: bool,
    timed_out: bool,
    duration_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> From<&'a Summary> for JsonSummary<'a> {
    fn from(summary: &'a Summary) -> Self {
        let tests = summary
            .records()
            .iter()
            .map(|record| JsonRecord {
                name: &record.name,
                passed: record.outcome.passed(),
                timed_out: record.outcome == Outcome::TimedOut,
                duration_ms: record.duration.as_millis(),
                exit_code: match record.outcome {
                    Outcome::Passed => Some(0),
                    Outcome::Failed(code) => code,
                    _ => None,
                },
                error: match &record.outcome {
                    Outcome::LaunchFailed(err) => Some(err.as_str()),
                    _ => None,
                },
            })
            .collect();

        JsonSummary {
            total: summary.total(),
            passed: summary.passed(),
            failed: summary.failed(),
            finished: summary.finished.to_rfc3339(),
            tests,
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

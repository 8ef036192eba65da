// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! `portico run` command implementation.
//!
//! Discovers test executables, runs them sequentially, and prints the
//! summary. A failing case never aborts the run; only an unreadable or
//! empty test directory does.

use std::time::Duration;

use portico::cli::{OutputFormat, RunArgs};
use portico::discovery;
use portico::error::ExitCode;
use portico::report::{self, Summary};
use portico::runner::{Outcome, TestRunner};

pub fn run(args: &RunArgs) -> anyhow::Result<ExitCode> {
    let dir = discovery::resolve_dir(args.dir.as_deref())?;
    let cases = discovery::discover(&dir)?;

    println!("Found {} test files", cases.len());
    println!("Test directory: {}", dir.display());

    let runner = TestRunner::new(Duration::from_secs(args.timeout));
    let mut records = Vec::with_capacity(cases.len());

    for case in &cases {
        report::print_banner(&discovery::case_name(case));
        let record = runner.run_one(case);
        match &record.outcome {
            Outcome::TimedOut => {
                println!(
                    "{} timed out after {} seconds",
                    record.name,
                    runner.timeout().as_secs()
                );
            }
            Outcome::LaunchFailed(err) => {
                println!("Error running {}: {err}", record.name);
            }
            Outcome::Passed | Outcome::Failed(_) => {}
        }
        records.push(record);
    }

    let summary = Summary::new(records);
    match args.output {
        OutputFormat::Text => report::print_text(&summary, args.color_mode())?,
        OutputFormat::Json => report::print_json(&summary)?,
    }

    Ok(if summary.all_passed() {
        ExitCode::Success
    } else {
        ExitCode::Failure
    })
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Sequential test execution with per-test timeouts.
//!
//! Each case runs as an independent child process that inherits stdout and
//! stderr, so its own output streams through unmodified. The harness only
//! interprets the exit status. Cases run strictly one at a time: they all
//! mutate the same remote backend and were not written for concurrency.

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use crate::discovery::case_name;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// How a single test case finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exit status zero.
    Passed,
    /// Non-zero exit status (`None` when terminated by a signal).
    Failed(Option<i32>),
    /// Killed after exceeding the wall-clock budget.
    TimedOut,
    /// The process could not be started or waited on.
    LaunchFailed(String),
}

impl Outcome {
    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Immutable record of one executed test case.
#[derive(Debug, Clone)]
pub struct TestRecord {
    pub name: String,
    pub outcome: Outcome,
    pub duration: Duration,
}

/// Runs test case executables one at a time.
pub struct TestRunner {
    timeout: Duration,
}

impl TestRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one case to completion, enforcing the timeout.
    ///
    /// Never returns an error: launch failures and timeouts are folded into
    /// the record so one broken case cannot abort the rest of the run.
    pub fn run_one(&self, path: &Path) -> TestRecord {
        let name = case_name(path);
        tracing::debug!(case = %name, "starting test case");
        let started = Instant::now();

        let outcome = match Command::new(path).stdin(Stdio::null()).spawn() {
            Ok(child) => self.wait_with_timeout(child),
            Err(err) => Outcome::LaunchFailed(err.to_string()),
        };

        let duration = started.elapsed();
        tracing::debug!(case = %name, ?outcome, ?duration, "test case finished");
        TestRecord { name, outcome, duration }
    }

    fn wait_with_timeout(&self, mut child: Child) -> Outcome {
        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    return if status.success() {
                        Outcome::Passed
                    } else {
                        Outcome::Failed(status.code())
                    };
                }
                Ok(None) => {}
                Err(err) => return Outcome::LaunchFailed(err.to_string()),
            }

            if Instant::now() >= deadline {
                // The child may exit between try_wait and kill; either way it
                // already blew the budget and counts as timed out.
                let _ = child.kill();
                let _ = child.wait();
                return Outcome::TimedOut;
            }

            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

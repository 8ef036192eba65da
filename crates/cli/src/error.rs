// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Harness error types and process exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code the harness reports to its caller.
///
/// CI treats this as the sole signal: zero means every test case passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    Failure,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failure => 1,
        }
    }
}

/// Errors that abort a run before any test case executes.
///
/// Anything that happens after discovery is contained at single-test
/// granularity and never surfaces here.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("cannot read test directory {dir}: {source}")]
    UnreadableDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no test files found in {0} (expected names like TC001_login)")]
    NoTests(PathBuf),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Harness library for the portico CLI.
//!
//! Discovers `TC<digits>` test executables, runs them sequentially with a
//! per-test timeout, and aggregates pass/fail results. The test cases
//! themselves live in the `suite` crate and are opaque to the harness:
//! exit status zero is the only success signal.

pub mod cli;
pub mod color;
pub mod discovery;
pub mod error;
pub mod report;
pub mod runner;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Shared infrastructure for the Portico black-box API test cases.
//!
//! Each `TC<digits>` binary in `src/bin/` is one independent test case: a
//! linear sequence of HTTP requests and assertions against the backend
//! under test, exiting zero on success and non-zero on the first failure.
//! The backend's contract is not formally specified; the assertions here
//! capture observed and expected behavior, including deliberately loose
//! status sets (401-or-403) where the backend is known to vary.

pub mod check;
pub mod cleanup;
pub mod client;
pub mod jwt;

/// Initialize logging for a test case binary.
///
/// Quiet by default; `RUST_LOG=suite=debug` traces every request.
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

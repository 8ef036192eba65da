// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! `portico list` command implementation.

use portico::cli::ListArgs;
use portico::discovery;
use portico::error::ExitCode;

/// Print discovered test cases in execution order without running them.
pub fn run(args: &ListArgs) -> anyhow::Result<ExitCode> {
    let dir = discovery::resolve_dir(args.dir.as_deref())?;
    let cases = discovery::discover(&dir)?;

    for case in &cases {
        println!("{}", discovery::case_name(case));
    }

    Ok(ExitCode::Success)
}

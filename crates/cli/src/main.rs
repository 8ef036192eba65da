// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Binary entry point for the portico harness.

mod cmd_list;
mod cmd_run;

use clap::Parser;
use portico::cli::{Cli, Command, RunArgs};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Run(args)) => cmd_run::run(&args),
        Some(Command::List(args)) => cmd_list::run(&args),
        // Bare `portico` runs the suite in the current directory.
        None => cmd_run::run(&RunArgs::default()),
    };

    match result {
        Ok(code) => std::process::exit(code.code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Black-box verification harness for the Portico backend API
#[derive(Parser)]
#[command(name = "portico")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run every discovered test case
    Run(RunArgs),
    /// List test cases in execution order without running them
    List(ListArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Directory to scan for test executables
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Per-test wall-clock timeout in seconds
    #[arg(long, default_value_t = 300, value_name = "SECS", env = "PORTICO_TIMEOUT")]
    pub timeout: u64,

    /// Output format for the final summary
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

impl RunArgs {
    /// Effective color mode after `--no-color` is applied.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color { ColorMode::Never } else { self.color }
    }
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            dir: None,
            timeout: 300,
            output: OutputFormat::Text,
            color: ColorMode::Auto,
            no_color: false,
        }
    }
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Directory to scan for test executables
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

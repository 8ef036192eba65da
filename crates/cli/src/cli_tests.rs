// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use clap::Parser;

use super::*;

#[test]
fn parses_bare_invocation() {
    let cli = Cli::try_parse_from(["portico"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn parses_run_with_defaults() {
    let cli = Cli::try_parse_from(["portico", "run"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert!(args.dir.is_none());
    assert_eq!(args.timeout, 300);
    assert_eq!(args.output, OutputFormat::Text);
    assert_eq!(args.color, ColorMode::Auto);
}

#[test]
fn parses_run_with_dir_and_timeout() {
    let cli = Cli::try_parse_from(["portico", "run", "cases", "--timeout", "10"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.dir, Some(PathBuf::from("cases")));
    assert_eq!(args.timeout, 10);
}

#[test]
fn parses_json_output() {
    let cli = Cli::try_parse_from(["portico", "run", "--output", "json"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.output, OutputFormat::Json);
}

#[test]
fn no_color_overrides_color_mode() {
    let cli =
        Cli::try_parse_from(["portico", "run", "--color", "always", "--no-color"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.color_mode(), ColorMode::Never);
}

#[test]
fn parses_list_with_dir() {
    let cli = Cli::try_parse_from(["portico", "list", "cases"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.dir, Some(PathBuf::from("cases")));
}

#[test]
fn default_run_args_match_clap_defaults() {
    let defaults = RunArgs::default();
    assert_eq!(defaults.timeout, 300);
    assert_eq!(defaults.color_mode(), ColorMode::Auto);
}

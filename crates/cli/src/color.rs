// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Color output mode selection.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// When to emit ANSI color in the summary output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Map to a termcolor choice for the stdout stream.
    pub fn stdout_choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => {
                if std::io::stdout().is_terminal() {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

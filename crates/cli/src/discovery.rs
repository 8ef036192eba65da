// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Test case discovery.
//!
//! Scans one directory (no recursion) for files named like `TC001_...` and
//! returns them sorted lexicographically by file name, so every invocation
//! executes the suite in the same order.

use std::path::{Path, PathBuf};

use crate::error::HarnessError;

/// Discover test case files in `dir`.
///
/// Returns [`HarnessError::NoTests`] when nothing matches; an empty suite
/// must fail the run rather than trivially pass it.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let entries = std::fs::read_dir(dir).map_err(|source| HarnessError::UnreadableDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut cases: Vec<PathBuf> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_case_name(name) {
            cases.push(path);
        }
    }

    cases.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if cases.is_empty() {
        return Err(HarnessError::NoTests(dir.to_path_buf()));
    }

    tracing::debug!(count = cases.len(), dir = %dir.display(), "discovered test cases");
    Ok(cases)
}

/// Resolve an optional CLI path argument against the current directory.
pub fn resolve_dir(arg: Option<&Path>) -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match arg {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd,
    })
}

/// A case name is `tc` or `TC` followed by at least one digit.
fn is_case_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 2
        && bytes[0].eq_ignore_ascii_case(&b't')
        && bytes[1].eq_ignore_ascii_case(&b'c')
        && bytes[2].is_ascii_digit()
}

/// Derive the display name of a case from its file name.
pub fn case_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the portico binary
pub fn portico_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("portico"))
}

/// A temp directory standing in for a test-case directory.
pub struct Suite {
    dir: TempDir,
}

impl Suite {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a plain, non-executable file.
    pub fn file(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).unwrap();
    }

    /// Write an executable shell script named `name` with the given body.
    #[cfg(unix)]
    pub fn case(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}

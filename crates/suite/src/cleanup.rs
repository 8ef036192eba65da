// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Best-effort teardown of resources a test case created.
//!
//! DELETE paths are registered as resources are created and issued in
//! reverse order when the stack drops, so teardown runs no matter which
//! assertion failed first. Individual delete failures are logged and
//! swallowed: cleanup must never mask the real test outcome.

use crate::client::Api;

pub struct CleanupStack<'a> {
    api: &'a Api,
    paths: Vec<String>,
}

impl<'a> CleanupStack<'a> {
    pub fn new(api: &'a Api) -> Self {
        Self {
            api,
            paths: Vec::new(),
        }
    }

    /// Register a DELETE path to issue during teardown.
    pub fn defer(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    /// Registered paths in registration order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Run the deferred deletions now, newest first.
    pub fn run(&mut self) {
        while let Some(path) = self.paths.pop() {
            match self.api.delete(&path) {
                Ok(resp) => {
                    tracing::debug!(path = %path, status = resp.status().as_u16(), "cleanup")
                }
                Err(err) => tracing::warn!(path = %path, %err, "cleanup delete failed"),
            }
        }
    }
}

impl Drop for CleanupStack<'_> {
    fn drop(&mut self) {
        self.run();
    }
}

#[cfg(test)]
#[path = "cleanup_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn exit_codes_map_to_integers() {
    assert_eq!(ExitCode::Success.code(), 0);
    assert_eq!(ExitCode::Failure.code(), 1);
}

#[test]
fn no_tests_message_names_directory() {
    let err = HarnessError::NoTests(PathBuf::from("/tmp/suite"));
    let msg = err.to_string();
    assert!(msg.contains("no test files found"));
    assert!(msg.contains("/tmp/suite"));
}

#[test]
fn unreadable_dir_keeps_io_source() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = HarnessError::UnreadableDir {
        dir: PathBuf::from("/nope"),
        source,
    };
    assert!(err.to_string().contains("/nope"));
    assert!(std::error::Error::source(&err).is_some());
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC010: the upload endpoint accepts safe files and rejects unsafe or
//! oversized ones.

use anyhow::{Result, ensure};
use reqwest::blocking::multipart::{Form, Part};
use suite::check::expect_json;
use suite::client::Api;

// Smallest valid 1x1 transparent PNG.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x60,
    0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0xe2, 0x21, 0xbc, 0x33, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

// Just over the backend's 5 MB cap.
const OVERSIZED_LEN: usize = 6 * 1024 * 1024;

fn main() -> Result<()> {
    suite::init();
    let api = Api::from_env()?;

    // Valid image upload.
    let body = upload(&api, "test.png", TINY_PNG.to_vec(), &[200])?;
    ensure!(
        has_file_reference(&body),
        "image upload response missing fileUrl/filename: {body}"
    );

    // Valid plain file upload.
    let body = upload(&api, "sample.txt", b"Sample text content".to_vec(), &[200])?;
    ensure!(
        has_file_reference(&body),
        "file upload response missing fileUrl/filename: {body}"
    );

    // Executable content must be rejected as an unsupported type.
    let body = upload(
        &api,
        "malicious.sh",
        b"#!/bin/bash\necho malicious code".to_vec(),
        &[400, 415],
    )?;
    ensure!(
        has_error_message(&body),
        "rejected upload carries no error message: {body}"
    );

    // Oversized payload must be refused.
    let body = upload(&api, "large_file.txt", vec![b'x'; OVERSIZED_LEN], &[413, 400])?;
    ensure!(
        has_error_message(&body),
        "oversized upload carries no error message: {body}"
    );

    Ok(())
}

fn upload(api: &Api, name: &str, bytes: Vec<u8>, allowed: &[u16]) -> Result<serde_json::Value> {
    let part = Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str("application/octet-stream")?;
    let form = Form::new().part("file", part);
    expect_json(
        api.post_multipart("upload", form)?,
        allowed,
        &format!("upload {name}"),
    )
}

fn has_file_reference(body: &serde_json::Value) -> bool {
    body.get("fileUrl").is_some() || body.get("filename").is_some()
}

fn has_error_message(body: &serde_json::Value) -> bool {
    body.get("error").is_some() || body.get("message").is_some()
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! JWT payload inspection without signature verification.
//!
//! The suite never holds the signing secret; it only needs to read public
//! claims like `exp` from tokens the backend issues.

use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

/// Decode the claims segment of a JWT.
pub fn claims(token: &str) -> Result<Value> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload)) = (parts.next(), parts.next()) else {
        bail!("not a JWT: missing payload segment");
    };
    let raw = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .context("JWT payload is not base64url")?;
    serde_json::from_slice(&raw).context("JWT payload is not JSON")
}

/// The `exp` claim as seconds since the epoch, if present.
pub fn expiry(claims: &Value) -> Option<i64> {
    claims.get("exp").and_then(Value::as_i64)
}

#[cfg(test)]
#[path = "jwt_tests.rs"]
mod tests;

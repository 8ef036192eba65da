// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! Response assertions shared by the test case binaries.
//!
//! Several endpoints accept more than one status code on purpose (for
//! example 401 or 403 for an authorization failure); the helpers here take
//! the full allowed set rather than pretending the backend is stricter
//! than it is.

use anyhow::{Result, bail, ensure};
use reqwest::blocking::Response;
use serde_json::Value;

/// Assert the status is one of `allowed`, returning the response.
///
/// The failure message carries the response body, which is usually the
/// only diagnostic the backend provides.
pub fn expect_status(resp: Response, allowed: &[u16], what: &str) -> Result<Response> {
    let status = resp.status().as_u16();
    if allowed.contains(&status) {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    bail!("{what}: expected status in {allowed:?}, got {status}: {body}");
}

/// Assert the status and parse the JSON body.
pub fn expect_json(resp: Response, allowed: &[u16], what: &str) -> Result<Value> {
    let resp = expect_status(resp, allowed, what)?;
    resp.json()
        .map_err(|err| anyhow::anyhow!("{what}: response body is not JSON: {err}"))
}

/// Extract the `id` every create endpoint is expected to return.
///
/// Backends disagree on whether ids are strings or numbers; both are
/// normalized to a string for later path building.
pub fn require_id(body: &Value, what: &str) -> Result<String> {
    match body.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => bail!("{what}: response missing 'id': {body}"),
    }
}

/// Assert a JSON array of objects contains an object with the given id.
pub fn contains_id(list: &Value, id: &str, what: &str) -> Result<()> {
    let Some(items) = list.as_array() else {
        bail!("{what}: expected a JSON array, got: {list}");
    };
    ensure!(
        items.iter().any(|item| matches_id(item, id)),
        "{what}: id {id} not found in list of {} items",
        items.len()
    );
    Ok(())
}

/// Assert a JSON array of objects does NOT contain an object with the id.
pub fn lacks_id(list: &Value, id: &str, what: &str) -> Result<()> {
    let Some(items) = list.as_array() else {
        bail!("{what}: expected a JSON array, got: {list}");
    };
    ensure!(
        !items.iter().any(|item| matches_id(item, id)),
        "{what}: id {id} unexpectedly present"
    );
    Ok(())
}

/// Assert two monetary amounts agree to the cent.
pub fn amounts_match(actual: f64, expected: f64, what: &str) -> Result<()> {
    ensure!(
        (actual - expected).abs() < 0.01,
        "{what}: expected {expected}, got {actual}"
    );
    Ok(())
}

/// String field accessor with a readable failure.
pub fn str_field<'a>(body: &'a Value, field: &str, what: &str) -> Result<&'a str> {
    match body.get(field).and_then(Value::as_str) {
        Some(s) => Ok(s),
        None => bail!("{what}: missing string field '{field}': {body}"),
    }
}

/// Numeric field accessor with a readable failure.
pub fn f64_field(body: &Value, field: &str, what: &str) -> Result<f64> {
    match body.get(field).and_then(Value::as_f64) {
        Some(n) => Ok(n),
        None => bail!("{what}: missing numeric field '{field}': {body}"),
    }
}

/// Assert an object field references the given id (string or numeric).
pub fn field_is_id(body: &Value, field: &str, id: &str, what: &str) -> Result<()> {
    let matches = match body.get(field) {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    };
    ensure!(matches, "{what}: field '{field}' does not reference id {id}: {body}");
    Ok(())
}

fn matches_id(item: &Value, id: &str) -> bool {
    match item.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC001: authentication endpoint enforces JWT validation and device
//! approval.

use anyhow::{Result, anyhow, ensure};
use chrono::Utc;
use serde_json::{Value, json};
use suite::check::{expect_json, expect_status, str_field};
use suite::client::Api;
use suite::jwt;

const PROTECTED: &str = "auth/protected-resource";

fn main() -> Result<()> {
    suite::init();
    let api = Api::from_env()?;

    let email = std::env::var("PORTICO_TEST_EMAIL")
        .unwrap_or_else(|_| "testuser@example.com".to_string());
    let password = std::env::var("PORTICO_TEST_PASSWORD")
        .unwrap_or_else(|_| "StrongPassword123!".to_string());

    // Login with valid credentials yields a token and the approval flag.
    let login = expect_json(
        api.post("auth/login", &json!({"email": email, "password": password}))?,
        &[200],
        "login",
    )?;
    let token = str_field(&login, "token", "login")?.to_string();
    let approval_required = login
        .get("deviceApprovalRequired")
        .and_then(Value::as_bool)
        .ok_or_else(|| anyhow!("login: device approval flag missing: {login}"))?;

    // The token must carry an expiry in the future.
    let claims = jwt::claims(&token)?;
    let exp = jwt::expiry(&claims).ok_or_else(|| anyhow!("JWT missing exp claim"))?;
    ensure!(exp > Utc::now().timestamp(), "JWT is already expired");

    let authed = api.with_token(Some(token.clone()))?;
    let first = authed.get(PROTECTED)?;

    if approval_required {
        // Denied until the device is approved.
        expect_status(first, &[401, 403], "protected resource before device approval")?;

        let device_id = claims
            .get("deviceId")
            .and_then(Value::as_str)
            .unwrap_or("test-device-id");
        expect_status(
            authed.post(
                "deviceApproval/approve",
                &json!({"token": token, "deviceId": device_id}),
            )?,
            &[200],
            "device approval",
        )?;

        expect_status(
            authed.get(PROTECTED)?,
            &[200],
            "protected resource after device approval",
        )?;
    } else {
        expect_status(first, &[200], "protected resource without device approval")?;
    }

    // Wrong password must not authenticate.
    expect_status(
        api.post(
            "auth/login",
            &json!({"email": email, "password": "WrongPassword!"}),
        )?,
        &[401],
        "login with wrong password",
    )?;

    // Malformed bearer token is rejected.
    let malformed = api.with_token(Some("invalid.jwt.token".to_string()))?;
    expect_status(malformed.get(PROTECTED)?, &[401, 403], "malformed token")?;

    // Tampered token is rejected; appending a byte breaks the signature.
    let tampered = api.with_token(Some(format!("{token}a")))?;
    expect_status(tampered.get(PROTECTED)?, &[401, 403], "tampered token")?;

    Ok(())
}

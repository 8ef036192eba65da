// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

use super::*;

fn token_with_payload(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
    format!("{header}.{body}.fakesignature")
}

#[test]
fn decodes_claims_without_verification() {
    let token = token_with_payload(&json!({"exp": 4102444800i64, "deviceId": "dev-1"}));
    let decoded = claims(&token).unwrap();
    assert_eq!(decoded["deviceId"], "dev-1");
    assert_eq!(expiry(&decoded), Some(4102444800));
}

#[test]
fn accepts_padded_payloads() {
    let header = URL_SAFE_NO_PAD.encode(b"{}");
    let body = base64::engine::general_purpose::URL_SAFE.encode(br#"{"exp":10}"#);
    assert!(body.ends_with('='));
    let decoded = claims(&format!("{header}.{body}.sig")).unwrap();
    assert_eq!(expiry(&decoded), Some(10));
}

#[test]
fn rejects_tokens_without_payload_segment() {
    assert!(claims("justonesegment").is_err());
}

#[test]
fn rejects_non_base64_payloads() {
    assert!(claims("aGVhZGVy.!!!not-base64!!!.sig").is_err());
}

#[test]
fn rejects_non_json_payloads() {
    let header = URL_SAFE_NO_PAD.encode(b"{}");
    let body = URL_SAFE_NO_PAD.encode(b"plain text");
    assert!(claims(&format!("{header}.{body}.sig")).is_err());
}

#[test]
fn expiry_absent_when_no_exp_claim() {
    let token = token_with_payload(&json!({"sub": "user"}));
    assert_eq!(expiry(&claims(&token).unwrap()), None);
}

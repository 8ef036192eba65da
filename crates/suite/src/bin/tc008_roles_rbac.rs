// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC008: roles management enforces RBAC and generates invite links.
//!
//! Needs two identities: `PORTICO_ADMIN_TOKEN` with full role permissions
//! and `PORTICO_TOKEN` for a limited user. Some limited-user checks accept
//! 200 as well as 401/403 because the backend's visibility rules for
//! non-admins are not pinned down.

use anyhow::{Result, ensure};
use serde_json::{Value, json};
use suite::check::{contains_id, expect_json, expect_status, require_id, str_field};
use suite::cleanup::CleanupStack;
use suite::client::Api;

const ROLE_NAME: &str = "test_role_for_rbac";

fn main() -> Result<()> {
    suite::init();
    let user = Api::from_env()?;
    let admin_token = std::env::var("PORTICO_ADMIN_TOKEN")
        .unwrap_or_else(|_| "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.admin".to_string());
    let admin = user.with_token(Some(admin_token))?;
    let mut cleanup = CleanupStack::new(&admin);
    exercise(&admin, &user, &mut cleanup)
}

fn exercise(admin: &Api, user: &Api, cleanup: &mut CleanupStack) -> Result<()> {
    let role_payload = json!({
        "name": ROLE_NAME,
        "permissions": ["read_roles", "create_roles", "generate_invite_links"],
    });

    // Admin creates a role.
    let role = expect_json(admin.post("roles", &role_payload)?, &[201], "admin creates role")?;
    let role_id = require_id(&role, "admin creates role")?;
    cleanup.defer(format!("roles/{role_id}"));
    ensure!(
        str_field(&role, "name", "admin creates role")? == ROLE_NAME,
        "created role name mismatch"
    );

    // Limited user cannot.
    expect_status(
        user.post("roles", &role_payload)?,
        &[401, 403],
        "limited user creates role",
    )?;

    // Admin sees the new role in the listing.
    let roles = expect_json(admin.get("roles")?, &[200], "admin lists roles")?;
    contains_id(&roles, &role_id, "admin lists roles")?;

    // Limited user may or may not be allowed to list roles.
    expect_status(user.get("roles")?, &[200, 401, 403], "limited user lists roles")?;

    // Invite link generation is admin-only.
    let invite_payload = json!({"roleId": role_id});
    let invite = expect_json(
        admin.post("roles/invite-link", &invite_payload)?,
        &[200],
        "admin generates invite link",
    )?;
    let link = invite.get("inviteLink").and_then(Value::as_str).unwrap_or("");
    ensure!(!link.is_empty(), "invite link missing or empty: {invite}");

    expect_status(
        user.post("roles/invite-link", &invite_payload)?,
        &[401, 403],
        "limited user generates invite link",
    )?;

    // Garbage token is always unauthorized.
    let invalid = admin.with_token(Some("invalidtokenstring".to_string()))?;
    expect_status(invalid.get("roles")?, &[401], "invalid token lists roles")?;

    // Role detail reads.
    let detail = expect_json(
        admin.get(&format!("roles/{role_id}"))?,
        &[200],
        "admin reads role",
    )?;
    ensure!(
        require_id(&detail, "admin reads role")? == role_id,
        "role detail id mismatch"
    );
    expect_status(
        user.get(&format!("roles/{role_id}"))?,
        &[200, 401, 403],
        "limited user reads role",
    )?;

    Ok(())
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC009: support tickets move through creation and resolution, with an
//! audit trail for each transition.

use anyhow::{Result, ensure};
use serde_json::{Value, json};
use suite::check::{expect_json, require_id, str_field};
use suite::cleanup::CleanupStack;
use suite::client::Api;
use uuid::Uuid;

fn main() -> Result<()> {
    suite::init();
    let api = Api::from_env()?;
    let mut cleanup = CleanupStack::new(&api);
    exercise(&api, &mut cleanup)
}

fn exercise(api: &Api, cleanup: &mut CleanupStack) -> Result<()> {
    let title = format!("Test Support Ticket {}", Uuid::new_v4());

    let ticket = expect_json(
        api.post(
            "support/tickets",
            &json!({
                "title": title,
                "description": "This is a test ticket created for automation testing of support workflows.",
                "priority": "medium",
                "category": "general",
                "attachments": [],
            }),
        )?,
        &[201],
        "create ticket",
    )?;
    let ticket_id = require_id(&ticket, "create ticket")?;
    cleanup.defer(format!("support/tickets/{ticket_id}"));

    // Fresh tickets open in the "open" state.
    let detail = expect_json(
        api.get(&format!("support/tickets/{ticket_id}"))?,
        &[200],
        "read ticket",
    )?;
    ensure!(
        str_field(&detail, "title", "read ticket")? == title,
        "ticket title mismatch"
    );
    ensure!(
        str_field(&detail, "status", "read ticket")? == "open",
        "new ticket is not open"
    );

    // open -> in_progress
    let updated = expect_json(
        api.put(
            &format!("support/tickets/{ticket_id}/status"),
            &json!({"status": "in_progress", "comment": "Started working on the ticket."}),
        )?,
        &[200],
        "start ticket",
    )?;
    ensure!(
        str_field(&updated, "status", "start ticket")? == "in_progress",
        "ticket did not move to in_progress"
    );

    // in_progress -> resolved
    let resolved = expect_json(
        api.put(
            &format!("support/tickets/{ticket_id}/status"),
            &json!({"status": "resolved", "comment": "Issue has been resolved successfully."}),
        )?,
        &[200],
        "resolve ticket",
    )?;
    ensure!(
        str_field(&resolved, "status", "resolve ticket")? == "resolved",
        "ticket did not resolve"
    );

    // The audit log records creation and both transitions.
    let audit = expect_json(
        api.get(&format!("support/tickets/{ticket_id}/audit"))?,
        &[200],
        "ticket audit log",
    )?;
    let entries = audit
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("audit log is not a list: {audit}"))?;
    ensure!(
        entries.iter().any(|log| action(log) == Some("created")),
        "audit log missing creation entry"
    );
    ensure!(
        entries
            .iter()
            .any(|log| action(log) == Some("status_update") && new_status(log) == Some("in_progress")),
        "audit log missing in_progress transition"
    );
    ensure!(
        entries
            .iter()
            .any(|log| action(log) == Some("status_update") && new_status(log) == Some("resolved")),
        "audit log missing resolved transition"
    );

    Ok(())
}

fn action(log: &Value) -> Option<&str> {
    log.get("action").and_then(Value::as_str)
}

fn new_status(log: &Value) -> Option<&str> {
    log.get("new_status").and_then(Value::as_str)
}

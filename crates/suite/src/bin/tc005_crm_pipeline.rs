// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC005: CRM lead and deal stages update consistently with permissions.

use anyhow::{Result, ensure};
use serde_json::json;
use suite::check::{expect_json, expect_status, require_id, str_field};
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
    let suffix = Uuid::new_v4().simple().to_string()[..8].to_string();

    // Lead starts in the "new" stage.
    let lead = expect_json(
        api.post(
            "crm/leads",
            &json!({
                "name": format!("Test Lead {suffix}"),
                "email": "lead@example.com",
                "phone": "1234567890",
                "stage": "new",
            }),
        )?,
        &[201],
        "create lead",
    )?;
    let lead_id = require_id(&lead, "create lead")?;
    cleanup.defer(format!("crm/leads/{lead_id}"));

    // Authorized stage update takes effect.
    let updated = expect_json(
        api.put(
            &format!("crm/leads/{lead_id}/stage"),
            &json!({"stage": "contacted"}),
        )?,
        &[200],
        "update lead stage",
    )?;
    ensure!(
        str_field(&updated, "stage", "update lead stage")? == "contacted",
        "lead stage did not update"
    );

    // Convert by creating a client that references the source lead.
    let client = expect_json(
        api.post(
            "crm/clients",
            &json!({
                "name": format!("Test Lead {suffix}"),
                "email": "lead@example.com",
                "phone": "1234567890",
                "source_lead_id": lead_id,
                "stage": "prospect",
            }),
        )?,
        &[201],
        "create client",
    )?;
    let client_id = require_id(&client, "create client")?;
    cleanup.defer(format!("crm/clients/{client_id}"));

    // Deal attached to the client.
    let deal = expect_json(
        api.post(
            "crm/deals",
            &json!({
                "clientId": client_id,
                "title": format!("Deal for Test Lead {suffix}"),
                "value": 100000,
                "stage": "negotiation",
            }),
        )?,
        &[201],
        "create deal",
    )?;
    let deal_id = require_id(&deal, "create deal")?;
    cleanup.defer(format!("crm/deals/{deal_id}"));

    let updated = expect_json(
        api.put(
            &format!("crm/deals/{deal_id}/stage"),
            &json!({"stage": "closed_won"}),
        )?,
        &[200],
        "update deal stage",
    )?;
    ensure!(
        str_field(&updated, "stage", "update deal stage")? == "closed_won",
        "deal stage did not update"
    );

    // Communication logged against the deal.
    let communication = expect_json(
        api.post(
            "crm/communications",
            &json!({
                "dealId": deal_id,
                "clientId": client_id,
                "type": "email",
                "subject": "Follow up on deal",
                "content": "Discussed closing terms and agreement.",
                "stageImpact": true,
            }),
        )?,
        &[201],
        "create communication",
    )?;
    let communication_id = require_id(&communication, "create communication")?;
    cleanup.defer(format!("crm/communications/{communication_id}"));

    // The deal stage stays consistent after the communication.
    let deal_after = expect_json(
        api.get(&format!("crm/deals/{deal_id}"))?,
        &[200],
        "read deal after communication",
    )?;
    let stage = str_field(&deal_after, "stage", "read deal after communication")?;
    ensure!(
        stage == "closed_won" || stage == "negotiation",
        "deal stage inconsistent after communication: {stage}"
    );

    // A caller without permission cannot move the stage.
    let unauthorized = api.with_token(Some("invalid_or_no_permission_token".to_string()))?;
    expect_status(
        unauthorized.put(
            &format!("crm/leads/{lead_id}/stage"),
            &json!({"stage": "qualified"}),
        )?,
        &[401, 403],
        "unauthorized lead stage update",
    )?;

    Ok(())
}

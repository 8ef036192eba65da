// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC002: properties management endpoints support full CRUD.
//!
//! Builds the whole hierarchy (property, block, floor, unit, buyer, lease,
//! sale), verifies each level round-trips, then tears it down in reverse
//! dependency order via the cleanup stack.

use anyhow::{Result, ensure};
use serde_json::json;
use suite::check::{expect_json, field_is_id, require_id, str_field};
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
    let run_id = Uuid::new_v4();
    let code_suffix = run_id.simple().to_string()[..8].to_uppercase();

    // Property
    let property = expect_json(
        api.post(
            "properties",
            &json!({
                "name": format!("Test Property {run_id}"),
                "address": "123 Test St",
                "code": format!("PROP-{code_suffix}"),
                "status": "active",
            }),
        )?,
        &[201],
        "create property",
    )?;
    let property_id = require_id(&property, "create property")?;
    cleanup.defer(format!("properties/{property_id}"));
    ensure!(
        str_field(&property, "status", "create property")?.eq_ignore_ascii_case("active"),
        "property status not echoed"
    );

    let fetched = expect_json(
        api.get(&format!("properties/{property_id}"))?,
        &[200],
        "read property",
    )?;
    ensure!(
        require_id(&fetched, "read property")? == property_id,
        "read property returned a different id"
    );

    let updated = expect_json(
        api.put(
            &format!("properties/{property_id}"),
            &json!({"status": "inactive"}),
        )?,
        &[200],
        "update property",
    )?;
    ensure!(
        str_field(&updated, "status", "update property")?.eq_ignore_ascii_case("inactive"),
        "property status update not applied"
    );

    // Block under the property
    let block = expect_json(
        api.post(
            "blocks",
            &json!({
                "name": "Block A",
                "property_id": property_id,
                "code": format!("BLK-{}", &code_suffix[..6]),
                "status": "active",
            }),
        )?,
        &[201],
        "create block",
    )?;
    let block_id = require_id(&block, "create block")?;
    cleanup.defer(format!("blocks/{block_id}"));
    field_is_id(&block, "property_id", &property_id, "create block")?;

    let fetched = expect_json(api.get(&format!("blocks/{block_id}"))?, &[200], "read block")?;
    ensure!(
        require_id(&fetched, "read block")? == block_id,
        "read block returned a different id"
    );
    let updated = expect_json(
        api.put(&format!("blocks/{block_id}"), &json!({"status": "inactive"}))?,
        &[200],
        "update block",
    )?;
    ensure!(
        str_field(&updated, "status", "update block")?.eq_ignore_ascii_case("inactive"),
        "block status update not applied"
    );

    // Floor under the block
    let floor = expect_json(
        api.post(
            "floors",
            &json!({
                "name": "Floor 1",
                "block_id": block_id,
                "level": 1,
                "status": "active",
            }),
        )?,
        &[201],
        "create floor",
    )?;
    let floor_id = require_id(&floor, "create floor")?;
    cleanup.defer(format!("floors/{floor_id}"));
    field_is_id(&floor, "block_id", &block_id, "create floor")?;

    let fetched = expect_json(api.get(&format!("floors/{floor_id}"))?, &[200], "read floor")?;
    ensure!(
        require_id(&fetched, "read floor")? == floor_id,
        "read floor returned a different id"
    );
    expect_json(
        api.put(&format!("floors/{floor_id}"), &json!({"status": "inactive"}))?,
        &[200],
        "update floor",
    )?;

    // Unit on the floor
    let unit = expect_json(
        api.post(
            "units",
            &json!({
                "name": "Unit 101",
                "floor_id": floor_id,
                "block_id": block_id,
                "property_id": property_id,
                "unit_number": "101",
                "type": "residential",
                "status": "available",
            }),
        )?,
        &[201],
        "create unit",
    )?;
    let unit_id = require_id(&unit, "create unit")?;
    cleanup.defer(format!("units/{unit_id}"));
    field_is_id(&unit, "floor_id", &floor_id, "create unit")?;

    expect_json(api.get(&format!("units/{unit_id}"))?, &[200], "read unit")?;
    let updated = expect_json(
        api.put(&format!("units/{unit_id}"), &json!({"status": "occupied"}))?,
        &[200],
        "update unit",
    )?;
    ensure!(
        str_field(&updated, "status", "update unit")?.eq_ignore_ascii_case("occupied"),
        "unit status update not applied"
    );

    // Buyer
    let buyer_email = format!("johndoe{}@example.com", &code_suffix[..6].to_lowercase());
    let buyer = expect_json(
        api.post(
            "buyers",
            &json!({
                "name": "John Doe",
                "email": buyer_email,
                "phone": "+1234567890",
            }),
        )?,
        &[201],
        "create buyer",
    )?;
    let buyer_id = require_id(&buyer, "create buyer")?;
    cleanup.defer(format!("buyers/{buyer_id}"));
    ensure!(
        str_field(&buyer, "email", "create buyer")? == buyer_email,
        "buyer email not echoed"
    );

    expect_json(api.get(&format!("buyers/{buyer_id}"))?, &[200], "read buyer")?;
    let updated = expect_json(
        api.put(&format!("buyers/{buyer_id}"), &json!({"phone": "+1987654321"}))?,
        &[200],
        "update buyer",
    )?;
    ensure!(
        str_field(&updated, "phone", "update buyer")? == "+1987654321",
        "buyer phone update not applied"
    );

    // Lease binding unit and buyer
    let lease = expect_json(
        api.post(
            "leases",
            &json!({
                "unit_id": unit_id,
                "buyer_id": buyer_id,
                "start_date": "2025-01-01",
                "end_date": "2025-12-31",
                "rent": 1500.00,
                "status": "active",
            }),
        )?,
        &[201],
        "create lease",
    )?;
    let lease_id = require_id(&lease, "create lease")?;
    cleanup.defer(format!("leases/{lease_id}"));
    field_is_id(&lease, "unit_id", &unit_id, "create lease")?;
    field_is_id(&lease, "buyer_id", &buyer_id, "create lease")?;

    expect_json(api.get(&format!("leases/{lease_id}"))?, &[200], "read lease")?;
    let updated = expect_json(
        api.put(&format!("leases/{lease_id}"), &json!({"status": "terminated"}))?,
        &[200],
        "update lease",
    )?;
    ensure!(
        str_field(&updated, "status", "update lease")?.eq_ignore_ascii_case("terminated"),
        "lease status update not applied"
    );

    // Sale binding unit and buyer
    let sale = expect_json(
        api.post(
            "sales",
            &json!({
                "unit_id": unit_id,
                "buyer_id": buyer_id,
                "sale_date": "2025-04-01",
                "price": 250000.00,
                "status": "completed",
            }),
        )?,
        &[201],
        "create sale",
    )?;
    let sale_id = require_id(&sale, "create sale")?;
    cleanup.defer(format!("sales/{sale_id}"));
    field_is_id(&sale, "unit_id", &unit_id, "create sale")?;
    field_is_id(&sale, "buyer_id", &buyer_id, "create sale")?;

    expect_json(api.get(&format!("sales/{sale_id}"))?, &[200], "read sale")?;
    let updated = expect_json(
        api.put(&format!("sales/{sale_id}"), &json!({"status": "refunded"}))?,
        &[200],
        "update sale",
    )?;
    ensure!(
        str_field(&updated, "status", "update sale")?.eq_ignore_ascii_case("refunded"),
        "sale status update not applied"
    );

    Ok(())
}

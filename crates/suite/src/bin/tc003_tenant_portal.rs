// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC003: tenant portal reflects accurate tenant data and supports
//! payment workflows.
//!
//! Runs against a pre-provisioned tenant because the backend exposes no
//! tenant creation route; `PORTICO_TENANT_ID` selects it.

use anyhow::{Result, ensure};
use serde_json::json;
use suite::check::{contains_id, expect_json, require_id, str_field};
use suite::cleanup::CleanupStack;
use suite::client::Api;
use uuid::Uuid;

const TENANT_NAME: &str = "Test Tenant";
const TENANT_UNIT: &str = "Unit 101";

fn main() -> Result<()> {
    suite::init();
    let api = Api::from_env()?;
    let mut cleanup = CleanupStack::new(&api);
    exercise(&api, &mut cleanup)
}

fn exercise(api: &Api, cleanup: &mut CleanupStack) -> Result<()> {
    let tenant_id =
        std::env::var("PORTICO_TENANT_ID").unwrap_or_else(|_| "existing-tenant-id".to_string());
    let portal = format!("tenant-portal/{tenant_id}");

    // Dashboard reflects the tenant's identity.
    let dashboard = expect_json(
        api.get(&format!("{portal}/dashboard"))?,
        &[200],
        "tenant dashboard",
    )?;
    ensure!(
        str_field(&dashboard, "tenantId", "tenant dashboard")? == tenant_id,
        "dashboard is for a different tenant"
    );
    ensure!(
        str_field(&dashboard, "name", "tenant dashboard")? == TENANT_NAME,
        "dashboard tenant name mismatch"
    );

    // An invoice raised in finance shows up in the tenant's invoice list.
    let invoice = expect_json(
        api.post(
            "finance/invoices",
            &json!({
                "tenantId": tenant_id,
                "amount": 1500.00,
                "dueDate": "2025-12-31",
                "description": "Monthly Rent",
                "status": "pending",
            }),
        )?,
        &[201],
        "create invoice",
    )?;
    let invoice_id = require_id(&invoice, "create invoice")?;
    cleanup.defer(format!("finance/invoices/{invoice_id}"));

    let invoices = expect_json(
        api.get(&format!("{portal}/invoices"))?,
        &[200],
        "tenant invoices",
    )?;
    contains_id(&invoices, &invoice_id, "tenant invoices")?;

    // Payment against the invoice appears in the payment history.
    let payment = expect_json(
        api.post(
            &format!("{portal}/payments"),
            &json!({
                "tenantId": tenant_id,
                "invoiceId": invoice_id,
                "amount": 1500.00,
                "paymentMethod": "credit_card",
                "transactionReference": Uuid::new_v4().to_string(),
            }),
        )?,
        &[201],
        "submit payment",
    )?;
    let payment_id = require_id(&payment, "submit payment")?;
    cleanup.defer(format!("{portal}/payments/{payment_id}"));

    let history = expect_json(
        api.get(&format!("{portal}/payments"))?,
        &[200],
        "payment history",
    )?;
    contains_id(&history, &payment_id, "payment history")?;

    // Maintenance request round-trips.
    let request = expect_json(
        api.post(
            &format!("{portal}/maintenance-requests"),
            &json!({
                "tenantId": tenant_id,
                "unit": TENANT_UNIT,
                "subject": "Leaky faucet",
                "description": "The faucet in the kitchen is leaking continuously.",
                "priority": "medium",
            }),
        )?,
        &[201],
        "submit maintenance request",
    )?;
    let request_id = require_id(&request, "submit maintenance request")?;
    cleanup.defer(format!("{portal}/maintenance-requests/{request_id}"));

    let requests = expect_json(
        api.get(&format!("{portal}/maintenance-requests"))?,
        &[200],
        "maintenance requests",
    )?;
    contains_id(&requests, &request_id, "maintenance requests")?;

    // Document metadata upload is listed back.
    let document = expect_json(
        api.post(
            &format!("{portal}/documents"),
            &json!({
                "tenantId": tenant_id,
                "name": "Lease Agreement",
                "description": "Signed lease agreement document",
                "fileUrl": "http://example.com/fake-document.pdf",
            }),
        )?,
        &[201],
        "upload document",
    )?;
    let document_id = require_id(&document, "upload document")?;
    cleanup.defer(format!("{portal}/documents/{document_id}"));

    let documents = expect_json(
        api.get(&format!("{portal}/documents"))?,
        &[200],
        "tenant documents",
    )?;
    contains_id(&documents, &document_id, "tenant documents")?;

    Ok(())
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC004: financial management endpoints adhere to accounting rules.
//!
//! Creates a balanced transaction, a taxed invoice, a payment allocated to
//! that invoice, a commission, and an accounting voucher, checking the
//! debit/credit and tax arithmetic along the way.

use anyhow::{Result, ensure};
use serde_json::json;
use suite::check::{amounts_match, expect_json, f64_field, field_is_id, require_id};
use suite::cleanup::CleanupStack;
use suite::client::Api;
use uuid::Uuid;

const RENTAL_NET: f64 = 1000.00;
const TAX_RATE: f64 = 0.10;

fn main() -> Result<()> {
    suite::init();
    let api = Api::from_env()?;
    let mut cleanup = CleanupStack::new(&api);
    exercise(&api, &mut cleanup)
}

fn exercise(api: &Api, cleanup: &mut CleanupStack) -> Result<()> {
    // Transaction with balanced debit and credit entries.
    let entries = json!([
        {"account_code": "4000", "debit": 1000.00, "credit": 0.00},
        {"account_code": "1000", "debit": 0.00, "credit": 1000.00},
    ]);
    ensure_balanced(&entries, "transaction")?;

    let transaction = expect_json(
        api.post(
            "finance/transactions",
            &json!({
                "date": "2025-11-19",
                "description": "Test transaction for accounting rules",
                "entries": entries,
            }),
        )?,
        &[201],
        "create transaction",
    )?;
    let transaction_id = require_id(&transaction, "create transaction")?;
    cleanup.defer(format!("finance/transactions/{transaction_id}"));

    // Invoice with a 10% tax line; the backend must compute the totals.
    let expected_tax = RENTAL_NET * TAX_RATE;
    let invoice = expect_json(
        api.post(
            "finance/invoices",
            &json!({
                "customer_id": Uuid::new_v4().to_string(),
                "date": "2025-11-19",
                "due_date": "2025-12-19",
                "items": [
                    {
                        "description": "Property rental",
                        "quantity": 1,
                        "unit_price": RENTAL_NET,
                        "tax_rate": TAX_RATE,
                    },
                ],
            }),
        )?,
        &[201],
        "create invoice",
    )?;
    let invoice_id = require_id(&invoice, "create invoice")?;
    cleanup.defer(format!("finance/invoices/{invoice_id}"));

    let invoice_total = f64_field(&invoice, "total_amount", "invoice")?;
    amounts_match(invoice_total, RENTAL_NET + expected_tax, "invoice total")?;
    amounts_match(
        f64_field(&invoice, "tax_amount", "invoice")?,
        expected_tax,
        "invoice tax",
    )?;

    // Payment allocated to the invoice, settling it in full.
    let payment = expect_json(
        api.post(
            "finance/payments",
            &json!({
                "invoice_id": invoice_id,
                "date": "2025-11-20",
                "amount": invoice_total,
                "method": "bank_transfer",
                "reference": format!("PAY-{}", Uuid::new_v4()),
            }),
        )?,
        &[201],
        "create payment",
    )?;
    let payment_id = require_id(&payment, "create payment")?;
    cleanup.defer(format!("finance/payments/{payment_id}"));

    amounts_match(
        f64_field(&payment, "amount", "payment")?,
        invoice_total,
        "payment amount",
    )?;
    field_is_id(&payment, "invoice_id", &invoice_id, "payment allocation")?;
    ensure!(
        f64_field(&payment, "amount", "payment")? <= invoice_total + 0.01,
        "payment exceeds the invoice amount"
    );

    // Commission tied to the transaction.
    let commission = expect_json(
        api.post(
            "finance/commissions",
            &json!({
                "agent_id": Uuid::new_v4().to_string(),
                "transaction_id": transaction_id,
                "amount": 100.00,
                "commission_rate": 0.10,
                "description": "Agent commission for test transaction",
            }),
        )?,
        &[201],
        "create commission",
    )?;
    let commission_id = require_id(&commission, "create commission")?;
    cleanup.defer(format!("finance/commissions/{commission_id}"));
    amounts_match(
        f64_field(&commission, "amount", "commission")?,
        100.00,
        "commission amount",
    )?;

    // General voucher, also balanced.
    let voucher_entries = json!([
        {"account_code": "5000", "debit": 500.00, "credit": 0.00},
        {"account_code": "2000", "debit": 0.00, "credit": 500.00},
    ]);
    ensure_balanced(&voucher_entries, "voucher")?;

    let voucher = expect_json(
        api.post(
            "finance/vouchers",
            &json!({
                "date": "2025-11-19",
                "description": "Test accounting voucher compliance",
                "entries": voucher_entries,
            }),
        )?,
        &[201],
        "create voucher",
    )?;
    let voucher_id = require_id(&voucher, "create voucher")?;
    cleanup.defer(format!("finance/vouchers/{voucher_id}"));

    Ok(())
}

/// Total debits must equal total credits across the entry set.
fn ensure_balanced(entries: &serde_json::Value, what: &str) -> Result<()> {
    let items = entries.as_array().map(Vec::as_slice).unwrap_or_default();
    let debit: f64 = items
        .iter()
        .filter_map(|e| e.get("debit").and_then(serde_json::Value::as_f64))
        .sum();
    let credit: f64 = items
        .iter()
        .filter_map(|e| e.get("credit").and_then(serde_json::Value::as_f64))
        .sum();
    amounts_match(debit, credit, &format!("{what} debit/credit balance"))
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC006: HR endpoints accurately track attendance, leave, and payroll.

use anyhow::{Result, ensure};
use chrono::{Days, Utc};
use serde_json::json;
use suite::check::{amounts_match, contains_id, expect_json, f64_field, require_id, str_field};
use suite::cleanup::CleanupStack;
use suite::client::Api;

const SALARY: f64 = 70000.0;

fn main() -> Result<()> {
    suite::init();
    let api = Api::from_env()?;
    let mut cleanup = CleanupStack::new(&api);
    exercise(&api, &mut cleanup)
}

fn exercise(api: &Api, cleanup: &mut CleanupStack) -> Result<()> {
    let today = Utc::now().date_naive();

    // Employee the remaining records hang off.
    let employee = expect_json(
        api.post(
            "hr/employees",
            &json!({
                "firstName": "Test",
                "lastName": "Employee",
                "email": "test.employee@example.com",
                "position": "Software Engineer",
                "department": "Engineering",
                "startDate": "2024-01-01",
                "salary": SALARY,
            }),
        )?,
        &[201],
        "create employee",
    )?;
    let employee_id = require_id(&employee, "create employee")?;
    cleanup.defer(format!("hr/employees/{employee_id}"));

    // Attendance for today.
    let attendance = expect_json(
        api.post(
            "hr/attendance",
            &json!({
                "employeeId": employee_id,
                "date": today.to_string(),
                "status": "Present",
                "checkIn": "09:00",
                "checkOut": "17:00",
            }),
        )?,
        &[201],
        "create attendance",
    )?;
    let attendance_id = require_id(&attendance, "create attendance")?;
    cleanup.defer(format!("hr/attendance/{attendance_id}"));
    ensure!(
        str_field(&attendance, "status", "create attendance")? == "Present",
        "attendance status mismatch"
    );

    // Leave request a few days out.
    let leave_start = today
        .checked_add_days(Days::new(3))
        .ok_or_else(|| anyhow::anyhow!("date overflow"))?;
    let leave_end = today
        .checked_add_days(Days::new(5))
        .ok_or_else(|| anyhow::anyhow!("date overflow"))?;
    let leave = expect_json(
        api.post(
            "hr/leave",
            &json!({
                "employeeId": employee_id,
                "startDate": leave_start.to_string(),
                "endDate": leave_end.to_string(),
                "type": "Vacation",
                "reason": "Family trip",
            }),
        )?,
        &[201],
        "create leave",
    )?;
    let leave_id = require_id(&leave, "create leave")?;
    cleanup.defer(format!("hr/leave/{leave_id}"));
    ensure!(
        str_field(&leave, "type", "create leave")? == "Vacation",
        "leave type mismatch"
    );

    // Payroll for a full month at base salary.
    let payroll = expect_json(
        api.post(
            "hr/payroll",
            &json!({
                "employeeId": employee_id,
                "periodStart": "2024-01-01",
                "periodEnd": "2024-01-31",
                "baseSalary": SALARY,
                "bonuses": 0,
                "deductions": 0,
                "netPay": SALARY,
            }),
        )?,
        &[201],
        "create payroll",
    )?;
    let payroll_id = require_id(&payroll, "create payroll")?;
    cleanup.defer(format!("hr/payroll/{payroll_id}"));
    amounts_match(
        f64_field(&payroll, "netPay", "create payroll")?,
        SALARY,
        "payroll net pay",
    )?;

    // Every record reads back through its listing endpoint.
    let fetched = expect_json(
        api.get(&format!("hr/employees/{employee_id}"))?,
        &[200],
        "read employee",
    )?;
    ensure!(
        str_field(&fetched, "email", "read employee")? == "test.employee@example.com",
        "employee email mismatch"
    );

    let attendance_list = expect_json(
        api.get(&format!("hr/attendance?employeeId={employee_id}"))?,
        &[200],
        "list attendance",
    )?;
    contains_id(&attendance_list, &attendance_id, "list attendance")?;

    let leave_list = expect_json(
        api.get(&format!("hr/leave?employeeId={employee_id}"))?,
        &[200],
        "list leave",
    )?;
    contains_id(&leave_list, &leave_id, "list leave")?;

    let payroll_list = expect_json(
        api.get(&format!("hr/payroll?employeeId={employee_id}"))?,
        &[200],
        "list payroll",
    )?;
    contains_id(&payroll_list, &payroll_id, "list payroll")?;

    Ok(())
}

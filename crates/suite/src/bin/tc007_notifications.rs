// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Portico QA

//! TC007: notifications are targeted per user with correct unread counts.

use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use serde_json::{Value, json};
use suite::check::{contains_id, expect_json, lacks_id, require_id};
use suite::cleanup::CleanupStack;
use suite::client::Api;

const USER_ONE: u64 = 1001;
const USER_TWO: u64 = 1002;

fn main() -> Result<()> {
    suite::init();
    let api = Api::from_env()?;
    let mut cleanup = CleanupStack::new(&api);
    exercise(&api, &mut cleanup)
}

fn exercise(api: &Api, cleanup: &mut CleanupStack) -> Result<()> {
    let n1 = create(api, cleanup, USER_ONE, "Payment Due", "Your payment is due tomorrow.")?;
    let n2 = create(api, cleanup, USER_ONE, "Lease Expiry", "Your lease will expire next month.")?;
    let n3 = create(api, cleanup, USER_TWO, "Maintenance Alert", "Scheduled maintenance tomorrow.")?;

    // Give the backend a beat to settle delivery before asserting counts.
    thread::sleep(Duration::from_secs(1));

    // User one sees exactly their own notifications.
    let user1_list = list(api, USER_ONE)?;
    contains_id(&user1_list, &n1, "user1 notifications")?;
    contains_id(&user1_list, &n2, "user1 notifications")?;
    lacks_id(&user1_list, &n3, "user1 notifications")?;
    ensure!(
        unread_count(api, USER_ONE)? == 2,
        "user1 unread count should be 2"
    );

    // And user two theirs.
    let user2_list = list(api, USER_TWO)?;
    contains_id(&user2_list, &n3, "user2 notifications")?;
    lacks_id(&user2_list, &n1, "user2 notifications")?;
    lacks_id(&user2_list, &n2, "user2 notifications")?;
    ensure!(
        unread_count(api, USER_TWO)? == 1,
        "user2 unread count should be 1"
    );

    // Marking one read decrements the count and flips the read flag.
    expect_json(
        api.put_empty(&format!("notifications/{n1}/read"))?,
        &[200],
        "mark as read",
    )?;
    ensure!(
        unread_count(api, USER_ONE)? == 1,
        "user1 unread count should drop to 1"
    );

    let user1_after = list(api, USER_ONE)?;
    let marked = user1_after
        .as_array()
        .and_then(|items| items.iter().find(|item| item.get("id").is_some_and(|id| id_matches(id, &n1))))
        .ok_or_else(|| anyhow!("notification {n1} missing after mark-as-read"))?;
    ensure!(
        marked.get("read").and_then(Value::as_bool) == Some(true),
        "notification {n1} read flag not updated"
    );

    Ok(())
}

fn create(
    api: &Api,
    cleanup: &mut CleanupStack,
    user_id: u64,
    title: &str,
    message: &str,
) -> Result<String> {
    let created = expect_json(
        api.post(
            "notifications",
            &json!({
                "userId": user_id,
                "title": title,
                "message": message,
                "read": false,
            }),
        )?,
        &[200, 201],
        "create notification",
    )?;
    let id = require_id(&created, "create notification")?;
    cleanup.defer(format!("notifications/{id}"));
    Ok(id)
}

fn list(api: &Api, user_id: u64) -> Result<Value> {
    expect_json(
        api.get(&format!("notifications?userId={user_id}"))?,
        &[200],
        "list notifications",
    )
}

fn unread_count(api: &Api, user_id: u64) -> Result<i64> {
    let body = expect_json(
        api.get(&format!("notifications/unread-count?userId={user_id}"))?,
        &[200],
        "unread count",
    )?;
    body.get("unreadCount")
        .and_then(Value::as_i64)
        .ok_or_else(|| anyhow!("unread count response missing unreadCount: {body}"))
}

fn id_matches(id: &Value, expected: &str) -> bool {
    match id {
        Value::String(s) => s == expected,
        Value::Number(n) => n.to_string() == expected,
        _ => false,
    }
}

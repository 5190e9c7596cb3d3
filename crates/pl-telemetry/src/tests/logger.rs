use crate::tests::fakes::rig;

use pl_core::{
    ErrorDetails, LogContext, LogLevel, NotificationKind, NotificationPriority, SettingKind,
};

use std::sync::atomic::Ordering;

use googletest::prelude::*;
use serde_json::json;

#[tokio::test]
async fn given_working_store_when_logging_then_entry_is_persisted_and_id_returned() {
    let rig = rig();

    let id = rig
        .logger
        .info("request completed", LogContext::default())
        .await;

    let entries = rig.logs.entries();
    assert_that!(entries, len(eq(1)));
    assert_that!(entries[0].level, eq(LogLevel::Info));
    assert_eq!(id, Some(entries[0].id));
}

#[tokio::test]
async fn given_failing_store_when_logging_then_returns_none_without_error() {
    let rig = rig();
    rig.logs.fail_inserts.store(true, Ordering::Relaxed);

    let id = rig
        .logger
        .warning("store is down", LogContext::default())
        .await;

    assert_eq!(id, None);
    assert_that!(rig.logs.entries(), len(eq(0)));
}

#[tokio::test]
async fn given_significant_error_when_logged_then_one_high_error_alert_is_dispatched() {
    let rig = rig();
    let details = ErrorDetails::new("TypeError", "x is not a function");

    rig.logger
        .error("unexpected scoring response", Some(&details), LogContext::default())
        .await;

    let notifications = rig.notifications.notifications();
    assert_that!(notifications, len(eq(1)));
    assert_that!(notifications[0].kind, eq(NotificationKind::ErrorAlert));
    assert_that!(notifications[0].priority, eq(NotificationPriority::High));

    // Error name and message are merged into the entry metadata
    let entries = rig.logs.entries_of(LogLevel::Error);
    assert_that!(entries, len(eq(1)));
    let metadata = entries[0].metadata.as_ref().unwrap();
    assert_that!(metadata["error_name"], eq(&json!("TypeError")));
    assert_that!(metadata["error_message"], eq(&json!("x is not a function")));
}

#[tokio::test]
async fn given_unremarkable_error_when_logged_then_no_notification_is_dispatched() {
    let rig = rig();
    let details = ErrorDetails::new("ValidationError", "title too long");

    rig.logger
        .error("rejected draft", Some(&details), LogContext::default())
        .await;

    assert_that!(rig.notifications.notifications(), len(eq(0)));
    assert_that!(rig.logs.entries_of(LogLevel::Error), len(eq(1)));
}

#[tokio::test]
async fn given_error_with_stack_when_logged_then_stack_is_persisted() {
    let rig = rig();
    let details =
        ErrorDetails::new("StoreError", "write rejected").with_stack("handler at api/logs.rs:17");

    rig.logger
        .error("write rejected", Some(&details), LogContext::default())
        .await;

    let entries = rig.logs.entries_of(LogLevel::Error);
    assert_eq!(entries[0].stack.as_deref(), Some("handler at api/logs.rs:17"));
    // "api/" in the stack makes this significant
    assert_that!(rig.notifications.notifications(), len(eq(1)));
}

#[tokio::test]
async fn given_injection_security_event_when_logged_then_alert_is_critical() {
    let rig = rig();

    rig.logger
        .security(
            "SQL injection attempt blocked",
            LogContext {
                ip: Some("203.0.113.9".into()),
                ..LogContext::default()
            },
        )
        .await;

    let notifications = rig.notifications.notifications();
    assert_that!(notifications, len(eq(1)));
    assert_that!(notifications[0].kind, eq(NotificationKind::SecurityAlert));
    assert_that!(notifications[0].priority, eq(NotificationPriority::Critical));
    assert_that!(
        notifications[0].data.as_ref().unwrap()["ip"],
        eq(&json!("203.0.113.9"))
    );
}

#[tokio::test]
async fn given_attempt_security_event_when_logged_then_alert_is_high() {
    let rig = rig();

    rig.logger
        .security("unauthorized access attempt", LogContext::default())
        .await;

    let notifications = rig.notifications.notifications();
    assert_that!(notifications, len(eq(1)));
    assert_that!(notifications[0].priority, eq(NotificationPriority::High));
}

#[tokio::test]
async fn given_benign_security_event_when_logged_then_no_alert() {
    let rig = rig();

    rig.logger
        .security("retention settings updated", LogContext::default())
        .await;

    assert_that!(rig.notifications.notifications(), len(eq(0)));
    assert_that!(rig.logs.entries_of(LogLevel::Security), len(eq(1)));
}

#[tokio::test]
async fn given_dispatch_failure_when_logging_significant_error_then_log_result_is_unaffected() {
    let rig = rig();
    rig.notifications.fail_inserts.store(true, Ordering::Relaxed);

    let id = rig
        .logger
        .error("upload failed", None, LogContext::default())
        .await;

    // The failed dispatch never masks the original log result
    assert!(id.is_some());
    assert_that!(rig.logs.entries_of(LogLevel::Error), len(eq(1)));
}

#[tokio::test]
async fn given_email_enabled_when_critical_security_event_then_transport_is_called_once() {
    let rig = rig();
    rig.settings.seed(
        SettingKind::Notifications,
        json!({
            "email": {"enabled": true, "recipients": ["ops@prepline.io"], "min_priority": "high"}
        }),
    );

    rig.logger
        .security("brute force attack detected", LogContext::default())
        .await;

    assert_that!(rig.email.sent(), len(eq(1)));
    assert!(rig.email.sent()[0].subject.starts_with("[URGENT]"));
}

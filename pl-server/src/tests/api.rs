//! End-to-end tests over the real router, in-memory SQLite, and a
//! recording email transport

use crate::routes::build_router;
use crate::state::AppState;

use pl_core::{
    LogContext, MetricKind, Notification, NotificationKind, NotificationPriority,
    PerformanceMetric,
};
use pl_db::SqliteTelemetryStore;
use pl_guard::{InMemoryRateLimitStore, RateLimiter, RequestGuard};
use pl_telemetry::email::transport::{EmailMessage, EmailOutcome, EmailTransport};
use pl_telemetry::{
    Channel, Emitter, EventLogger, NotificationDispatcher, PerformanceMonitor, RetentionManager,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use googletest::prelude::*;
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

#[derive(Default)]
struct RecordingMailer {
    sent: AtomicU64,
}

#[async_trait]
impl EmailTransport for RecordingMailer {
    async fn send(&self, _message: &EmailMessage) -> EmailOutcome {
        self.sent.fetch_add(1, Ordering::Relaxed);
        EmailOutcome::ok()
    }
}

async fn test_state(max_requests: u32) -> (AppState, TestServer) {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");
    sqlx::migrate!("../crates/pl-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let store = Arc::new(SqliteTelemetryStore::new(pool));
    let mailer = Arc::new(RecordingMailer::default());

    let dispatcher = Arc::new(NotificationDispatcher::new(
        store.clone(),
        store.clone(),
        mailer,
    ));
    let logger = Arc::new(EventLogger::new(store.clone(), dispatcher.clone()));
    let monitor = PerformanceMonitor::new(
        store.clone(),
        store.clone(),
        logger.clone(),
        dispatcher.clone(),
        Emitter::spawn(16),
    );
    let retention = Arc::new(RetentionManager::new(
        store.clone(),
        store.clone(),
        store.clone(),
        logger.clone(),
    ));
    let limiter = RateLimiter::new(
        Arc::new(InMemoryRateLimitStore::default()),
        pl_guard::RateLimitConfig {
            max_requests,
            window_secs: 60,
        },
    );
    let guard = Arc::new(RequestGuard::new(limiter, logger.clone()));

    let state = AppState {
        logger,
        dispatcher,
        monitor,
        retention,
        guard,
    };
    let server = TestServer::new(build_router(state.clone())).unwrap();
    (state, server)
}

fn admin_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-admin-user"),
        HeaderValue::from_static("admin-1"),
    )
}

#[tokio::test]
async fn given_running_server_when_probed_then_health_endpoints_answer() {
    let (_, server) = test_state(1000).await;

    let health = server.get("/health").await;
    assert_that!(health.status_code(), eq(StatusCode::OK));
    assert_that!(health.json::<Value>()["status"], eq(&json!("healthy")));

    assert_that!(server.get("/live").await.status_code(), eq(StatusCode::OK));
    assert_that!(server.get("/ready").await.status_code(), eq(StatusCode::OK));
}

#[tokio::test]
async fn given_api_traffic_when_listing_logs_then_audit_entries_appear() {
    let (_, server) = test_state(1000).await;

    // Any API request leaves one info audit entry
    server.get("/api/v1/notifications").await;

    let response = server.get("/api/v1/logs").await;
    assert_that!(response.status_code(), eq(StatusCode::OK));

    let body = response.json::<Value>();
    let logs = body["logs"].as_array().unwrap();
    assert!(!logs.is_empty());
    assert!(
        logs.iter()
            .any(|l| l["message"].as_str().unwrap().contains("GET /api/v1/notifications"))
    );
}

#[tokio::test]
async fn given_invalid_level_filter_when_listing_logs_then_400() {
    let (_, server) = test_state(1000).await;

    let response = server.get("/api/v1/logs?level=verbose").await;

    assert_that!(response.status_code(), eq(StatusCode::BAD_REQUEST));
    assert_that!(
        response.json::<Value>()["error"]["code"],
        eq(&json!("VALIDATION_ERROR"))
    );
}

#[tokio::test]
async fn given_retention_update_when_put_then_persists_and_audits() {
    let (_, server) = test_state(1000).await;
    let (name, value) = admin_header();

    // Defaults first
    let before = server.get("/api/v1/settings/retention").await;
    assert_that!(before.json::<Value>()["retention"]["error"], eq(&json!(90)));

    // When: Updating the error retention
    let response = server
        .put("/api/v1/settings/retention")
        .add_header(name, value)
        .json(&json!({"error": 30}))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    assert_that!(response.json::<Value>()["retention"]["error"], eq(&json!(30)));

    // The merge kept the other levels
    let after = server.get("/api/v1/settings/retention").await;
    assert_that!(
        after.json::<Value>()["retention"]["security"],
        eq(&json!("forever"))
    );

    // And the change was audited before taking effect
    let audits = server.get("/api/v1/logs?level=security").await;
    let logs = audits.json::<Value>();
    let entries = logs["logs"].as_array().unwrap();
    assert!(
        entries
            .iter()
            .any(|l| l["message"].as_str().unwrap().contains("Retention settings updated")
                && l["user_id"] == json!("admin-1"))
    );
}

#[tokio::test]
async fn given_missing_admin_header_when_mutating_then_400() {
    let (_, server) = test_state(1000).await;

    let response = server
        .put("/api/v1/settings/retention")
        .json(&json!({"error": 30}))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::BAD_REQUEST));
    assert!(
        response.json::<Value>()["error"]["message"]
            .as_str()
            .unwrap()
            .contains("X-Admin-User")
    );
}

#[tokio::test]
async fn given_notifications_when_marking_seen_then_flags_flip() {
    let (state, server) = test_state(1000).await;

    let notification = Notification::new(
        NotificationKind::SystemEvent,
        "Sweep finished",
        "removed 12 entries",
        NotificationPriority::Low,
    );
    let id = state
        .dispatcher
        .send(notification, &[Channel::Database])
        .await
        .unwrap()
        .unwrap();

    let unseen = server.get("/api/v1/notifications?unseen_only=true").await;
    assert_that!(
        unseen.json::<Value>()["notifications"].as_array().unwrap().len(),
        eq(1)
    );

    let marked = server.post(&format!("/api/v1/notifications/{id}/seen")).await;
    assert_that!(marked.status_code(), eq(StatusCode::OK));

    let after = server.get("/api/v1/notifications?unseen_only=true").await;
    assert_that!(
        after.json::<Value>()["notifications"].as_array().unwrap().len(),
        eq(0)
    );
}

#[tokio::test]
async fn given_unknown_notification_when_marking_seen_then_404() {
    let (_, server) = test_state(1000).await;

    let response = server
        .post(&format!("/api/v1/notifications/{}/seen", uuid::Uuid::new_v4()))
        .await;

    assert_that!(response.status_code(), eq(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn given_recorded_metrics_when_queried_then_filters_and_summary_work() {
    let (state, server) = test_state(1000).await;

    state
        .monitor
        .record_metric(
            PerformanceMetric::new(MetricKind::ApiResponseTime, "list_tests", 250.0)
                .with_success(true),
        )
        .await
        .unwrap();
    state
        .monitor
        .record_metric(
            PerformanceMetric::new(MetricKind::RenderTime, "dashboard", 90.0).with_success(true),
        )
        .await
        .unwrap();

    let filtered = server.get("/api/v1/metrics?kind=api_response_time").await;
    let body = filtered.json::<Value>();
    let metrics = body["metrics"].as_array().unwrap();
    assert_that!(metrics.len(), eq(1));
    assert_that!(metrics[0]["name"], eq(&json!("list_tests")));

    let summary = server.get("/api/v1/metrics/summary?days=7").await;
    let body = summary.json::<Value>();
    assert_that!(body["summary"].as_array().unwrap().len(), eq(2));
}

#[tokio::test]
async fn given_old_logs_when_archived_and_cleared_then_counts_are_reported() {
    let (state, server) = test_state(1000).await;
    let (name, value) = admin_header();

    state
        .logger
        .info("stale entry", LogContext::default())
        .await;

    // When: Archiving everything older than one second from now
    let cutoff = (Utc::now() + Duration::seconds(1)).to_rfc3339();
    let archived = server
        .post("/api/v1/logs/archive")
        .add_header(name.clone(), value.clone())
        .json(&json!({"cutoff": cutoff}))
        .await;

    assert_that!(archived.status_code(), eq(StatusCode::OK));
    let body = archived.json::<Value>();
    assert!(body["archived"].as_u64().unwrap() >= 1);
    assert!(body["archive_id"].is_string());

    // Archival never deletes; clearing does
    let cleared = server
        .delete("/api/v1/logs")
        .add_header(name, value)
        .await;
    assert_that!(cleared.status_code(), eq(StatusCode::OK));
    assert!(cleared.json::<Value>()["deleted"].as_u64().unwrap() >= 1);

    // Only entries written after the wipe remain
    let logs = server.get("/api/v1/logs?level=security").await;
    let entries = logs.json::<Value>();
    assert!(
        entries["logs"]
            .as_array()
            .unwrap()
            .iter()
            .any(|l| l["message"].as_str().unwrap().contains("cleared"))
    );
}

#[tokio::test]
async fn given_manual_sweep_trigger_when_posted_then_outcome_is_reported() {
    let (_, server) = test_state(1000).await;

    let response = server.post("/api/v1/retention/apply").await;

    assert_that!(response.status_code(), eq(StatusCode::OK));
    let body = response.json::<Value>();
    assert_that!(body["success"], eq(&json!(true)));
}

#[tokio::test]
async fn given_low_rate_limit_when_exceeded_then_429_with_retry_after() {
    let (_, server) = test_state(2).await;

    for _ in 0..2 {
        let ok = server.get("/api/v1/notifications").await;
        assert_that!(ok.status_code(), eq(StatusCode::OK));
    }

    let limited = server.get("/api/v1/notifications").await;
    assert_that!(limited.status_code(), eq(StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(
        limited.headers().get("retry-after").unwrap(),
        &HeaderValue::from_static("60")
    );
    assert_eq!(
        limited.json::<Value>(),
        json!({"error": "Too many requests"})
    );
}

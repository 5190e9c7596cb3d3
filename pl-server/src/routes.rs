use crate::api::logs::logs::{clear_logs, list_logs};
use crate::api::maintenance::maintenance::{apply_retention, archive_logs};
use crate::api::metrics::metrics::{list_metrics, metrics_summary};
use crate::api::notifications::notifications::{list_notifications, mark_all_seen, mark_seen};
use crate::api::settings::settings::{
    get_notification_settings, get_retention, get_thresholds, update_notification_settings,
    update_retention, update_thresholds,
};
use crate::health;
use crate::state::AppState;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/logs", get(list_logs).delete(clear_logs))
        .route("/logs/archive", post(archive_logs))
        .route("/retention/apply", post(apply_retention))
        .route("/settings/retention", get(get_retention).put(update_retention))
        .route(
            "/settings/notifications",
            get(get_notification_settings).put(update_notification_settings),
        )
        .route("/settings/thresholds", get(get_thresholds).put(update_thresholds))
        .route("/notifications", get(list_notifications))
        .route("/notifications/seen", post(mark_all_seen))
        .route("/notifications/{id}/seen", post(mark_seen))
        .route("/metrics", get(list_metrics))
        .route("/metrics/summary", get(metrics_summary));

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints (allowlisted in the guard)
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Request guard ahead of routing for everything else
        .layer(middleware::from_fn_with_state(
            state.guard.clone(),
            pl_guard::request_guard,
        ))
        // Add shared state
        .with_state(state)
        // CORS middleware for the admin UI
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

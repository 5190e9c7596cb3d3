//! Singleton settings handlers (retention, notifications, thresholds).
//!
//! All three follow the same discipline: GET serves the cached record,
//! PUT merges a partial update, persists it, and refreshes this
//! process's cache. Other instances converge on their own next load.

use crate::api::error::Result as ApiResult;
use crate::api::extractors::admin_user::AdminUser;
use crate::api::settings::settings_responses::{
    NotificationSettingsResponse, RetentionSettingsResponse, ThresholdsResponse,
};
use crate::state::AppState;

use pl_core::{MetricThresholdsUpdate, NotificationSettingsUpdate, RetentionPolicyUpdate};

use axum::{Json, extract::State};

/// GET /api/v1/settings/retention
pub async fn get_retention(
    State(state): State<AppState>,
) -> ApiResult<Json<RetentionSettingsResponse>> {
    let retention = state.retention.retention_settings().await;

    Ok(Json(RetentionSettingsResponse { retention }))
}

/// PUT /api/v1/settings/retention
///
/// The change is written to the security audit trail before it takes
/// effect
pub async fn update_retention(
    State(state): State<AppState>,
    AdminUser(admin_user_id): AdminUser,
    Json(update): Json<RetentionPolicyUpdate>,
) -> ApiResult<Json<RetentionSettingsResponse>> {
    let retention = state
        .retention
        .update_retention_settings(update, &admin_user_id)
        .await?;

    Ok(Json(RetentionSettingsResponse { retention }))
}

/// GET /api/v1/settings/notifications
pub async fn get_notification_settings(
    State(state): State<AppState>,
) -> ApiResult<Json<NotificationSettingsResponse>> {
    let settings = state.dispatcher.settings().await;

    Ok(Json(NotificationSettingsResponse { settings }))
}

/// PUT /api/v1/settings/notifications
pub async fn update_notification_settings(
    State(state): State<AppState>,
    AdminUser(admin_user_id): AdminUser,
    Json(update): Json<NotificationSettingsUpdate>,
) -> ApiResult<Json<NotificationSettingsResponse>> {
    let settings = state
        .dispatcher
        .update_settings(update, &admin_user_id)
        .await?;

    Ok(Json(NotificationSettingsResponse { settings }))
}

/// GET /api/v1/settings/thresholds
pub async fn get_thresholds(State(state): State<AppState>) -> ApiResult<Json<ThresholdsResponse>> {
    let thresholds = state.monitor.thresholds().await;

    Ok(Json(ThresholdsResponse { thresholds }))
}

/// PUT /api/v1/settings/thresholds
pub async fn update_thresholds(
    State(state): State<AppState>,
    AdminUser(admin_user_id): AdminUser,
    Json(update): Json<MetricThresholdsUpdate>,
) -> ApiResult<Json<ThresholdsResponse>> {
    let thresholds = state
        .monitor
        .update_thresholds(update, &admin_user_id)
        .await?;

    Ok(Json(ThresholdsResponse { thresholds }))
}

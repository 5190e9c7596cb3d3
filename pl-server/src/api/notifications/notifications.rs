//! Notification read and seen-marking handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::notifications::list_notifications_query::ListNotificationsQuery;
use crate::api::notifications::notification_dto::NotificationDto;
use crate::api::notifications::notification_list_response::NotificationListResponse;
use crate::api::notifications::seen_response::SeenResponse;
use crate::state::AppState;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

const DEFAULT_NOTIFICATION_LIMIT: u32 = 50;
const MAX_NOTIFICATION_LIMIT: u32 = 200;

/// GET /api/v1/notifications
///
/// Most recent notifications, optionally unseen only
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<ListNotificationsQuery>,
) -> ApiResult<Json<NotificationListResponse>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_NOTIFICATION_LIMIT)
        .min(MAX_NOTIFICATION_LIMIT);
    let unseen_only = query.unseen_only.unwrap_or(false);

    let notifications = state.dispatcher.notifications(limit, unseen_only).await?;

    Ok(Json(NotificationListResponse {
        notifications: notifications
            .into_iter()
            .map(NotificationDto::from)
            .collect(),
    }))
}

/// POST /api/v1/notifications/{id}/seen
pub async fn mark_seen(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SeenResponse>> {
    let id = Uuid::parse_str(&id)?;

    if !state.dispatcher.mark_seen(id).await? {
        return Err(ApiError::not_found(format!("Notification {id} not found")));
    }

    Ok(Json(SeenResponse { updated: 1 }))
}

/// POST /api/v1/notifications/seen
///
/// Mark unseen notifications seen, one bounded batch per call
pub async fn mark_all_seen(State(state): State<AppState>) -> ApiResult<Json<SeenResponse>> {
    let updated = state.dispatcher.mark_all_seen().await?;

    Ok(Json(SeenResponse { updated }))
}

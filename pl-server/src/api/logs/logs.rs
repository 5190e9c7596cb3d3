//! Log read and admin maintenance handlers

use crate::api::error::Result as ApiResult;
use crate::api::extractors::admin_user::AdminUser;
use crate::api::logs::clear_logs_response::ClearLogsResponse;
use crate::api::logs::list_logs_query::ListLogsQuery;
use crate::api::logs::log_dto::LogDto;
use crate::api::logs::log_list_response::LogListResponse;
use crate::state::AppState;

use crate::api::error::ApiError;

use pl_core::LogLevel;

use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, State},
};

const DEFAULT_LOG_LIMIT: u32 = 100;
const MAX_LOG_LIMIT: u32 = 500;

/// GET /api/v1/logs
///
/// Most recent log entries, optionally filtered by level
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<ListLogsQuery>,
) -> ApiResult<Json<LogListResponse>> {
    let level = match query.level.as_deref() {
        Some(raw) => Some(
            LogLevel::from_str(raw)
                .map_err(|_| ApiError::validation(format!("Unknown log level: {raw}")))?,
        ),
        None => None,
    };
    let limit = query.limit.unwrap_or(DEFAULT_LOG_LIMIT).min(MAX_LOG_LIMIT);

    let logs = state.logger.recent(level, limit).await?;

    Ok(Json(LogListResponse {
        logs: logs.into_iter().map(LogDto::from).collect(),
    }))
}

/// DELETE /api/v1/logs
///
/// Drain the whole log collection; the wipe itself is audited with the
/// admin's identity
pub async fn clear_logs(
    State(state): State<AppState>,
    AdminUser(admin_user_id): AdminUser,
) -> ApiResult<Json<ClearLogsResponse>> {
    let deleted = state.retention.clear_all_logs(&admin_user_id).await?;

    Ok(Json(ClearLogsResponse { deleted }))
}

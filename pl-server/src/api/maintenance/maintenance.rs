//! Archival and retention-sweep handlers

use crate::api::error::Result as ApiResult;
use crate::api::extractors::admin_user::AdminUser;
use crate::api::maintenance::archive_request::ArchiveRequest;
use crate::api::maintenance::archive_response::ArchiveResponse;
use crate::api::maintenance::sweep_response::SweepResponse;
use crate::state::AppState;

use axum::{Json, extract::State};

/// POST /api/v1/logs/archive
///
/// Snapshot entries older than the cutoff into one archive bundle.
/// Archival never deletes; expiry remains the sweep's job.
pub async fn archive_logs(
    State(state): State<AppState>,
    AdminUser(admin_user_id): AdminUser,
    Json(request): Json<ArchiveRequest>,
) -> ApiResult<Json<ArchiveResponse>> {
    let outcome = state
        .retention
        .archive_logs(request.cutoff, &admin_user_id)
        .await?;

    Ok(Json(ArchiveResponse {
        archive_id: outcome.archive_id,
        archived: outcome.archived,
    }))
}

/// POST /api/v1/retention/apply
///
/// Run the retention sweep now, outside its schedule
pub async fn apply_retention(State(state): State<AppState>) -> ApiResult<Json<SweepResponse>> {
    let outcome = state.retention.apply_retention_policy().await;

    Ok(Json(SweepResponse {
        success: outcome.success,
        deleted: outcome.deleted,
    }))
}
